//! 仿真上下文
//!
//! 持有时钟、准入队列、运行集合与资源池；所有状态只在单个 tick 内同步修改。

use std::fmt;

use crate::cluster::{BlockId, ClusterConfig, ResourcePool};
use crate::event::{EventLog, SimEvent, SimEventKind};
use crate::job::{AdmissionQueue, Job, JobError, JobId};
use crate::sim::SimTime;
use crate::trace::ArrivalRecord;
use tracing::{debug, info};

#[derive(Debug)]
pub struct SimContext {
    now: SimTime,
    queue: AdmissionQueue,
    running: Vec<Job>,
    pool: ResourcePool,
    next_job_id: usize,
    completed: usize,
    /// 事件记录；为 None 时只写 tracing 日志
    pub events: Option<EventLog>,
}

impl SimContext {
    pub fn new(cfg: ClusterConfig) -> Self {
        Self {
            now: SimTime::ZERO,
            queue: AdmissionQueue::new(),
            running: Vec::new(),
            pool: ResourcePool::new(cfg),
            next_job_id: 0,
            completed: 0,
            events: None,
        }
    }

    /// 开启事件记录
    pub fn with_event_log(mut self) -> Self {
        self.events = Some(EventLog::default());
        self
    }

    pub fn now(&self) -> SimTime {
        self.now
    }

    pub fn queue(&self) -> &AdmissionQueue {
        &self.queue
    }

    pub fn running(&self) -> &[Job] {
        &self.running
    }

    pub fn pool(&self) -> &ResourcePool {
        &self.pool
    }

    /// 已结束并清理的作业数
    pub fn completed(&self) -> usize {
        self.completed
    }

    /// 队列与运行集合都为空
    pub fn is_idle(&self) -> bool {
        self.queue.is_empty() && self.running.is_empty()
    }

    fn emit(&mut self, kind: SimEventKind) {
        let ev = SimEvent { t: self.now, kind };
        // 重复释放已由资源池告警
        if !ev.kind.is_warning() {
            info!("{ev}");
        }
        if let Some(log) = &mut self.events {
            log.push(ev);
        }
    }

    /// 根据到达记录创建作业并提交到准入队列
    pub fn submit(&mut self, rec: ArrivalRecord) -> Result<JobId, JobError> {
        let id = JobId(self.next_job_id);
        self.next_job_id += 1;
        let mut job = Job::new(
            id,
            rec.name,
            rec.arrival,
            rec.duration,
            rec.requested_nodes,
            rec.exit_code,
        );
        job.submit(self.now)?;
        self.emit(SimEventKind::JobSubmitted {
            job: job.name().to_string(),
        });
        self.queue.enqueue(job);
        Ok(id)
    }

    /// 队首作业出队，分配 `blocks`，置为 READY 并加入运行集合。
    ///
    /// 队列为空时返回 Ok(None)。
    pub fn admit_head(&mut self, blocks: Vec<BlockId>) -> Result<Option<JobId>, JobError> {
        let Some(mut job) = self.queue.dequeue() else {
            return Ok(None);
        };
        let name = job.name().to_string();
        self.emit(SimEventKind::JobAdmitted {
            job: name.clone(),
            blocks: blocks.clone(),
        });
        self.pool.allocate(&blocks, job.id());
        for &block in &blocks {
            self.emit(SimEventKind::BlockAssigned {
                block,
                job: name.clone(),
            });
        }
        job.mark_ready(blocks)?;
        self.emit(SimEventKind::JobReady { job: name });
        let id = job.id();
        self.running.push(job);
        Ok(Some(id))
    }

    /// 推进运行集合中的每个作业；结束的作业被移除并释放其 block。
    ///
    /// 返回本 tick 结束的作业数。
    pub fn advance_running(&mut self) -> usize {
        let now = self.now;
        let mut kept = Vec::with_capacity(self.running.len());
        let mut ended = 0;
        for mut job in std::mem::take(&mut self.running) {
            let adv = job.advance(now);
            if let Some(expected_end) = adv.started {
                self.emit(SimEventKind::JobStarted {
                    job: job.name().to_string(),
                    expected_end,
                });
            }
            if !adv.ended {
                kept.push(job);
                continue;
            }
            ended += 1;
            self.retire(job);
        }
        self.running = kept;
        ended
    }

    fn retire(&mut self, mut job: Job) {
        let name = job.name().to_string();
        self.emit(SimEventKind::JobEnded {
            job: name.clone(),
            exit_code: job.exit_code().to_string(),
        });
        self.emit(SimEventKind::JobCleanedUp { job: name.clone() });
        let blocks = job.take_blocks();
        for released in self.pool.release(&blocks) {
            let kind = if released.is_double_free() {
                SimEventKind::DoubleFree {
                    block: released.block,
                }
            } else {
                SimEventKind::BlockFreed {
                    block: released.block,
                    job: name.clone(),
                }
            };
            self.emit(kind);
        }
        self.completed += 1;
    }

    /// 时钟加一
    pub fn inc_wallclock(&mut self) {
        self.now = self.now.next();
        debug!(now = %self.now, "时钟推进");
    }

    /// 运行中作业持有的 block 总数
    pub fn blocks_held_by_running(&self) -> usize {
        self.running.iter().map(|j| j.blocks().len()).sum()
    }
}

impl fmt::Display for SimContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Wallclock: {}", self.now)?;
        writeln!(f, "Number of jobs in queue: {}", self.queue.len())?;
        writeln!(f, "Number of running jobs: {}", self.running.len())?;
        writeln!(f, "Midplanes:")?;
        for block in self.pool.blocks() {
            match block.job().and_then(|id| self.running.iter().find(|j| j.id() == id)) {
                Some(job) => writeln!(f, "{block} {}", job.name())?,
                None => writeln!(f, "{block}")?,
            }
        }
        Ok(())
    }
}
