//! 作业及其生命周期状态机
//!
//! CREATED → QUEUED → READY → RUNNING → ENDED，线性推进，不可回退。

use crate::cluster::BlockId;
use crate::sim::SimTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// 作业标识符（按到达顺序分配）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(pub usize);

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// 作业状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Created,
    Queued,
    Ready,
    Running,
    Ended,
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            JobStatus::Created => "CREATED",
            JobStatus::Queued => "QUEUED",
            JobStatus::Ready => "READY",
            JobStatus::Running => "RUNNING",
            JobStatus::Ended => "ENDED",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JobError {
    #[error("job {job}: illegal transition {from} -> {to}")]
    IllegalTransition {
        job: String,
        from: JobStatus,
        to: JobStatus,
    },
}

/// 一次 `advance` 调用产生的状态变化
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Advance {
    /// READY → RUNNING 时给出预计结束时间
    pub started: Option<SimTime>,
    /// RUNNING → ENDED
    pub ended: bool,
}

/// 作业
#[derive(Debug, Clone)]
pub struct Job {
    id: JobId,
    name: String,
    requested_nodes: u64,
    submitted_at: SimTime,
    started_at: Option<SimTime>,
    end_at: Option<SimTime>,
    duration: u64,
    exit_code: String,
    status: JobStatus,
    blocks: Vec<BlockId>,
}

impl Job {
    /// 由到达记录创建作业（状态 CREATED）
    pub fn new(
        id: JobId,
        name: impl Into<String>,
        submitted_at: SimTime,
        duration: u64,
        requested_nodes: u64,
        exit_code: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            requested_nodes,
            submitted_at,
            started_at: None,
            end_at: None,
            duration,
            exit_code: exit_code.into(),
            status: JobStatus::Created,
            blocks: Vec::new(),
        }
    }

    pub fn id(&self) -> JobId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn requested_nodes(&self) -> u64 {
        self.requested_nodes
    }

    pub fn submitted_at(&self) -> SimTime {
        self.submitted_at
    }

    pub fn started_at(&self) -> Option<SimTime> {
        self.started_at
    }

    /// 开始运行后为 `started_at + duration`
    pub fn end_at(&self) -> Option<SimTime> {
        self.end_at
    }

    pub fn duration(&self) -> u64 {
        self.duration
    }

    pub fn exit_code(&self) -> &str {
        &self.exit_code
    }

    pub fn status(&self) -> JobStatus {
        self.status
    }

    /// 当前占用的 block（资源池下标，不持有所有权）
    pub fn blocks(&self) -> &[BlockId] {
        &self.blocks
    }

    pub fn is_ended(&self) -> bool {
        self.status == JobStatus::Ended
    }

    fn transition(&mut self, from: JobStatus, to: JobStatus) -> Result<(), JobError> {
        if self.status != from {
            return Err(JobError::IllegalTransition {
                job: self.name.clone(),
                from: self.status,
                to,
            });
        }
        self.status = to;
        Ok(())
    }

    /// CREATED → QUEUED；提交时间以仿真时钟为准
    pub fn submit(&mut self, now: SimTime) -> Result<(), JobError> {
        self.transition(JobStatus::Created, JobStatus::Queued)?;
        self.submitted_at = now;
        Ok(())
    }

    /// QUEUED → READY；由调度器在分配成功的 tick 调用，记录分到的 block
    pub fn mark_ready(&mut self, blocks: Vec<BlockId>) -> Result<(), JobError> {
        self.transition(JobStatus::Queued, JobStatus::Ready)?;
        self.blocks = blocks;
        Ok(())
    }

    /// 推进一个 tick。
    ///
    /// READY 时进入 RUNNING 并计算 `end_at = now + duration`；随后若
    /// RUNNING 且 `now >= end_at` 则进入 ENDED（duration 为 0 的作业在开始的
    /// 同一 tick 结束）。ENDED 上调用是 no-op。
    pub fn advance(&mut self, now: SimTime) -> Advance {
        let mut out = Advance::default();
        if self.status == JobStatus::Ready {
            let end_at = now.after(self.duration);
            self.status = JobStatus::Running;
            self.started_at = Some(now);
            self.end_at = Some(end_at);
            out.started = Some(end_at);
        }
        if self.status == JobStatus::Running && self.end_at.is_some_and(|end| end <= now) {
            self.status = JobStatus::Ended;
            out.ended = true;
        }
        out
    }

    /// 结束后交还 block 列表，资源池据此释放
    pub(crate) fn take_blocks(&mut self) -> Vec<BlockId> {
        std::mem::take(&mut self.blocks)
    }
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.name, self.submitted_at, self.duration, self.requested_nodes, self.status
        )
    }
}
