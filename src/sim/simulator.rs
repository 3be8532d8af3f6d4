//! 仿真器
//!
//! 逐 tick 推进的仿真循环。每个 tick 严格按以下顺序执行：
//! 1. 取出所有在当前时刻到达的作业并提交
//! 2. 调度器尝试准入一次
//! 3. 推进运行中的作业，释放已结束作业的 block
//! 4. 时钟加一

use std::fmt;

use super::context::SimContext;
use super::time::SimTime;
use crate::job::JobError;
use crate::sched::{FcfsScheduler, Scheduler};
use crate::trace::ArrivalFeed;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, trace, warn};

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Job(#[from] JobError),
}

/// 仿真结束方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunOutcome {
    /// 所有作业都已到达、运行并结束
    Completed,
    /// 到达 tick 上限时仍有作业未完成
    Halted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub outcome: RunOutcome,
    pub final_time: SimTime,
    pub ticks: u64,
    pub completed_jobs: usize,
    pub peak_queue_len: usize,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let outcome = match self.outcome {
            RunOutcome::Completed => "completed",
            RunOutcome::Halted => "halted",
        };
        write!(
            f,
            "{outcome} @ {}, ticks={}, completed_jobs={}, peak_queue_len={}",
            self.final_time, self.ticks, self.completed_jobs, self.peak_queue_len
        )
    }
}

/// 仿真循环驱动器
#[derive(Debug)]
pub struct Simulator {
    scheduler: Box<dyn Scheduler>,
    ticks: u64,
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new(Box::new(FcfsScheduler))
    }
}

impl Simulator {
    pub fn new(scheduler: Box<dyn Scheduler>) -> Self {
        Self {
            scheduler,
            ticks: 0,
        }
    }

    /// 已执行的 tick 数
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// 到达源耗尽且队列、运行集合都为空
    pub fn is_finished(feed: &dyn ArrivalFeed, ctx: &SimContext) -> bool {
        feed.is_exhausted() && ctx.is_idle()
    }

    /// 执行一个 tick
    pub fn step(
        &mut self,
        feed: &mut dyn ArrivalFeed,
        ctx: &mut SimContext,
    ) -> Result<(), SimError> {
        let now = ctx.now();
        trace!(%now, "tick 开始");

        let mut arrived = 0usize;
        while let Some(rec) = feed.pop_due(now) {
            ctx.submit(rec)?;
            arrived += 1;
        }

        let admitted = self.scheduler.schedule(ctx)?;
        let ended = ctx.advance_running();

        debug!(
            %now,
            arrived,
            admitted = admitted.is_some(),
            ended,
            queued = ctx.queue().len(),
            running = ctx.running().len(),
            remaining = feed.remaining(),
            "tick 完成"
        );

        ctx.inc_wallclock();
        self.ticks += 1;
        Ok(())
    }

    /// 运行直到所有作业结束。
    ///
    /// 没有 tick 上限：请求超过集群总容量的作业会让循环永不结束。
    pub fn run(
        &mut self,
        feed: &mut dyn ArrivalFeed,
        ctx: &mut SimContext,
    ) -> Result<RunSummary, SimError> {
        self.run_until(SimTime(u64::MAX), feed, ctx)
    }

    /// 运行直到所有作业结束或时钟到达 `until`（不执行 `until` 这个 tick）。
    #[tracing::instrument(skip(self, feed, ctx))]
    pub fn run_until(
        &mut self,
        until: SimTime,
        feed: &mut dyn ArrivalFeed,
        ctx: &mut SimContext,
    ) -> Result<RunSummary, SimError> {
        info!(
            jobs = feed.remaining(),
            blocks = ctx.pool().len(),
            nodes_per_block = ctx.pool().config().nodes_per_block,
            "▶️  开始运行仿真"
        );

        while !Self::is_finished(feed, ctx) {
            if ctx.now() >= until {
                warn!(
                    now = %ctx.now(),
                    queued = ctx.queue().len(),
                    running = ctx.running().len(),
                    remaining = feed.remaining(),
                    "到达 tick 上限，仿真未完成"
                );
                return Ok(self.summary(RunOutcome::Halted, ctx));
            }
            self.step(feed, ctx)?;
        }

        let summary = self.summary(RunOutcome::Completed, ctx);
        info!(
            final_time = %summary.final_time,
            completed_jobs = summary.completed_jobs,
            "✅ 仿真完成"
        );
        Ok(summary)
    }

    fn summary(&self, outcome: RunOutcome, ctx: &SimContext) -> RunSummary {
        RunSummary {
            outcome,
            final_time: ctx.now(),
            ticks: self.ticks,
            completed_jobs: ctx.completed(),
            peak_queue_len: ctx.queue().peak_len(),
        }
    }
}
