//! 调度策略
//!
//! 策略只决定“是否准入队首作业、用哪些 block”；出队、分配、状态迁移由
//! `SimContext::admit_head` 完成。

mod fcfs;

pub use fcfs::FcfsScheduler;

use crate::job::{JobError, JobId};
use crate::sim::SimContext;

/// 调度策略抽象：每个 tick 调用一次
pub trait Scheduler: std::fmt::Debug {
    /// 尝试准入一个作业；返回被准入的作业，资源不足时返回 Ok(None)
    fn schedule(&mut self, ctx: &mut SimContext) -> Result<Option<JobId>, JobError>;
}
