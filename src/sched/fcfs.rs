//! FCFS（先来先服务）
//!
//! 只看队首；队首放不下时整条队列等待，不跳过（没有 backfill）。

use tracing::trace;

use super::Scheduler;
use crate::job::{JobError, JobId};
use crate::sim::SimContext;

#[derive(Debug, Default, Clone, Copy)]
pub struct FcfsScheduler;

impl Scheduler for FcfsScheduler {
    fn schedule(&mut self, ctx: &mut SimContext) -> Result<Option<JobId>, JobError> {
        let Some(head) = ctx.queue().peek() else {
            return Ok(None);
        };
        let needed = ctx.pool().config().blocks_needed(head.requested_nodes());
        let Some(blocks) = ctx.pool().find_vacant(needed) else {
            trace!(
                job = head.name(),
                needed,
                vacant = ctx.pool().vacant_count(),
                "队首作业资源不足，等待下一个 tick"
            );
            return Ok(None);
        };
        ctx.admit_head(blocks)
    }
}
