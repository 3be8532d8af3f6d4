//! 作业与准入队列
//!
//! 作业生命周期状态机，以及等待分配资源的 FIFO 队列。

mod lifecycle;
mod queue;

pub use lifecycle::{Advance, Job, JobError, JobId, JobStatus};
pub use queue::AdmissionQueue;
