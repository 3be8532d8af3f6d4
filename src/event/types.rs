use crate::cluster::BlockId;
use crate::sim::SimTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 仿真事件类型
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SimEventKind {
    /// 作业进入准入队列
    JobSubmitted { job: String },
    /// 调度器为队首作业找到了足够的空闲 block
    JobAdmitted { job: String, blocks: Vec<BlockId> },
    /// block 被分给作业
    BlockAssigned { block: BlockId, job: String },
    /// 作业就绪（READY）
    JobReady { job: String },
    /// 作业开始运行，附带预计结束时间
    JobStarted { job: String, expected_end: SimTime },
    /// 作业结束
    JobEnded { job: String, exit_code: String },
    /// 作业从运行集合中移除
    JobCleanedUp { job: String },
    /// block 被释放
    BlockFreed { block: BlockId, job: String },
    /// 对空闲 block 重复释放
    DoubleFree { block: BlockId },
}

impl SimEventKind {
    pub fn is_warning(&self) -> bool {
        matches!(self, SimEventKind::DoubleFree { .. })
    }
}

/// 一条带时间戳的事件记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimEvent {
    /// 仿真时钟（tick）
    pub t: SimTime,
    #[serde(flatten)]
    pub kind: SimEventKind,
}

impl fmt::Display for SimEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t = self.t;
        match &self.kind {
            SimEventKind::JobSubmitted { job } => {
                write!(f, "Job {job}: Submitted on Wallclock={t}")
            }
            SimEventKind::JobAdmitted { job, blocks } => {
                let list = blocks
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(",");
                write!(f, "Job {job}: Assigned onto Midplane={list}")
            }
            SimEventKind::BlockAssigned { block, job } => {
                write!(f, "Midplane {block}: Job={job} is assigned onto this midplane")
            }
            SimEventKind::JobReady { job } => write!(f, "Job {job}: Ready to start"),
            SimEventKind::JobStarted { job, expected_end } => write!(
                f,
                "Job {job}: Start running on Wallclock={t}. Expect to stop on Wallclock={expected_end}"
            ),
            SimEventKind::JobEnded { job, exit_code } => {
                write!(f, "Job {job}: Stop on Wallclock={t} (exit status {exit_code})")
            }
            SimEventKind::JobCleanedUp { job } => write!(f, "Mira: Clean up Job={job}"),
            SimEventKind::BlockFreed { block, job } => {
                write!(f, "Midplane {block}: Frees up from Job={job}")
            }
            SimEventKind::DoubleFree { block } => {
                write!(f, "Midplane {block}: Attempting to free up again")
            }
        }
    }
}
