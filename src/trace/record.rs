use crate::sim::SimTime;
use serde::{Deserialize, Serialize};

/// 一条作业到达记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrivalRecord {
    pub name: String,
    /// 到达时间（已归一化，最早的到达为 0）
    pub arrival: SimTime,
    /// 运行时长（tick），即原始记录的结束时间减开始时间
    pub duration: u64,
    pub requested_nodes: u64,
    /// 原样透传，不参与调度
    pub exit_code: String,
}

impl ArrivalRecord {
    pub fn new(
        name: impl Into<String>,
        arrival: u64,
        duration: u64,
        requested_nodes: u64,
        exit_code: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            arrival: SimTime(arrival),
            duration,
            requested_nodes,
            exit_code: exit_code.into(),
        }
    }
}
