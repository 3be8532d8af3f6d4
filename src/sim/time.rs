//! 仿真时钟类型
//!
//! 定义离散的仿真 tick（一个 tick 对应 trace 中的一秒）。

use serde::{Deserialize, Serialize};
use std::fmt;

/// 仿真时间（tick）。
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct SimTime(pub u64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0);

    /// 下一个 tick
    pub fn next(self) -> SimTime {
        SimTime(self.0.saturating_add(1))
    }

    /// 在当前时间基础上推进 `ticks` 个 tick
    pub fn after(self, ticks: u64) -> SimTime {
        SimTime(self.0.saturating_add(ticks))
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
