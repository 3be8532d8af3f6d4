//! 仿真核心模块
//!
//! 此模块包含逐 tick 仿真的核心组件：仿真时间、仿真上下文和仿真器。

mod context;
mod simulator;
mod time;

pub use context::SimContext;
pub use simulator::{RunOutcome, RunSummary, SimError, Simulator};
pub use time::SimTime;
