//! 仿真事件记录
//!
//! 设计目标：
//! - **结构化**：事件是可序列化的 JSON 记录，而不只是文本日志
//! - **可读**：`Display` 给出一行人类可读的描述，同时写入 tracing 日志

mod recorder;
mod types;

pub use recorder::EventLog;
pub use types::{SimEvent, SimEventKind};
