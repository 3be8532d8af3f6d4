//! 作业到达源与 trace 加载
//!
//! 仿真核心只依赖 `ArrivalFeed`；CSV 解析是它的一个具体来源。

mod error;
mod feed;
mod loader;
mod record;

pub use error::TraceError;
pub use feed::{ArrivalFeed, TraceFeed};
pub use loader::{load_trace, parse_timestamp, parse_trace};
pub use record::ArrivalRecord;
