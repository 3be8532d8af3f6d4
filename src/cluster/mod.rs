//! 集群资源模型
//!
//! 固定数量的 block（midplane），每个 block 含固定数量的节点。

mod block;
mod config;
mod id;
mod pool;

pub use block::{Block, BlockStatus, Node};
pub use config::{ClusterConfig, DEFAULT_BLOCKS, DEFAULT_NODES_PER_BLOCK};
pub use id::BlockId;
pub use pool::{ResourcePool, Released};
