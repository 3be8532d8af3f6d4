//! 集群拓扑配置
//!
//! block 数量与每个 block 的节点数在资源池构建时固定。

use serde::{Deserialize, Serialize};

/// 参考配置：96 个 midplane，每个 16×32 = 512 个节点
pub const DEFAULT_BLOCKS: usize = 96;
pub const DEFAULT_NODES_PER_BLOCK: u64 = 16 * 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterConfig {
    #[serde(default = "default_blocks")]
    pub blocks: usize,
    #[serde(default = "default_nodes_per_block")]
    pub nodes_per_block: u64,
}

fn default_blocks() -> usize {
    DEFAULT_BLOCKS
}

fn default_nodes_per_block() -> u64 {
    DEFAULT_NODES_PER_BLOCK
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            blocks: DEFAULT_BLOCKS,
            nodes_per_block: DEFAULT_NODES_PER_BLOCK,
        }
    }
}

impl ClusterConfig {
    pub fn new(blocks: usize, nodes_per_block: u64) -> Self {
        Self {
            blocks,
            nodes_per_block,
        }
    }

    pub fn total_nodes(&self) -> u64 {
        (self.blocks as u64).saturating_mul(self.nodes_per_block)
    }

    /// 作业需要的 block 数。
    ///
    /// 整除向下取整：不是 `nodes_per_block` 整数倍的请求会少分配，小于一个
    /// block 的请求得到 0 个 block。这是已知的偏小分配行为，保持不变。
    pub fn blocks_needed(&self, requested_nodes: u64) -> usize {
        let n = requested_nodes.checked_div(self.nodes_per_block).unwrap_or(0);
        usize::try_from(n).unwrap_or(usize::MAX)
    }
}
