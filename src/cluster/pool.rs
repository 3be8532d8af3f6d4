//! 资源池
//!
//! 持有全部 block，负责空闲搜索、分配与释放。作业只保存 `BlockId`。

use super::block::{Block, BlockStatus};
use super::config::ClusterConfig;
use super::id::BlockId;
use crate::job::JobId;
use tracing::{debug, warn};

/// 一次释放的结果；`job` 为 None 表示重复释放
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Released {
    pub block: BlockId,
    pub job: Option<JobId>,
}

impl Released {
    pub fn is_double_free(&self) -> bool {
        self.job.is_none()
    }
}

#[derive(Debug, Clone)]
pub struct ResourcePool {
    cfg: ClusterConfig,
    blocks: Vec<Block>,
}

impl ResourcePool {
    pub fn new(cfg: ClusterConfig) -> Self {
        let blocks = (0..cfg.blocks)
            .map(|i| Block::new(BlockId(i), cfg.nodes_per_block))
            .collect();
        Self { cfg, blocks }
    }

    pub fn config(&self) -> &ClusterConfig {
        &self.cfg
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn block(&self, id: BlockId) -> Option<&Block> {
        self.blocks.get(id.0)
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn vacant_count(&self) -> usize {
        self.blocks.iter().filter(|b| b.is_vacant()).count()
    }

    pub fn occupied_count(&self) -> usize {
        self.blocks.len() - self.vacant_count()
    }

    /// 按池内顺序取前 `count` 个空闲 block；不足时返回 None
    pub fn find_vacant(&self, count: usize) -> Option<Vec<BlockId>> {
        let found: Vec<BlockId> = self
            .blocks
            .iter()
            .filter(|b| b.is_vacant())
            .map(Block::id)
            .take(count)
            .collect();
        (found.len() == count).then_some(found)
    }

    /// 把 `ids` 全部分给 `job`。任一 block 已被占用（或下标越界）时 panic。
    pub fn allocate(&mut self, ids: &[BlockId], job: JobId) {
        for &id in ids {
            let block = &mut self.blocks[id.0];
            block.assign(job);
            debug!(block = %id, job = %job, "block 已分配");
        }
    }

    /// 释放 `ids`。对已空闲的 block 只告警，不改变状态。
    pub fn release(&mut self, ids: &[BlockId]) -> Vec<Released> {
        ids.iter()
            .map(|&id| {
                let block = &mut self.blocks[id.0];
                if block.is_vacant() {
                    warn!(block = %id, "重复释放空闲 block");
                    return Released { block: id, job: None };
                }
                let job = block.free_up();
                debug!(block = %id, job = ?job, "block 已释放");
                Released { block: id, job }
            })
            .collect()
    }

    /// 每个 block 的状态与其节点归属一致
    pub fn is_consistent(&self) -> bool {
        self.blocks.iter().all(Block::is_consistent)
    }

    /// 被 `job` 占用的 block
    pub fn blocks_of(&self, job: JobId) -> Vec<BlockId> {
        self.blocks
            .iter()
            .filter(|b| b.status() == BlockStatus::Occupied(job))
            .map(Block::id)
            .collect()
    }
}
