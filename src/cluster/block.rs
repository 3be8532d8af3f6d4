//! Block（midplane）与节点
//!
//! block 是分配粒度；节点只用于在更细粒度上核对占用关系。

use super::id::BlockId;
use crate::job::JobId;
use std::fmt;

/// 最小子单元，最多属于一个作业
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Node {
    job: Option<JobId>,
}

impl Node {
    pub fn job(&self) -> Option<JobId> {
        self.job
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockStatus {
    Vacant,
    Occupied(JobId),
}

#[derive(Debug, Clone)]
pub struct Block {
    id: BlockId,
    status: BlockStatus,
    nodes: Vec<Node>,
}

impl Block {
    pub fn new(id: BlockId, nodes_per_block: u64) -> Self {
        let n = usize::try_from(nodes_per_block).unwrap_or(usize::MAX);
        Self {
            id,
            status: BlockStatus::Vacant,
            nodes: vec![Node::default(); n],
        }
    }

    pub fn id(&self) -> BlockId {
        self.id
    }

    pub fn status(&self) -> BlockStatus {
        self.status
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn is_vacant(&self) -> bool {
        self.status == BlockStatus::Vacant
    }

    /// 当前占用该 block 的作业
    pub fn job(&self) -> Option<JobId> {
        match self.status {
            BlockStatus::Vacant => None,
            BlockStatus::Occupied(job) => Some(job),
        }
    }

    /// 把整个 block 分给 `job`。已被占用时 panic：分配搜索保证不会发生。
    pub(crate) fn assign(&mut self, job: JobId) {
        assert!(
            self.is_vacant(),
            "block {} already occupied by {:?}, cannot assign {}",
            self.id,
            self.job(),
            job
        );
        for n in &mut self.nodes {
            n.job = Some(job);
        }
        self.status = BlockStatus::Occupied(job);
    }

    /// 释放 block，返回之前的作业；本来就空闲时返回 None 且不改变状态
    pub(crate) fn free_up(&mut self) -> Option<JobId> {
        let prev = self.job();
        for n in &mut self.nodes {
            n.job = None;
        }
        self.status = BlockStatus::Vacant;
        prev
    }

    /// 所有节点的归属与 block 的状态一致
    pub fn is_consistent(&self) -> bool {
        let owner = self.job();
        self.nodes.iter().all(|n| n.job == owner)
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            BlockStatus::Vacant => write!(f, "{}: VACANT", self.id),
            BlockStatus::Occupied(job) => write!(f, "{}: OCCUPIED {}", self.id, job),
        }
    }
}
