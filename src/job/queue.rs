//! 准入队列（FIFO）
//!
//! 保存已到达但尚未分配资源的作业，入队顺序即到达顺序。

use std::collections::VecDeque;

use super::lifecycle::Job;

#[derive(Debug, Default)]
pub struct AdmissionQueue {
    q: VecDeque<Job>,
    peak_len: usize,
}

impl AdmissionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&mut self, job: Job) {
        self.q.push_back(job);
        self.peak_len = self.peak_len.max(self.q.len());
    }

    pub fn dequeue(&mut self) -> Option<Job> {
        self.q.pop_front()
    }

    /// 队首作业（FCFS 只看它）
    pub fn peek(&self) -> Option<&Job> {
        self.q.front()
    }

    pub fn len(&self) -> usize {
        self.q.len()
    }

    pub fn is_empty(&self) -> bool {
        self.q.is_empty()
    }

    /// 历史最大队列长度
    pub fn peak_len(&self) -> usize {
        self.peak_len
    }

    pub fn iter(&self) -> impl Iterator<Item = &Job> {
        self.q.iter()
    }
}
