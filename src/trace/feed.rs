//! 到达源
//!
//! 仿真循环只通过 `ArrivalFeed` 拉取到期的作业，从不提前拉取。

use std::collections::VecDeque;

use super::record::ArrivalRecord;
use crate::sim::SimTime;

/// 按到达时间非递减顺序产出作业的外部数据源
pub trait ArrivalFeed {
    /// 若下一条记录在 `now` 或之前到达则取出它，否则返回 None
    fn pop_due(&mut self, now: SimTime) -> Option<ArrivalRecord>;
    /// 尚未取出的记录数
    fn remaining(&self) -> usize;

    fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }
}

/// 内存中的有序到达序列
#[derive(Debug, Default, Clone)]
pub struct TraceFeed {
    records: VecDeque<ArrivalRecord>,
}

impl TraceFeed {
    /// 按到达时间稳定排序（同一时刻保持输入顺序）
    pub fn new(mut records: Vec<ArrivalRecord>) -> Self {
        records.sort_by_key(|r| r.arrival);
        Self {
            records: records.into(),
        }
    }

    pub fn peek(&self) -> Option<&ArrivalRecord> {
        self.records.front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ArrivalRecord> {
        self.records.iter()
    }
}

impl ArrivalFeed for TraceFeed {
    fn pop_due(&mut self, now: SimTime) -> Option<ArrivalRecord> {
        if self.records.front()?.arrival <= now {
            self.records.pop_front()
        } else {
            None
        }
    }

    fn remaining(&self) -> usize {
        self.records.len()
    }
}
