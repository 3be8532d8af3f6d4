use super::types::SimEvent;
use std::fmt::Write as _;

/// 事件收集器（存内存，仿真结束写 JSON 或文本文件）
#[derive(Debug, Default)]
pub struct EventLog {
    pub events: Vec<SimEvent>,
}

impl EventLog {
    pub fn push(&mut self, ev: SimEvent) {
        self.events.push(ev);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.events)
    }

    /// 每行一条事件，和终端日志同样的措辞
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for ev in &self.events {
            let _ = writeln!(out, "{ev}");
        }
        out
    }
}
