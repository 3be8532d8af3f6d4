//! CSV trace 解析
//!
//! 读取作业日志（每行一个作业），转换为按到达时间排序、从 0 开始的到达记录。

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Deserialize;
use tracing::{debug, info};

use super::error::TraceError;
use super::feed::TraceFeed;
use super::record::ArrivalRecord;
use crate::sim::SimTime;

/// trace 中用到的列；其余列忽略
#[derive(Debug, Deserialize)]
struct TraceRow {
    #[serde(rename = "JOB_NAME")]
    job_name: String,
    #[serde(rename = "QUEUED_TIMESTAMP")]
    queued: String,
    #[serde(rename = "START_TIMESTAMP")]
    start: String,
    #[serde(rename = "END_TIMESTAMP")]
    end: String,
    #[serde(rename = "NODES_REQUESTED")]
    nodes_requested: f64,
    #[serde(rename = "EXIT_STATUS", default)]
    exit_status: String,
}

/// 从文件加载 trace
pub fn load_trace(path: impl AsRef<Path>) -> Result<TraceFeed, TraceError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| TraceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records = parse_trace(file)?;
    info!(path = %path.display(), jobs = records.len(), "trace 已加载");
    Ok(TraceFeed::new(records))
}

/// 解析 CSV 并把到达时间归一化（最早到达为 0）
pub fn parse_trace<R: Read>(reader: R) -> Result<Vec<ArrivalRecord>, TraceError> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let mut parsed = Vec::new();
    for (i, row) in rdr.deserialize::<TraceRow>().enumerate() {
        let row_no = i + 1;
        let row = row?;
        let queued = timestamp(row_no, "QUEUED_TIMESTAMP", &row.queued)?;
        let start = timestamp(row_no, "START_TIMESTAMP", &row.start)?;
        let end = timestamp(row_no, "END_TIMESTAMP", &row.end)?;
        let duration = u64::try_from(end - start).map_err(|_| TraceError::NegativeDuration {
            row: row_no,
            job: row.job_name.clone(),
        })?;
        if !row.nodes_requested.is_finite() || row.nodes_requested < 0.0 {
            return Err(TraceError::NodeCount {
                row: row_no,
                value: row.nodes_requested,
            });
        }
        // 浮点写法（"512.0"）截断为整数
        let nodes = row.nodes_requested.trunc() as u64;
        parsed.push((row.job_name, queued, duration, nodes, row.exit_status));
    }

    let Some(earliest) = parsed.iter().map(|(_, queued, ..)| *queued).min() else {
        return Ok(Vec::new());
    };
    debug!(earliest, rows = parsed.len(), "归一化到达时间");

    let mut records: Vec<ArrivalRecord> = parsed
        .into_iter()
        .map(|(name, queued, duration, nodes, exit_code)| ArrivalRecord {
            name,
            arrival: SimTime(queued.abs_diff(earliest)),
            duration,
            requested_nodes: nodes,
            exit_code,
        })
        .collect();
    records.sort_by_key(|r| r.arrival);
    Ok(records)
}

fn timestamp(row: usize, field: &'static str, raw: &str) -> Result<i64, TraceError> {
    parse_timestamp(raw).ok_or_else(|| TraceError::Timestamp {
        row,
        field,
        value: raw.to_string(),
    })
}

/// ISO-8601 时间转 Unix 秒；没有时区的时间按 UTC 处理
pub fn parse_timestamp(raw: &str) -> Option<i64> {
    let s = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.timestamp());
    }
    for fmt in ["%Y-%m-%d %H:%M:%S%.f%:z", "%Y-%m-%dT%H:%M:%S%.f%:z"] {
        if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
            return Some(dt.timestamp());
        }
    }
    for fmt in [
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M",
    ] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.and_utc().timestamp());
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().timestamp())
}
