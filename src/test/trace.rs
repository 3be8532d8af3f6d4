use crate::sim::SimTime;
use crate::trace::{
    ArrivalFeed, ArrivalRecord, TraceError, TraceFeed, parse_timestamp, parse_trace,
};

const TRACE: &str = "\
JOB_NAME,QUEUED_TIMESTAMP,START_TIMESTAMP,END_TIMESTAMP,NODES_REQUESTED,EXIT_STATUS,QUEUE_NAME
late,2019-01-01 00:10:00,2019-01-01 00:20:00,2019-01-01 01:20:00,1024.0,0,prod-capability
first,2019-01-01 00:00:00,2019-01-01 00:00:30,2019-01-01 00:01:30,512,0,default
tie_a,2019-01-01 00:05:00,2019-01-01 00:05:00,2019-01-01 00:05:10,512,143,default
tie_b,2019-01-01 00:05:00,2019-01-01 00:06:00,2019-01-01 00:06:00,2048.0,-1,default
";

#[test]
fn parse_trace_normalizes_and_sorts_by_arrival() {
    let records = parse_trace(TRACE.as_bytes()).expect("parse trace");
    let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["first", "tie_a", "tie_b", "late"]);

    assert_eq!(records[0], ArrivalRecord::new("first", 0, 60, 512, "0"));
    assert_eq!(records[1], ArrivalRecord::new("tie_a", 300, 10, 512, "143"));
    assert_eq!(records[2], ArrivalRecord::new("tie_b", 300, 0, 2048, "-1"));
    assert_eq!(records[3], ArrivalRecord::new("late", 600, 3600, 1024, "0"));
}

#[test]
fn parse_trace_accepts_empty_trace() {
    let raw = "JOB_NAME,QUEUED_TIMESTAMP,START_TIMESTAMP,END_TIMESTAMP,NODES_REQUESTED,EXIT_STATUS\n";
    let records = parse_trace(raw.as_bytes()).expect("parse empty trace");
    assert!(records.is_empty());
}

#[test]
fn parse_trace_rejects_bad_timestamp() {
    let raw = "\
JOB_NAME,QUEUED_TIMESTAMP,START_TIMESTAMP,END_TIMESTAMP,NODES_REQUESTED,EXIT_STATUS
ok,2019-01-01 00:00:00,2019-01-01 00:00:00,2019-01-01 00:00:01,512,0
bad,yesterday,2019-01-01 00:00:00,2019-01-01 00:00:01,512,0
";
    let err = parse_trace(raw.as_bytes()).expect_err("bad timestamp");
    match err {
        TraceError::Timestamp { row, field, value } => {
            assert_eq!(row, 2);
            assert_eq!(field, "QUEUED_TIMESTAMP");
            assert_eq!(value, "yesterday");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn parse_trace_rejects_negative_duration() {
    let raw = "\
JOB_NAME,QUEUED_TIMESTAMP,START_TIMESTAMP,END_TIMESTAMP,NODES_REQUESTED,EXIT_STATUS
back,2019-01-01 00:00:00,2019-01-01 00:10:00,2019-01-01 00:05:00,512,0
";
    let err = parse_trace(raw.as_bytes()).expect_err("negative duration");
    assert!(matches!(err, TraceError::NegativeDuration { row: 1, .. }));
    assert_eq!(err.to_string(), "row 1: job back ends before it starts");
}

#[test]
fn parse_trace_rejects_negative_node_count() {
    let raw = "\
JOB_NAME,QUEUED_TIMESTAMP,START_TIMESTAMP,END_TIMESTAMP,NODES_REQUESTED,EXIT_STATUS
neg,2019-01-01 00:00:00,2019-01-01 00:00:00,2019-01-01 00:05:00,-512,0
";
    let err = parse_trace(raw.as_bytes()).expect_err("negative nodes");
    assert!(matches!(err, TraceError::NodeCount { row: 1, .. }));
}

#[test]
fn parse_trace_reports_missing_columns() {
    let raw = "JOB_NAME,QUEUED_TIMESTAMP\nx,2019-01-01 00:00:00\n";
    let err = parse_trace(raw.as_bytes()).expect_err("missing columns");
    assert!(matches!(err, TraceError::Csv(_)));
}

#[test]
fn parse_timestamp_accepts_iso_variants() {
    let base = parse_timestamp("2019-01-01 00:00:00").expect("space separator");
    assert_eq!(base, 1_546_300_800);
    assert_eq!(parse_timestamp("2019-01-01T00:00:00"), Some(base));
    assert_eq!(parse_timestamp("2019-01-01T00:00:00Z"), Some(base));
    assert_eq!(parse_timestamp("2019-01-01 00:00:00.750"), Some(base));
    assert_eq!(parse_timestamp("2019-01-01 02:00:00+02:00"), Some(base));
    assert_eq!(parse_timestamp("2019-01-01T00:00:00+00:00"), Some(base));
    assert_eq!(parse_timestamp(" 2019-01-01 00:01 "), Some(base + 60));
    assert_eq!(parse_timestamp("2019-01-01"), Some(base));
    assert_eq!(parse_timestamp("01/01/2019"), None);
    assert_eq!(parse_timestamp(""), None);
}

#[test]
fn trace_feed_only_yields_due_records() {
    let mut feed = TraceFeed::new(vec![
        ArrivalRecord::new("b", 2, 1, 4, "0"),
        ArrivalRecord::new("a", 0, 1, 4, "0"),
        ArrivalRecord::new("c", 2, 1, 4, "0"),
    ]);
    assert_eq!(feed.remaining(), 3);
    assert_eq!(feed.peek().map(|r| r.name.as_str()), Some("a"));

    assert_eq!(feed.pop_due(SimTime(0)).map(|r| r.name), Some("a".to_string()));
    assert!(feed.pop_due(SimTime(0)).is_none());
    assert!(feed.pop_due(SimTime(1)).is_none());

    assert_eq!(feed.pop_due(SimTime(2)).map(|r| r.name), Some("b".to_string()));
    assert_eq!(feed.pop_due(SimTime(2)).map(|r| r.name), Some("c".to_string()));
    assert!(feed.pop_due(SimTime(2)).is_none());
    assert!(feed.is_exhausted());
}

#[test]
fn trace_feed_does_not_strand_overdue_records() {
    let mut feed = TraceFeed::new(vec![ArrivalRecord::new("old", 1, 1, 4, "0")]);
    assert_eq!(feed.pop_due(SimTime(5)).map(|r| r.arrival), Some(SimTime(1)));
    assert!(feed.is_exhausted());
}
