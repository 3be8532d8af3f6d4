use crate::cluster::BlockId;
use crate::event::{EventLog, SimEvent, SimEventKind};
use crate::sim::SimTime;

fn ev(t: u64, kind: SimEventKind) -> SimEvent {
    SimEvent { t: SimTime(t), kind }
}

#[test]
fn events_render_human_readable_lines() {
    let cases = [
        (
            ev(0, SimEventKind::JobSubmitted { job: "j1".into() }),
            "Job j1: Submitted on Wallclock=0",
        ),
        (
            ev(
                0,
                SimEventKind::JobAdmitted {
                    job: "j1".into(),
                    blocks: vec![BlockId(0), BlockId(3)],
                },
            ),
            "Job j1: Assigned onto Midplane=0,3",
        ),
        (
            ev(
                0,
                SimEventKind::BlockAssigned {
                    block: BlockId(3),
                    job: "j1".into(),
                },
            ),
            "Midplane 3: Job=j1 is assigned onto this midplane",
        ),
        (
            ev(
                1,
                SimEventKind::JobStarted {
                    job: "j1".into(),
                    expected_end: SimTime(4),
                },
            ),
            "Job j1: Start running on Wallclock=1. Expect to stop on Wallclock=4",
        ),
        (
            ev(
                4,
                SimEventKind::JobEnded {
                    job: "j1".into(),
                    exit_code: "0".into(),
                },
            ),
            "Job j1: Stop on Wallclock=4 (exit status 0)",
        ),
        (
            ev(4, SimEventKind::DoubleFree { block: BlockId(3) }),
            "Midplane 3: Attempting to free up again",
        ),
    ];
    for (event, want) in cases {
        assert_eq!(event.to_string(), want);
    }
}

#[test]
fn events_serialize_with_flat_kind_tag() {
    let event = ev(
        7,
        SimEventKind::BlockFreed {
            block: BlockId(2),
            job: "j9".into(),
        },
    );
    let v: serde_json::Value = serde_json::to_value(&event).expect("serialize event");
    assert_eq!(v["t"], 7);
    assert_eq!(v["kind"], "block_freed");
    assert_eq!(v["block"], 2);
    assert_eq!(v["job"], "j9");

    let decoded: SimEvent = serde_json::from_value(v).expect("deserialize event");
    assert_eq!(decoded, event);
}

#[test]
fn only_double_free_is_a_warning() {
    assert!(SimEventKind::DoubleFree { block: BlockId(0) }.is_warning());
    assert!(!SimEventKind::JobReady { job: "j".into() }.is_warning());
}

#[test]
fn event_log_renders_text_and_json() {
    let mut log = EventLog::default();
    assert!(log.is_empty());
    log.push(ev(0, SimEventKind::JobSubmitted { job: "a".into() }));
    log.push(ev(0, SimEventKind::JobReady { job: "a".into() }));
    assert_eq!(log.len(), 2);

    assert_eq!(
        log.to_text(),
        "Job a: Submitted on Wallclock=0\nJob a: Ready to start\n"
    );

    let raw = log.to_json().expect("serialize log");
    let v: serde_json::Value = serde_json::from_str(&raw).expect("parse log");
    let arr = v.as_array().expect("array");
    assert_eq!(arr.len(), 2);
    assert_eq!(arr[0]["kind"], "job_submitted");
    assert_eq!(arr[1]["kind"], "job_ready");
}
