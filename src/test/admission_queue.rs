use crate::job::{AdmissionQueue, Job, JobId};
use crate::sim::SimTime;

fn job(id: usize, name: &str) -> Job {
    Job::new(JobId(id), name, SimTime::ZERO, 1, 4, "0")
}

#[test]
fn queue_is_fifo() {
    let mut q = AdmissionQueue::new();
    assert!(q.is_empty());
    assert!(q.peek().is_none());

    q.enqueue(job(0, "a"));
    q.enqueue(job(1, "b"));
    q.enqueue(job(2, "c"));

    assert_eq!(q.len(), 3);
    assert_eq!(q.peek().map(Job::name), Some("a"));
    let names: Vec<&str> = q.iter().map(Job::name).collect();
    assert_eq!(names, ["a", "b", "c"]);

    assert_eq!(q.dequeue().map(|j| j.id()), Some(JobId(0)));
    assert_eq!(q.peek().map(Job::name), Some("b"));
    assert_eq!(q.len(), 2);
}

#[test]
fn queue_tracks_peak_length() {
    let mut q = AdmissionQueue::new();
    q.enqueue(job(0, "a"));
    q.enqueue(job(1, "b"));
    q.dequeue();
    q.dequeue();
    q.enqueue(job(2, "c"));
    assert_eq!(q.len(), 1);
    assert_eq!(q.peak_len(), 2);
    assert!(q.dequeue().is_some());
    assert!(q.dequeue().is_none());
}
