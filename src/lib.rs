pub mod cluster;
pub mod event;
pub mod job;
pub mod sched;
pub mod sim;
pub mod trace;

#[cfg(test)]
mod test;
