mod admission_queue;
mod cluster_config;
mod events;
mod trace;
