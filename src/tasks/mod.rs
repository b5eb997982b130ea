//! Background Tasks Module
//!
//! Contains background tasks that run periodically during server operation.
//!
//! # Tasks
//! - Maintenance sweep: deletes records older than their namespace TTL

mod sweep;

pub use sweep::spawn_sweep_task;
