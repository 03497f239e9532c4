//! Background Tasks Module
//!
//! Contains the periodic age-sweep task that expires old cache entries.

mod sweep;

pub use sweep::spawn_sweep_task;
