//! Storage abstractions for the service layer
//!
//! Contains the reusable in-memory table the booking stores are built on,
//! plus the seed data and the simulated-latency knob.

pub mod latency;
pub mod mem_table;
pub mod seed;

pub use latency::StoreLatency;
pub use mem_table::{MemTable, Record};
