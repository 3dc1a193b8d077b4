//! Adapter implementations of the task context ports.

pub mod memory;
