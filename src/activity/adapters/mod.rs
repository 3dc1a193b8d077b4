//! Adapter implementations of the activity context ports.

pub mod memory;
