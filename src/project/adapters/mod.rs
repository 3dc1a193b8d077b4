//! Adapter implementations of the project context ports.

pub mod memory;
