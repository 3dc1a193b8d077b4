//! Tasks, comments, and the kanban state engine.
//!
//! This module owns task creation, status movement, and status-based board
//! grouping. Status transitions are deliberately unconstrained (any status
//! to any status); what the engine promises instead is consistent
//! bookkeeping: every successful mutation bumps the task's last-modified
//! timestamp and appends exactly one activity event, and every rejected one
//! leaves no trace. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
