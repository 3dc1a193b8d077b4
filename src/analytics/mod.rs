//! The metrics aggregation engine.
//!
//! Turns raw task, project, and activity records into the per-project
//! analytics view and the per-user dashboard. The computation core in
//! [`metrics`] is pure: it takes an immutable snapshot and an explicit
//! `now`, so concurrent reads cannot observe each other and the same
//! snapshot always yields the same view. [`services`] adds the caller
//! contract: membership checks and snapshot assembly from the repositories,
//! recomputed on every read.

pub mod metrics;
pub mod services;
pub mod views;

#[cfg(test)]
mod tests;
