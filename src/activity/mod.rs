//! Activity events and feeds.
//!
//! Every mutating operation in the crate appends exactly one immutable
//! [`domain::ActivityEvent`] to its project. This module owns the event
//! record, its append-only storage port, and the pure filter/order logic in
//! [`feed`] that dashboards and project views consume.

pub mod adapters;
pub mod domain;
pub mod feed;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
