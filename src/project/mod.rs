//! Projects, users, and membership.
//!
//! A project's member list is the single source of authorization in the
//! crate: every caller-facing operation resolves the target project and
//! checks membership before reading or mutating anything. The module follows
//! hexagonal architecture:
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
