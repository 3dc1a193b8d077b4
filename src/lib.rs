//! TaskFlow: collaborative task tracking core.
//!
//! This crate provides the domain core behind a project/task tracker: the
//! kanban state engine (status transitions and board grouping) and the
//! metrics aggregation engine (per-project analytics and the cross-project
//! personal dashboard), together with the membership model both rely on.
//! Presentation, transport, and durable storage are external collaborators:
//! callers arrive with a resolved identity, and persistence is reached only
//! through the port traits each context defines.
//!
//! # Architecture
//!
//! TaskFlow follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory reference
//!   store)
//!
//! # Modules
//!
//! - [`project`]: Projects, users, and membership-based access control
//! - [`task`]: Tasks, comments, and the kanban board
//! - [`activity`]: Append-only activity events and feeds
//! - [`analytics`]: Pure snapshot aggregation into dashboard views

pub mod activity;
pub mod analytics;
pub mod project;
pub mod task;
