//! Application services for analytics reads.

mod service;

pub use service::{AnalyticsError, AnalyticsResult, AnalyticsService};
