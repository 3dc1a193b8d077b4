//! Application services for activity feeds.

mod feed;

pub use feed::{ActivityFeedError, ActivityFeedResult, ActivityService};
