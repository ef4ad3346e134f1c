//! Application services for the task feed.

mod controller;
mod posting;

pub use controller::{FeedController, FeedView};
pub use posting::{TaskPostingError, TaskPostingResult, TaskPostingService};
