//! Domain model for the proximity-filtered task feed.
//!
//! Everything here is pure: task records, coordinates and distance, the
//! category selector, the filter, and the controller's lifecycle phases.

mod category;
mod coordinates;
mod credential;
mod draft;
mod error;
mod filter;
mod status;
mod task;

pub use category::{ALL_CATEGORIES_LABEL, Category, CategoryFilter};
pub use coordinates::{Coordinates, EARTH_RADIUS_KM, distance_label, haversine_km, round_km};
pub use credential::{AUTH_TOKEN_KEY, BearerToken};
pub use draft::TaskDraft;
pub use error::{FeedDomainError, ParseCategoryError};
pub use filter::{FeedRadius, FilterState, compute_visible_tasks, compute_visible_tasks_within};
pub use status::{FeedErrorKind, FeedPhase};
pub use task::{TaskId, TaskRecord};
