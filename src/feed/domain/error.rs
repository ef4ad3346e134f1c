//! Error types for feed domain validation and parsing.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors returned while constructing domain feed values.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FeedDomainError {
    /// Latitude or longitude is outside its valid range or not finite.
    #[error("invalid coordinates ({latitude}, {longitude})")]
    InvalidCoordinates {
        /// Rejected latitude in degrees.
        latitude: f64,
        /// Rejected longitude in degrees.
        longitude: f64,
    },

    /// The feed radius is not a positive finite distance.
    #[error("invalid feed radius {0} km, expected a positive distance")]
    InvalidRadius(f64),

    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The task budget is not a positive finite amount.
    #[error("invalid budget {0}, expected a positive amount")]
    InvalidBudget(f64),

    /// The due date lies before the current day.
    #[error("due date {due} is before {today}")]
    DueDateInPast {
        /// Requested due date.
        due: NaiveDate,
        /// Current calendar day when the draft was checked.
        today: NaiveDate,
    },
}

/// Error returned while parsing a task category from its display name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task category: {0}")]
pub struct ParseCategoryError(pub String);
