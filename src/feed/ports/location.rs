//! Location port for obtaining the device's current position.

use crate::feed::domain::{Coordinates, FeedErrorKind};
use async_trait::async_trait;
use thiserror::Error;

/// Result type for location requests.
pub type LocationResult<T> = Result<T, LocationError>;

/// Single-shot device location contract.
#[async_trait]
pub trait LocationProvider: Send + Sync {
    /// Requests permission if needed and returns one position fix.
    ///
    /// # Errors
    ///
    /// Returns [`LocationError::PermissionDenied`] when the user refuses
    /// permission and [`LocationError::PositionUnavailable`] when the
    /// platform cannot produce a fix.
    async fn request_location(&self) -> LocationResult<Coordinates>;
}

/// Errors returned by location providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LocationError {
    /// Foreground location permission was refused.
    #[error("location permission denied")]
    PermissionDenied,

    /// The platform could not produce a position fix.
    #[error("current position unavailable")]
    PositionUnavailable,
}

impl LocationError {
    /// Returns the presentation-facing error kind.
    #[must_use]
    pub const fn kind(self) -> FeedErrorKind {
        match self {
            Self::PermissionDenied => FeedErrorKind::PermissionDenied,
            Self::PositionUnavailable => FeedErrorKind::PositionUnavailable,
        }
    }
}
