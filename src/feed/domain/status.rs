//! Feed lifecycle phases and presentation-facing error kinds.

use serde::{Deserialize, Serialize};

/// Lifecycle phase of the feed controller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedPhase {
    /// Nothing has been requested yet.
    #[default]
    Idle,
    /// The first load is in flight.
    Loading,
    /// The last load succeeded.
    Ready,
    /// The last load failed.
    Failed,
    /// A refresh is in flight while previous results stay visible.
    Refreshing,
}

impl FeedPhase {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Ready => "ready",
            Self::Failed => "failed",
            Self::Refreshing => "refreshing",
        }
    }

    /// Returns `true` when moving from `self` to `target` is permitted.
    #[must_use]
    pub const fn can_transition_to(self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Idle, Self::Loading)
                | (Self::Loading | Self::Refreshing, Self::Ready | Self::Failed)
                | (Self::Ready | Self::Failed, Self::Refreshing)
        )
    }

    /// Returns `true` while a request is in flight.
    #[must_use]
    pub const fn is_busy(self) -> bool {
        matches!(self, Self::Loading | Self::Refreshing)
    }
}

/// Failure categories surfaced to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedErrorKind {
    /// Location permission was refused.
    PermissionDenied,
    /// A position fix could not be obtained.
    PositionUnavailable,
    /// The task service could not be reached or answered with an error.
    Network,
    /// A credential was required but missing or rejected.
    Unauthenticated,
    /// The task service answered with an undecodable payload.
    MalformedResponse,
}
