//! Pure feed filtering by category, title search, and distance.

use super::{CategoryFilter, Coordinates, FeedDomainError, TaskRecord};

/// Maximum distance between the user and a visible task.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeedRadius(f64);

impl FeedRadius {
    /// Default cutoff in kilometres.
    pub const DEFAULT_KM: f64 = 30.0;

    /// Creates a validated radius.
    ///
    /// # Errors
    ///
    /// Returns [`FeedDomainError::InvalidRadius`] unless `km` is a positive
    /// finite distance.
    pub fn new(km: f64) -> Result<Self, FeedDomainError> {
        if !km.is_finite() || km <= 0.0 {
            return Err(FeedDomainError::InvalidRadius(km));
        }
        Ok(Self(km))
    }

    /// Returns the radius in kilometres.
    #[must_use]
    pub const fn km(self) -> f64 {
        self.0
    }

    /// Returns `true` when `distance_km` lies within the radius, boundary
    /// included.
    #[must_use]
    pub fn contains(self, distance_km: f64) -> bool {
        distance_km <= self.0
    }
}

impl Default for FeedRadius {
    fn default() -> Self {
        Self(Self::DEFAULT_KM)
    }
}

/// User-controlled filter inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    search_query: String,
    category: CategoryFilter,
}

impl FilterState {
    /// Creates a filter from a search query and category selection.
    #[must_use]
    pub fn new(search_query: impl Into<String>, category: CategoryFilter) -> Self {
        Self {
            search_query: search_query.into(),
            category,
        }
    }

    /// Returns the search query.
    #[must_use]
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Returns the category selection.
    #[must_use]
    pub const fn category(&self) -> CategoryFilter {
        self.category
    }

    /// Replaces the search query.
    pub fn set_search_query(&mut self, search_query: impl Into<String>) {
        self.search_query = search_query.into();
    }

    /// Replaces the category selection.
    pub const fn set_category(&mut self, category: CategoryFilter) {
        self.category = category;
    }

    /// Returns `true` when the title contains the query, ignoring case.
    #[must_use]
    pub fn matches_title(&self, title: &str) -> bool {
        self.search_query.is_empty()
            || title
                .to_lowercase()
                .contains(&self.search_query.to_lowercase())
    }
}

/// Computes the visible feed with the default 30 km radius.
///
/// See [`compute_visible_tasks_within`].
#[must_use]
pub fn compute_visible_tasks(
    tasks: &[TaskRecord],
    user_location: Option<Coordinates>,
    filter: &FilterState,
) -> Vec<TaskRecord> {
    compute_visible_tasks_within(tasks, user_location, filter, FeedRadius::default())
}

/// Computes the visible feed.
///
/// A task is kept when its category passes the selection, its title
/// contains the search query, and both it and the user have a location no
/// further apart than `radius`. Tasks without a location, or any task when
/// the user location is unknown, are dropped. Input order is preserved.
#[must_use]
pub fn compute_visible_tasks_within(
    tasks: &[TaskRecord],
    user_location: Option<Coordinates>,
    filter: &FilterState,
    radius: FeedRadius,
) -> Vec<TaskRecord> {
    let Some(origin) = user_location else {
        return Vec::new();
    };
    tasks
        .iter()
        .filter(|task| filter.category.matches(task.category()))
        .filter(|task| filter.matches_title(task.title()))
        .filter(|task| {
            task.distance_from(origin)
                .is_some_and(|distance| radius.contains(distance))
        })
        .cloned()
        .collect()
}
