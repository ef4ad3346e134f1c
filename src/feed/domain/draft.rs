//! Validated payload for posting a new task.

use super::{Category, Coordinates, FeedDomainError};
use chrono::NaiveDate;
use serde::Serialize;

/// New task submitted by the current user.
///
/// Serialises to the task service's create payload:
/// `{title, description, budget, location, dueDate, category}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDraft {
    title: String,
    description: Option<String>,
    budget: f64,
    location: Option<Coordinates>,
    due_date: NaiveDate,
    category: Category,
}

impl TaskDraft {
    /// Creates a draft with required fields.
    ///
    /// # Errors
    ///
    /// Returns [`FeedDomainError::EmptyTitle`] when the title is blank and
    /// [`FeedDomainError::InvalidBudget`] when the budget is not a positive
    /// finite amount.
    pub fn new(
        title: impl Into<String>,
        budget: f64,
        category: Category,
        due_date: NaiveDate,
    ) -> Result<Self, FeedDomainError> {
        let raw_title = title.into();
        let trimmed = raw_title.trim();
        if trimmed.is_empty() {
            return Err(FeedDomainError::EmptyTitle);
        }
        if !budget.is_finite() || budget <= 0.0 {
            return Err(FeedDomainError::InvalidBudget(budget));
        }
        Ok(Self {
            title: trimmed.to_owned(),
            description: None,
            budget,
            location: None,
            due_date,
            category,
        })
    }

    /// Sets the description; blank descriptions are dropped.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let raw = description.into();
        let trimmed = raw.trim();
        self.description = (!trimmed.is_empty()).then(|| trimmed.to_owned());
        self
    }

    /// Sets the task location.
    #[must_use]
    pub const fn with_location(mut self, location: Coordinates) -> Self {
        self.location = Some(location);
        self
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the budget.
    #[must_use]
    pub const fn budget(&self) -> f64 {
        self.budget
    }

    /// Returns the location, if any.
    #[must_use]
    pub const fn location(&self) -> Option<Coordinates> {
        self.location
    }

    /// Returns the due date.
    #[must_use]
    pub const fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    /// Returns the category.
    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// Checks that the due date is not before `today`.
    ///
    /// # Errors
    ///
    /// Returns [`FeedDomainError::DueDateInPast`] for past due dates.
    pub fn ensure_due_on_or_after(&self, today: NaiveDate) -> Result<(), FeedDomainError> {
        if self.due_date < today {
            return Err(FeedDomainError::DueDateInPast {
                due: self.due_date,
                today,
            });
        }
        Ok(())
    }
}
