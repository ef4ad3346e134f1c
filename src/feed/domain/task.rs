//! Task records as received from the remote task service.

use super::Coordinates;
use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, de::Error as _};
use std::fmt;

/// Identifier of a task record assigned by the remote service.
///
/// The service may send either a JSON string or a JSON integer; both are
/// normalised to a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Creates a task identifier.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WireTaskId {
    Text(String),
    Number(u64),
}

impl<'de> Deserialize<'de> for TaskId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match WireTaskId::deserialize(deserializer)? {
            WireTaskId::Text(text) => Self(text),
            WireTaskId::Number(number) => Self(number.to_string()),
        })
    }
}

#[derive(Deserialize)]
struct WireLocation {
    latitude: f64,
    longitude: f64,
}

/// Decodes a task location, treating out-of-range positions as absent.
fn lenient_location<'de, D>(deserializer: D) -> Result<Option<Coordinates>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<WireLocation>::deserialize(deserializer)?
        .and_then(|wire| Coordinates::new(wire.latitude, wire.longitude).ok()))
}

/// Decodes a due date from `YYYY-MM-DD` or an RFC 3339 timestamp.
fn calendar_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_due_date(&raw)
        .ok_or_else(|| D::Error::custom(format!("invalid due date '{raw}'")))
}

fn parse_due_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(trimmed)
                .ok()
                .map(|timestamp| timestamp.date_naive())
        })
}

/// Task record as published by the remote task service.
///
/// Records are immutable once received; the feed filters them but never
/// edits them. A location outside the valid coordinate range decodes as no
/// location, so the record is kept and the radius filter excludes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRecord {
    id: TaskId,
    title: String,
    #[serde(default)]
    description: Option<String>,
    budget: f64,
    #[serde(default, deserialize_with = "lenient_location")]
    location: Option<Coordinates>,
    category: String,
    #[serde(deserialize_with = "calendar_date")]
    due_date: NaiveDate,
    #[serde(default)]
    image: Option<String>,
}

impl TaskRecord {
    /// Creates a task record with required fields.
    #[must_use]
    pub fn new(
        id: TaskId,
        title: impl Into<String>,
        budget: f64,
        category: impl Into<String>,
        due_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: None,
            budget,
            location: None,
            category: category.into(),
            due_date,
            image: None,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the task location.
    #[must_use]
    pub const fn with_location(mut self, location: Coordinates) -> Self {
        self.location = Some(location);
        self
    }

    /// Sets the task image URL.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the offered budget.
    #[must_use]
    pub const fn budget(&self) -> f64 {
        self.budget
    }

    /// Returns the task location, if the task is geo-tagged.
    #[must_use]
    pub const fn location(&self) -> Option<Coordinates> {
        self.location
    }

    /// Returns the category name as sent by the service.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns the due date.
    #[must_use]
    pub const fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    /// Returns the image URL, if any.
    #[must_use]
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    /// Returns the distance from `origin` in kilometres when the task has a
    /// location.
    #[must_use]
    pub fn distance_from(&self, origin: Coordinates) -> Option<f64> {
        self.location.map(|location| origin.distance_km(location))
    }
}
