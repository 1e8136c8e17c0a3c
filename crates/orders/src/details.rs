//! Client details: the parts of an order that do not affect its price.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use cleanops_core::Weekday;
use cleanops_workforce::WorkerId;

use crate::options::{CleaningFrequency, JobStatus, Priority, SuperficialArea};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub title: String,
    #[serde(deserialize_with = "blank_as_none")]
    pub assigned_worker_id: Option<WorkerId>,
    #[serde(deserialize_with = "blank_as_none")]
    pub cleaning_frequency: Option<CleaningFrequency>,
    #[serde(deserialize_with = "blank_as_none")]
    pub superficial_area: Option<SuperficialArea>,
    #[serde(deserialize_with = "blank_as_none")]
    pub deadline: Option<NaiveDate>,
    #[serde(deserialize_with = "blank_as_none")]
    pub preferred_day: Option<Weekday>,
    #[serde(deserialize_with = "blank_as_none")]
    pub priority: Option<Priority>,
    #[serde(deserialize_with = "blank_as_none")]
    pub status: Option<JobStatus>,
}

/// Read an optional option field as the forms send it: `null` and `""` both
/// mean unset.
pub(crate) fn blank_as_none<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: FromStr,
    T::Err: fmt::Display,
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => raw.parse().map(Some).map_err(D::Error::custom),
    }
}

/// Patch flavour of [`blank_as_none`]: a missing key keeps the value, while
/// `null` or `""` clears it.
pub(crate) fn clear_on_blank<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: FromStr,
    T::Err: fmt::Display,
    D: Deserializer<'de>,
{
    blank_as_none(deserializer).map(Some)
}

/// Partial update of [`ClientDetails`].
///
/// Text fields: `None` keeps the value. Optional fields: the outer `None`
/// keeps the value, `Some(None)` clears it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DetailsPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub title: Option<String>,
    #[serde(deserialize_with = "clear_on_blank")]
    pub assigned_worker_id: Option<Option<WorkerId>>,
    #[serde(deserialize_with = "clear_on_blank")]
    pub cleaning_frequency: Option<Option<CleaningFrequency>>,
    #[serde(deserialize_with = "clear_on_blank")]
    pub superficial_area: Option<Option<SuperficialArea>>,
    #[serde(deserialize_with = "clear_on_blank")]
    pub deadline: Option<Option<NaiveDate>>,
    #[serde(deserialize_with = "clear_on_blank")]
    pub preferred_day: Option<Option<Weekday>>,
    #[serde(deserialize_with = "clear_on_blank")]
    pub priority: Option<Option<Priority>>,
    #[serde(deserialize_with = "clear_on_blank")]
    pub status: Option<Option<JobStatus>>,
}

impl DetailsPatch {
    pub fn apply_to(self, details: &mut ClientDetails) {
        fn set<T>(slot: &mut T, value: Option<T>) {
            if let Some(v) = value {
                *slot = v;
            }
        }

        set(&mut details.name, self.name);
        set(&mut details.email, self.email);
        set(&mut details.phone, self.phone);
        set(&mut details.address, self.address);
        set(&mut details.title, self.title);
        set(&mut details.assigned_worker_id, self.assigned_worker_id);
        set(&mut details.cleaning_frequency, self.cleaning_frequency);
        set(&mut details.superficial_area, self.superficial_area);
        set(&mut details.deadline, self.deadline);
        set(&mut details.preferred_day, self.preferred_day);
        set(&mut details.priority, self.priority);
        set(&mut details.status, self.status);
    }
}
