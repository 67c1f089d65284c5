use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

/// Built-in workout categories. User-defined types are stored on top of
/// these in the custom-types bucket.
pub const DEFAULT_WORKOUT_TYPES: [&str; 6] =
    ["Strength", "Cardio", "Yoga", "HIIT", "Pilates", "Other"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Intensity {
    Low,
    #[default]
    Moderate,
    High,
    Extreme,
    Rest,
}

/// A single logged workout. Persisted with the camelCase field names of the
/// stored JSON documents; `calories`, `steps`, `intensity`, `notes` and
/// `isRestDay` may be missing on historical records and default accordingly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    pub id: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub workout_type: String,
    pub duration: u32,
    #[serde(default)]
    pub calories: u32,
    #[serde(default)]
    pub steps: u32,
    #[serde(default)]
    pub intensity: Intensity,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub is_rest_day: bool,
}

/// Form input for the add/edit workout flow, before normalization.
#[derive(Debug, Clone)]
pub struct WorkoutDraft {
    pub date: NaiveDate,
    pub workout_type: String,
    pub duration: Option<u32>,
    pub calories: Option<u32>,
    pub steps: Option<u32>,
    pub intensity: Intensity,
    pub notes: String,
    pub is_rest_day: bool,
}

impl WorkoutDraft {
    /// Normalize the draft into a `Workout`. A rest-day entry overrides
    /// type, duration, calories and intensity; a regular entry must carry a
    /// non-zero duration. Pass `existing_id` when editing so the record is
    /// replaced instead of duplicated.
    pub fn into_workout(self, existing_id: Option<String>) -> Result<Workout, ValidationError> {
        if !self.is_rest_day && self.duration.unwrap_or(0) == 0 {
            return Err(ValidationError::MissingDuration);
        }

        Ok(Workout {
            id: existing_id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            date: self.date,
            workout_type: if self.is_rest_day {
                "Rest".to_string()
            } else {
                self.workout_type
            },
            duration: if self.is_rest_day {
                0
            } else {
                self.duration.unwrap_or(0)
            },
            calories: if self.is_rest_day {
                0
            } else {
                self.calories.unwrap_or(0)
            },
            steps: self.steps.unwrap_or(0),
            intensity: if self.is_rest_day {
                Intensity::Rest
            } else {
                self.intensity
            },
            notes: self.notes,
            is_rest_day: self.is_rest_day,
        })
    }
}

/// Checks a prospective custom type name before it is offered to the
/// repository. The repository's append is idempotent regardless; this is
/// the form-level check that produces a user-facing message.
pub fn validate_custom_type(name: &str, existing: &[String]) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::MissingField);
    }
    if existing.iter().any(|t| t == name) {
        return Err(ValidationError::DuplicateType);
    }
    Ok(())
}
