use chrono::{Duration, NaiveDate};
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use crate::error::StorageError;
use crate::models::{Intensity, User, WeeklyGoal, Workout, DEFAULT_WORKOUT_TYPES};

use super::store::{BlobStore, BucketKeys};

/// Typed operations over the persisted collections. Reads of a missing
/// bucket yield the empty/default value; unreadable or unwritable buckets
/// surface a `StorageError` rather than a panic, and callers that prefer
/// the old fail-soft behavior can map errors to empty collections.
pub struct ActivityRepository<S: BlobStore> {
    store: S,
    keys: BucketKeys,
}

impl<S: BlobStore> ActivityRepository<S> {
    pub fn new(store: S, keys: BucketKeys) -> Self {
        Self { store, keys }
    }

    pub fn with_defaults(store: S) -> Self {
        Self::new(store, BucketKeys::default())
    }

    fn read_list<T: DeserializeOwned>(&self, bucket: &str) -> Result<Vec<T>, StorageError> {
        match self.store.get(bucket)? {
            Some(raw) => serde_json::from_str(&raw).map_err(|source| {
                warn!("bucket '{}' is unreadable: {}", bucket, source);
                StorageError::Corrupt {
                    bucket: bucket.to_string(),
                    source,
                }
            }),
            None => Ok(Vec::new()),
        }
    }

    fn write_json<T: Serialize>(&self, bucket: &str, value: &T) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value).map_err(|source| StorageError::Serialize {
            bucket: bucket.to_string(),
            source,
        })?;
        self.store.set(bucket, &raw)
    }

    // --- Workouts ---

    /// Full workout collection in stored order. Callers re-sort as needed.
    pub async fn list_workouts(&self) -> Result<Vec<Workout>, StorageError> {
        self.read_list(&self.keys.workouts)
    }

    /// Prepends the workout and persists; returns the new full list.
    pub async fn save_workout(&self, workout: Workout) -> Result<Vec<Workout>, StorageError> {
        let mut workouts: Vec<Workout> = self.read_list(&self.keys.workouts)?;
        workouts.insert(0, workout);
        self.write_json(&self.keys.workouts, &workouts)?;
        Ok(workouts)
    }

    /// Replaces the workout with the matching id. Silent no-op when the id
    /// is unknown.
    pub async fn update_workout(&self, updated: Workout) -> Result<Vec<Workout>, StorageError> {
        let mut workouts: Vec<Workout> = self.read_list(&self.keys.workouts)?;
        if let Some(slot) = workouts.iter_mut().find(|w| w.id == updated.id) {
            *slot = updated;
        }
        self.write_json(&self.keys.workouts, &workouts)?;
        Ok(workouts)
    }

    /// Removes the workout with the matching id, if present.
    pub async fn delete_workout(&self, id: &str) -> Result<Vec<Workout>, StorageError> {
        let mut workouts: Vec<Workout> = self.read_list(&self.keys.workouts)?;
        workouts.retain(|w| w.id != id);
        self.write_json(&self.keys.workouts, &workouts)?;
        Ok(workouts)
    }

    // --- Weekly goals ---

    pub async fn list_goals(&self) -> Result<Vec<WeeklyGoal>, StorageError> {
        self.read_list(&self.keys.weekly_goals)
    }

    /// Goals are append-only; the newest entry is the active one.
    pub async fn save_goal(&self, goal: WeeklyGoal) -> Result<Vec<WeeklyGoal>, StorageError> {
        let mut goals: Vec<WeeklyGoal> = self.read_list(&self.keys.weekly_goals)?;
        goals.push(goal);
        self.write_json(&self.keys.weekly_goals, &goals)?;
        Ok(goals)
    }

    pub async fn latest_goal(&self) -> Result<Option<WeeklyGoal>, StorageError> {
        let goals: Vec<WeeklyGoal> = self.read_list(&self.keys.weekly_goals)?;
        Ok(goals.last().cloned())
    }

    // --- Custom workout types ---

    /// Stored types, or the built-in defaults when nothing was saved yet.
    pub async fn list_custom_types(&self) -> Result<Vec<String>, StorageError> {
        match self.store.get(&self.keys.custom_types)? {
            Some(raw) => serde_json::from_str(&raw).map_err(|source| {
                warn!("bucket '{}' is unreadable: {}", self.keys.custom_types, source);
                StorageError::Corrupt {
                    bucket: self.keys.custom_types.clone(),
                    source,
                }
            }),
            None => Ok(DEFAULT_WORKOUT_TYPES
                .iter()
                .map(|t| (*t).to_string())
                .collect()),
        }
    }

    /// Appends the type unless an exact (case-sensitive) match exists.
    /// Idempotent; returns the resulting list either way.
    pub async fn add_custom_type(&self, name: &str) -> Result<Vec<String>, StorageError> {
        let mut types = self.list_custom_types().await?;
        if !types.iter().any(|t| t == name) {
            types.push(name.to_string());
            self.write_json(&self.keys.custom_types, &types)?;
        }
        Ok(types)
    }

    // --- Rest days ---

    pub async fn list_rest_days(&self) -> Result<Vec<NaiveDate>, StorageError> {
        self.read_list(&self.keys.rest_days)
    }

    /// Marks a date as a deliberate rest day; duplicates are ignored.
    pub async fn save_rest_day(&self, date: NaiveDate) -> Result<Vec<NaiveDate>, StorageError> {
        let mut rest_days: Vec<NaiveDate> = self.read_list(&self.keys.rest_days)?;
        if !rest_days.contains(&date) {
            rest_days.push(date);
            self.write_json(&self.keys.rest_days, &rest_days)?;
        }
        Ok(rest_days)
    }

    // --- User ---

    pub async fn load_user(&self) -> Result<Option<User>, StorageError> {
        match self.store.get(&self.keys.user)? {
            Some(raw) => serde_json::from_str(&raw).map(Some).map_err(|source| {
                warn!("bucket '{}' is unreadable: {}", self.keys.user, source);
                StorageError::Corrupt {
                    bucket: self.keys.user.clone(),
                    source,
                }
            }),
            None => Ok(None),
        }
    }

    pub async fn save_user(&self, user: &User) -> Result<(), StorageError> {
        self.write_json(&self.keys.user, user)
    }

    // --- First-run seeding ---

    /// Populates empty collections with demo data. Guarded by emptiness
    /// checks, so calling it on every app start never duplicates records.
    pub async fn seed_if_empty(&self, today: NaiveDate) -> Result<(), StorageError> {
        let workouts: Vec<Workout> = self.read_list(&self.keys.workouts)?;
        if workouts.is_empty() {
            let seeds = vec![
                sample_workout(today, "Strength", 45, 300, 1200, "Upper body focus"),
                sample_workout(
                    today - Duration::days(1),
                    "Cardio",
                    30,
                    250,
                    4000,
                    "Morning run",
                ),
                sample_workout(
                    today - Duration::days(2),
                    "Yoga",
                    60,
                    150,
                    500,
                    "Relaxing flow",
                ),
            ];
            self.write_json(&self.keys.workouts, &seeds)?;
            debug!("seeded {} sample workouts", seeds.len());
        }

        let goals: Vec<WeeklyGoal> = self.read_list(&self.keys.weekly_goals)?;
        if goals.is_empty() {
            self.write_json(&self.keys.weekly_goals, &vec![WeeklyGoal::starter(today)])?;
            debug!("seeded starter goal");
        }

        Ok(())
    }
}

fn sample_workout(
    date: NaiveDate,
    workout_type: &str,
    duration: u32,
    calories: u32,
    steps: u32,
    notes: &str,
) -> Workout {
    Workout {
        id: Uuid::new_v4().to_string(),
        date,
        workout_type: workout_type.to_string(),
        duration,
        calories,
        steps,
        intensity: Intensity::Moderate,
        notes: notes.to_string(),
        is_rest_day: false,
    }
}
