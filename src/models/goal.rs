use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Weekly activity targets. The goals bucket is append-only; the latest
/// entry is the active goal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyGoal {
    pub week_start: NaiveDate,
    pub target_steps: u32,
    pub target_calories: u32,
    pub target_minutes: u32,
    pub target_workouts: u32,
}

impl WeeklyGoal {
    /// First-run default, matching the seeded goal.
    pub fn starter(week_start: NaiveDate) -> Self {
        Self {
            week_start,
            target_steps: 50_000,
            target_calories: 2_000,
            target_minutes: 300,
            target_workouts: 5,
        }
    }
}
