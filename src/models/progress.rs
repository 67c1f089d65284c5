use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day of the trailing-7-day dashboard series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayStat {
    pub label: String,
    pub date: NaiveDate,
    pub steps: u32,
    pub calories: u32,
    pub duration: u32,
}

/// Trailing 7-day window ending today, oldest day first.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WeeklySeries {
    pub labels: Vec<String>,
    pub days: Vec<DayStat>,
}

/// Totals over today's workouts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default)]
pub struct TodayTotals {
    pub steps: u32,
    pub calories: u32,
    pub duration: u32,
    pub workout_count: u32,
}

/// Percent-of-target values for the active weekly goal, each capped at 100.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default)]
pub struct GoalProgress {
    pub steps_pct: f64,
    pub calories_pct: f64,
    pub minutes_pct: f64,
    pub workouts_pct: f64,
}

/// Minutes per workout type within the current week.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeBreakdown {
    #[serde(rename = "type")]
    pub workout_type: String,
    pub duration: u32,
}

/// The week with the highest summed duration across all history.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct BestWeek {
    pub week_start: Option<NaiveDate>,
    pub total_duration: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayStatus {
    Completed,
    Rest,
    Today,
    Future,
    None,
}

/// One cell of the Monday-start streak calendar row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarDay {
    pub day: String,
    pub date: NaiveDate,
    pub status: DayStatus,
}

/// Everything the progress screen loads in one pass.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProgressReport {
    pub streak: u32,
    pub best_week: BestWeek,
    pub weekly_breakdown: Vec<TypeBreakdown>,
    pub this_week_duration: u32,
    pub last_week_duration: u32,
    pub change_pct: i32,
    pub calendar: Vec<CalendarDay>,
}
