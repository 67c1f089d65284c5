use chrono::{Datelike, NaiveDate};

use crate::models::Workout;
use crate::utils::dates::week_monday;

/// Date window presets for the workout history list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateRange {
    #[default]
    AllTime,
    ThisWeek,
    ThisMonth,
}

/// Sort orders offered by the history list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    #[default]
    DateNewest,
    DateOldest,
    Duration,
    Calories,
}

pub fn filter_by_range(workouts: &[Workout], range: DateRange, today: NaiveDate) -> Vec<Workout> {
    let start = match range {
        DateRange::AllTime => return workouts.to_vec(),
        DateRange::ThisWeek => week_monday(today),
        DateRange::ThisMonth => {
            NaiveDate::from_ymd_opt(today.year(), today.month(), 1).unwrap_or(today)
        }
    };
    workouts.iter().filter(|w| w.date >= start).cloned().collect()
}

pub fn filter_by_type(workouts: &[Workout], workout_type: &str) -> Vec<Workout> {
    workouts
        .iter()
        .filter(|w| w.workout_type == workout_type)
        .cloned()
        .collect()
}

/// All workouts logged on a single calendar day (calendar tap-through).
pub fn for_day(workouts: &[Workout], date: NaiveDate) -> Vec<Workout> {
    workouts.iter().filter(|w| w.date == date).cloned().collect()
}

pub fn sort_workouts(workouts: &[Workout], sort: SortBy) -> Vec<Workout> {
    let mut sorted = workouts.to_vec();
    match sort {
        SortBy::DateNewest => sorted.sort_by(|a, b| b.date.cmp(&a.date)),
        SortBy::DateOldest => sorted.sort_by(|a, b| a.date.cmp(&b.date)),
        SortBy::Duration => sorted.sort_by(|a, b| b.duration.cmp(&a.duration)),
        SortBy::Calories => sorted.sort_by(|a, b| b.calories.cmp(&a.calories)),
    }
    sorted
}
