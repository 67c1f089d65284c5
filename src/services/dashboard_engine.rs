use chrono::{Duration, NaiveDate};

use crate::models::{DayStat, GoalProgress, TodayTotals, WeeklyGoal, WeeklySeries, Workout};
use crate::utils::dates::weekday_name;

/// Per-day totals for the trailing 7 days ending today, oldest first.
/// Missing days appear with zeroed totals so the chart always has 7 points.
pub fn weekly_series(workouts: &[Workout], today: NaiveDate) -> WeeklySeries {
    let mut days = Vec::with_capacity(7);

    for offset in (0..7).rev() {
        let date = today - Duration::days(offset);
        let mut stat = DayStat {
            label: weekday_name(date).to_string(),
            date,
            steps: 0,
            calories: 0,
            duration: 0,
        };
        for w in workouts.iter().filter(|w| w.date == date) {
            stat.steps += w.steps;
            stat.calories += w.calories;
            stat.duration += w.duration;
        }
        days.push(stat);
    }

    WeeklySeries {
        labels: days.iter().map(|d| d.label.clone()).collect(),
        days,
    }
}

/// Sums over today's workouts, for the dashboard's today card.
pub fn today_totals(workouts: &[Workout], today: NaiveDate) -> TodayTotals {
    let mut totals = TodayTotals::default();
    for w in workouts.iter().filter(|w| w.date == today) {
        totals.steps += w.steps;
        totals.calories += w.calories;
        totals.duration += w.duration;
        totals.workout_count += 1;
    }
    totals
}

/// Percentage of the per-day step target (weekly target / 7), capped at 100.
pub fn daily_step_progress(totals: TodayTotals, goal: &WeeklyGoal) -> f64 {
    if goal.target_steps == 0 {
        return 0.0;
    }
    let daily_target = f64::from(goal.target_steps) / 7.0;
    (f64::from(totals.steps) / daily_target * 100.0).min(100.0)
}

/// Progress toward the weekly goal over the trailing 7-day series. A day
/// counts toward the workout target when it has any logged duration.
pub fn goal_progress(series: &WeeklySeries, goal: &WeeklyGoal) -> GoalProgress {
    let steps: u32 = series.days.iter().map(|d| d.steps).sum();
    let calories: u32 = series.days.iter().map(|d| d.calories).sum();
    let minutes: u32 = series.days.iter().map(|d| d.duration).sum();
    let active_days = series.days.iter().filter(|d| d.duration > 0).count() as u32;

    GoalProgress {
        steps_pct: percentage(steps, goal.target_steps),
        calories_pct: percentage(calories, goal.target_calories),
        minutes_pct: percentage(minutes, goal.target_minutes),
        workouts_pct: percentage(active_days, goal.target_workouts),
    }
}

fn percentage(current: u32, target: u32) -> f64 {
    if target == 0 {
        return 0.0;
    }
    (f64::from(current) / f64::from(target) * 100.0).min(100.0)
}
