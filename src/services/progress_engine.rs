use std::collections::HashSet;

use chrono::{Duration, NaiveDate};

use crate::models::{BestWeek, CalendarDay, DayStatus, ProgressReport, TypeBreakdown, Workout};
use crate::utils::dates::{week_monday, WEEK_ROW_LABELS};

/// Consecutive activity days ending today or yesterday. An activity day is
/// a day with a logged workout or an explicit rest-day mark; a full day
/// without either breaks the streak immediately.
pub fn streak(workouts: &[Workout], rest_days: &[NaiveDate], today: NaiveDate) -> u32 {
    let activity_days: HashSet<NaiveDate> = workouts
        .iter()
        .map(|w| w.date)
        .chain(rest_days.iter().copied())
        .collect();

    let yesterday = today - Duration::days(1);
    if !activity_days.contains(&today) && !activity_days.contains(&yesterday) {
        return 0;
    }

    let mut check = if activity_days.contains(&today) {
        today
    } else {
        yesterday
    };

    let mut count = 0;
    while activity_days.contains(&check) {
        count += 1;
        check = check - Duration::days(1);
    }
    count
}

/// The week (keyed by its Monday) with the highest summed duration.
/// Grouping keeps first-seen order, so a tie goes to the week that first
/// appears in the stored list.
pub fn best_week(workouts: &[Workout]) -> BestWeek {
    let mut weeks: Vec<(NaiveDate, u32)> = Vec::new();
    for w in workouts {
        let monday = week_monday(w.date);
        match weeks.iter_mut().find(|(start, _)| *start == monday) {
            Some((_, total)) => *total += w.duration,
            None => weeks.push((monday, w.duration)),
        }
    }

    let mut best = BestWeek::default();
    for (week_start, total_duration) in weeks {
        if total_duration > best.total_duration {
            best = BestWeek {
                week_start: Some(week_start),
                total_duration,
            };
        }
    }
    best
}

/// Minutes per workout type within the current Monday-start week, in
/// first-seen order.
pub fn weekly_type_breakdown(workouts: &[Workout], today: NaiveDate) -> Vec<TypeBreakdown> {
    let monday = week_monday(today);
    let next_monday = monday + Duration::days(7);

    let mut breakdown: Vec<TypeBreakdown> = Vec::new();
    for w in workouts
        .iter()
        .filter(|w| w.date >= monday && w.date < next_monday)
    {
        match breakdown
            .iter_mut()
            .find(|b| b.workout_type == w.workout_type)
        {
            Some(b) => b.duration += w.duration,
            None => breakdown.push(TypeBreakdown {
                workout_type: w.workout_type.clone(),
                duration: w.duration,
            }),
        }
    }
    breakdown
}

/// Total minutes in the Monday-start week `week_offset` weeks before the
/// current one (0 = this week). The window is half-open.
pub fn total_duration_for_week(workouts: &[Workout], today: NaiveDate, week_offset: u32) -> u32 {
    let monday = week_monday(today) - Duration::weeks(i64::from(week_offset));
    let next_monday = monday + Duration::days(7);

    workouts
        .iter()
        .filter(|w| w.date >= monday && w.date < next_monday)
        .map(|w| w.duration)
        .sum()
}

/// Rounded percentage change between two weekly totals. A jump from zero
/// counts as +100.
pub fn week_over_week_change(current: u32, previous: u32) -> i32 {
    if previous == 0 {
        return if current > 0 { 100 } else { 0 };
    }
    let change = (f64::from(current) - f64::from(previous)) / f64::from(previous) * 100.0;
    change.round() as i32
}

/// Status row for the current Monday-start week. A logged workout wins
/// over a rest-day mark on the same date.
pub fn calendar_week_status(
    workouts: &[Workout],
    rest_days: &[NaiveDate],
    today: NaiveDate,
) -> Vec<CalendarDay> {
    let monday = week_monday(today);

    (0..7)
        .map(|i| {
            let date = monday + Duration::days(i);
            let status = if date > today {
                DayStatus::Future
            } else if workouts.iter().any(|w| w.date == date) {
                DayStatus::Completed
            } else if rest_days.contains(&date) {
                DayStatus::Rest
            } else if date == today {
                DayStatus::Today
            } else {
                DayStatus::None
            };

            CalendarDay {
                day: WEEK_ROW_LABELS[i as usize].to_string(),
                date,
                status,
            }
        })
        .collect()
}

/// Everything the progress screen shows, computed in one pass over the
/// collections.
pub fn progress_report(
    workouts: &[Workout],
    rest_days: &[NaiveDate],
    today: NaiveDate,
) -> ProgressReport {
    let this_week_duration = total_duration_for_week(workouts, today, 0);
    let last_week_duration = total_duration_for_week(workouts, today, 1);

    ProgressReport {
        streak: streak(workouts, rest_days, today),
        best_week: best_week(workouts),
        weekly_breakdown: weekly_type_breakdown(workouts, today),
        this_week_duration,
        last_week_duration,
        change_pct: week_over_week_change(this_week_duration, last_week_duration),
        calendar: calendar_week_status(workouts, rest_days, today),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Intensity;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn workout(date: &str, workout_type: &str, duration: u32) -> Workout {
        Workout {
            id: format!("{}-{}", workout_type, date),
            date: d(date),
            workout_type: workout_type.to_string(),
            duration,
            calories: 0,
            steps: 0,
            intensity: Intensity::Moderate,
            notes: String::new(),
            is_rest_day: false,
        }
    }

    #[test]
    fn streak_is_zero_after_a_missed_day() {
        let workouts = vec![workout("2024-01-01", "Cardio", 30)];
        assert_eq!(streak(&workouts, &[], d("2024-01-10")), 0);
    }

    #[test]
    fn streak_counts_consecutive_days_back_from_today() {
        let workouts = vec![
            workout("2024-01-10", "Cardio", 30),
            workout("2024-01-09", "Yoga", 20),
            workout("2024-01-08", "Strength", 40),
            // gap on 2024-01-07
            workout("2024-01-06", "Cardio", 30),
        ];
        assert_eq!(streak(&workouts, &[], d("2024-01-10")), 3);
    }

    #[test]
    fn streak_survives_when_today_is_still_pending() {
        let workouts = vec![
            workout("2024-01-09", "Cardio", 30),
            workout("2024-01-08", "Yoga", 20),
        ];
        assert_eq!(streak(&workouts, &[], d("2024-01-10")), 2);
    }

    #[test]
    fn rest_days_keep_the_streak_alive() {
        let workouts = vec![workout("2024-01-08", "Cardio", 30)];
        let rest_days = vec![d("2024-01-09"), d("2024-01-10")];
        assert_eq!(streak(&workouts, &rest_days, d("2024-01-10")), 3);
    }

    #[test]
    fn best_week_picks_the_largest_sum() {
        let workouts = vec![
            workout("2024-06-10", "Cardio", 30),
            workout("2024-06-11", "Cardio", 30),
            workout("2024-06-03", "Strength", 100),
        ];
        assert_eq!(
            best_week(&workouts),
            BestWeek {
                week_start: Some(d("2024-06-03")),
                total_duration: 100,
            }
        );
    }

    #[test]
    fn best_week_tie_goes_to_the_first_seen_week() {
        let workouts = vec![
            workout("2024-06-12", "Cardio", 60),
            workout("2024-06-05", "Strength", 60),
        ];
        // Both weeks total 60; the week of 2024-06-12 appears first in the
        // stored list, so it wins.
        assert_eq!(
            best_week(&workouts),
            BestWeek {
                week_start: Some(d("2024-06-10")),
                total_duration: 60,
            }
        );
    }

    #[test]
    fn best_week_of_nothing_is_empty() {
        assert_eq!(best_week(&[]), BestWeek::default());
    }

    #[test]
    fn breakdown_covers_only_the_current_week() {
        // Monday = 2024-06-10.
        let workouts = vec![
            workout("2024-06-10", "Cardio", 30),
            workout("2024-06-11", "Cardio", 20),
            workout("2024-06-11", "Yoga", 15),
            workout("2024-06-03", "Cardio", 90), // previous week
        ];
        let breakdown = weekly_type_breakdown(&workouts, d("2024-06-12"));
        assert_eq!(breakdown.len(), 2);
        assert_eq!(breakdown[0].workout_type, "Cardio");
        assert_eq!(breakdown[0].duration, 50);
        assert_eq!(breakdown[1].workout_type, "Yoga");
        assert_eq!(breakdown[1].duration, 15);
    }

    #[test]
    fn breakdown_of_an_empty_week_is_empty() {
        let workouts = vec![workout("2024-06-03", "Cardio", 90)];
        assert!(weekly_type_breakdown(&workouts, d("2024-06-12")).is_empty());
    }

    #[test]
    fn week_totals_respect_the_half_open_window() {
        // Monday = 2024-06-10; the following Monday must not count.
        let workouts = vec![
            workout("2024-06-10", "Cardio", 30),
            workout("2024-06-11", "Strength", 20),
            workout("2024-06-16", "Yoga", 10), // Sunday, still this week
            workout("2024-06-17", "Cardio", 99), // next Monday
        ];
        assert_eq!(total_duration_for_week(&workouts, d("2024-06-12"), 0), 60);
        assert_eq!(total_duration_for_week(&workouts, d("2024-06-12"), 1), 0);
    }

    #[test]
    fn last_week_offset_shifts_the_window() {
        let workouts = vec![
            workout("2024-06-05", "Cardio", 40),
            workout("2024-06-12", "Cardio", 25),
        ];
        assert_eq!(total_duration_for_week(&workouts, d("2024-06-12"), 1), 40);
    }

    #[test]
    fn change_handles_zero_baselines() {
        assert_eq!(week_over_week_change(50, 0), 100);
        assert_eq!(week_over_week_change(0, 0), 0);
        assert_eq!(week_over_week_change(30, 60), -50);
        assert_eq!(week_over_week_change(90, 60), 50);
    }

    #[test]
    fn calendar_marks_a_workout_day_completed_even_when_rested() {
        // 2024-01-03 is a Wednesday; today is Friday 2024-01-05.
        let workouts = vec![workout("2024-01-03", "Cardio", 30)];
        let rest_days = vec![d("2024-01-03")];
        let calendar = calendar_week_status(&workouts, &rest_days, d("2024-01-05"));

        assert_eq!(calendar.len(), 7);
        assert_eq!(calendar[2].date, d("2024-01-03"));
        assert_eq!(calendar[2].status, DayStatus::Completed);
    }

    #[test]
    fn calendar_statuses_follow_the_state_machine() {
        // Week of Monday 2024-01-01; today is Friday 2024-01-05.
        let workouts = vec![workout("2024-01-02", "Cardio", 30)];
        let rest_days = vec![d("2024-01-03")];
        let calendar = calendar_week_status(&workouts, &rest_days, d("2024-01-05"));

        let statuses: Vec<DayStatus> = calendar.iter().map(|c| c.status).collect();
        assert_eq!(
            statuses,
            vec![
                DayStatus::None,      // Mon: past, no activity
                DayStatus::Completed, // Tue: workout
                DayStatus::Rest,      // Wed: rest-day mark only
                DayStatus::None,      // Thu
                DayStatus::Today,     // Fri: today, nothing logged
                DayStatus::Future,    // Sat
                DayStatus::Future,    // Sun
            ]
        );
        assert_eq!(calendar[0].day, "M");
        assert_eq!(calendar[6].day, "S");
    }

    #[test]
    fn report_bundles_the_screen_values() {
        let workouts = vec![
            workout("2024-06-10", "Cardio", 30),
            workout("2024-06-11", "Strength", 20),
            workout("2024-06-05", "Cardio", 100),
        ];
        let report = progress_report(&workouts, &[], d("2024-06-12"));

        assert_eq!(report.this_week_duration, 50);
        assert_eq!(report.last_week_duration, 100);
        assert_eq!(report.change_pct, -50);
        assert_eq!(report.best_week.week_start, Some(d("2024-06-03")));
        assert_eq!(report.calendar.len(), 7);
    }
}
