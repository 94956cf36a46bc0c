//! Weekly training plan tables
//!
//! Static lookup of the per-day training card lists shown on the home
//! screen, plus the calendar strip for the current week. The plan is a
//! fixed table keyed by weekday index, not a computed schedule.

use chrono::{Datelike, Duration, NaiveDate};

/// Number of slots in the calendar strip
pub const DAYS_PER_WEEK: usize = 7;

/// Weekday index mapped to the rest-day notice
pub const REST_DAY_INDEX: usize = 4;

/// Weekday index mapped to the weekend list
pub const WEEKEND_DAY_INDEX: usize = 5;

const DAY_LABELS: [&str; DAYS_PER_WEEK] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// One training card: exercise title, set/rep detail line, icon glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrainingItem {
    pub title: &'static str,
    pub detail: &'static str,
    pub icon: &'static str,
}

/// What the home screen shows for a selected day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayPlan {
    /// Rest day with a notice instead of cards
    Rest {
        message: &'static str,
        hint: &'static str,
    },
    /// Ordered list of training cards
    Scheduled(&'static [TrainingItem]),
}

/// One slot in the calendar strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekSlot {
    pub label: &'static str,
    pub day_of_month: u32,
}

const DEFAULT_PLAN: &[TrainingItem] = &[
    TrainingItem {
        title: "Core Activation",
        detail: "3 sets | 15 reps",
        icon: "🧘",
    },
    TrainingItem {
        title: "Full-Body Power",
        detail: "4 sets | 10 reps",
        icon: "🏋",
    },
    TrainingItem {
        title: "Endurance Run",
        detail: "1 set | 30 min",
        icon: "🏃",
    },
    TrainingItem {
        title: "Upper-Body Strength",
        detail: "3 sets | 12 reps",
        icon: "💪",
    },
    TrainingItem {
        title: "Flexibility Stretch",
        detail: "2 sets | 20 min",
        icon: "🤸",
    },
    TrainingItem {
        title: "Strength Circuit",
        detail: "5 sets | 8 reps",
        icon: "💪",
    },
    TrainingItem {
        title: "Interval Sprints",
        detail: "6 sets | 200 m",
        icon: "⚡",
    },
    TrainingItem {
        title: "Ab Burner",
        detail: "4 sets | 20 reps",
        icon: "🔥",
    },
    TrainingItem {
        title: "Functional Training",
        detail: "3 sets | 15 reps",
        icon: "🎯",
    },
    TrainingItem {
        title: "Recovery Stretch",
        detail: "1 set | 25 min",
        icon: "🧘",
    },
];

const WEEKEND_PLAN: &[TrainingItem] = &[
    TrainingItem {
        title: "Strength Circuit",
        detail: "5 sets | 8 reps",
        icon: "💪",
    },
    TrainingItem {
        title: "Interval Sprints",
        detail: "6 sets | 200 m",
        icon: "⚡",
    },
    TrainingItem {
        title: "Ab Burner",
        detail: "4 sets | 20 reps",
        icon: "🔥",
    },
    TrainingItem {
        title: "Functional Training",
        detail: "3 sets | 15 reps",
        icon: "🎯",
    },
    TrainingItem {
        title: "Recovery Stretch",
        detail: "1 set | 25 min",
        icon: "🧘",
    },
];

/// Look up the plan for a weekday index (0 = Monday)
///
/// Exact-match dispatch: Friday is the rest day, Saturday gets the
/// shorter weekend list, every other day shares the default list.
pub fn plan_for_day(day_index: usize) -> DayPlan {
    match day_index {
        REST_DAY_INDEX => DayPlan::Rest {
            message: "No training scheduled today",
            hint: "Rest up and come back stronger tomorrow!",
        },
        WEEKEND_DAY_INDEX => DayPlan::Scheduled(WEEKEND_PLAN),
        _ => DayPlan::Scheduled(DEFAULT_PLAN),
    }
}

/// Build the calendar strip for the week containing `today`
///
/// The strip always starts on Monday and carries the real day-of-month
/// number for each slot.
pub fn week_strip(today: NaiveDate) -> [WeekSlot; DAYS_PER_WEEK] {
    let offset = today.weekday().num_days_from_monday() as i64;
    let monday = today - Duration::days(offset);

    std::array::from_fn(|i| {
        let date = monday + Duration::days(i as i64);
        WeekSlot {
            label: DAY_LABELS[i],
            day_of_month: date.day(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_dispatch_is_exact_match() {
        for day in 0..DAYS_PER_WEEK {
            match plan_for_day(day) {
                DayPlan::Rest { .. } => assert_eq!(day, REST_DAY_INDEX),
                DayPlan::Scheduled(items) if day == WEEKEND_DAY_INDEX => {
                    assert_eq!(items.len(), 5);
                }
                DayPlan::Scheduled(items) => {
                    assert_eq!(items.len(), 10);
                }
            }
        }
    }

    #[test]
    fn test_default_and_weekend_lists_are_distinct() {
        let monday = plan_for_day(0);
        let saturday = plan_for_day(WEEKEND_DAY_INDEX);
        assert_ne!(monday, saturday);

        // Sunday falls back to the default list
        assert_eq!(plan_for_day(6), plan_for_day(0));
    }

    #[test]
    fn test_week_strip_starts_on_monday() {
        // 2024-06-20 is a Thursday; its week runs June 17-23
        let thursday = NaiveDate::from_ymd_opt(2024, 6, 20).unwrap();
        let strip = week_strip(thursday);

        assert_eq!(strip[0].label, "Mon");
        assert_eq!(strip[0].day_of_month, 17);
        assert_eq!(strip[3].day_of_month, 20);
        assert_eq!(strip[6].label, "Sun");
        assert_eq!(strip[6].day_of_month, 23);
    }

    #[test]
    fn test_week_strip_crosses_month_boundary() {
        // 2024-07-01 is a Monday; the prior Sunday was June 30
        let sunday = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
        let strip = week_strip(sunday);

        assert_eq!(strip[0].day_of_month, 24);
        assert_eq!(strip[6].day_of_month, 30);
    }
}
