//! Habit completion lifecycle
//!
//! Toggling a day's completion and recalculating streaks. A streak is
//! a run of consecutive completed calendar days ending today: the
//! i-th most recent completed date must be exactly `i` days before
//! today, and the count stops at the first gap.
//!
//! `longest_streak` only ever ratchets upward. It is never recomputed
//! from full history, so un-toggling a day that shortens the current
//! streak leaves a previously recorded longest streak in place. This
//! asymmetry is intentional and relied on by the UI.

use chrono::NaiveDate;

use crate::types::{HabitCompletion, HabitEntry};

/// Recalculate `current_streak` from the completion history and
/// ratchet `longest_streak`. Returns the new current streak.
pub fn recalculate_streak(habit: &mut HabitEntry, today: NaiveDate) -> u32 {
    let mut completed_dates: Vec<NaiveDate> = habit
        .completions
        .iter()
        .filter(|c| c.completed)
        .map(|c| c.date)
        .collect();
    completed_dates.sort_unstable_by(|a, b| b.cmp(a));

    let mut streak: u32 = 0;
    for (i, date) in completed_dates.iter().enumerate() {
        let days_back = (today - *date).num_days();
        if days_back == i as i64 {
            streak += 1;
        } else {
            break;
        }
    }

    habit.current_streak = streak;
    habit.longest_streak = habit.longest_streak.max(streak);
    streak
}

/// Toggle a habit's completion for `date` and recalculate streaks.
///
/// If a completion record exists for `date`, its `completed` flag is
/// flipped and the note replaced; otherwise a new completed record is
/// appended.
pub fn toggle_completion(
    habit: &mut HabitEntry,
    date: NaiveDate,
    note: Option<String>,
    today: NaiveDate,
) {
    match habit.completions.iter_mut().find(|c| c.date == date) {
        Some(existing) => {
            existing.completed = !existing.completed;
            existing.note = note;
        }
        None => habit.completions.push(HabitCompletion {
            date,
            completed: true,
            note,
        }),
    }

    let streak = recalculate_streak(habit, today);
    tracing::debug!(
        habit = %habit.id,
        %date,
        current_streak = streak,
        longest_streak = habit.longest_streak,
        "Toggled habit completion"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn habit(completions: Vec<HabitCompletion>) -> HabitEntry {
        HabitEntry {
            id: "h1".to_string(),
            name: "Stretching".to_string(),
            is_active: true,
            current_streak: 0,
            longest_streak: 0,
            completions,
        }
    }

    fn completed(date: NaiveDate) -> HabitCompletion {
        HabitCompletion {
            date,
            completed: true,
            note: None,
        }
    }

    #[test]
    fn test_three_consecutive_days_ending_today() {
        let today = day("2026-02-10");
        let mut h = habit(vec![
            completed(today),
            completed(today - Duration::days(1)),
            completed(today - Duration::days(2)),
        ]);

        assert_eq!(recalculate_streak(&mut h, today), 3);
        assert_eq!(h.current_streak, 3);
        assert_eq!(h.longest_streak, 3);
    }

    #[test]
    fn test_gap_breaks_the_count() {
        let today = day("2026-02-10");
        let mut h = habit(vec![
            completed(today),
            completed(today - Duration::days(1)),
            // Gap at today - 2
            completed(today - Duration::days(3)),
            completed(today - Duration::days(4)),
        ]);

        assert_eq!(recalculate_streak(&mut h, today), 2);
    }

    #[test]
    fn test_streak_requires_completion_today() {
        let today = day("2026-02-10");
        let mut h = habit(vec![
            completed(today - Duration::days(1)),
            completed(today - Duration::days(2)),
        ]);

        assert_eq!(recalculate_streak(&mut h, today), 0);
    }

    #[test]
    fn test_unsorted_history_is_sorted_before_walking() {
        let today = day("2026-02-10");
        let mut h = habit(vec![
            completed(today - Duration::days(2)),
            completed(today),
            completed(today - Duration::days(1)),
        ]);

        assert_eq!(recalculate_streak(&mut h, today), 3);
    }

    #[test]
    fn test_incomplete_records_ignored() {
        let today = day("2026-02-10");
        let mut h = habit(vec![
            completed(today),
            HabitCompletion {
                date: today - Duration::days(1),
                completed: false,
                note: None,
            },
            completed(today - Duration::days(2)),
        ]);

        // The un-completed yesterday is a gap
        assert_eq!(recalculate_streak(&mut h, today), 1);
    }

    #[test]
    fn test_longest_streak_never_decreases() {
        let today = day("2026-02-10");
        let mut h = habit(vec![
            completed(today),
            completed(today - Duration::days(1)),
            completed(today - Duration::days(2)),
        ]);
        recalculate_streak(&mut h, today);
        assert_eq!(h.longest_streak, 3);

        // Toggle yesterday off: current streak shrinks to 1, longest
        // stays at 3.
        toggle_completion(&mut h, today - Duration::days(1), None, today);
        assert_eq!(h.current_streak, 1);
        assert_eq!(h.longest_streak, 3);
    }

    #[test]
    fn test_toggle_creates_completed_record() {
        let today = day("2026-02-10");
        let mut h = habit(Vec::new());

        toggle_completion(&mut h, today, Some("evening".to_string()), today);
        assert_eq!(h.completions.len(), 1);
        assert!(h.completions[0].completed);
        assert_eq!(h.completions[0].note.as_deref(), Some("evening"));
        assert_eq!(h.current_streak, 1);
    }

    #[test]
    fn test_toggle_flips_existing_record() {
        let today = day("2026-02-10");
        let mut h = habit(vec![completed(today)]);
        recalculate_streak(&mut h, today);
        assert_eq!(h.current_streak, 1);

        toggle_completion(&mut h, today, None, today);
        assert_eq!(h.completions.len(), 1);
        assert!(!h.completions[0].completed);
        assert_eq!(h.current_streak, 0);
        assert_eq!(h.longest_streak, 1);
    }

    #[test]
    fn test_duplicate_dates_treated_independently() {
        let today = day("2026-02-10");
        // Two completed records for today: the second occupies slot
        // i=1, which expects yesterday, so the walk stops there.
        let mut h = habit(vec![completed(today), completed(today)]);
        assert_eq!(recalculate_streak(&mut h, today), 1);
    }
}
