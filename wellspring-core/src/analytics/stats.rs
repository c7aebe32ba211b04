//! Per-domain summary statistics
//!
//! Each function is a single pass over one record collection. Empty
//! input degrades to zero-valued output; no function here can divide
//! by zero or produce NaN.

use chrono::NaiveDate;
use serde::Serialize;

use super::round1;
use crate::types::{GoalEntry, GoalStatus, HabitEntry, JournalCategory, JournalEntry, MoodEntry};

/// Trailing window, in calendar days, used for "recent" habit figures.
///
/// The completion rate divides by this constant rather than by the
/// number of days the habit has existed, so rates stay comparable
/// across habits of different ages. A habit created yesterday with
/// one completion rates 3%, not 100%.
pub const RECENT_WINDOW_DAYS: i64 = 30;

/// Whether `date` falls in the trailing window of `RECENT_WINDOW_DAYS`
/// calendar days ending at `today` inclusive.
pub(crate) fn in_recent_window(date: NaiveDate, today: NaiveDate) -> bool {
    let age = (today - date).num_days();
    (0..RECENT_WINDOW_DAYS).contains(&age)
}

/// Summary statistics over a mood collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MoodStats {
    /// Mean ordinal mood (1-5 scale), 1 decimal
    pub average_mood: f64,
    /// Mean intensity (1-10 scale), 1 decimal
    pub average_intensity: f64,
    /// Mean energy (1-10 scale), 1 decimal
    pub average_energy: f64,
    /// Mean stress (1-10 scale), 1 decimal
    pub average_stress: f64,
    /// Number of entries aggregated
    pub total_entries: usize,
}

/// Compute mood summary statistics.
pub fn mood_stats(moods: &[MoodEntry]) -> MoodStats {
    if moods.is_empty() {
        return MoodStats::default();
    }

    let count = moods.len() as f64;
    let total_mood: u32 = moods.iter().map(|m| u32::from(m.kind.ordinal())).sum();
    let total_intensity: u32 = moods.iter().map(|m| u32::from(m.intensity)).sum();
    let total_energy: u32 = moods.iter().map(|m| u32::from(m.energy_or_default())).sum();
    let total_stress: u32 = moods.iter().map(|m| u32::from(m.stress_or_default())).sum();

    MoodStats {
        average_mood: round1(f64::from(total_mood) / count),
        average_intensity: round1(f64::from(total_intensity) / count),
        average_energy: round1(f64::from(total_energy) / count),
        average_stress: round1(f64::from(total_stress) / count),
        total_entries: moods.len(),
    }
}

/// Summary statistics over a journal collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct JournalStats {
    /// Number of entries
    pub total_entries: usize,
    /// Sum of per-entry word counts
    pub total_words: u64,
    /// Rounded mean words per entry, 0 if empty
    pub average_words: u32,
    /// Number of distinct categories used
    pub categories_used: usize,
    /// Distinct categories, in enum order
    pub categories: Vec<JournalCategory>,
}

/// Compute journal summary statistics.
pub fn journal_stats(journals: &[JournalEntry]) -> JournalStats {
    let total_words: u64 = journals.iter().map(|j| u64::from(j.word_count)).sum();
    let average_words = if journals.is_empty() {
        0
    } else {
        (total_words as f64 / journals.len() as f64).round() as u32
    };

    let categories: Vec<JournalCategory> = JournalCategory::ALL
        .into_iter()
        .filter(|c| journals.iter().any(|j| j.category == *c))
        .collect();

    JournalStats {
        total_entries: journals.len(),
        total_words,
        average_words,
        categories_used: categories.len(),
        categories,
    }
}

/// Summary statistics over a goal collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GoalStats {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
    pub not_started: usize,
    pub paused: usize,
    /// Rounded mean progress percentage, 0 if empty
    pub average_progress: u8,
}

/// Compute goal summary statistics.
pub fn goal_stats(goals: &[GoalEntry]) -> GoalStats {
    let count_with = |status: GoalStatus| goals.iter().filter(|g| g.status == status).count();

    let average_progress = if goals.is_empty() {
        0
    } else {
        let total: u32 = goals.iter().map(|g| u32::from(g.progress)).sum();
        (f64::from(total) / goals.len() as f64).round() as u8
    };

    GoalStats {
        total: goals.len(),
        completed: count_with(GoalStatus::Completed),
        in_progress: count_with(GoalStatus::InProgress),
        not_started: count_with(GoalStatus::NotStarted),
        paused: count_with(GoalStatus::Paused),
        average_progress,
    }
}

/// Derived figures for a single habit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HabitStat {
    pub id: String,
    pub name: String,
    pub current_streak: u32,
    pub longest_streak: u32,
    /// Completed days in the recent window divided by a fixed 30,
    /// as an integer percent
    pub recent_completion_rate: u8,
    /// Completed days in the recent window
    pub recent_completions: usize,
}

/// Count a habit's completed days in the recent window ending `today`.
pub(crate) fn recent_completions(habit: &HabitEntry, today: NaiveDate) -> usize {
    habit
        .completions
        .iter()
        .filter(|c| c.completed && in_recent_window(c.date, today))
        .count()
}

/// Compute per-habit recent completion figures.
pub fn habit_stats(habits: &[HabitEntry], today: NaiveDate) -> Vec<HabitStat> {
    habits
        .iter()
        .map(|habit| {
            let recent = recent_completions(habit, today);
            let rate = (recent as f64 / RECENT_WINDOW_DAYS as f64 * 100.0).round() as u8;

            HabitStat {
                id: habit.id.clone(),
                name: habit.name.clone(),
                current_streak: habit.current_streak,
                longest_streak: habit.longest_streak,
                recent_completion_rate: rate,
                recent_completions: recent,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{HabitCompletion, MoodKind};
    use chrono::Duration;

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn mood(date: NaiveDate, kind: MoodKind, intensity: u8) -> MoodEntry {
        MoodEntry {
            date,
            kind,
            intensity,
            energy: None,
            stress: None,
            note: None,
            tags: Vec::new(),
        }
    }

    fn journal(category: JournalCategory, word_count: u32) -> JournalEntry {
        JournalEntry {
            date: day("2026-01-05"),
            title: None,
            category,
            word_count,
        }
    }

    fn habit(id: &str, completions: Vec<HabitCompletion>) -> HabitEntry {
        HabitEntry {
            id: id.to_string(),
            name: format!("habit {}", id),
            is_active: true,
            current_streak: 0,
            longest_streak: 0,
            completions,
        }
    }

    fn completion(date: NaiveDate) -> HabitCompletion {
        HabitCompletion {
            date,
            completed: true,
            note: None,
        }
    }

    #[test]
    fn test_mood_stats_empty_is_all_zero() {
        let stats = mood_stats(&[]);
        assert_eq!(stats, MoodStats::default());
        assert_eq!(stats.average_mood, 0.0);
        assert_eq!(stats.total_entries, 0);
    }

    #[test]
    fn test_mood_stats_uniform_excellent() {
        let today = day("2026-01-05");
        let moods: Vec<MoodEntry> = (0..10)
            .map(|i| mood(today - Duration::days(i), MoodKind::Excellent, 8))
            .collect();

        let stats = mood_stats(&moods);
        assert_eq!(stats.average_mood, 5.0);
        assert_eq!(stats.average_intensity, 8.0);
        assert_eq!(stats.average_energy, 5.0);
        assert_eq!(stats.average_stress, 5.0);
        assert_eq!(stats.total_entries, 10);
    }

    #[test]
    fn test_mood_stats_rounds_to_one_decimal() {
        let today = day("2026-01-05");
        let moods = vec![
            mood(today, MoodKind::Excellent, 7),
            mood(today, MoodKind::Good, 8),
            mood(today, MoodKind::Terrible, 4),
        ];

        let stats = mood_stats(&moods);
        // (5 + 4 + 1) / 3 = 3.333..
        assert_eq!(stats.average_mood, 3.3);
        // (7 + 8 + 4) / 3 = 6.333..
        assert_eq!(stats.average_intensity, 6.3);
    }

    #[test]
    fn test_journal_stats_empty() {
        let stats = journal_stats(&[]);
        assert_eq!(stats.total_entries, 0);
        assert_eq!(stats.total_words, 0);
        assert_eq!(stats.average_words, 0);
        assert!(stats.categories.is_empty());
    }

    #[test]
    fn test_journal_stats_distinct_categories() {
        let journals = vec![
            journal(JournalCategory::Gratitude, 100),
            journal(JournalCategory::Reflection, 250),
            journal(JournalCategory::Gratitude, 151),
        ];

        let stats = journal_stats(&journals);
        assert_eq!(stats.total_entries, 3);
        assert_eq!(stats.total_words, 501);
        assert_eq!(stats.average_words, 167);
        assert_eq!(stats.categories_used, 2);
        assert_eq!(
            stats.categories,
            vec![JournalCategory::Reflection, JournalCategory::Gratitude]
        );
    }

    #[test]
    fn test_goal_stats_partitions_by_status() {
        let goals = vec![
            GoalEntry {
                title: None,
                status: GoalStatus::Completed,
                progress: 100,
            },
            GoalEntry {
                title: None,
                status: GoalStatus::InProgress,
                progress: 40,
            },
            GoalEntry {
                title: None,
                status: GoalStatus::NotStarted,
                progress: 0,
            },
            GoalEntry {
                title: None,
                status: GoalStatus::InProgress,
                progress: 65,
            },
        ];

        let stats = goal_stats(&goals);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.in_progress, 2);
        assert_eq!(stats.not_started, 1);
        assert_eq!(stats.paused, 0);
        // (100 + 40 + 0 + 65) / 4 = 51.25 -> 51
        assert_eq!(stats.average_progress, 51);
    }

    #[test]
    fn test_goal_stats_empty() {
        assert_eq!(goal_stats(&[]), GoalStats::default());
    }

    #[test]
    fn test_habit_rate_uses_fixed_denominator() {
        let today = day("2026-01-30");
        // Habit "created yesterday" with a single completion
        let young = habit("h1", vec![completion(today - Duration::days(1))]);

        let stats = habit_stats(&[young], today);
        assert_eq!(stats[0].recent_completions, 1);
        // round(1/30 * 100) = 3, not 100
        assert_eq!(stats[0].recent_completion_rate, 3);
    }

    #[test]
    fn test_habit_rate_24_of_30() {
        let today = day("2026-03-01");
        let completions: Vec<HabitCompletion> =
            (0..24).map(|i| completion(today - Duration::days(i))).collect();
        let h = habit("h1", completions);

        let stats = habit_stats(&[h], today);
        assert_eq!(stats[0].recent_completions, 24);
        assert_eq!(stats[0].recent_completion_rate, 80);
    }

    #[test]
    fn test_habit_window_excludes_old_and_incomplete() {
        let today = day("2026-03-01");
        let mut completions = vec![
            completion(today),
            completion(today - Duration::days(29)), // last day inside
            completion(today - Duration::days(30)), // first day outside
        ];
        completions.push(HabitCompletion {
            date: today - Duration::days(2),
            completed: false,
            note: None,
        });
        let h = habit("h1", completions);

        let stats = habit_stats(&[h], today);
        assert_eq!(stats[0].recent_completions, 2);
        assert_eq!(stats[0].recent_completion_rate, 7); // round(2/30*100)
    }

    #[test]
    fn test_habit_rate_bounds() {
        let today = day("2026-03-01");
        let completions: Vec<HabitCompletion> =
            (0..30).map(|i| completion(today - Duration::days(i))).collect();
        let h = habit("full", completions);

        let stats = habit_stats(&[h], today);
        assert_eq!(stats[0].recent_completion_rate, 100);

        let empty = habit("empty", Vec::new());
        let stats = habit_stats(&[empty], today);
        assert_eq!(stats[0].recent_completion_rate, 0);
    }
}
