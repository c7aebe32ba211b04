//! Dashboard and trend report assembly
//!
//! Composes the individual engine functions into the two report
//! shapes the web tier serves: the full dashboard and the mood-trends
//! view. Reports are plain `Serialize` structs; a thin HTTP handler
//! (or the report CLI) wraps them in the `{status, data}` envelope.

use chrono::NaiveDate;
use serde::Serialize;

use super::insights::{generate_insights, Insight};
use super::series::{
    mood_distribution, mood_trend, weekly_mood_series, MoodBucket, MoodTrend, WeeklyMoodPoint,
};
use super::stats::{
    goal_stats, habit_stats, journal_stats, mood_stats, GoalStats, HabitStat, JournalStats,
    MoodStats,
};
use crate::config::AnalyticsConfig;
use crate::types::{JournalEntry, MoodEntry, RecordSet};

/// Headline figures for the dashboard header.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub total_moods: usize,
    pub total_journals: usize,
    pub total_goals: usize,
    pub total_habits: usize,
    /// Mean ordinal mood over the scoped window, 1 decimal
    pub average_mood: f64,
    pub total_words: u64,
    pub completed_goals: usize,
    pub active_habits: usize,
}

/// The full dashboard payload.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardReport {
    pub summary: DashboardSummary,
    pub mood_stats: MoodStats,
    pub journal_stats: JournalStats,
    pub goal_stats: GoalStats,
    pub habit_stats: Vec<HabitStat>,
    pub insights: Vec<Insight>,
    pub weekly_mood: Vec<WeeklyMoodPoint>,
    pub mood_distribution: Vec<MoodBucket>,
}

/// The mood-trends payload.
#[derive(Debug, Clone, Serialize)]
pub struct MoodTrendsReport {
    pub weekly: Vec<WeeklyMoodPoint>,
    pub distribution: Vec<MoodBucket>,
    pub trend: MoodTrend,
    pub total_entries: usize,
}

/// Response envelope used when serializing a report for the API.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T> {
    pub status: &'static str,
    pub data: T,
}

/// Wrap a report in a success envelope.
pub fn envelope<T: Serialize>(data: T) -> Envelope<T> {
    Envelope {
        status: "success",
        data,
    }
}

fn in_lookback(date: NaiveDate, today: NaiveDate, lookback_days: u32) -> bool {
    let age = (today - date).num_days();
    age >= 0 && age < i64::from(lookback_days)
}

/// Assemble the dashboard report with the default lookback window.
pub fn dashboard_report(records: &RecordSet, today: NaiveDate) -> DashboardReport {
    dashboard_report_scoped(records, today, AnalyticsConfig::default().lookback_days)
}

/// Assemble the dashboard report.
///
/// Moods and journals are scoped to the trailing `lookback_days`
/// window ending at `today`; goals and habits are aggregated over
/// their full collections. Mirrors how the dashboard queries scope
/// each domain.
pub fn dashboard_report_scoped(
    records: &RecordSet,
    today: NaiveDate,
    lookback_days: u32,
) -> DashboardReport {
    let moods: Vec<MoodEntry> = records
        .moods
        .iter()
        .filter(|m| in_lookback(m.date, today, lookback_days))
        .cloned()
        .collect();
    let journals: Vec<JournalEntry> = records
        .journals
        .iter()
        .filter(|j| in_lookback(j.date, today, lookback_days))
        .cloned()
        .collect();

    let mood_stats = mood_stats(&moods);
    let journal_stats = journal_stats(&journals);
    let goal_stats = goal_stats(&records.goals);
    let habit_stats = habit_stats(&records.habits, today);

    let summary = DashboardSummary {
        total_moods: moods.len(),
        total_journals: journals.len(),
        total_goals: records.goals.len(),
        total_habits: records.habits.len(),
        average_mood: mood_stats.average_mood,
        total_words: journal_stats.total_words,
        completed_goals: goal_stats.completed,
        active_habits: records.habits.iter().filter(|h| h.is_active).count(),
    };

    tracing::debug!(
        moods = summary.total_moods,
        journals = summary.total_journals,
        goals = summary.total_goals,
        habits = summary.total_habits,
        lookback_days,
        "Assembled dashboard report"
    );

    DashboardReport {
        summary,
        mood_stats,
        journal_stats,
        goal_stats,
        habit_stats,
        insights: generate_insights(&moods, &journals, &records.goals, &records.habits, today),
        weekly_mood: weekly_mood_series(&moods, today),
        mood_distribution: mood_distribution(&moods),
    }
}

/// Assemble the mood-trends report.
///
/// `moods` must be ordered oldest-first for the trend classification.
pub fn mood_trends_report(moods: &[MoodEntry], today: NaiveDate) -> MoodTrendsReport {
    MoodTrendsReport {
        weekly: weekly_mood_series(moods, today),
        distribution: mood_distribution(moods),
        trend: mood_trend(moods),
        total_entries: moods.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{HabitCompletion, HabitEntry, MoodKind};
    use chrono::Duration;

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn mood(date: NaiveDate, kind: MoodKind) -> MoodEntry {
        MoodEntry {
            date,
            kind,
            intensity: 6,
            energy: None,
            stress: None,
            note: None,
            tags: Vec::new(),
        }
    }

    #[test]
    fn test_lookback_scopes_moods_but_not_goals() {
        let today = day("2026-06-30");
        let records = RecordSet {
            moods: vec![
                mood(today, MoodKind::Good),
                mood(today - Duration::days(45), MoodKind::Terrible),
            ],
            goals: vec![crate::types::GoalEntry {
                title: None,
                status: crate::types::GoalStatus::Completed,
                progress: 100,
            }],
            ..Default::default()
        };

        let report = dashboard_report_scoped(&records, today, 30);
        // The 45-day-old terrible mood is out of scope
        assert_eq!(report.summary.total_moods, 1);
        assert_eq!(report.mood_stats.average_mood, 4.0);
        // Goals are never date-scoped
        assert_eq!(report.summary.total_goals, 1);
        assert_eq!(report.summary.completed_goals, 1);
    }

    #[test]
    fn test_wider_lookback_admits_older_entries() {
        let today = day("2026-06-30");
        let records = RecordSet {
            moods: vec![
                mood(today, MoodKind::Good),
                mood(today - Duration::days(45), MoodKind::Terrible),
            ],
            ..Default::default()
        };

        let report = dashboard_report_scoped(&records, today, 90);
        assert_eq!(report.summary.total_moods, 2);
        // (4 + 1) / 2 = 2.5
        assert_eq!(report.summary.average_mood, 2.5);
    }

    #[test]
    fn test_empty_records_report() {
        let today = day("2026-06-30");
        let report = dashboard_report(&RecordSet::default(), today);

        assert_eq!(report.summary, DashboardSummary::default());
        assert_eq!(report.weekly_mood.len(), 7);
        assert_eq!(report.mood_distribution.len(), 5);
        assert_eq!(report.insights.len(), 2);
        assert!(report.habit_stats.is_empty());
    }

    #[test]
    fn test_active_habit_count() {
        let today = day("2026-06-30");
        let make = |id: &str, active: bool| HabitEntry {
            id: id.to_string(),
            name: id.to_string(),
            is_active: active,
            current_streak: 0,
            longest_streak: 0,
            completions: vec![HabitCompletion {
                date: today,
                completed: true,
                note: None,
            }],
        };
        let records = RecordSet {
            habits: vec![make("a", true), make("b", false), make("c", true)],
            ..Default::default()
        };

        let report = dashboard_report(&records, today);
        assert_eq!(report.summary.total_habits, 3);
        assert_eq!(report.summary.active_habits, 2);
        assert_eq!(report.habit_stats.len(), 3);
    }

    #[test]
    fn test_envelope_serialization() {
        let today = day("2026-06-30");
        let report = mood_trends_report(&[], today);
        let json = serde_json::to_value(envelope(&report)).unwrap();

        assert_eq!(json["status"], "success");
        assert_eq!(json["data"]["trend"]["trend"], "insufficient_data");
        assert_eq!(json["data"]["total_entries"], 0);
    }
}
