//! Rule-based insight generation
//!
//! Insights are short human-readable observations produced by a fixed
//! ordered list of rules. Each rule inspects one domain and appends at
//! most one insight; the final list is truncated to [`MAX_INSIGHTS`].
//! Rules are independent so each can be exercised in isolation.

use chrono::NaiveDate;
use serde::Serialize;

use super::stats::{recent_completions, RECENT_WINDOW_DAYS};
use crate::types::{GoalEntry, GoalStatus, HabitEntry, JournalEntry, MoodEntry};

/// Maximum number of insights returned per call.
pub const MAX_INSIGHTS: usize = 5;

/// Mean ordinal mood at or above which the positive-trend rule fires.
const POSITIVE_MOOD_FLOOR: f64 = 4.0;

/// 30-day completion ratio at or above which a habit counts as
/// high-performing.
const HIGH_PERFORMANCE_RATIO: f64 = 0.8;

/// How prominently an insight should be surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Importance {
    Low,
    Medium,
    High,
}

impl Importance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Importance::Low => "low",
            Importance::Medium => "medium",
            Importance::High => "high",
        }
    }
}

/// Which domain an insight was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum InsightKind {
    MoodPattern,
    JournalTheme,
    GoalProgress,
    HabitStreak,
}

impl InsightKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsightKind::MoodPattern => "mood-pattern",
            InsightKind::JournalTheme => "journal-theme",
            InsightKind::GoalProgress => "goal-progress",
            InsightKind::HabitStreak => "habit-streak",
        }
    }
}

/// A rule-generated observation or recommendation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insight {
    #[serde(rename = "type")]
    pub kind: InsightKind,
    pub title: String,
    pub description: String,
    pub importance: Importance,
}

fn mood_rule(moods: &[MoodEntry]) -> Option<Insight> {
    if moods.is_empty() {
        return Some(Insight {
            kind: InsightKind::MoodPattern,
            title: "Start Your Wellness Journey".to_string(),
            description: "Begin by tracking your mood daily. This simple habit can provide \
                          valuable insights into your emotional patterns."
                .to_string(),
            importance: Importance::High,
        });
    }

    if moods.len() >= 7 {
        let total: u32 = moods.iter().map(|m| u32::from(m.kind.ordinal())).sum();
        let average = f64::from(total) / moods.len() as f64;
        if average >= POSITIVE_MOOD_FLOOR {
            return Some(Insight {
                kind: InsightKind::MoodPattern,
                title: "Positive Mood Trend".to_string(),
                description: "Your mood has been consistently positive! Keep up the great work \
                              with whatever strategies are working for you."
                    .to_string(),
                importance: Importance::Low,
            });
        }
    }

    None
}

fn journal_rule(journals: &[JournalEntry]) -> Option<Insight> {
    if journals.is_empty() {
        return Some(Insight {
            kind: InsightKind::JournalTheme,
            title: "Try Journaling".to_string(),
            description: "Writing down your thoughts can be incredibly therapeutic. Start with \
                          just 5 minutes a day."
                .to_string(),
            importance: Importance::Medium,
        });
    }

    if journals.len() >= 10 {
        return Some(Insight {
            kind: InsightKind::JournalTheme,
            title: "Excellent Journaling Habit".to_string(),
            description: format!(
                "You've written {} thoughtful entries. Your reflection journey is inspiring!",
                journals.len()
            ),
            importance: Importance::Low,
        });
    }

    None
}

fn goal_rule(goals: &[GoalEntry]) -> Option<Insight> {
    if goals.is_empty() || !goals.iter().all(|g| g.status == GoalStatus::Completed) {
        return None;
    }

    Some(Insight {
        kind: InsightKind::GoalProgress,
        title: "Goal Master".to_string(),
        description: "You've completed all your goals! You're truly mastering your life \
                      objectives."
            .to_string(),
        importance: Importance::Low,
    })
}

fn habit_rule(habits: &[HabitEntry], today: NaiveDate) -> Option<Insight> {
    // Unrounded ratio over the fixed 30-day window, same denominator
    // as the per-habit completion rate.
    let high_performing = habits
        .iter()
        .filter(|h| {
            recent_completions(h, today) as f64 / RECENT_WINDOW_DAYS as f64
                >= HIGH_PERFORMANCE_RATIO
        })
        .count();

    if high_performing == 0 {
        return None;
    }

    let noun = if high_performing == 1 { "habit" } else { "habits" };
    Some(Insight {
        kind: InsightKind::HabitStreak,
        title: "Habit Champion".to_string(),
        description: format!(
            "You're maintaining excellent consistency with {} {}!",
            high_performing, noun
        ),
        importance: Importance::Low,
    })
}

/// Evaluate all insight rules in fixed order.
///
/// Rule order: mood, journal, goal, habit. Each rule contributes at
/// most one insight; the result is truncated to [`MAX_INSIGHTS`] in
/// evaluation order, never reordered by importance.
pub fn generate_insights(
    moods: &[MoodEntry],
    journals: &[JournalEntry],
    goals: &[GoalEntry],
    habits: &[HabitEntry],
    today: NaiveDate,
) -> Vec<Insight> {
    let mut insights = Vec::new();

    insights.extend(mood_rule(moods));
    insights.extend(journal_rule(journals));
    insights.extend(goal_rule(goals));
    insights.extend(habit_rule(habits, today));

    insights.truncate(MAX_INSIGHTS);
    insights
}
