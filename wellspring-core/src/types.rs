//! Core domain records for wellspring
//!
//! These types are the validated form of the documents the storage
//! layer hands to the analytics engine. Validation happens here, at
//! the deserialization boundary: every enum is closed, so a record
//! with an unknown mood category or goal status fails to deserialize
//! instead of producing wrong numbers downstream.
//!
//! All dates are UTC calendar days (`NaiveDate`). Callers derive the
//! reference day once (e.g. `Utc::now().date_naive()`) and thread it
//! through the engine, which never reads the clock itself.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================
// Moods
// ============================================

/// The five mood categories, ordered best to worst for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodKind {
    Excellent,
    Good,
    Neutral,
    Poor,
    Terrible,
}

impl MoodKind {
    /// All categories in fixed display order (Excellent first).
    pub const ALL: [MoodKind; 5] = [
        MoodKind::Excellent,
        MoodKind::Good,
        MoodKind::Neutral,
        MoodKind::Poor,
        MoodKind::Terrible,
    ];

    /// Ordinal value for arithmetic averaging (excellent=5 .. terrible=1).
    pub fn ordinal(&self) -> u8 {
        match self {
            MoodKind::Excellent => 5,
            MoodKind::Good => 4,
            MoodKind::Neutral => 3,
            MoodKind::Poor => 2,
            MoodKind::Terrible => 1,
        }
    }

    /// Lowercase storage key.
    pub fn as_str(&self) -> &'static str {
        match self {
            MoodKind::Excellent => "excellent",
            MoodKind::Good => "good",
            MoodKind::Neutral => "neutral",
            MoodKind::Poor => "poor",
            MoodKind::Terrible => "terrible",
        }
    }

    /// Capitalized label for distribution buckets and UI display.
    pub fn display_label(&self) -> &'static str {
        match self {
            MoodKind::Excellent => "Excellent",
            MoodKind::Good => "Good",
            MoodKind::Neutral => "Neutral",
            MoodKind::Poor => "Poor",
            MoodKind::Terrible => "Terrible",
        }
    }
}

impl std::fmt::Display for MoodKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for MoodKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "excellent" => Ok(MoodKind::Excellent),
            "good" => Ok(MoodKind::Good),
            "neutral" => Ok(MoodKind::Neutral),
            "poor" => Ok(MoodKind::Poor),
            "terrible" => Ok(MoodKind::Terrible),
            _ => Err(format!("unknown mood kind: {}", s)),
        }
    }
}

/// A single logged mood.
///
/// `energy` and `stress` were added to the record shape after launch,
/// so older entries may lack them; the engine substitutes a midpoint
/// of 5 when averaging.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodEntry {
    /// Calendar day this mood was logged for
    pub date: NaiveDate,
    /// Mood category
    pub kind: MoodKind,
    /// Intensity on a 1-10 scale
    pub intensity: u8,
    /// Energy on a 1-10 scale (absent on older entries)
    #[serde(default)]
    pub energy: Option<u8>,
    /// Stress on a 1-10 scale (absent on older entries)
    #[serde(default)]
    pub stress: Option<u8>,
    /// Free-form note
    #[serde(default)]
    pub note: Option<String>,
    /// User-supplied tags
    #[serde(default)]
    pub tags: Vec<String>,
}

impl MoodEntry {
    /// Midpoint substituted for entries recorded before the
    /// energy/stress fields existed.
    pub const SCALE_MIDPOINT: u8 = 5;

    pub fn energy_or_default(&self) -> u8 {
        self.energy.unwrap_or(Self::SCALE_MIDPOINT)
    }

    pub fn stress_or_default(&self) -> u8 {
        self.stress.unwrap_or(Self::SCALE_MIDPOINT)
    }
}

// ============================================
// Journals
// ============================================

/// Journal entry categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JournalCategory {
    Reflection,
    Gratitude,
    Goals,
    Challenges,
    Memories,
    Dreams,
}

impl JournalCategory {
    /// All categories in fixed enum order.
    pub const ALL: [JournalCategory; 6] = [
        JournalCategory::Reflection,
        JournalCategory::Gratitude,
        JournalCategory::Goals,
        JournalCategory::Challenges,
        JournalCategory::Memories,
        JournalCategory::Dreams,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            JournalCategory::Reflection => "reflection",
            JournalCategory::Gratitude => "gratitude",
            JournalCategory::Goals => "goals",
            JournalCategory::Challenges => "challenges",
            JournalCategory::Memories => "memories",
            JournalCategory::Dreams => "dreams",
        }
    }
}

impl std::str::FromStr for JournalCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reflection" => Ok(JournalCategory::Reflection),
            "gratitude" => Ok(JournalCategory::Gratitude),
            "goals" => Ok(JournalCategory::Goals),
            "challenges" => Ok(JournalCategory::Challenges),
            "memories" => Ok(JournalCategory::Memories),
            "dreams" => Ok(JournalCategory::Dreams),
            _ => Err(format!("unknown journal category: {}", s)),
        }
    }
}

/// A journal entry.
///
/// `word_count` is computed by the writer when the entry is saved;
/// the engine only sums it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Calendar day the entry was written for
    pub date: NaiveDate,
    /// Entry title
    #[serde(default)]
    pub title: Option<String>,
    /// Entry category
    pub category: JournalCategory,
    /// Precomputed word count
    pub word_count: u32,
}

// ============================================
// Goals
// ============================================

/// Lifecycle status of a goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GoalStatus {
    NotStarted,
    InProgress,
    Completed,
    Paused,
}

impl GoalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalStatus::NotStarted => "not-started",
            GoalStatus::InProgress => "in-progress",
            GoalStatus::Completed => "completed",
            GoalStatus::Paused => "paused",
        }
    }
}

impl std::str::FromStr for GoalStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "not-started" => Ok(GoalStatus::NotStarted),
            "in-progress" => Ok(GoalStatus::InProgress),
            "completed" => Ok(GoalStatus::Completed),
            "paused" => Ok(GoalStatus::Paused),
            _ => Err(format!("unknown goal status: {}", s)),
        }
    }
}

/// A wellness goal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalEntry {
    /// Goal title
    #[serde(default)]
    pub title: Option<String>,
    /// Lifecycle status
    pub status: GoalStatus,
    /// Progress percentage, 0-100
    pub progress: u8,
}

// ============================================
// Habits
// ============================================

/// One day's completion record for a habit.
///
/// The storage layer keeps at most one record per date; the engine
/// tolerates duplicates by treating each record independently.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HabitCompletion {
    /// Calendar day this record is for
    pub date: NaiveDate,
    /// Whether the habit was completed that day
    pub completed: bool,
    /// Optional note attached when toggling
    #[serde(default)]
    pub note: Option<String>,
}

/// A tracked habit with its completion history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HabitEntry {
    /// Storage identifier
    pub id: String,
    /// Habit name
    pub name: String,
    /// Whether the habit is currently being tracked
    pub is_active: bool,
    /// Consecutive completed days ending today (maintained by
    /// [`crate::habits::recalculate_streak`])
    pub current_streak: u32,
    /// Longest streak ever recorded; monotonically non-decreasing
    pub longest_streak: u32,
    /// Completion history, possibly unsorted
    pub completions: Vec<HabitCompletion>,
}

// ============================================
// Snapshot
// ============================================

/// One user's record collections, as loaded by the data-access layer.
///
/// This is the deserialized form of a records snapshot: the four
/// collections the dashboard aggregates over, already scoped to one
/// user by the caller.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordSet {
    #[serde(default)]
    pub moods: Vec<MoodEntry>,
    #[serde(default)]
    pub journals: Vec<JournalEntry>,
    #[serde(default)]
    pub goals: Vec<GoalEntry>,
    #[serde(default)]
    pub habits: Vec<HabitEntry>,
}
