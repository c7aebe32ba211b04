//! Analytics engine for wellspring
//!
//! Pure transformations from record collections to derived aggregates:
//! - Per-domain summary statistics ([`stats`])
//! - 7-day mood series, category distribution, 14-entry trend ([`series`])
//! - Rule-based textual insights ([`insights`])
//! - Assembled dashboard and trend reports ([`dashboard`])
//!
//! Every entry point is a pure function of its arguments plus an
//! explicit reference day. The engine performs no I/O and holds no
//! state; calling the same function twice with the same inputs and
//! the same `today` yields identical output.

pub mod dashboard;
pub mod insights;
pub mod series;
pub mod stats;

pub use dashboard::{
    dashboard_report, dashboard_report_scoped, envelope, mood_trends_report, DashboardReport,
    DashboardSummary, Envelope, MoodTrendsReport,
};
pub use insights::{generate_insights, Importance, Insight, InsightKind, MAX_INSIGHTS};
pub use series::{
    mood_distribution, mood_trend, weekly_mood_series, MoodBucket, MoodTrend, Trend,
    TREND_THRESHOLD, WEEKLY_SERIES_DAYS,
};
pub use stats::{
    goal_stats, habit_stats, journal_stats, mood_stats, GoalStats, HabitStat, JournalStats,
    MoodStats, RECENT_WINDOW_DAYS,
};

/// Round to one decimal place, half away from zero.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Round to two decimal places, half away from zero.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
