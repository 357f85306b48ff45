//! Session and history statistics.

use serde::{Deserialize, Serialize};

use super::ApplianceId;

/// Number of steps using one appliance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApplianceUsage {
    pub appliance: ApplianceId,
    pub count: u32,
}

/// Summary figures for one session.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SessionStats {
    /// Total number of steps
    pub step_count: u32,
    /// Number of steps marked done
    pub completed_count: u32,
    /// `completed / total * 100`, 0 for an empty session
    pub progress_pct: f64,
    /// Minutes with every step run sequentially
    pub raw_duration: u32,
    /// Minutes with parallel groups overlapping
    pub optimized_duration: u32,
    /// `(raw - optimized) / raw * 100`, 0 when raw is 0
    pub time_saved_pct: f64,
    /// Number of preparations produced
    pub preparation_count: u32,
    /// Sum of portions over all preparations
    pub total_portions: i64,
    /// Steps per appliance, in order of first use
    pub appliances_used: Vec<ApplianceUsage>,
}

/// Figures aggregated across past sessions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct HistoryStats {
    /// Number of sessions aggregated
    pub session_count: u32,
    /// Mean optimized duration in minutes
    pub average_duration: f64,
    /// Mean portions produced per session
    pub average_portions: f64,
    /// Appliance used by the most steps; ties go to the first encountered
    pub most_used_appliance: Option<ApplianceId>,
    /// Longest run of consecutive calendar weeks with at least one session
    pub longest_streak_weeks: u32,
}
