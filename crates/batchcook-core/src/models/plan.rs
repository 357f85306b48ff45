//! Result of running the full scheduling pipeline on a session.

use serde::{Deserialize, Serialize};

use super::{Conflict, Step};

/// Scheduled steps together with their audit and timing figures.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionPlan {
    /// Steps carrying `parallel_group` and `sequence_order`, in sequence order
    pub steps: Vec<Step>,

    /// Single-use appliances claimed twice within a group
    pub conflicts: Vec<Conflict>,

    /// Minutes needed when every step runs one after another
    pub raw_duration: u32,

    /// Minutes needed when parallel groups overlap
    pub optimized_duration: u32,

    /// Share of the raw duration saved by overlapping, in percent
    pub time_saved_pct: f64,
}

impl SessionPlan {
    /// Number of distinct parallel groups in the plan.
    pub fn group_count(&self) -> usize {
        let mut groups: Vec<u32> = self.steps.iter().filter_map(|s| s.parallel_group).collect();
        groups.sort_unstable();
        groups.dedup();
        groups.len()
    }
}
