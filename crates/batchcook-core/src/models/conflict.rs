//! Appliance conflicts found in a schedule.

use serde::{Deserialize, Serialize};

use super::ApplianceId;

/// A single-use appliance claimed by several steps of one parallel group.
///
/// Conflicts are diagnostic only: they are reported to the cook and never
/// stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Conflict {
    /// Parallel group the colliding steps belong to
    pub group: u32,

    /// Appliance claimed more than once
    pub appliance: ApplianceId,

    /// Titles of the steps claiming it, in plan order
    pub conflicting_step_titles: Vec<String>,

    /// Human-readable explanation
    pub message: String,
}
