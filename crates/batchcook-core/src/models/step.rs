//! Step model definition and related functionality.

use std::collections::BTreeSet;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::StepStatus;

/// Identifier of an appliance in the registry (e.g. `"oven"`).
pub type ApplianceId = String;

/// One unit of cooking work.
///
/// Records arrive as loosely populated JSON objects: only `duration_minutes`
/// is needed, every flag defaults to `false`, appliance sets to empty and
/// optional values to `None`. The legacy keys `duree_minutes`,
/// `est_supervision` and `robots` are accepted as aliases.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Step {
    /// Brief title of the step
    #[serde(default)]
    pub title: String,

    /// Longer free-text instructions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Wall-clock duration in minutes
    #[serde(alias = "duree_minutes")]
    pub duration_minutes: u32,

    /// Runs unattended and does not take the cook's attention
    #[serde(default)]
    pub is_passive: bool,

    /// Long unattended operation that anchors a parallel group
    #[serde(default, alias = "est_supervision")]
    pub is_supervision: bool,

    /// Appliances occupied for the whole duration of the step
    #[serde(default, alias = "robots")]
    pub requires_appliances: BTreeSet<ApplianceId>,

    /// Too loud to run next to a sleeping child
    #[serde(default)]
    pub is_noisy: bool,

    /// Working temperature, when the step involves heat
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature_celsius: Option<f64>,

    /// Execution status attached by session tracking
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<StepStatus>,

    /// Parallel group assigned by the optimizer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parallel_group: Option<u32>,

    /// Position in the plan assigned by the optimizer (1-based)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence_order: Option<u32>,
}

impl Step {
    /// Creates an unscheduled step with the given title and duration.
    pub fn new(title: impl Into<String>, duration_minutes: u32) -> Self {
        Self {
            title: title.into(),
            duration_minutes,
            ..Default::default()
        }
    }

    /// Marks the step as a supervision step.
    pub fn supervised(mut self) -> Self {
        self.is_supervision = true;
        self.is_passive = true;
        self
    }

    /// Adds an appliance requirement.
    pub fn with_appliance(mut self, appliance: impl Into<ApplianceId>) -> Self {
        self.requires_appliances.insert(appliance.into());
        self
    }

    /// Marks the step as noisy.
    pub fn noisy(mut self) -> Self {
        self.is_noisy = true;
        self
    }

    /// Sets the working temperature.
    pub fn at_temperature(mut self, celsius: f64) -> Self {
        self.temperature_celsius = Some(celsius);
        self
    }

    /// Sets the free-text description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the execution status.
    pub fn with_status(mut self, status: StepStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Places the step in a parallel group at the given sequence position.
    pub fn scheduled(mut self, group: u32, order: u32) -> Self {
        self.parallel_group = Some(group);
        self.sequence_order = Some(order);
        self
    }

    /// Group used for duration accounting; unassigned steps count as group 0.
    pub fn group_or_default(&self) -> u32 {
        self.parallel_group.unwrap_or(0)
    }

    /// Whether the optimizer has placed this step.
    pub fn is_scheduled(&self) -> bool {
        self.parallel_group.is_some() && self.sequence_order.is_some()
    }

    /// Whether the step has been completed.
    pub fn is_done(&self) -> bool {
        self.status == Some(StepStatus::Done)
    }

    /// Returns true when the two steps claim at least one common appliance.
    pub fn shares_appliance_with(&self, other: &Step) -> bool {
        !self
            .requires_appliances
            .is_disjoint(&other.requires_appliances)
    }
}
