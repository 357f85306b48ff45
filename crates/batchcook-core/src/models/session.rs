//! Session and preparation models.

use std::collections::BTreeSet;

use jiff::civil::Date;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{ApplianceId, Step};

/// A dish produced by a session and put away for later.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Preparation {
    /// Name of the dish
    pub name: String,

    /// Number of portions produced
    pub portions: i64,

    /// Days the dish keeps at its storage location
    #[serde(default)]
    pub conservation_days: i64,

    /// Storage location registry key (`refrigerator`, `freezer`, ...)
    pub storage_location: String,
}

/// A planned batch-cooking event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    /// Day the session takes place
    pub date: Date,

    /// Recipes cooked during the session
    #[serde(default)]
    pub selected_recipe_ids: BTreeSet<u64>,

    /// Appliances the household has available for the session
    #[serde(default)]
    pub available_appliances: BTreeSet<ApplianceId>,

    /// Steps, in the order they were generated or scheduled
    #[serde(default)]
    pub steps: Vec<Step>,

    /// Preparations the session produces
    #[serde(default)]
    pub preparations: Vec<Preparation>,
}

impl Session {
    /// Creates an empty session on the given day.
    pub fn new(date: Date) -> Self {
        Self {
            date,
            selected_recipe_ids: BTreeSet::new(),
            available_appliances: BTreeSet::new(),
            steps: Vec::new(),
            preparations: Vec::new(),
        }
    }

    /// Total portions over all preparations.
    pub fn total_portions(&self) -> i64 {
        self.preparations.iter().map(|p| p.portions).sum()
    }
}
