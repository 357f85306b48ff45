//! Reference data: appliances and storage locations.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::ApplianceId;

/// A physical kitchen tool that steps may occupy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Appliance {
    /// Registry key referenced by `Step::requires_appliances`
    pub id: ApplianceId,

    /// Human-readable name
    pub display_name: String,

    /// Short glyph shown next to the name
    #[serde(default)]
    pub icon: String,

    /// Several steps may use the appliance at the same time (oven racks,
    /// stovetop burners)
    pub allows_parallel_use: bool,

    /// Free-text description
    #[serde(default)]
    pub description: String,
}

impl Appliance {
    pub(crate) fn builtin(
        id: &str,
        display_name: &str,
        icon: &str,
        allows_parallel_use: bool,
        description: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            display_name: display_name.to_string(),
            icon: icon.to_string(),
            allows_parallel_use,
            description: description.to_string(),
        }
    }
}

/// Where a finished preparation is kept, and for how long.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct StorageLocation {
    /// Registry key referenced by `Preparation::storage_location`
    pub id: String,

    /// Human-readable name
    pub display_name: String,

    /// Short glyph shown next to the name
    #[serde(default)]
    pub icon: String,

    /// Longest shelf life accepted for this location
    pub max_conservation_days: u32,
}

impl StorageLocation {
    pub(crate) fn builtin(id: &str, display_name: &str, icon: &str, max_days: u32) -> Self {
        Self {
            id: id.to_string(),
            display_name: display_name.to_string(),
            icon: icon.to_string(),
            max_conservation_days: max_days,
        }
    }
}
