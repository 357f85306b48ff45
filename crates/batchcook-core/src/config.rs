//! Kitchen configuration: appliance and storage registries, child-safety
//! keywords and session limits.
//!
//! The configuration is a small JSON document. Every field is optional and
//! falls back to the built-in tables, so an empty object `{}` is a valid
//! configuration:
//!
//! ```json
//! {
//!   "child_name": "Jules",
//!   "max_recipes_per_session": 10,
//!   "safe_keywords": ["mix", "pour"],
//!   "appliances": [
//!     { "id": "oven", "display_name": "Oven", "icon": "🔥", "allows_parallel_use": true }
//!   ],
//!   "storage_locations": [
//!     { "id": "freezer", "display_name": "Freezer", "max_conservation_days": 90 }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::models::{Appliance, StorageLocation};

/// Default limit on recipes cooked in one session.
pub const DEFAULT_MAX_RECIPES: usize = 10;

/// Default display name of the child in advice strings.
pub const DEFAULT_CHILD_NAME: &str = "Jules";

/// Verbs marking a step a toddler can help with. Matching is a
/// case-insensitive substring search; synonyms not listed here do not match.
pub const DEFAULT_SAFE_KEYWORDS: &[&str] = &[
    "mélanger",
    "verser",
    "décorer",
    "observer",
    "toucher",
    "sentir",
    "goûter",
    "ranger",
    "nettoyer",
    "mix",
    "pour",
    "decorate",
    "observe",
    "touch",
    "smell",
    "taste",
    "tidy",
    "clean",
];

/// Static reference data consumed by the scheduler passes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct KitchenConfig {
    /// Known appliances; `allows_parallel_use` is authoritative for the
    /// conflict audit
    pub appliances: Vec<Appliance>,

    /// Known storage locations with their shelf-life limits
    pub storage_locations: Vec<StorageLocation>,

    /// Safe verbs for the child-participation classifier
    pub safe_keywords: Vec<String>,

    /// Name used in child-participation advice
    pub child_name: String,

    /// Upper bound on `selected_recipe_ids` per session
    pub max_recipes_per_session: usize,
}

impl Default for KitchenConfig {
    fn default() -> Self {
        Self {
            appliances: default_appliances(),
            storage_locations: default_storage_locations(),
            safe_keywords: DEFAULT_SAFE_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            child_name: DEFAULT_CHILD_NAME.to_string(),
            max_recipes_per_session: DEFAULT_MAX_RECIPES,
        }
    }
}

impl KitchenConfig {
    /// Looks up an appliance by id.
    pub fn appliance(&self, id: &str) -> Option<&Appliance> {
        self.appliances.iter().find(|a| a.id == id)
    }

    /// Looks up a storage location by id.
    pub fn storage_location(&self, id: &str) -> Option<&StorageLocation> {
        self.storage_locations.iter().find(|l| l.id == id)
    }

    /// Whether several steps may share the appliance at once.
    ///
    /// Appliances missing from the registry are treated as single-use.
    pub fn allows_parallel_use(&self, id: &str) -> bool {
        self.appliance(id).is_some_and(|a| a.allows_parallel_use)
    }

    /// Display name of an appliance, falling back to its id.
    pub fn appliance_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.appliance(id).map_or(id, |a| a.display_name.as_str())
    }
}

fn default_appliances() -> Vec<Appliance> {
    vec![
        Appliance::builtin(
            "oven",
            "Oven",
            "🔥",
            true,
            "Several dishes can bake at once on different racks",
        ),
        Appliance::builtin("stovetop", "Stovetop", "🍳", true, "Four burners"),
        Appliance::builtin("steamer", "Steamer", "♨️", true, "Stackable baskets"),
        Appliance::builtin(
            "pressure_cooker",
            "Pressure cooker",
            "⏲️",
            false,
            "One sealed batch at a time",
        ),
        Appliance::builtin("slow_cooker", "Slow cooker", "🍲", false, "Single pot"),
        Appliance::builtin("stand_mixer", "Stand mixer", "🥣", false, "Single bowl"),
        Appliance::builtin("blender", "Blender", "🌀", false, "Single jar"),
        Appliance::builtin(
            "food_processor",
            "Food processor",
            "🔪",
            false,
            "Single bowl",
        ),
        Appliance::builtin("air_fryer", "Air fryer", "💨", false, "Single basket"),
    ]
}

fn default_storage_locations() -> Vec<StorageLocation> {
    vec![
        StorageLocation::builtin("refrigerator", "Refrigerator", "🧊", 5),
        StorageLocation::builtin("freezer", "Freezer", "❄️", 90),
        StorageLocation::builtin("pantry", "Pantry", "🥫", 30),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_parallel_flags() {
        let config = KitchenConfig::default();
        assert!(config.allows_parallel_use("oven"));
        assert!(!config.allows_parallel_use("blender"));
        assert!(!config.allows_parallel_use("stand_mixer"));
    }

    #[test]
    fn test_unknown_appliance_is_single_use() {
        let config = KitchenConfig::default();
        assert!(config.appliance("mixeur").is_none());
        assert!(!config.allows_parallel_use("mixeur"));
        assert_eq!(config.appliance_name("mixeur"), "mixeur");
    }

    #[test]
    fn test_storage_limits() {
        let config = KitchenConfig::default();
        assert_eq!(
            config
                .storage_location("refrigerator")
                .map(|l| l.max_conservation_days),
            Some(5)
        );
        assert_eq!(
            config
                .storage_location("freezer")
                .map(|l| l.max_conservation_days),
            Some(90)
        );
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: KitchenConfig =
            serde_json::from_str(r#"{"child_name": "Rose"}"#).expect("valid config");
        assert_eq!(config.child_name, "Rose");
        assert_eq!(config.max_recipes_per_session, DEFAULT_MAX_RECIPES);
        assert_eq!(config.appliances.len(), 9);
    }
}
