//! Audit of single-use appliances within parallel groups.

use std::collections::BTreeMap;

use log::warn;

use crate::{
    config::KitchenConfig,
    models::{Conflict, Step},
};

/// Reports every single-use appliance claimed by two or more steps of the
/// same parallel group.
///
/// This is a read-only audit: the plan is never modified. Groups are visited
/// in ascending id order and appliances alphabetically within a group; step
/// titles keep plan order. Appliances missing from the registry are treated
/// as single-use.
pub fn detect_conflicts(steps: &[Step], config: &KitchenConfig) -> Vec<Conflict> {
    let mut groups: BTreeMap<u32, Vec<&Step>> = BTreeMap::new();
    for step in steps {
        groups.entry(step.group_or_default()).or_default().push(step);
    }

    let mut conflicts = Vec::new();
    for (group, members) in groups.into_iter().filter(|(_, m)| m.len() >= 2) {
        let mut claims: BTreeMap<&str, Vec<String>> = BTreeMap::new();
        for step in members {
            for appliance in &step.requires_appliances {
                claims
                    .entry(appliance.as_str())
                    .or_default()
                    .push(step.title.clone());
            }
        }

        for (appliance, titles) in claims {
            if titles.len() < 2 || config.allows_parallel_use(appliance) {
                continue;
            }
            let message = format!(
                "{} can only serve one step at a time, but group {} needs it for {} steps: {}",
                config.appliance_name(appliance),
                group,
                titles.len(),
                titles.join(", ")
            );
            warn!("conflict: {message}");
            conflicts.push(Conflict {
                group,
                appliance: appliance.to_string(),
                conflicting_step_titles: titles,
                message,
            });
        }
    }
    conflicts
}
