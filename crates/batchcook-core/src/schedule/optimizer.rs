//! Greedy step packing.
//!
//! [`optimize`] is a first-fit heuristic over a fixed ordering, not an exact
//! bin-packing solver. Displays rely on the exact ordering it produces, so
//! changes here change what the cook sees.
//!
//! # Algorithm
//!
//! 1. Split steps into supervision anchors and active steps.
//! 2. Anchors are visited longest first (stable: ties keep input order).
//! 3. Active steps are ordered by `(sorted appliances, duration)`, so steps
//!    needing the same appliances sit next to each other and shorter ones
//!    come first.
//! 4. Each anchor opens a new parallel group whose budget is its duration.
//!    The remaining active steps are scanned in order; a step joins the
//!    group when it shares no appliance with the anchor and fits in what is
//!    left of the budget. Steps that do not fit are skipped, not a reason to
//!    stop scanning.
//! 5. Active steps left over run one per group, in their sorted order.
//!
//! Packed active steps are only checked against the anchor, not against
//! each other. Two packed steps may therefore collide on a single-use
//! appliance; [`detect_conflicts`](super::detect_conflicts) reports those.

use log::debug;

use crate::models::{ApplianceId, Step};

/// Group and sequence position chosen for one input step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Assignment {
    index: usize,
    group: u32,
    order: u32,
}

/// Hands out group ids from 0 and sequence positions from 1.
#[derive(Debug, Default)]
struct Counters {
    next_group: u32,
    next_order: u32,
}

impl Counters {
    fn open_group(&mut self) -> u32 {
        let group = self.next_group;
        self.next_group += 1;
        group
    }

    fn assign(&mut self, index: usize, group: u32) -> Assignment {
        self.next_order += 1;
        Assignment {
            index,
            group,
            order: self.next_order,
        }
    }
}

/// Assigns every step a parallel group and a sequence position.
///
/// Returns the same steps, sorted by `sequence_order`, each carrying
/// `parallel_group` (from 0) and `sequence_order` (1..=n). Durations and
/// appliance sets are untouched. Existing assignments on the input are
/// ignored, so re-running on a scheduled plan recomputes from scratch.
///
/// ```rust
/// use batchcook_core::{schedule::{optimize, total_duration}, Step};
///
/// let steps = vec![
///     Step::new("Bake the lasagna", 60).supervised().with_appliance("oven"),
///     Step::new("Chop vegetables", 15),
/// ];
/// let plan = optimize(&steps);
/// assert_eq!(plan[0].parallel_group, Some(0));
/// assert_eq!(plan[1].parallel_group, Some(0));
/// assert_eq!(total_duration(&plan), 60);
/// ```
pub fn optimize(steps: &[Step]) -> Vec<Step> {
    let assignments = assign(steps);
    debug!(
        "optimize: {} steps packed into {} groups",
        steps.len(),
        assignments.iter().map(|a| a.group + 1).max().unwrap_or(0)
    );

    assignments
        .into_iter()
        .map(|a| {
            let mut step = steps[a.index].clone();
            step.parallel_group = Some(a.group);
            step.sequence_order = Some(a.order);
            step
        })
        .collect()
}

fn assign(steps: &[Step]) -> Vec<Assignment> {
    let (mut supervised, active): (Vec<usize>, Vec<usize>) =
        (0..steps.len()).partition(|&i| steps[i].is_supervision);

    // Longest anchors first; sort_by is stable so ties keep input order.
    supervised.sort_by(|&a, &b| steps[b].duration_minutes.cmp(&steps[a].duration_minutes));

    let mut pool = active;
    pool.sort_by_cached_key(|&i| (appliance_signature(&steps[i]), steps[i].duration_minutes));

    let mut counters = Counters::default();
    let mut assignments = Vec::with_capacity(steps.len());

    for anchor in supervised {
        let group = counters.open_group();
        assignments.push(counters.assign(anchor, group));

        let budget = steps[anchor].duration_minutes;
        let mut used = 0u32;
        pool.retain(|&candidate| {
            let step = &steps[candidate];
            let fits = used.saturating_add(step.duration_minutes) <= budget;
            if fits && !step.shares_appliance_with(&steps[anchor]) {
                used += step.duration_minutes;
                assignments.push(counters.assign(candidate, group));
                false
            } else {
                true
            }
        });
        debug!(
            "group {group}: anchor '{}' filled {used}/{budget} min",
            steps[anchor].title
        );
    }

    for leftover in pool {
        let group = counters.open_group();
        assignments.push(counters.assign(leftover, group));
    }

    assignments
}

/// Sorted appliance ids of a step; the set is already ordered.
fn appliance_signature(step: &Step) -> Vec<ApplianceId> {
    step.requires_appliances.iter().cloned().collect()
}
