//! Toddler participation and nap-window planning.
//!
//! The classifier is plain keyword matching, not a model: a step is safe for
//! the child to join when it is quiet and either its text contains one of
//! the configured safe verbs at a cool temperature, or it is an unattended
//! supervision step the child can watch from a distance.

use jiff::civil::Time;

use crate::{
    config::KitchenConfig,
    models::{ChildSafeMoment, MomentKind, NapPlan, Step, TimedStep},
    schedule::duration::{minutes_of_day, offset_time, MINUTES_PER_DAY},
};

/// Steps at or above this temperature are never hands-on for the child.
pub const MAX_CHILD_TEMPERATURE_CELSIUS: f64 = 50.0;

/// Keyword classifier for child-safe steps.
#[derive(Debug, Clone)]
pub struct ChildSafetyFilter {
    keywords: Vec<String>,
    child_name: String,
}

impl ChildSafetyFilter {
    /// Creates a filter from explicit keywords. Matching is case-insensitive
    /// and does not fold accents.
    pub fn new<I, S>(keywords: I, child_name: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect(),
            child_name: child_name.into(),
        }
    }

    /// Creates a filter from the configured keywords and child name.
    pub fn from_config(config: &KitchenConfig) -> Self {
        Self::new(&config.safe_keywords, config.child_name.clone())
    }

    /// Returns the steps the child can take part in, in input order.
    pub fn identify_child_safe_moments(&self, steps: &[Step]) -> Vec<ChildSafeMoment> {
        steps
            .iter()
            .filter_map(|step| self.classify(step))
            .collect()
    }

    /// Classifies a single step; `None` when the child should stay away.
    pub fn classify(&self, step: &Step) -> Option<ChildSafeMoment> {
        if step.is_noisy {
            return None;
        }

        let cool = step
            .temperature_celsius
            .map_or(true, |t| t < MAX_CHILD_TEMPERATURE_CELSIUS);
        let keyword = if cool { self.matching_keyword(step) } else { None };

        let (kind, advice) = match keyword {
            Some(keyword) => (
                MomentKind::Help {
                    keyword: keyword.to_string(),
                },
                format!(
                    "{} can help: '{}' is a safe hands-on task ({keyword}).",
                    self.child_name, step.title
                ),
            ),
            None if step.is_supervision => (
                MomentKind::Watch,
                format!(
                    "{} can watch '{}' from a high chair at a safe distance.",
                    self.child_name, step.title
                ),
            ),
            None => return None,
        };

        Some(ChildSafeMoment {
            step: step.clone(),
            kind,
            advice,
        })
    }

    fn matching_keyword(&self, step: &Step) -> Option<&str> {
        let mut text = step.title.to_lowercase();
        if let Some(description) = &step.description {
            text.push('\n');
            text.push_str(&description.to_lowercase());
        }
        self.keywords
            .iter()
            .find(|k| text.contains(k.as_str()))
            .map(String::as_str)
    }
}

/// Places scheduled steps on the clock and splits them around a nap.
///
/// Steps are walked in `sequence_order`; a parallel group starts when the
/// previous group finishes and all its members start with it. The nap
/// considered is the one under way at `start_time`, or else the next one on
/// the clock, so either the session or the nap may run past midnight. A nap
/// ending before it starts is taken to run past midnight. A step lands in
/// `before_nap` when it ends by the nap's start, in `after_nap` when it
/// starts at or after the nap's end, and in `during_nap` otherwise. Every
/// noisy step that overlaps the nap produces an advisory.
pub fn generate_nap_aware_plan(
    steps: &[Step],
    start_time: Time,
    nap_start: Time,
    nap_end: Time,
) -> NapPlan {
    let (nap_from, nap_until) = nap_window(start_time, nap_start, nap_end);

    let mut plan = NapPlan::default();
    for (offset, end_offset, step) in timeline(steps) {
        let timed = TimedStep {
            step: step.clone(),
            start: offset_time(start_time, offset),
            end: offset_time(start_time, end_offset),
        };

        let overlaps = offset < nap_until && end_offset > nap_from;
        if overlaps && step.is_noisy {
            plan.advisories.push(format!(
                "'{}' is noisy and runs {}-{}, during the nap ({}-{}). Move it or keep the door closed.",
                step.title,
                timed.start.strftime("%H:%M"),
                timed.end.strftime("%H:%M"),
                nap_start.strftime("%H:%M"),
                nap_end.strftime("%H:%M"),
            ));
        }

        if end_offset <= nap_from {
            plan.before_nap.push(timed);
        } else if offset >= nap_until {
            plan.after_nap.push(timed);
        } else {
            plan.during_nap.push(timed);
        }
    }
    plan
}

/// Nap bounds in minutes from the session start. The start may be negative
/// when the nap is already under way at `start_time`.
fn nap_window(start_time: Time, nap_start: Time, nap_end: Time) -> (i64, i64) {
    let mut length =
        (minutes_of_day(nap_end) - minutes_of_day(nap_start)).rem_euclid(MINUTES_PER_DAY);
    if length == 0 {
        length = MINUTES_PER_DAY;
    }
    let next =
        (minutes_of_day(nap_start) - minutes_of_day(start_time)).rem_euclid(MINUTES_PER_DAY);
    let ongoing = next - MINUTES_PER_DAY;
    let from = if ongoing + length > 0 { ongoing } else { next };
    (from, from + length)
}

/// `(start offset, end offset, step)` in minutes from the session start.
fn timeline(steps: &[Step]) -> Vec<(i64, i64, &Step)> {
    let mut ordered: Vec<&Step> = steps.iter().collect();
    ordered.sort_by_key(|s| s.sequence_order.unwrap_or(u32::MAX));

    let mut entries = Vec::with_capacity(ordered.len());
    let mut current_group: Option<u32> = None;
    let mut group_start = 0i64;
    let mut group_end = 0i64;

    for step in ordered {
        let group = step.group_or_default();
        if current_group != Some(group) {
            group_start = group_end;
            current_group = Some(group);
        }
        let end = group_start + i64::from(step.duration_minutes);
        group_end = group_end.max(end);
        entries.push((group_start, end, step));
    }
    entries
}
