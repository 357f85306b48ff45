//! Child-participation and nap-window planning results.

use jiff::civil::Time;
use serde::{Deserialize, Serialize};

use super::Step;

/// How a child can take part in a step.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase", tag = "mode")]
pub enum MomentKind {
    /// Hands-on help; `keyword` is the safe verb that matched
    Help { keyword: String },
    /// Watching an unattended step from a safe distance
    Watch,
}

/// A scheduled step a toddler can join, with advice for the cook.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChildSafeMoment {
    #[serde(flatten)]
    pub step: Step,

    pub kind: MomentKind,

    pub advice: String,
}

/// A step placed on the clock.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimedStep {
    #[serde(flatten)]
    pub step: Step,

    /// Time the step starts
    pub start: Time,

    /// Time the step finishes
    pub end: Time,
}

/// A schedule split around a child's nap.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NapPlan {
    /// Steps finishing before the nap starts
    pub before_nap: Vec<TimedStep>,

    /// Steps overlapping the nap window
    pub during_nap: Vec<TimedStep>,

    /// Steps starting once the nap is over
    pub after_nap: Vec<TimedStep>,

    /// Warnings about noisy steps running while the child sleeps
    pub advisories: Vec<String>,
}
