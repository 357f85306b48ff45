//! Data models for batch-cooking sessions.
//!
//! Inputs ([`Step`], [`Session`], [`Preparation`]) are plain serde records
//! exchanged with whatever stores and renders sessions. Outputs
//! ([`SessionPlan`], [`Conflict`], [`ValidationReport`], [`NapPlan`],
//! [`SessionStats`], ...) are produced by the scheduler passes and never
//! persisted by this crate. Display implementations live in
//! [`crate::display`].
//!
//! # Examples
//!
//! ```rust
//! use batchcook_core::models::Step;
//!
//! let json = r#"[{"duree_minutes": 60, "est_supervision": true, "robots": ["oven"]},
//!                {"title": "Chop onions", "duration_minutes": 15}]"#;
//! let steps: Vec<Step> = serde_json::from_str(json).unwrap();
//! assert!(steps[0].is_supervision);
//! assert!(steps[0].requires_appliances.contains("oven"));
//! assert!(!steps[1].is_noisy);
//! ```

pub mod appliance;
pub mod conflict;
pub mod moments;
pub mod plan;
pub mod report;
pub mod session;
pub mod stats;
pub mod status;
pub mod step;

#[cfg(test)]
mod tests;

pub use appliance::{Appliance, StorageLocation};
pub use conflict::Conflict;
pub use moments::{ChildSafeMoment, MomentKind, NapPlan, TimedStep};
pub use plan::SessionPlan;
pub use report::ValidationReport;
pub use session::{Preparation, Session};
pub use stats::{ApplianceUsage, HistoryStats, SessionStats};
pub use status::StepStatus;
pub use step::{ApplianceId, Step};
