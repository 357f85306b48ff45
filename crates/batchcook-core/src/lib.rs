//! Core library for batchcook, a batch-cooking session planner.
//!
//! A session is a list of cooking [`Step`]s, some of which run unattended
//! (an oven bake, a slow braise). The crate packs those steps into parallel
//! groups so the cook works while the appliances do, audits the result for
//! appliance double-booking, and measures the time saved. Around that core
//! sit session and preparation checks, a toddler-participation filter with
//! a nap-aware timeline, and session statistics.
//!
//! Nothing is persisted: callers hand in steps and sessions as serde records
//! and get new records back.
//!
//! # Quick Start
//!
//! ```rust
//! use batchcook_core::{KitchenBuilder, Step};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let kitchen = KitchenBuilder::new().build().await?;
//!
//! let plan = kitchen.plan_steps(&[
//!     Step::new("Roast vegetables", 45).supervised().with_appliance("oven"),
//!     Step::new("Chop herbs", 10),
//!     Step::new("Blend soup", 5).with_appliance("blender").noisy(),
//! ]);
//! println!("{plan}");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod display;
pub mod error;
pub mod kitchen;
pub mod models;
pub mod params;
pub mod safety;
pub mod schedule;
pub mod stats;
pub mod validation;

pub use config::KitchenConfig;
pub use display::{Appliances, ClockTime, Conflicts, Minutes, Moments, Steps, StorageLocations};
pub use error::{KitchenError, Result};
pub use kitchen::{Kitchen, KitchenBuilder};
pub use models::{
    Appliance, ChildSafeMoment, Conflict, HistoryStats, MomentKind, NapPlan, Preparation,
    Session, SessionPlan, SessionStats, Step, StepStatus, StorageLocation, ValidationReport,
};
pub use params::{
    FormatDuration, FormattedDuration, NapPlanRequest, SessionHistory, SessionParams, StepList,
    ValidatePreparation, ValidateSession,
};
pub use safety::ChildSafetyFilter;
