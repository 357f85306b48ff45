//! Markdown formatting for scheduler output.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! this module adds newtype wrappers for lists and small value formatters.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrappers and    │    │    Markdown     │
//! │ (Plan, NapPlan) │───▶│ value formatters│───▶│ (Terminal/MCP)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! - [`collections`]: list wrappers (`Steps`, `Conflicts`, `Moments`,
//!   `Appliances`, `StorageLocations`)
//! - [`datetime`]: `HH:MM` clock times and kitchen-style durations
//! - [`models`]: Display implementations for domain models
//!
//! ```rust
//! use batchcook_core::{display::Minutes, KitchenConfig, Kitchen, Step};
//!
//! let kitchen = Kitchen::new(KitchenConfig::default());
//! let plan = kitchen.plan_steps(&[Step::new("Simmer stock", 150).supervised()]);
//! let output = plan.to_string();
//! assert!(output.contains("# Session Plan"));
//! assert_eq!(Minutes(150).to_string(), "2h30");
//! ```

pub mod collections;
pub mod datetime;
pub mod models;

pub use collections::{Appliances, Conflicts, Moments, Steps, StorageLocations};
pub use datetime::{ClockTime, Minutes};
