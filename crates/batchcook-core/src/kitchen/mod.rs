//! High-level kitchen API tying the scheduler passes together.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  KitchenBuilder │    │     Kitchen     │    │ schedule/safety │
//! │ (config lookup) │───▶│ (config + ops)  │───▶│ stats/validation│
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! A [`Kitchen`] owns the static reference data (appliance and storage
//! registries, child-safety keywords) and exposes every operation as a
//! method. It holds no mutable state, so one instance can serve any number
//! of sessions, from any number of threads.
//!
//! # Usage Examples
//!
//! ```rust
//! use batchcook_core::{KitchenBuilder, Step};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let kitchen = KitchenBuilder::new()
//!     .with_config(Default::default())
//!     .build()
//!     .await?;
//!
//! let plan = kitchen.plan_steps(&[
//!     Step::new("Bake granola", 40).supervised().with_appliance("oven"),
//!     Step::new("Wash berries", 10),
//! ]);
//! assert_eq!(plan.optimized_duration, 40);
//! assert_eq!(plan.raw_duration, 50);
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod ops;


pub use builder::KitchenBuilder;

use crate::config::KitchenConfig;

/// Entry point for scheduling, validating and summarizing sessions.
#[derive(Debug, Clone)]
pub struct Kitchen {
    pub(crate) config: KitchenConfig,
}

impl Kitchen {
    /// Creates a kitchen over the given reference data.
    pub fn new(config: KitchenConfig) -> Self {
        Self { config }
    }

    /// Reference data in use.
    pub fn config(&self) -> &KitchenConfig {
        &self.config
    }
}

impl Default for Kitchen {
    fn default() -> Self {
        Self::new(KitchenConfig::default())
    }
}
