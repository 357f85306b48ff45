//! Session scheduling: step packing, conflict audit and duration model.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    optimizer    │    │    conflicts    │    │    duration     │
//! │ (group + order) │───▶│  (audit only)   │───▶│ (raw/optimized) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Every function here is pure: it reads a step slice and returns new data.
//! "Parallel" describes the kitchen, where an oven bakes while the cook
//! chops; nothing here runs concurrently.

pub mod conflicts;
pub mod duration;
pub mod optimizer;


pub use conflicts::detect_conflicts;
pub use duration::{
    estimate_end_time, format_duration, sequential_duration, time_saved_pct, total_duration,
};
pub use optimizer::optimize;
