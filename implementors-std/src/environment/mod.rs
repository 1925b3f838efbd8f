//! Concrete [`Environment`](implementors_core::Environment) implementations.
//!
//! - [`LocalEnvironment`]: callback and pending slot owned by the caller
//! - [`GlobalEnvironment`]: process-wide slots, for hosts that want one shared
//!   hand-off point

mod global;
mod local;

pub use global::{GlobalEnvironment, publish_global};
pub use local::LocalEnvironment;
