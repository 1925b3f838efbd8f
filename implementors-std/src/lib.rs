//! # implementors-std
//!
//! Standard implementations for publishing implementor tables.
//!
//! This crate provides:
//! - **Environments**: [`LocalEnvironment`], [`GlobalEnvironment`]
//! - **Callbacks**: [`LoggingCallback`], [`FanoutCallback`]
//! - **Literals**: the [`implementor_table!`] macro
//! - **Script form**: rendering and parsing the generated script files
//! - **Collection**: link-time gathering of library entries (`inventory` feature)
//! - **Testing**: recording callbacks and environments
//!
//! [`LocalEnvironment`]: environment::LocalEnvironment
//! [`GlobalEnvironment`]: environment::GlobalEnvironment
//! [`LoggingCallback`]: callbacks::LoggingCallback
//! [`FanoutCallback`]: callbacks::FanoutCallback

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core types
pub use implementors_core;

// Modules
pub mod callbacks;
#[cfg(feature = "inventory")]
pub mod collect;
pub mod environment;
mod macros;
pub mod script;
pub mod testing;

#[cfg(feature = "inventory")]
pub use inventory;

#[doc(hidden)]
pub mod __private {
    pub use implementors_core::{ImplementorDescriptor, ImplementorTable, TableBuilder};
}
