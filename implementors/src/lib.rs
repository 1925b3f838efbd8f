//! # implementors - Documentation Implementor Tables
//!
//! A documentation generator records, for each trait, which types in each
//! library implement it. This crate builds those tables and performs their
//! single hand-off: to a registered callback if one is listening, otherwise
//! into a pending slot for later pickup.
//!
//! ## Quick Start
//!
//! ```rust
//! use implementors::prelude::*;
//! use implementors::{environment::LocalEnvironment, implementor_table};
//!
//! let table = implementor_table! {
//!     "libA" => [{ text: "impl Foo", synthetic: true, types: [] }],
//! };
//!
//! let mut env = LocalEnvironment::new();
//! assert_eq!(publish(table.into_shared(), &mut env), Delivery::Pending);
//! assert!(env.pending().is_some());
//! ```

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use implementors_core::{
    // Hand-off
    Delivery,
    // Environment
    Environment,
    // Data model
    ImplementorDescriptor,
    ImplementorList,
    ImplementorRegistry,
    ImplementorTable,
    RegistrationCallback,
    // Error types
    RegistryError,
    ScriptError,
    SharedCallback,
    SharedTable,
    TableBuilder,
    TableError,
    publish,
};

pub use implementors_std::implementor_table;

/// Hosting environments.
pub mod environment {
    pub use implementors_std::environment::{GlobalEnvironment, LocalEnvironment, publish_global};
}

/// Standard callback wrappers.
pub mod callbacks {
    pub use implementors_std::callbacks::{FanoutCallback, LoggingCallback};
}

/// Reading and writing the script form of a table.
pub mod script {
    pub use implementors_std::script::{
        EPILOGUE, PRELUDE, ScriptLayout, parse_script, publish_script, read_script, render_script,
        script_path, write_script,
    };
}

/// Link-time collection of library entries.
#[cfg(feature = "inventory")]
pub mod collect {
    pub use implementors_std::collect::{SubmittedLibrary, collect_table, publish_collected};
}

/// Testing utilities.
pub mod testing {
    pub use implementors_std::testing::{CountingCallback, RecordingCallback, RecordingEnvironment};
}

/// Prelude module - common imports.
///
/// # Usage
///
/// ```rust
/// use implementors::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        Delivery, Environment, ImplementorDescriptor, ImplementorList, ImplementorRegistry,
        ImplementorTable, RegistrationCallback, SharedTable, TableBuilder, publish,
    };
}

#[cfg(feature = "inventory")]
pub use implementors_std::inventory;
