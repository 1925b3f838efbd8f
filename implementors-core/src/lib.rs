//! # implementors-core
//!
//! Core types for publishing documentation implementor tables.
//!
//! A documentation generator records, per library, which types implement a
//! given trait. Each record is a pre-rendered fragment that a browser-side
//! script displays. This crate models that table and its one piece of
//! behavior: hand it to whoever is listening, or park it until somebody is.
//!
//! # Pieces
//!
//! - [`ImplementorDescriptor`] / [`ImplementorList`] - One documented
//!   implementation, and a library's ordered list of them
//! - [`ImplementorTable`] / [`TableBuilder`] - Library name to list, frozen
//!   once built and shared as [`SharedTable`]
//! - [`Environment`] / [`RegistrationCallback`] - The injected hosting side
//! - [`publish`] / [`ImplementorRegistry`] - The hand-off itself
//!
//! # Error Types
//!
//! - [`RegistryError`] - Top-level error type
//! - [`TableError`] - Table assembly errors
//! - [`ScriptError`] - Script form errors

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod descriptor;
mod environment;
mod error;
mod registry;
mod table;

// Re-exports
pub use descriptor::{ImplementorDescriptor, ImplementorList};
pub use environment::{Environment, RegistrationCallback, SharedCallback};
pub use error::{RegistryError, ScriptError, TableError};
pub use registry::{Delivery, ImplementorRegistry, publish};
pub use table::{ImplementorTable, SharedTable, TableBuilder};
