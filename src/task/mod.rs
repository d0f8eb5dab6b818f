//! Task list management.
//!
//! Tasks can be added, deleted, toggled between open and completed, and
//! listed in insertion order. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - The layered error chain in [`error`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Use cases in [`services`]
//!
//! Failures cross exactly one layer boundary at a time: entity errors are
//! lifted into store errors, store errors into use-case errors, and
//! use-case errors into adapter errors.

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
