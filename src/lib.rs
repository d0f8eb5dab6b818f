//! Tasklist: an in-memory task list with a layered error pipeline.
//!
//! This crate provides the core of a minimal task-list manager: a task
//! entity that guards its invariants, an in-memory store, single-operation
//! use cases, and a headless presentation adapter that keeps UI-visible
//! state in step with the store.
//!
//! # Architecture
//!
//! Tasklist follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports and the presentation
//!   binding
//!
//! Every failure surfaces as a [`task::error::LayeredError`] tagged with
//! the layer that last handled it, with the full cause chain preserved.
//!
//! # Logging
//!
//! Store mutations and boundary failures are reported through [`tracing`].
//! The crate never installs a subscriber; that is left to the host.
//!
//! # Modules
//!
//! - [`task`]: Task entity, store, use cases, and presentation adapter

pub mod task;
