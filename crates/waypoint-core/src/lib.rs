//! Core data model for Waypoint.
//!
//! Shared types consumed by the menu engine and the server runtime: server
//! entries and categories, the read-only [`ServerDirectory`] of official and
//! public servers, and the per-player [`CustomServerStore`].
//!
//! # Components
//!
//! - [`ServerEntry`]: Immutable description of one backend server
//! - [`ServerDirectory`]: Read-only listing by category
//! - [`CustomServerStore`]: Per-player mutable list, with in-memory, durable
//!   and fault-injecting implementations

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod directory;
mod player;
mod server;
pub mod store;

pub use directory::{ServerDirectory, StaticDirectory};
pub use player::PlayerId;
pub use server::{Icon, ServerCategory, ServerEntry};
pub use store::{ChaoticStore, CustomServerStore, MemoryStore, RedbStore, StoreError};
