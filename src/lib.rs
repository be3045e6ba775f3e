//! This crate implements a lookup service over a static lottery ticket registry.
//! It includes modules for the registry queries, prize aggregation, seed data
//! loading, request validation, the JSON-RPC API and configuration.

pub mod types; // Defines common data structures and types used throughout the system.
pub mod error; // Data loading and request validation errors.
pub mod registry; // Name → ticket numbers table and its queries.
pub mod prizes; // Prize ranking and per-person totals.
pub mod data; // Embedded seed data and the TOML loader.
pub mod validation; // Checks run before a verification query.
pub mod api; // Handles the JSON-RPC API.
pub mod config; // Defines and loads system configuration.

// Re-export commonly used types and configurations for easier access.
pub use types::*;
pub use config::Config;
pub use registry::Registry;
