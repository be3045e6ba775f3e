//! API Module
//!
//! This module handles the JSON-RPC API that answers ticket lookups.
//! It provides the HTTP endpoint the lookup pages call.

mod server;
pub use server::{AppState, Server, router};
