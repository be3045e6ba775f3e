//! Request Validation Module
//!
//! This module checks verification requests before they reach the registry.
//! Requires a holder name, checks the ticket number format and refuses
//! numbers registered to more than one holder.

mod validator;
pub use validator::Validator;
