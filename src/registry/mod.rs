//! Ticket Registry Module
//!
//! This module holds the name → ticket numbers table and every query the
//! lookup pages need: verification of a name/number pair, owner lookup,
//! the sorted list of all numbers and duplicate detection.
//!
//! The table is built once and never mutated. All queries are linear scans
//! in registration order, which is what decides the winner whenever a number
//! was registered to more than one holder.

mod normalize;
mod table;


pub use normalize::normalize;
pub use table::{Registry, validate_format};
