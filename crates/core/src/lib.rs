//! Shared vocabulary for the Taskline workspace.
//!
//! Holds the ID and timestamp aliases used by every crate, and the domain
//! half of the error taxonomy.

pub mod error;
pub mod types;
