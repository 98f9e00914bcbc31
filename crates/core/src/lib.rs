//! Domain types and pure logic for the todo service.
//!
//! Nothing in this crate touches the database or the network, so the
//! validation and statistics rules can be unit tested in isolation.

pub mod error;
pub mod stats;
pub mod todo;
pub mod types;
