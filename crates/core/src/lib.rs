//! Domain types and request-parameter rules for the board-game review service.
//!
//! Nothing in this crate performs I/O; the database and HTTP layers build on
//! these types.

pub mod error;
pub mod listing;
pub mod types;
