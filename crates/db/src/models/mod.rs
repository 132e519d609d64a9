//! Row structs and request DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` struct matching the database row
//! - A `Deserialize` create DTO for inserts, where the table accepts them

pub mod category;
pub mod comment;
pub mod page;
pub mod review;
pub mod user;
