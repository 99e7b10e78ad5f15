//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` create DTO for inserts
//!
//! There are no update DTOs: catalog entries are create-then-read only.

pub mod resource;
pub mod role;
