//! Shared domain types for the career path catalog.
//!
//! Holds everything the database and HTTP layers agree on: id and timestamp
//! aliases, the domain error enum, the fixed catalog enumerations, and the
//! field validators used by the request DTOs.

pub mod catalog;
pub mod error;
pub mod pagination;
pub mod types;
pub mod validation;
