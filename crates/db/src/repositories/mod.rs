//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&PgPool` as the first argument.

pub mod resource_repo;
pub mod role_repo;

pub use resource_repo::ResourceRepo;
pub use role_repo::RoleRepo;
