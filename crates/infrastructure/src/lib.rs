//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod in_memory_role_repository;
mod role_fixture;

pub use in_memory_role_repository::InMemoryRoleRepository;
pub use role_fixture::{load_role_fixture, parse_role_fixture};
