mod inputs;
mod repository;

pub use inputs::{CreateRoleInput, RoleCatalog};
pub use repository::RoleRepository;
