//! Application services and ports.

#![forbid(unsafe_code)]

mod role_admin_ports;
mod role_admin_service;

pub use role_admin_ports::{CreateRoleInput, RoleCatalog, RoleRepository};
pub use role_admin_service::RoleAdminService;
