use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use rolekeeper_core::{Actor, AppError, AppResult};
use rolekeeper_domain::{AccessRow, ObjectAssignment, RoleDraft, RoleId, RoleWithDetails};

use crate::role_admin_ports::{CreateRoleInput, RoleCatalog, RoleRepository};

mod roles;
mod views;


/// Application service for role administration workflows.
#[derive(Clone)]
pub struct RoleAdminService {
    repository: Arc<dyn RoleRepository>,
}

impl RoleAdminService {
    /// Creates a new service from required dependencies.
    #[must_use]
    pub fn new(repository: Arc<dyn RoleRepository>) -> Self {
        Self { repository }
    }

    async fn require_role(&self, role_id: RoleId) -> AppResult<RoleWithDetails> {
        self.repository
            .find_role(role_id)
            .await?
            .ok_or_else(|| role_not_found(role_id))
    }
}

fn role_not_found(role_id: RoleId) -> AppError {
    AppError::NotFound(format!("role '{role_id}' does not exist"))
}
