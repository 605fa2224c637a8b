use async_trait::async_trait;
use chrono::{DateTime, Utc};

use rolekeeper_core::{Actor, AppResult};
use rolekeeper_domain::{AccessRow, ObjectAssignment, RoleDraft, RoleId, RoleWithDetails};

/// Repository port for role administration.
///
/// Mutations return `Ok(None)` when the store declined the operation and left
/// its state unchanged, and `AppError::Internal` when no identifiers are left.
#[async_trait]
pub trait RoleRepository: Send + Sync {
    /// Lists roles, optionally filtered by a case-insensitive name fragment.
    async fn list_roles(&self, search: Option<&str>) -> AppResult<Vec<RoleWithDetails>>;

    /// Finds one role by identifier.
    async fn find_role(&self, role_id: RoleId) -> AppResult<Option<RoleWithDetails>>;

    /// Persists a new role built from a draft.
    async fn create_role(
        &self,
        draft: &RoleDraft,
        created_by: &Actor,
        now: DateTime<Utc>,
    ) -> AppResult<Option<RoleWithDetails>>;

    /// Deep-copies an existing role.
    async fn clone_role(
        &self,
        role_id: RoleId,
        now: DateTime<Utc>,
    ) -> AppResult<Option<RoleWithDetails>>;

    /// Lists object assignments across all roles.
    async fn list_object_assignments(&self) -> AppResult<Vec<ObjectAssignment>>;

    /// Lists access groups across all roles.
    async fn list_access_rows(&self) -> AppResult<Vec<AccessRow>>;
}
