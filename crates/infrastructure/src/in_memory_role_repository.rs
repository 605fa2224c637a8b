use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rolekeeper_application::RoleRepository;
use rolekeeper_core::{Actor, AppResult};
use rolekeeper_domain::{AccessRow, ObjectAssignment, RoleDraft, RoleId, RoleStore, RoleWithDetails};
use tokio::sync::RwLock;

#[cfg(test)]
mod tests;

/// In-memory role repository implementation.
///
/// Every mutation runs under a single write lock, so identity allocation is
/// serialized across concurrent requests. State is lost on restart.
#[derive(Debug, Default)]
pub struct InMemoryRoleRepository {
    store: RwLock<RoleStore>,
}

impl InMemoryRoleRepository {
    /// Creates a repository backed by an existing store.
    #[must_use]
    pub fn new(store: RoleStore) -> Self {
        Self {
            store: RwLock::new(store),
        }
    }
}

#[async_trait]
impl RoleRepository for InMemoryRoleRepository {
    async fn list_roles(&self, search: Option<&str>) -> AppResult<Vec<RoleWithDetails>> {
        let store = self.store.read().await;

        Ok(match search {
            Some(term) => store.search(term).collect(),
            None => store.roles(),
        })
    }

    async fn find_role(&self, role_id: RoleId) -> AppResult<Option<RoleWithDetails>> {
        Ok(self.store.read().await.role(role_id))
    }

    async fn create_role(
        &self,
        draft: &RoleDraft,
        created_by: &Actor,
        now: DateTime<Utc>,
    ) -> AppResult<Option<RoleWithDetails>> {
        self.store.write().await.add_role(draft, created_by, now)
    }

    async fn clone_role(
        &self,
        role_id: RoleId,
        now: DateTime<Utc>,
    ) -> AppResult<Option<RoleWithDetails>> {
        self.store.write().await.clone_role(role_id, now)
    }

    async fn list_object_assignments(&self) -> AppResult<Vec<ObjectAssignment>> {
        Ok(self.store.read().await.object_assignments())
    }

    async fn list_access_rows(&self) -> AppResult<Vec<AccessRow>> {
        Ok(self.store.read().await.access_rows())
    }
}
