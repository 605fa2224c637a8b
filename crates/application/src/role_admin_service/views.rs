use super::*;

impl RoleAdminService {
    /// Returns object assignments across all roles.
    pub async fn list_object_assignments(&self) -> AppResult<Vec<ObjectAssignment>> {
        self.repository.list_object_assignments().await
    }

    /// Returns access groups across all roles.
    pub async fn list_access_rows(&self) -> AppResult<Vec<AccessRow>> {
        self.repository.list_access_rows().await
    }

    /// Returns the option lists for the role form.
    #[must_use]
    pub fn catalog(&self) -> RoleCatalog {
        RoleCatalog::full()
    }
}
