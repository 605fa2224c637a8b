use super::*;

impl RoleAdminService {
    /// Returns roles whose name contains `search`, or all roles.
    pub async fn list_roles(&self, search: Option<&str>) -> AppResult<Vec<RoleWithDetails>> {
        self.repository.list_roles(search).await
    }

    /// Returns a single role with its objects and access groups.
    pub async fn get_role(&self, role_id: RoleId) -> AppResult<RoleWithDetails> {
        self.require_role(role_id).await
    }

    /// Creates a role from a draft or by copying an existing role.
    pub async fn create_role(
        &self,
        actor: &Actor,
        input: CreateRoleInput,
    ) -> AppResult<RoleWithDetails> {
        let draft = match input {
            CreateRoleInput::New(draft) => draft,
            CreateRoleInput::CopyExisting(role_id) => {
                return self.clone_role(actor, role_id).await;
            }
        };

        if !draft.is_submittable() {
            return Err(AppError::Validation(
                "role_name must not be empty".to_owned(),
            ));
        }

        let role = self
            .repository
            .create_role(&draft, actor, Utc::now())
            .await?
            .ok_or_else(|| AppError::Validation("role draft was declined".to_owned()))?;

        info!(
            role_id = %role.role.role_id,
            role_name = %role.role.role_name,
            actor = actor.subject(),
            objects = role.objects.len(),
            access_groups = role.accesses.len(),
            "role created"
        );

        Ok(role)
    }

    /// Deep-copies an existing role under fresh identities.
    pub async fn clone_role(&self, actor: &Actor, role_id: RoleId) -> AppResult<RoleWithDetails> {
        let role = self
            .repository
            .clone_role(role_id, Utc::now())
            .await?
            .ok_or_else(|| role_not_found(role_id))?;

        info!(
            source_role_id = %role_id,
            role_id = %role.role.role_id,
            actor = actor.subject(),
            "role cloned"
        );

        Ok(role)
    }

    /// Returns a draft prefilled from an existing role.
    pub async fn draft_from_role(&self, role_id: RoleId) -> AppResult<RoleDraft> {
        let role = self.require_role(role_id).await?;
        Ok(RoleDraft::from_role(&role))
    }
}
