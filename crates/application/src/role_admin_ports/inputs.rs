use rolekeeper_domain::{AccessVerb, AppId, ObjectType, RoleDraft, RoleId};

/// Input payload for role creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateRoleInput {
    /// Create a role from a completed draft.
    New(RoleDraft),
    /// Copy an existing role under fresh identities.
    CopyExisting(RoleId),
}

/// Option lists offered by the role form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleCatalog {
    /// Selectable object types.
    pub object_types: Vec<ObjectType>,
    /// Selectable applications.
    pub applications: Vec<AppId>,
    /// Selectable permission verbs.
    pub access_verbs: Vec<AccessVerb>,
}

impl RoleCatalog {
    /// Returns the full catalog of closed enumerations.
    #[must_use]
    pub fn full() -> Self {
        Self {
            object_types: ObjectType::all().to_vec(),
            applications: AppId::all().to_vec(),
            access_verbs: AccessVerb::all().to_vec(),
        }
    }
}
