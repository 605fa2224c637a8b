use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Object row of a role draft.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/object-draft-payload.ts"
)]
pub struct ObjectDraftPayload {
    #[serde(default)]
    pub object_type: Option<String>,
    #[serde(default)]
    pub object_value: String,
}

/// Access group of a role draft.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/access-group-draft-payload.ts"
)]
pub struct AccessGroupDraftPayload {
    pub app_id: String,
    pub program_code: String,
    pub permissions: Vec<String>,
}

/// Draft prefilled from an existing role.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/role-draft-response.ts"
)]
pub struct RoleDraftResponse {
    pub role_name: String,
    pub description: String,
    pub objects: Vec<ObjectDraftPayload>,
    pub accesses: Vec<AccessGroupDraftPayload>,
}

/// Incoming payload for role creation.
#[derive(Debug, Deserialize, TS)]
#[serde(tag = "mode", rename_all = "snake_case")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/create-role-request.ts"
)]
pub enum CreateRoleRequest {
    New {
        role_name: String,
        #[serde(default)]
        description: Option<String>,
        #[serde(default)]
        objects: Vec<ObjectDraftPayload>,
        #[serde(default)]
        accesses: Vec<AccessGroupDraftPayload>,
    },
    Existing {
        #[ts(type = "number")]
        role_id: u64,
    },
}

/// Query string accepted by the role listing.
#[derive(Debug, Default, Deserialize)]
pub struct RoleListQuery {
    pub search: Option<String>,
}

/// API representation of an assigned object.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/assigned-object-response.ts"
)]
pub struct AssignedObjectResponse {
    #[ts(type = "number")]
    pub object_id: u64,
    pub object_type: String,
    pub object_value: String,
    #[ts(type = "number")]
    pub role_id: u64,
    pub created_at: String,
    pub updated_at: String,
    pub deleted_at: Option<String>,
}

/// API representation of an access group.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/access-group-response.ts"
)]
pub struct AccessGroupResponse {
    #[ts(type = "number")]
    pub rbac_id: u64,
    #[ts(type = "number")]
    pub role_id: u64,
    pub app_id: String,
    pub program_code: String,
    pub created_by: String,
    pub created_at: String,
    pub updated_at: String,
    pub deleted_at: Option<String>,
}

/// API representation of a granted permission.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/permission-response.ts"
)]
pub struct PermissionResponse {
    #[ts(type = "number")]
    pub access_id: u64,
    #[ts(type = "number")]
    pub rbac_id: u64,
    pub access: String,
    pub created_by: String,
    pub created_at: String,
    pub updated_at: String,
    pub deleted_at: Option<String>,
}

/// Access group nested under a role.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/access-group-details-response.ts"
)]
pub struct AccessGroupDetailsResponse {
    pub rbac: AccessGroupResponse,
    pub access: Vec<PermissionResponse>,
}

/// API representation of a role with everything it owns.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/role-response.ts"
)]
pub struct RoleResponse {
    #[ts(type = "number")]
    pub role_id: u64,
    pub role_name: String,
    pub description: String,
    pub created_by: String,
    pub created_at: String,
    pub updated_at: String,
    pub deleted_at: Option<String>,
    pub objects: Vec<AssignedObjectResponse>,
    pub accesses: Vec<AccessGroupDetailsResponse>,
}

/// Row of the object assignment listing.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/object-assignment-response.ts"
)]
pub struct ObjectAssignmentResponse {
    #[ts(type = "number")]
    pub object_id: u64,
    pub object_type: String,
    pub object_value: String,
    #[ts(type = "number")]
    pub role_id: u64,
    pub role_name: String,
}

/// Row of the access control listing.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/access-row-response.ts"
)]
pub struct AccessRowResponse {
    pub role_name: String,
    pub rbac: AccessGroupResponse,
    pub access: Vec<PermissionResponse>,
}

/// Option lists for the role form.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/role-catalog-response.ts"
)]
pub struct RoleCatalogResponse {
    pub object_types: Vec<String>,
    pub applications: Vec<String>,
    pub access_verbs: Vec<String>,
}
