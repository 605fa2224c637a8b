mod conversions;
mod types;

pub use types::{
    AccessGroupDetailsResponse, AccessGroupDraftPayload, AccessGroupResponse, AccessRowResponse,
    AssignedObjectResponse, CreateRoleRequest, ObjectAssignmentResponse, ObjectDraftPayload,
    PermissionResponse, RoleCatalogResponse, RoleDraftResponse, RoleListQuery, RoleResponse,
};
