mod common;
mod roles;

pub use common::HealthResponse;
pub use roles::{
    AccessGroupDetailsResponse, AccessGroupDraftPayload, AccessGroupResponse, AccessRowResponse,
    AssignedObjectResponse, CreateRoleRequest, ObjectAssignmentResponse, ObjectDraftPayload,
    PermissionResponse, RoleCatalogResponse, RoleDraftResponse, RoleListQuery, RoleResponse,
};
