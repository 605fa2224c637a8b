use chrono::{DateTime, SecondsFormat, Utc};
use rolekeeper_application::{CreateRoleInput, RoleCatalog};
use rolekeeper_core::AppError;
use rolekeeper_domain::{
    AccessGroup, AccessGroupDetails, AccessRow, AccessVerb, AppId, AssignedObject,
    ObjectAssignment, ObjectDraft, ObjectType, Permission, RoleDraft, RoleId, RoleWithDetails,
};

use super::types::{
    AccessGroupDetailsResponse, AccessGroupDraftPayload, AccessGroupResponse, AccessRowResponse,
    AssignedObjectResponse, CreateRoleRequest, ObjectAssignmentResponse, ObjectDraftPayload,
    PermissionResponse, RoleCatalogResponse, RoleDraftResponse, RoleResponse,
};

fn timestamp(value: DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn optional_timestamp(value: Option<DateTime<Utc>>) -> Option<String> {
    value.map(timestamp)
}

impl From<AssignedObject> for AssignedObjectResponse {
    fn from(value: AssignedObject) -> Self {
        Self {
            object_id: value.object_id.value(),
            object_type: value.object_type.as_str().to_owned(),
            object_value: value.object_value,
            role_id: value.role_id.value(),
            created_at: timestamp(value.created_at),
            updated_at: timestamp(value.updated_at),
            deleted_at: optional_timestamp(value.deleted_at),
        }
    }
}

impl From<AccessGroup> for AccessGroupResponse {
    fn from(value: AccessGroup) -> Self {
        Self {
            rbac_id: value.rbac_id.value(),
            role_id: value.role_id.value(),
            app_id: value.app_id.as_str().to_owned(),
            program_code: value.program_code,
            created_by: value.created_by,
            created_at: timestamp(value.created_at),
            updated_at: timestamp(value.updated_at),
            deleted_at: optional_timestamp(value.deleted_at),
        }
    }
}

impl From<Permission> for PermissionResponse {
    fn from(value: Permission) -> Self {
        Self {
            access_id: value.access_id.value(),
            rbac_id: value.rbac_id.value(),
            access: value.access.as_str().to_owned(),
            created_by: value.created_by,
            created_at: timestamp(value.created_at),
            updated_at: timestamp(value.updated_at),
            deleted_at: optional_timestamp(value.deleted_at),
        }
    }
}

impl From<AccessGroupDetails> for AccessGroupDetailsResponse {
    fn from(value: AccessGroupDetails) -> Self {
        Self {
            rbac: value.rbac.into(),
            access: value.access.into_iter().map(PermissionResponse::from).collect(),
        }
    }
}

impl From<RoleWithDetails> for RoleResponse {
    fn from(value: RoleWithDetails) -> Self {
        let role = value.role;
        Self {
            role_id: role.role_id.value(),
            role_name: role.role_name,
            description: role.description,
            created_by: role.created_by,
            created_at: timestamp(role.created_at),
            updated_at: timestamp(role.updated_at),
            deleted_at: optional_timestamp(role.deleted_at),
            objects: value
                .objects
                .into_iter()
                .map(AssignedObjectResponse::from)
                .collect(),
            accesses: value
                .accesses
                .into_iter()
                .map(AccessGroupDetailsResponse::from)
                .collect(),
        }
    }
}

impl From<ObjectAssignment> for ObjectAssignmentResponse {
    fn from(value: ObjectAssignment) -> Self {
        Self {
            object_id: value.object.object_id.value(),
            object_type: value.object.object_type.as_str().to_owned(),
            object_value: value.object.object_value,
            role_id: value.object.role_id.value(),
            role_name: value.role_name,
        }
    }
}

impl From<AccessRow> for AccessRowResponse {
    fn from(value: AccessRow) -> Self {
        Self {
            role_name: value.role_name,
            rbac: value.rbac.into(),
            access: value.access.into_iter().map(PermissionResponse::from).collect(),
        }
    }
}

impl From<RoleCatalog> for RoleCatalogResponse {
    fn from(value: RoleCatalog) -> Self {
        Self {
            object_types: value
                .object_types
                .iter()
                .map(|object_type| object_type.as_str().to_owned())
                .collect(),
            applications: value
                .applications
                .iter()
                .map(|app_id| app_id.as_str().to_owned())
                .collect(),
            access_verbs: value
                .access_verbs
                .iter()
                .map(|verb| verb.as_str().to_owned())
                .collect(),
        }
    }
}

impl From<RoleDraft> for RoleDraftResponse {
    fn from(value: RoleDraft) -> Self {
        Self {
            role_name: value.role_name,
            description: value.description,
            objects: value
                .objects
                .into_iter()
                .map(|object| ObjectDraftPayload {
                    object_type: object
                        .object_type
                        .map(|object_type| object_type.as_str().to_owned()),
                    object_value: object.object_value,
                })
                .collect(),
            accesses: value
                .accesses
                .into_iter()
                .map(|group| AccessGroupDraftPayload {
                    app_id: group.app_id.as_str().to_owned(),
                    program_code: group.program_code,
                    permissions: group
                        .permissions
                        .iter()
                        .map(|verb| verb.as_str().to_owned())
                        .collect(),
                })
                .collect(),
        }
    }
}

fn object_draft(payload: ObjectDraftPayload) -> Result<ObjectDraft, AppError> {
    let object_type = match payload.object_type.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(value) => Some(ObjectType::from_transport(value)?),
    };

    Ok(ObjectDraft {
        object_type,
        object_value: payload.object_value,
    })
}

fn apply_access_group(
    draft: &mut RoleDraft,
    payload: AccessGroupDraftPayload,
) -> Result<(), AppError> {
    let app_id = AppId::from_transport(payload.app_id.trim())?;
    for permission in &payload.permissions {
        let verb = AccessVerb::from_transport(permission.trim())?;
        if !draft.add_permission(Some(app_id), &payload.program_code, Some(verb)) {
            return Err(AppError::Validation(format!(
                "access group for '{}' must have a program code",
                app_id.as_str()
            )));
        }
    }

    Ok(())
}

impl TryFrom<CreateRoleRequest> for CreateRoleInput {
    type Error = AppError;

    fn try_from(value: CreateRoleRequest) -> Result<Self, Self::Error> {
        match value {
            CreateRoleRequest::New {
                role_name,
                description,
                objects,
                accesses,
            } => {
                let mut draft = RoleDraft::new(role_name, description.unwrap_or_default());
                draft.objects = objects
                    .into_iter()
                    .map(object_draft)
                    .collect::<Result<Vec<_>, _>>()?;
                for group in accesses {
                    apply_access_group(&mut draft, group)?;
                }

                Ok(Self::New(draft))
            }
            CreateRoleRequest::Existing { role_id } => Ok(Self::CopyExisting(RoleId::new(role_id))),
        }
    }
}
