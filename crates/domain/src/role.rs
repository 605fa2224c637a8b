use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{AccessVerb, AppId, ObjectType};

macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Wraps a raw identifier value.
            #[must_use]
            pub const fn new(value: u64) -> Self {
                Self(value)
            }

            /// Returns the raw identifier value.
            #[must_use]
            pub const fn value(self) -> u64 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(formatter, "{}", self.0)
            }
        }
    };
}

record_id!(
    /// Identifier of a role.
    RoleId
);
record_id!(
    /// Identifier of an object assignment, unique across all roles.
    ObjectId
);
record_id!(
    /// Identifier of an access group, unique across all roles.
    RbacId
);
record_id!(
    /// Identifier of a single permission entry, unique across all roles.
    AccessId
);

/// A named permission bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    /// Stable role identifier.
    pub role_id: RoleId,
    /// Display name.
    pub role_name: String,
    /// Free-text description, empty when not provided.
    pub description: String,
    /// Operator that created the role.
    pub created_by: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
    /// Soft-delete marker. Never set by any current operation.
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Scoped resource bound to exactly one role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignedObject {
    /// Stable object identifier.
    pub object_id: ObjectId,
    /// Kind of resource.
    pub object_type: ObjectType,
    /// Free-text resource value such as a user id or department code.
    pub object_value: String,
    /// Owning role.
    pub role_id: RoleId,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
    /// Soft-delete marker.
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Application and program code pair scoping a set of permissions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessGroup {
    /// Stable group identifier.
    pub rbac_id: RbacId,
    /// Owning role.
    pub role_id: RoleId,
    /// Application the group applies to.
    pub app_id: AppId,
    /// Free-text program code inside the application.
    pub program_code: String,
    /// Operator that created the group.
    pub created_by: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
    /// Soft-delete marker.
    pub deleted_at: Option<DateTime<Utc>>,
}

/// A single allowed verb inside an access group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permission {
    /// Stable permission identifier.
    pub access_id: AccessId,
    /// Owning access group.
    pub rbac_id: RbacId,
    /// Granted verb.
    pub access: AccessVerb,
    /// Operator that granted the verb.
    pub created_by: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
    /// Soft-delete marker.
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Access group together with its ordered permissions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessGroupDetails {
    /// Group record.
    pub rbac: AccessGroup,
    /// Permissions in grant order.
    pub access: Vec<Permission>,
}

/// Read-only nested projection of a role and everything it owns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleWithDetails {
    /// Role record, flattened into the projection.
    #[serde(flatten)]
    pub role: Role,
    /// Objects assigned to the role.
    pub objects: Vec<AssignedObject>,
    /// Access groups granted to the role.
    pub accesses: Vec<AccessGroupDetails>,
}

impl RoleWithDetails {
    /// Returns every permission of the role in group order.
    pub fn permissions(&self) -> impl Iterator<Item = &Permission> {
        self.accesses.iter().flat_map(|group| group.access.iter())
    }
}
