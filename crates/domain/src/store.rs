//! Relational in-memory role store.
//!
//! Roles, object assignments, access groups and permissions are kept as four
//! flat tables keyed by identity. The nested [`RoleWithDetails`] view is always
//! computed from those tables, so identity allocation and back-reference rules
//! live in one place.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use rolekeeper_core::{Actor, AppError, AppResult};

use crate::draft::COPY_SUFFIX;
use crate::{
    AccessGroup, AccessGroupDetails, AccessId, AccessVerb, AppId, AssignedObject, ObjectId,
    ObjectType, Permission, RbacId, Role, RoleDraft, RoleId, RoleWithDetails,
};


/// Row of the object assignment listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectAssignment {
    /// Assigned object.
    pub object: AssignedObject,
    /// Name of the owning role.
    pub role_name: String,
}

/// Row of the access control listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessRow {
    /// Name of the owning role.
    pub role_name: String,
    /// Access group.
    pub rbac: AccessGroup,
    /// Permissions of the group in grant order.
    pub access: Vec<Permission>,
}

/// Canonical collection of roles and everything they own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleStore {
    roles: Vec<Role>,
    objects: Vec<AssignedObject>,
    groups: Vec<AccessGroup>,
    permissions: Vec<Permission>,
}

/// Consecutive identifiers reserved for one operation.
#[derive(Debug, Clone, Copy)]
struct IdBlock {
    next: u64,
}

impl IdBlock {
    /// Reserves `count` identifiers after the largest of `existing`, or from 1.
    fn reserve(kind: &str, existing: impl Iterator<Item = u64>, count: usize) -> AppResult<Self> {
        let exhausted = || AppError::Internal(format!("{kind} identifiers are exhausted"));
        let next = match existing.max() {
            Some(max) => max.checked_add(1),
            None => Some(1),
        };
        if count == 0 {
            return Ok(Self {
                next: next.unwrap_or(u64::MAX),
            });
        }

        let next = next.ok_or_else(exhausted)?;
        let last_offset = u64::try_from(count - 1).map_err(|_| exhausted())?;
        if next.checked_add(last_offset).is_none() {
            return Err(exhausted());
        }

        Ok(Self { next })
    }

    fn mint(&mut self) -> u64 {
        let id = self.next;
        // Saturates only after the last reserved identifier was handed out.
        self.next = self.next.saturating_add(1);
        id
    }
}

/// Identifier blocks for every kind touched by one operation.
#[derive(Debug, Clone, Copy)]
struct IdCursor {
    role: IdBlock,
    object: IdBlock,
    rbac: IdBlock,
    access: IdBlock,
}

impl IdCursor {
    fn mint_role(&mut self) -> RoleId {
        RoleId::new(self.role.mint())
    }

    fn mint_object(&mut self) -> ObjectId {
        ObjectId::new(self.object.mint())
    }

    fn mint_rbac(&mut self) -> RbacId {
        RbacId::new(self.rbac.mint())
    }

    fn mint_access(&mut self) -> AccessId {
        AccessId::new(self.access.mint())
    }
}

impl RoleStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the default store: one "Admin" role owned by the system actor.
    #[must_use]
    pub fn seeded(now: DateTime<Utc>) -> Self {
        let created_by = Actor::system().subject().to_owned();
        let mut store = Self::new();
        store.insert_details(RoleWithDetails {
            role: Role {
                role_id: RoleId::new(1),
                role_name: "Admin".to_owned(),
                description: "Admin role".to_owned(),
                created_by: created_by.clone(),
                created_at: now,
                updated_at: now,
                deleted_at: None,
            },
            objects: vec![AssignedObject {
                object_id: ObjectId::new(1),
                object_type: ObjectType::Uid,
                object_value: "alinurdinf".to_owned(),
                role_id: RoleId::new(1),
                created_at: now,
                updated_at: now,
                deleted_at: None,
            }],
            accesses: vec![AccessGroupDetails {
                rbac: AccessGroup {
                    rbac_id: RbacId::new(1),
                    role_id: RoleId::new(1),
                    app_id: AppId::Mf,
                    program_code: "ALL".to_owned(),
                    created_by: created_by.clone(),
                    created_at: now,
                    updated_at: now,
                    deleted_at: None,
                },
                access: vec![Permission {
                    access_id: AccessId::new(1),
                    rbac_id: RbacId::new(1),
                    access: AccessVerb::Create,
                    created_by,
                    created_at: now,
                    updated_at: now,
                    deleted_at: None,
                }],
            }],
        });
        store
    }

    /// Builds a store from nested role fixtures, validating every invariant.
    pub fn from_details(details: Vec<RoleWithDetails>) -> AppResult<Self> {
        let mut role_ids = HashSet::new();
        let mut object_ids = HashSet::new();
        let mut rbac_ids = HashSet::new();
        let mut access_ids = HashSet::new();

        for role in &details {
            let role_id = role.role.role_id;
            if !role_ids.insert(role_id) {
                return Err(AppError::Conflict(format!("duplicate role_id {role_id}")));
            }

            for object in &role.objects {
                if !object_ids.insert(object.object_id) {
                    return Err(AppError::Conflict(format!(
                        "duplicate object_id {}",
                        object.object_id
                    )));
                }
                if object.role_id != role_id {
                    return Err(AppError::Validation(format!(
                        "object {} references role {} but is nested under role {role_id}",
                        object.object_id, object.role_id
                    )));
                }
            }

            let mut pairs = HashSet::new();
            for group in &role.accesses {
                let rbac = &group.rbac;
                if !rbac_ids.insert(rbac.rbac_id) {
                    return Err(AppError::Conflict(format!(
                        "duplicate rbac_id {}",
                        rbac.rbac_id
                    )));
                }
                if rbac.role_id != role_id {
                    return Err(AppError::Validation(format!(
                        "access group {} references role {} but is nested under role {role_id}",
                        rbac.rbac_id, rbac.role_id
                    )));
                }
                if !pairs.insert((rbac.app_id, rbac.program_code.as_str())) {
                    return Err(AppError::Validation(format!(
                        "role {role_id} has more than one access group for {} - {}",
                        rbac.app_id.as_str(),
                        rbac.program_code
                    )));
                }
                if group.access.is_empty() {
                    return Err(AppError::Validation(format!(
                        "access group {} has no permissions",
                        rbac.rbac_id
                    )));
                }

                for permission in &group.access {
                    if !access_ids.insert(permission.access_id) {
                        return Err(AppError::Conflict(format!(
                            "duplicate access_id {}",
                            permission.access_id
                        )));
                    }
                    if permission.rbac_id != rbac.rbac_id {
                        return Err(AppError::Validation(format!(
                            "permission {} references access group {} but is nested under {}",
                            permission.access_id, permission.rbac_id, rbac.rbac_id
                        )));
                    }
                }
            }
        }

        let mut store = Self::new();
        for role in details {
            store.insert_details(role);
        }

        Ok(store)
    }

    /// Returns the number of roles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    /// Returns whether the store holds no roles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    /// Creates a role from a draft.
    ///
    /// Returns `Ok(None)` without touching the store when the draft has no
    /// name. Object rows without a selected type are not persisted. Fails with
    /// [`AppError::Internal`] when an identifier kind has no room left.
    pub fn add_role(
        &mut self,
        draft: &RoleDraft,
        created_by: &Actor,
        now: DateTime<Utc>,
    ) -> AppResult<Option<RoleWithDetails>> {
        if !draft.is_submittable() {
            return Ok(None);
        }

        let groups = draft
            .accesses
            .iter()
            .filter(|group| !group.permissions.is_empty());
        let mut cursor = self.cursor(
            draft
                .objects
                .iter()
                .filter(|object| object.object_type.is_some())
                .count(),
            groups.clone().count(),
            groups.map(|group| group.permissions.len()).sum(),
        )?;
        let role_id = cursor.mint_role();
        let created_by = created_by.subject().to_owned();

        let objects = draft
            .objects
            .iter()
            .filter_map(|object| {
                object.object_type.map(|object_type| AssignedObject {
                    object_id: cursor.mint_object(),
                    object_type,
                    object_value: object.object_value.clone(),
                    role_id,
                    created_at: now,
                    updated_at: now,
                    deleted_at: None,
                })
            })
            .collect();

        let accesses = draft
            .accesses
            .iter()
            .filter(|group| !group.permissions.is_empty())
            .map(|group| {
                let rbac_id = cursor.mint_rbac();
                AccessGroupDetails {
                    rbac: AccessGroup {
                        rbac_id,
                        role_id,
                        app_id: group.app_id,
                        program_code: group.program_code.clone(),
                        created_by: created_by.clone(),
                        created_at: now,
                        updated_at: now,
                        deleted_at: None,
                    },
                    access: group
                        .permissions
                        .iter()
                        .map(|verb| Permission {
                            access_id: cursor.mint_access(),
                            rbac_id,
                            access: *verb,
                            created_by: created_by.clone(),
                            created_at: now,
                            updated_at: now,
                            deleted_at: None,
                        })
                        .collect(),
                }
            })
            .collect();

        let details = RoleWithDetails {
            role: Role {
                role_id,
                role_name: draft.role_name.clone(),
                description: draft.description.clone(),
                created_by,
                created_at: now,
                updated_at: now,
                deleted_at: None,
            },
            objects,
            accesses,
        };

        self.insert_details(details.clone());
        Ok(Some(details))
    }

    /// Deep-copies a role under fresh identities.
    ///
    /// Returns `Ok(None)` without touching the store when `role_id` is
    /// unknown, and [`AppError::Internal`] when an identifier kind has no room
    /// left for the copy.
    pub fn clone_role(
        &mut self,
        role_id: RoleId,
        now: DateTime<Utc>,
    ) -> AppResult<Option<RoleWithDetails>> {
        let Some(source) = self.role(role_id) else {
            return Ok(None);
        };
        let mut cursor = self.cursor(
            source.objects.len(),
            source.accesses.len(),
            source.permissions().count(),
        )?;
        let new_role_id = cursor.mint_role();

        let objects = source
            .objects
            .into_iter()
            .map(|object| AssignedObject {
                object_id: cursor.mint_object(),
                role_id: new_role_id,
                created_at: now,
                updated_at: now,
                ..object
            })
            .collect();

        let accesses = source
            .accesses
            .into_iter()
            .map(|group| {
                let rbac_id = cursor.mint_rbac();
                AccessGroupDetails {
                    rbac: AccessGroup {
                        rbac_id,
                        role_id: new_role_id,
                        created_at: now,
                        updated_at: now,
                        ..group.rbac
                    },
                    access: group
                        .access
                        .into_iter()
                        .map(|permission| Permission {
                            access_id: cursor.mint_access(),
                            rbac_id,
                            created_at: now,
                            updated_at: now,
                            ..permission
                        })
                        .collect(),
                }
            })
            .collect();

        let details = RoleWithDetails {
            role: Role {
                role_id: new_role_id,
                role_name: format!("{}{COPY_SUFFIX}", source.role.role_name),
                created_at: now,
                updated_at: now,
                ..source.role
            },
            objects,
            accesses,
        };

        self.insert_details(details.clone());
        Ok(Some(details))
    }

    /// Returns one role with its objects and access groups.
    #[must_use]
    pub fn role(&self, role_id: RoleId) -> Option<RoleWithDetails> {
        self.roles
            .iter()
            .find(|role| role.role_id == role_id)
            .map(|role| self.project(role))
    }

    /// Returns every role in insertion order.
    #[must_use]
    pub fn roles(&self) -> Vec<RoleWithDetails> {
        self.roles.iter().map(|role| self.project(role)).collect()
    }

    /// Lazily yields roles whose name contains `term`, ignoring case.
    ///
    /// An empty term yields every role.
    pub fn search<'store>(
        &'store self,
        term: &str,
    ) -> impl Iterator<Item = RoleWithDetails> + use<'store> {
        let needle = term.to_lowercase();
        self.roles
            .iter()
            .filter(move |role| role.role_name.to_lowercase().contains(needle.as_str()))
            .map(move |role| self.project(role))
    }

    /// Returns all object assignments with the name of their role.
    #[must_use]
    pub fn object_assignments(&self) -> Vec<ObjectAssignment> {
        self.roles
            .iter()
            .flat_map(|role| {
                self.objects
                    .iter()
                    .filter(move |object| object.role_id == role.role_id)
                    .map(move |object| ObjectAssignment {
                        object: object.clone(),
                        role_name: role.role_name.clone(),
                    })
            })
            .collect()
    }

    /// Returns all access groups with the name of their role.
    #[must_use]
    pub fn access_rows(&self) -> Vec<AccessRow> {
        self.roles
            .iter()
            .flat_map(|role| {
                self.groups_of(role.role_id).map(move |group| AccessRow {
                    role_name: role.role_name.clone(),
                    rbac: group.rbac,
                    access: group.access,
                })
            })
            .collect()
    }

    fn cursor(&self, objects: usize, groups: usize, permissions: usize) -> AppResult<IdCursor> {
        Ok(IdCursor {
            role: IdBlock::reserve(
                "role",
                self.roles.iter().map(|role| role.role_id.value()),
                1,
            )?,
            object: IdBlock::reserve(
                "object",
                self.objects.iter().map(|object| object.object_id.value()),
                objects,
            )?,
            rbac: IdBlock::reserve(
                "access group",
                self.groups.iter().map(|group| group.rbac_id.value()),
                groups,
            )?,
            access: IdBlock::reserve(
                "permission",
                self.permissions
                    .iter()
                    .map(|permission| permission.access_id.value()),
                permissions,
            )?,
        })
    }

    fn insert_details(&mut self, details: RoleWithDetails) {
        self.roles.push(details.role);
        self.objects.extend(details.objects);
        for group in details.accesses {
            self.groups.push(group.rbac);
            self.permissions.extend(group.access);
        }
    }

    fn groups_of(&self, role_id: RoleId) -> impl Iterator<Item = AccessGroupDetails> + '_ {
        self.groups
            .iter()
            .filter(move |group| group.role_id == role_id)
            .map(move |group| AccessGroupDetails {
                rbac: group.clone(),
                access: self
                    .permissions
                    .iter()
                    .filter(|permission| permission.rbac_id == group.rbac_id)
                    .cloned()
                    .collect(),
            })
    }

    fn project(&self, role: &Role) -> RoleWithDetails {
        RoleWithDetails {
            role: role.clone(),
            objects: self
                .objects
                .iter()
                .filter(|object| object.role_id == role.role_id)
                .cloned()
                .collect(),
            accesses: self.groups_of(role.role_id).collect(),
        }
    }
}
