//! Domain entities and invariants.

#![forbid(unsafe_code)]

mod catalog;
mod draft;
mod role;
mod store;

pub use catalog::{AccessVerb, AppId, ObjectType};
pub use draft::{AccessGroupDraft, COPY_SUFFIX, ObjectDraft, RoleDraft};
pub use role::{
    AccessGroup, AccessGroupDetails, AccessId, AssignedObject, ObjectId, Permission, RbacId,
    Role, RoleId, RoleWithDetails,
};
pub use store::{AccessRow, ObjectAssignment, RoleStore};
