use serde::{Deserialize, Serialize};

use crate::{AccessVerb, AppId, ObjectType, RoleWithDetails};

/// Suffix appended to the name of a copied role.
pub const COPY_SUFFIX: &str = " (Copy)";

/// Object row of a role draft. The type stays unset until the operator picks one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectDraft {
    /// Selected object type.
    pub object_type: Option<ObjectType>,
    /// Entered object value.
    pub object_value: String,
}

/// Access group of a role draft. Never holds an empty permission list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessGroupDraft {
    /// Application of the group.
    pub app_id: AppId,
    /// Program code of the group.
    pub program_code: String,
    /// Permission verbs in the order they were added.
    pub permissions: Vec<AccessVerb>,
}

/// In-progress role form state.
///
/// Every editing operation is a total function: indices out of range and
/// incomplete access entries leave the draft untouched and report `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleDraft {
    /// Name of the role to create.
    pub role_name: String,
    /// Optional description.
    pub description: String,
    /// Object rows.
    pub objects: Vec<ObjectDraft>,
    /// Access groups keyed by application and program code.
    pub accesses: Vec<AccessGroupDraft>,
}

impl RoleDraft {
    /// Creates an empty draft with the given name and description.
    #[must_use]
    pub fn new(role_name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            role_name: role_name.into(),
            description: description.into(),
            objects: Vec::new(),
            accesses: Vec::new(),
        }
    }

    /// Prefills a draft from an existing role for the copy flow.
    #[must_use]
    pub fn from_role(role: &RoleWithDetails) -> Self {
        Self {
            role_name: format!("{}{COPY_SUFFIX}", role.role.role_name),
            description: role.role.description.clone(),
            objects: role
                .objects
                .iter()
                .map(|object| ObjectDraft {
                    object_type: Some(object.object_type),
                    object_value: object.object_value.clone(),
                })
                .collect(),
            accesses: role
                .accesses
                .iter()
                .map(|group| AccessGroupDraft {
                    app_id: group.rbac.app_id,
                    program_code: group.rbac.program_code.clone(),
                    permissions: group.access.iter().map(|entry| entry.access).collect(),
                })
                .collect(),
        }
    }

    /// Returns whether the draft may be submitted as a new role.
    #[must_use]
    pub fn is_submittable(&self) -> bool {
        !self.role_name.is_empty()
    }

    /// Appends an empty object row.
    pub fn add_object(&mut self) {
        self.objects.push(ObjectDraft::default());
    }

    /// Appends a filled object row.
    pub fn push_object(&mut self, object_type: ObjectType, object_value: impl Into<String>) {
        self.objects.push(ObjectDraft {
            object_type: Some(object_type),
            object_value: object_value.into(),
        });
    }

    /// Sets the type of the object row at `index`.
    pub fn set_object_type(&mut self, index: usize, object_type: ObjectType) -> bool {
        match self.objects.get_mut(index) {
            Some(object) => {
                object.object_type = Some(object_type);
                true
            }
            None => false,
        }
    }

    /// Sets the value of the object row at `index`.
    pub fn set_object_value(&mut self, index: usize, object_value: impl Into<String>) -> bool {
        match self.objects.get_mut(index) {
            Some(object) => {
                object.object_value = object_value.into();
                true
            }
            None => false,
        }
    }

    /// Removes the object row at `index`.
    pub fn remove_object(&mut self, index: usize) -> bool {
        if index >= self.objects.len() {
            return false;
        }

        self.objects.remove(index);
        true
    }

    /// Adds a permission to the group matching `app_id` and `program_code`,
    /// creating the group when no exact match exists.
    ///
    /// Does nothing when any of the three inputs is missing or empty.
    pub fn add_permission(
        &mut self,
        app_id: Option<AppId>,
        program_code: &str,
        permission: Option<AccessVerb>,
    ) -> bool {
        let (Some(app_id), Some(permission)) = (app_id, permission) else {
            return false;
        };
        if program_code.is_empty() {
            return false;
        }

        match self
            .accesses
            .iter_mut()
            .find(|group| group.app_id == app_id && group.program_code == program_code)
        {
            Some(group) => group.permissions.push(permission),
            None => self.accesses.push(AccessGroupDraft {
                app_id,
                program_code: program_code.to_owned(),
                permissions: vec![permission],
            }),
        }

        true
    }

    /// Removes one permission and drops its group once the group is empty.
    pub fn remove_permission(&mut self, group_index: usize, permission_index: usize) -> bool {
        let Some(group) = self.accesses.get_mut(group_index) else {
            return false;
        };
        if permission_index >= group.permissions.len() {
            return false;
        }

        group.permissions.remove(permission_index);
        if group.permissions.is_empty() {
            self.accesses.remove(group_index);
        }

        true
    }

    /// Removes a whole access group.
    pub fn remove_access_group(&mut self, group_index: usize) -> bool {
        if group_index >= self.accesses.len() {
            return false;
        }

        self.accesses.remove(group_index);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::{AccessGroupDraft, ObjectDraft, RoleDraft};
    use crate::{AccessVerb, AppId, ObjectType};

    fn draft_with_group() -> RoleDraft {
        let mut draft = RoleDraft::new("Editor", "");
        assert!(draft.add_permission(Some(AppId::Mf), "ALL", Some(AccessVerb::Read)));
        draft
    }

    #[test]
    fn object_rows_are_appended_and_spliced() {
        let mut draft = RoleDraft::default();
        draft.add_object();
        draft.push_object(ObjectType::Team, "blue");
        assert!(draft.set_object_type(0, ObjectType::Uid));
        assert!(draft.set_object_value(0, "jdoe"));

        assert!(draft.remove_object(1));
        assert_eq!(
            draft.objects,
            vec![ObjectDraft {
                object_type: Some(ObjectType::Uid),
                object_value: "jdoe".to_owned(),
            }]
        );
    }

    #[test]
    fn out_of_range_object_edits_are_ignored() {
        let mut draft = RoleDraft::default();
        assert!(!draft.remove_object(0));
        assert!(!draft.set_object_type(3, ObjectType::Team));
        assert!(!draft.set_object_value(3, "x"));
        assert!(draft.objects.is_empty());
    }

    #[test]
    fn permission_for_existing_pair_extends_that_group() {
        let mut draft = draft_with_group();
        assert!(draft.add_permission(Some(AppId::Mf), "ALL", Some(AccessVerb::Update)));

        assert_eq!(draft.accesses.len(), 1);
        assert_eq!(
            draft.accesses[0].permissions,
            vec![AccessVerb::Read, AccessVerb::Update]
        );
    }

    #[test]
    fn permission_for_new_pair_creates_group() {
        let mut draft = draft_with_group();
        assert!(draft.add_permission(Some(AppId::Mf), "PAYROLL", Some(AccessVerb::Open)));
        assert!(draft.add_permission(Some(AppId::Hris), "ALL", Some(AccessVerb::Open)));

        assert_eq!(draft.accesses.len(), 3);
        assert_eq!(
            draft.accesses[2],
            AccessGroupDraft {
                app_id: AppId::Hris,
                program_code: "ALL".to_owned(),
                permissions: vec![AccessVerb::Open],
            }
        );
    }

    #[test]
    fn program_code_match_is_exact() {
        let mut draft = draft_with_group();
        assert!(draft.add_permission(Some(AppId::Mf), "all", Some(AccessVerb::Read)));
        assert_eq!(draft.accesses.len(), 2);
    }

    #[test]
    fn incomplete_access_entry_is_ignored() {
        let mut draft = draft_with_group();
        let before = draft.clone();

        assert!(!draft.add_permission(None, "ALL", Some(AccessVerb::Read)));
        assert!(!draft.add_permission(Some(AppId::Mf), "", Some(AccessVerb::Read)));
        assert!(!draft.add_permission(Some(AppId::Mf), "ALL", None));

        assert_eq!(draft, before);
    }

    #[test]
    fn removing_last_permission_removes_group() {
        let mut draft = draft_with_group();
        assert!(draft.remove_permission(0, 0));
        assert!(draft.accesses.is_empty());
    }

    #[test]
    fn removing_other_permission_keeps_order() {
        let mut draft = draft_with_group();
        for verb in [AccessVerb::Create, AccessVerb::Update, AccessVerb::Delete] {
            assert!(draft.add_permission(Some(AppId::Mf), "ALL", Some(verb)));
        }

        assert!(draft.remove_permission(0, 1));
        assert_eq!(
            draft.accesses[0].permissions,
            vec![AccessVerb::Read, AccessVerb::Update, AccessVerb::Delete]
        );
    }

    #[test]
    fn removing_missing_permission_is_ignored() {
        let mut draft = draft_with_group();
        assert!(!draft.remove_permission(0, 5));
        assert!(!draft.remove_permission(4, 0));
        assert!(!draft.remove_access_group(2));
        assert_eq!(draft.accesses[0].permissions.len(), 1);
    }

    #[test]
    fn whitespace_program_code_is_kept_verbatim() {
        let mut draft = draft_with_group();
        assert!(draft.add_permission(Some(AppId::Mf), " ", Some(AccessVerb::Read)));
        assert_eq!(draft.accesses.len(), 2);
        assert_eq!(draft.accesses[1].program_code, " ");
    }

    #[test]
    fn only_empty_name_is_not_submittable() {
        assert!(!RoleDraft::new("", "desc").is_submittable());
        assert!(RoleDraft::new("  ", "").is_submittable());
        assert!(RoleDraft::new("Viewer", "").is_submittable());
    }
}
