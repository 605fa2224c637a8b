use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;
use rolekeeper_application::RoleRepository;
use rolekeeper_core::{Actor, AppError};
use rolekeeper_domain::{AccessVerb, AppId, RoleDraft, RoleId, RoleStore, RoleWithDetails};

use super::InMemoryRoleRepository;

fn actor() -> Actor {
    Actor::new("admin").unwrap_or_else(|_| unreachable!())
}

#[tokio::test]
async fn create_and_list_roles() {
    let repository = InMemoryRoleRepository::new(RoleStore::seeded(Utc::now()));
    let mut draft = RoleDraft::new("Editor", "");
    assert!(draft.add_permission(Some(AppId::Hris), "LEAVE", Some(AccessVerb::Approve)));

    let created = repository.create_role(&draft, &actor(), Utc::now()).await;
    assert!(created.is_ok());
    assert!(created.unwrap_or_default().is_some());

    let listed = repository.list_roles(None).await.unwrap_or_default();
    assert_eq!(listed.len(), 2);

    let filtered = repository.list_roles(Some("edit")).await.unwrap_or_default();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].accesses[0].rbac.app_id, AppId::Hris);
}

#[tokio::test]
async fn declined_create_is_reported_as_none() {
    let repository = InMemoryRoleRepository::new(RoleStore::seeded(Utc::now()));

    let created = repository
        .create_role(&RoleDraft::default(), &actor(), Utc::now())
        .await;

    assert!(matches!(created, Ok(None)));
    assert_eq!(repository.list_roles(None).await.unwrap_or_default().len(), 1);
}

#[tokio::test]
async fn concurrent_clones_never_share_identities() {
    let repository = Arc::new(InMemoryRoleRepository::new(RoleStore::seeded(Utc::now())));

    let mut handles = Vec::new();
    for _ in 0..16 {
        let repository = repository.clone();
        handles.push(tokio::spawn(async move {
            repository.clone_role(RoleId::new(1), Utc::now()).await
        }));
    }
    for handle in handles {
        let result = handle.await;
        assert!(matches!(result, Ok(Ok(Some(_)))));
    }

    let roles = repository.list_roles(None).await.unwrap_or_default();
    assert_eq!(roles.len(), 17);

    let role_ids: HashSet<u64> = roles.iter().map(|role| role.role.role_id.value()).collect();
    let access_ids: HashSet<u64> = roles
        .iter()
        .flat_map(|role| role.permissions().map(|entry| entry.access_id.value()))
        .collect();
    assert_eq!(role_ids.len(), 17);
    assert_eq!(access_ids.len(), 17);
}

#[tokio::test]
async fn listings_follow_role_order() {
    let repository = InMemoryRoleRepository::new(RoleStore::seeded(Utc::now()));
    assert!(matches!(
        repository.clone_role(RoleId::new(1), Utc::now()).await,
        Ok(Some(_))
    ));

    let objects = repository.list_object_assignments().await.unwrap_or_default();
    let access = repository.list_access_rows().await.unwrap_or_default();

    assert_eq!(objects[0].role_name, "Admin");
    assert_eq!(objects[1].role_name, "Admin (Copy)");
    assert_eq!(access[1].rbac.rbac_id.value(), 2);
}

#[tokio::test]
async fn create_after_largest_role_id_reports_internal_error() {
    let mut details: Vec<RoleWithDetails> = RoleStore::seeded(Utc::now()).roles();
    details[0].role.role_id = RoleId::new(u64::MAX);
    for object in &mut details[0].objects {
        object.role_id = RoleId::new(u64::MAX);
    }
    for group in &mut details[0].accesses {
        group.rbac.role_id = RoleId::new(u64::MAX);
    }
    let store = RoleStore::from_details(details);
    assert!(store.is_ok());
    let repository = InMemoryRoleRepository::new(store.unwrap_or_default());

    let created = repository
        .create_role(&RoleDraft::new("Editor", ""), &actor(), Utc::now())
        .await;

    assert!(matches!(created, Err(AppError::Internal(_))));
    assert_eq!(repository.list_roles(None).await.unwrap_or_default().len(), 1);
}
