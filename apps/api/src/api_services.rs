use std::sync::Arc;

use chrono::Utc;
use rolekeeper_application::RoleAdminService;
use rolekeeper_core::{Actor, AppError};
use rolekeeper_domain::RoleStore;
use rolekeeper_infrastructure::{InMemoryRoleRepository, load_role_fixture};
use tracing::info;

use crate::api_config::ApiConfig;
use crate::state::AppState;

pub async fn build_app_state(config: &ApiConfig) -> Result<AppState, AppError> {
    let store = match config.role_seed_path.as_deref() {
        Some(path) => load_role_fixture(path).await?,
        None => {
            info!("seeding role store with the default Admin role");
            RoleStore::seeded(Utc::now())
        }
    };

    Ok(app_state_from_store(store, config.default_actor.clone()))
}

pub fn app_state_from_store(store: RoleStore, default_actor: Actor) -> AppState {
    let repository = Arc::new(InMemoryRoleRepository::new(store));

    AppState {
        role_admin_service: RoleAdminService::new(repository),
        default_actor,
    }
}
