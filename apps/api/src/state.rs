use rolekeeper_application::RoleAdminService;
use rolekeeper_core::Actor;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub role_admin_service: RoleAdminService,
    pub default_actor: Actor,
}
