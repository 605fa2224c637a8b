use axum::Json;
use axum::extract::State;

use crate::dto::RoleCatalogResponse;
use crate::state::AppState;

pub async fn catalog_handler(State(state): State<AppState>) -> Json<RoleCatalogResponse> {
    Json(RoleCatalogResponse::from(state.role_admin_service.catalog()))
}
