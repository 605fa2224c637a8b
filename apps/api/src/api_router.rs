use axum::Router;
use axum::middleware::from_fn_with_state;
use axum::routing::{get, post};
use rolekeeper_core::AppError;
use tower_http::trace::TraceLayer;

use crate::state::AppState;
use crate::{handlers, middleware};

mod cors;

pub fn build_router(app_state: AppState, frontend_url: &str) -> Result<Router, AppError> {
    let role_routes = Router::new()
        .route(
            "/api/roles",
            get(handlers::roles::list_roles_handler).post(handlers::roles::create_role_handler),
        )
        .route("/api/roles/{role_id}", get(handlers::roles::get_role_handler))
        .route(
            "/api/roles/{role_id}/clone",
            post(handlers::roles::clone_role_handler),
        )
        .route(
            "/api/roles/{role_id}/draft",
            get(handlers::roles::role_draft_handler),
        )
        .route(
            "/api/objects",
            get(handlers::views::list_object_assignments_handler),
        )
        .route("/api/access", get(handlers::views::list_access_rows_handler))
        .route("/api/catalog", get(handlers::catalog::catalog_handler))
        .route_layer(from_fn_with_state(
            app_state.clone(),
            middleware::resolve_actor,
        ));

    Ok(Router::new()
        .route("/health", get(handlers::health::health_handler))
        .merge(role_routes)
        .layer(cors::build_cors_layer(frontend_url)?)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state))
}

#[cfg(test)]
mod tests;
