use axum::Json;
use axum::extract::State;

use crate::dto::{AccessRowResponse, ObjectAssignmentResponse};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn list_object_assignments_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<ObjectAssignmentResponse>>> {
    let rows = state
        .role_admin_service
        .list_object_assignments()
        .await?
        .into_iter()
        .map(ObjectAssignmentResponse::from)
        .collect();

    Ok(Json(rows))
}

pub async fn list_access_rows_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<AccessRowResponse>>> {
    let rows = state
        .role_admin_service
        .list_access_rows()
        .await?
        .into_iter()
        .map(AccessRowResponse::from)
        .collect();

    Ok(Json(rows))
}
