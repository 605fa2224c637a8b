use super::*;

pub async fn role_draft_handler(
    State(state): State<AppState>,
    Path(role_id): Path<u64>,
) -> ApiResult<Json<RoleDraftResponse>> {
    let draft = state
        .role_admin_service
        .draft_from_role(RoleId::new(role_id))
        .await?;

    Ok(Json(RoleDraftResponse::from(draft)))
}
