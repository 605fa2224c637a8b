use super::*;

pub async fn list_roles_handler(
    State(state): State<AppState>,
    Query(query): Query<RoleListQuery>,
) -> ApiResult<Json<Vec<RoleResponse>>> {
    let roles = state
        .role_admin_service
        .list_roles(query.search.as_deref())
        .await?
        .into_iter()
        .map(RoleResponse::from)
        .collect();

    Ok(Json(roles))
}

pub async fn get_role_handler(
    State(state): State<AppState>,
    Path(role_id): Path<u64>,
) -> ApiResult<Json<RoleResponse>> {
    let role = state
        .role_admin_service
        .get_role(RoleId::new(role_id))
        .await?;

    Ok(Json(RoleResponse::from(role)))
}

pub async fn create_role_handler(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Json(payload): Json<CreateRoleRequest>,
) -> ApiResult<(StatusCode, Json<RoleResponse>)> {
    let input = CreateRoleInput::try_from(payload)?;
    let role = state.role_admin_service.create_role(&actor, input).await?;

    Ok((StatusCode::CREATED, Json(RoleResponse::from(role))))
}

pub async fn clone_role_handler(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(role_id): Path<u64>,
) -> ApiResult<(StatusCode, Json<RoleResponse>)> {
    let role = state
        .role_admin_service
        .clone_role(&actor, RoleId::new(role_id))
        .await?;

    Ok((StatusCode::CREATED, Json(RoleResponse::from(role))))
}
