use axum::Json;
use axum::extract::{Extension, Path, Query, State};
use axum::http::StatusCode;

use rolekeeper_application::CreateRoleInput;
use rolekeeper_core::Actor;
use rolekeeper_domain::RoleId;

use crate::dto::{CreateRoleRequest, RoleDraftResponse, RoleListQuery, RoleResponse};
use crate::error::ApiResult;
use crate::state::AppState;

mod drafts;
mod lifecycle;

pub use drafts::role_draft_handler;
pub use lifecycle::{clone_role_handler, create_role_handler, get_role_handler, list_roles_handler};
