use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use rolekeeper_core::{Actor, AppError};

use crate::error::ApiResult;
use crate::state::AppState;

/// Request header naming the operator behind a request.
pub const ACTOR_HEADER: &str = "x-rolekeeper-actor";

pub async fn resolve_actor(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> ApiResult<Response> {
    let actor = match request.headers().get(ACTOR_HEADER) {
        Some(value) => {
            let subject = value.to_str().map_err(|_| {
                AppError::Validation(format!("{ACTOR_HEADER} must be valid UTF-8"))
            })?;

            if subject.trim().is_empty() {
                state.default_actor.clone()
            } else {
                Actor::new(subject.trim())?
            }
        }
        None => state.default_actor.clone(),
    };

    request.extensions_mut().insert(actor);
    Ok(next.run(request).await)
}
