use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::api::middleware::{ApiError, ApiResult, AppState, AuthenticatedUser};
use crate::models::audit::AuditEvent;

#[derive(Debug, Deserialize)]
pub struct EventListQuery {
    pub limit: Option<i64>,
}

pub async fn list_events(
    State(state): State<AppState>,
    axum::Extension(auth_user): axum::Extension<AuthenticatedUser>,
    Query(query): Query<EventListQuery>,
) -> ApiResult<Json<Vec<AuditEvent>>> {
    if !auth_user.is_admin() {
        return Err(ApiError::Forbidden("Requires the admin role".to_string()));
    }

    let limit = query.limit.unwrap_or(50).clamp(1, 500);
    let events = state.audit_service.recent_events(limit).await?;
    Ok(Json(events))
}
