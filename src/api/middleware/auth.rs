use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::api::middleware::error::ApiError;
use crate::models::user::{Role, User};
use crate::services::{AssignmentService, AuditService, UserService};

#[derive(Clone)]
pub struct AppState {
    pub user_service: UserService,
    pub assignment_service: AssignmentService,
    pub audit_service: AuditService,
}

/// Authentication itself happens upstream (reverse proxy, SSO); requests
/// arrive with the authenticated username in `X-Remote-User`. This resolves
/// that username against the directory and attaches the acting identity.
pub async fn require_identity(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let username = request
        .headers()
        .get("X-Remote-User")
        .and_then(|h| h.to_str().ok())
        .ok_or(ApiError::Unauthorized)?
        .to_string();

    let user = state
        .user_service
        .find_by_username(&username)
        .await?
        .ok_or(ApiError::Unauthorized)?;

    request.extensions_mut().insert(AuthenticatedUser { user });

    Ok(next.run(request).await)
}

#[derive(Clone)]
pub struct AuthenticatedUser {
    pub user: User,
}

impl AuthenticatedUser {
    pub fn username(&self) -> &str {
        &self.user.username
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.user.has_role(role)
    }

    pub fn is_admin(&self) -> bool {
        self.user.has_role(Role::Admin)
    }
}
