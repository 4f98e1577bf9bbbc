use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::api::middleware::{ApiError, ApiResult, AppState, AuthenticatedUser};
use crate::models::assignment::{AdvocateAssignment, CreateAssignmentRequest};
use crate::models::user::{Role, User};

async fn resolve_user(state: &AppState, username: &str) -> ApiResult<User> {
    state
        .user_service
        .find_by_username(username)
        .await?
        .ok_or_else(|| {
            ApiError::NotFound(format!("Could not find a user with username {}", username))
        })
}

pub async fn list_assignments(
    State(state): State<AppState>,
    axum::Extension(auth_user): axum::Extension<AuthenticatedUser>,
) -> ApiResult<Json<Vec<AdvocateAssignment>>> {
    let assignments = state
        .assignment_service
        .find_all(auth_user.username())
        .await?;
    Ok(Json(assignments))
}

pub async fn get_assignments_by_patient(
    State(state): State<AppState>,
    axum::Extension(auth_user): axum::Extension<AuthenticatedUser>,
    Path(username): Path<String>,
) -> ApiResult<Json<Vec<AdvocateAssignment>>> {
    let patient = resolve_user(&state, &username).await?;
    let assignments = state
        .assignment_service
        .find_by_patient(&patient, auth_user.username())
        .await?;
    Ok(Json(assignments))
}

pub async fn get_assignments_by_advocate(
    State(state): State<AppState>,
    axum::Extension(auth_user): axum::Extension<AuthenticatedUser>,
    Path(username): Path<String>,
) -> ApiResult<Json<Vec<AdvocateAssignment>>> {
    let advocate = resolve_user(&state, &username).await?;
    let assignments = state
        .assignment_service
        .find_by_advocate(&advocate, auth_user.username())
        .await?;
    Ok(Json(assignments))
}

/// Just the advocate usernames linked to a patient, for pickers that do not
/// need the full records.
pub async fn get_advocates_by_patient(
    State(state): State<AppState>,
    axum::Extension(auth_user): axum::Extension<AuthenticatedUser>,
    Path(username): Path<String>,
) -> ApiResult<Json<Vec<String>>> {
    let patient = resolve_user(&state, &username).await?;
    let assignments = state
        .assignment_service
        .find_by_patient(&patient, auth_user.username())
        .await?;

    let advocates = assignments
        .iter()
        .map(|a| a.advocate().username.clone())
        .collect();
    Ok(Json(advocates))
}

pub async fn create_assignment(
    State(state): State<AppState>,
    axum::Extension(auth_user): axum::Extension<AuthenticatedUser>,
    Json(request): Json<CreateAssignmentRequest>,
) -> ApiResult<(StatusCode, Json<AdvocateAssignment>)> {
    if !auth_user.is_admin() {
        return Err(ApiError::Forbidden("Requires the admin role".to_string()));
    }

    let patient = resolve_user(&state, &request.patient_username).await?;
    let advocate = resolve_user(&state, &request.advocate_username).await?;

    let assignment = state
        .assignment_service
        .create(patient, advocate, auth_user.username())
        .await?;
    Ok((StatusCode::CREATED, Json(assignment)))
}

/// Overwrites the grant triple for a (patient, advocate) pair. Body is an
/// ordered list `[office_visit, billing, prescription]`.
pub async fn edit_permissions(
    State(state): State<AppState>,
    axum::Extension(auth_user): axum::Extension<AuthenticatedUser>,
    Path((patient_username, advocate_username)): Path<(String, String)>,
    Json(permissions): Json<Vec<bool>>,
) -> ApiResult<Json<AdvocateAssignment>> {
    if !auth_user.is_admin() && !auth_user.has_role(Role::Patient) {
        return Err(ApiError::Forbidden(
            "Requires the admin or patient role".to_string(),
        ));
    }

    let patient = resolve_user(&state, &patient_username).await?;
    let advocate = resolve_user(&state, &advocate_username).await?;

    let assignment = state
        .assignment_service
        .find_pair(&patient, &advocate)
        .await?
        .ok_or_else(|| {
            ApiError::NotFound(format!(
                "Could not find an assignment between {} and {}",
                advocate_username, patient_username
            ))
        })?;

    let updated = state
        .assignment_service
        .set_permissions(&assignment, &permissions, auth_user.username())
        .await?;
    Ok(Json(updated))
}
