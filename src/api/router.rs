use axum::{
    middleware,
    routing::{get, put},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::api::middleware::{auth::require_identity, AppState};
use crate::api::{assignments, audit, users};

pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route(
            "/assignments",
            get(assignments::list_assignments).post(assignments::create_assignment),
        )
        .route(
            "/assignments/patient/:username",
            get(assignments::get_assignments_by_patient),
        )
        .route(
            "/assignments/advocate/:username",
            get(assignments::get_assignments_by_advocate),
        )
        .route(
            "/advocates/patient/:username",
            get(assignments::get_advocates_by_patient),
        )
        .route(
            "/assignments/permissions/:patient_username/:advocate_username",
            put(assignments::edit_permissions),
        )
        .route("/users", get(users::list_users).post(users::create_user))
        .route("/users/:username", get(users::get_user))
        .route("/audit/events", get(audit::list_events))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_identity,
        ));

    Router::new()
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(RequestBodyLimitLayer::new(1024 * 1024))
        .with_state(state)
}
