use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;

use sitequote_applications::{ApplicationStatus, NewApplication};
use sitequote_core::ApplicationId;

use crate::app::{AppState, dto, errors};

pub async fn submit_application(
    Extension(state): Extension<Arc<AppState>>,
    Json(body): Json<NewApplication>,
) -> axum::response::Response {
    if let Err(e) = body.validate() {
        return errors::domain_error_to_response(e);
    }

    match state
        .application_store
        .save_application(&body, Utc::now())
        .await
    {
        Ok(id) => {
            tracing::info!(application_id = %id, role = %body.role, "application submitted");
            (
                StatusCode::CREATED,
                Json(serde_json::json!({ "id": id.as_str() })),
            )
                .into_response()
        }
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn list_applications(
    Extension(state): Extension<Arc<AppState>>,
) -> axum::response::Response {
    match state.application_store.list_applications().await {
        Ok(applications) => Json(applications).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn set_application_status(
    Extension(state): Extension<Arc<AppState>>,
    Path(id): Path<String>,
    Json(body): Json<dto::StatusUpdateRequest>,
) -> axum::response::Response {
    let id: ApplicationId = match id.parse() {
        Ok(v) => v,
        Err(_) => {
            return errors::json_error(
                StatusCode::BAD_REQUEST,
                "invalid_id",
                "invalid application id",
            );
        }
    };
    let status: ApplicationStatus = match body.status.parse() {
        Ok(s) => s,
        Err(_) => {
            return errors::json_error(
                StatusCode::BAD_REQUEST,
                "validation_error",
                "status must be one of: pending, accepted, rejected",
            );
        }
    };

    match state
        .application_store
        .set_application_status(&id, status)
        .await
    {
        Ok(()) => (
            StatusCode::OK,
            Json(serde_json::json!({ "id": id.as_str(), "status": status.as_str() })),
        )
            .into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}
