use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
};

use sitequote_catalog::{EntryPatch, NewEntry};
use sitequote_core::EntryId;
use sitequote_store::CatalogSource;

use crate::app::{AppState, dto, errors};

/// The four offering collections in one payload. Never fails: if the live
/// store is unreachable the hardcoded defaults are served instead, flagged
/// via `source`.
pub async fn get_catalog(
    Extension(state): Extension<Arc<AppState>>,
) -> axum::response::Response {
    let (catalog, source) = state.catalog_provider.load().await;
    let source = match source {
        CatalogSource::Live => "live",
        CatalogSource::Fallback => "fallback",
    };
    Json(dto::CatalogResponse { source, catalog }).into_response()
}

pub async fn create_entry(
    Extension(state): Extension<Arc<AppState>>,
    Path(kind): Path<String>,
    Json(body): Json<NewEntry>,
) -> axum::response::Response {
    let kind = match errors::parse_catalog_kind(&kind) {
        Ok(k) => k,
        Err(resp) => return resp,
    };
    if let Err(e) = body.validate(kind) {
        return errors::domain_error_to_response(e);
    }

    match state.catalog_store.create(kind, &body).await {
        Ok(id) => (
            StatusCode::CREATED,
            Json(serde_json::json!({ "id": id.as_str() })),
        )
            .into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn update_entry(
    Extension(state): Extension<Arc<AppState>>,
    Path((kind, id)): Path<(String, String)>,
    Json(body): Json<EntryPatch>,
) -> axum::response::Response {
    let kind = match errors::parse_catalog_kind(&kind) {
        Ok(k) => k,
        Err(resp) => return resp,
    };
    let id: EntryId = match id.parse() {
        Ok(v) => v,
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid entry id");
        }
    };
    if let Err(e) = body.validate() {
        return errors::domain_error_to_response(e);
    }
    if body.included_page_ids.is_some() && !kind.has_included_pages() {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "validation_error",
            format!("includedPageIds is only valid for website types, not {kind}"),
        );
    }

    match state.catalog_store.update(kind, &id, &body).await {
        Ok(()) => (StatusCode::OK, Json(serde_json::json!({ "id": id.as_str() }))).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn delete_entry(
    Extension(state): Extension<Arc<AppState>>,
    Path((kind, id)): Path<(String, String)>,
) -> axum::response::Response {
    let kind = match errors::parse_catalog_kind(&kind) {
        Ok(k) => k,
        Err(resp) => return resp,
    };
    let id: EntryId = match id.parse() {
        Ok(v) => v,
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid entry id");
        }
    };

    match state.catalog_store.delete(kind, &id).await {
        Ok(()) => (StatusCode::OK, Json(serde_json::json!({ "id": id.as_str() }))).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}
