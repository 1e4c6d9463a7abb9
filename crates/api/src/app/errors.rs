use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use sitequote_catalog::CatalogKind;
use sitequote_core::DomainError;
use sitequote_store::StoreError;

pub fn store_error_to_response(err: StoreError) -> axum::response::Response {
    match err {
        StoreError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "not found"),
        StoreError::Backend { status, message } => json_error(
            StatusCode::BAD_GATEWAY,
            "store_error",
            format!("backend returned {status}: {message}"),
        ),
        StoreError::Http(msg) => json_error(StatusCode::BAD_GATEWAY, "store_error", msg),
        StoreError::Decode(msg) => {
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "decode_error", msg)
        }
    }
}

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        DomainError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
        DomainError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "not found"),
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

pub fn parse_catalog_kind(s: &str) -> Result<CatalogKind, axum::response::Response> {
    s.parse().map_err(|_| {
        json_error(
            StatusCode::BAD_REQUEST,
            "validation_error",
            "kind must be one of: website-types, page-types, payment-systems, pro-services",
        )
    })
}
