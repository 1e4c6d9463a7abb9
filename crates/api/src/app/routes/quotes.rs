use std::sync::Arc;

use axum::{
    Json,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;

use sitequote_pricing::build_quote;

use crate::app::{AppState, dto, errors};

/// Build and persist a quote from the visitor's selection.
///
/// The selection is priced against whatever catalog the provider hands back
/// (live or fallback), so a store outage on the read side never blocks a
/// submission. The write is one attempt; on failure the error surfaces and
/// nothing is recorded.
pub async fn submit_quote(
    Extension(state): Extension<Arc<AppState>>,
    Json(body): Json<dto::QuoteSubmissionRequest>,
) -> axum::response::Response {
    if let Err(e) = body.validate() {
        return errors::domain_error_to_response(e);
    }
    let selection = body.into_selection();
    let (catalog, source) = state.catalog_provider.load().await;
    let quote = build_quote(&catalog, &selection, Utc::now());
    let total = quote.total_price;

    match state.quote_store.save_quote(&quote).await {
        Ok(id) => {
            tracing::info!(
                quote_id = %id,
                total_price = total,
                catalog_source = source.as_str(),
                "quote submitted"
            );
            (
                StatusCode::CREATED,
                Json(serde_json::json!({
                    "id": id.as_str(),
                    "totalPrice": total,
                })),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "quote submission failed");
            errors::store_error_to_response(e)
        }
    }
}

/// All persisted quotes, newest first, for the admin dashboard.
pub async fn list_quotes(
    Extension(state): Extension<Arc<AppState>>,
) -> axum::response::Response {
    match state.quote_store.list_quotes().await {
        Ok(quotes) => Json(quotes).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}
