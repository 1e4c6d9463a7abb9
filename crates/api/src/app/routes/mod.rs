use axum::{
    Router,
    routing::{get, post, put},
};

pub mod applications;
pub mod catalog;
pub mod quotes;

/// Routes open to the marketing site itself.
pub fn public_router() -> Router {
    Router::new()
        .route("/catalog", get(catalog::get_catalog))
        .route("/quotes", post(quotes::submit_quote))
        .route("/applications", post(applications::submit_application))
}

/// Routes behind the admin bearer token (the caller nests these under the
/// auth middleware).
pub fn admin_router() -> Router {
    Router::new()
        .route("/catalog/:kind", post(catalog::create_entry))
        .route(
            "/catalog/:kind/:id",
            put(catalog::update_entry).delete(catalog::delete_entry),
        )
        .route("/quotes", get(quotes::list_quotes))
        .route("/applications", get(applications::list_applications))
        .route(
            "/applications/:id/status",
            post(applications::set_application_status),
        )
}
