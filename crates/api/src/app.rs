use std::sync::Arc;

use axum::{Router, http::StatusCode, routing::get};

use sitequote_store::{
    ApplicationStore, CatalogProvider, CatalogStore, FirestoreStore, MemoryStore, QuoteStore,
};

use crate::config::Config;
use crate::middleware::AdminAuth;

pub mod dto;
pub mod errors;
pub mod routes;

/// Shared handler state: the three collaborator stores plus the catalog
/// provider owning the default-fallback policy.
pub struct AppState {
    pub catalog_store: Arc<dyn CatalogStore>,
    pub quote_store: Arc<dyn QuoteStore>,
    pub application_store: Arc<dyn ApplicationStore>,
    pub catalog_provider: CatalogProvider,
}

impl AppState {
    /// Wire every store role to one backend instance.
    pub fn from_backend<S>(backend: Arc<S>) -> Self
    where
        S: CatalogStore + QuoteStore + ApplicationStore + 'static,
    {
        let catalog_store: Arc<dyn CatalogStore> = backend.clone();
        Self {
            catalog_provider: CatalogProvider::new(catalog_store.clone()),
            catalog_store,
            quote_store: backend.clone(),
            application_store: backend,
        }
    }
}

pub fn build_app(config: Config) -> Router {
    let state = match &config.firestore {
        Some(fs) => {
            let mut store = FirestoreStore::new(&fs.project);
            if let Some(token) = &fs.token {
                store = store.with_token(token);
            }
            tracing::info!(project = %fs.project, "using hosted document store");
            AppState::from_backend(Arc::new(store))
        }
        None => {
            // Dev mode: in-memory store pre-seeded with the default catalog.
            let seeded = MemoryStore::seeded(&sitequote_catalog::default_catalog());
            AppState::from_backend(Arc::new(seeded))
        }
    };

    build_app_with_state(Arc::new(state), AdminAuth::new(config.admin_token))
}

/// Assemble the router around explicit state (tests inject their own stores).
pub fn build_app_with_state(state: Arc<AppState>, auth: AdminAuth) -> Router {
    let admin = routes::admin_router().layer(axum::middleware::from_fn_with_state(
        auth,
        crate::middleware::admin_middleware,
    ));

    Router::new()
        .route("/health", get(health))
        .nest("/api", routes::public_router().nest("/admin", admin))
        .layer(axum::Extension(state))
}

async fn health() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, header};
    use chrono::Utc;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use sitequote_applications::{Application, ApplicationStatus, NewApplication};
    use sitequote_catalog::{Catalog, CatalogEntry, CatalogKind, EntryPatch, NewEntry};
    use sitequote_core::{ApplicationId, EntryId, QuoteId};
    use sitequote_pricing::Quote;
    use sitequote_store::{PersistedQuote, StoreError, StoreResult};

    const ADMIN_TOKEN: &str = "test-admin-token";

    fn test_catalog() -> Catalog {
        Catalog::new(
            vec![
                CatalogEntry::new("basic", "Basic Company", 7000).with_included_pages(["about"]),
                CatalogEntry::new("ecommerce", "E-commerce website", 20000)
                    .with_included_pages(["about", "contact"]),
            ],
            vec![
                CatalogEntry::new("about", "About Us", 1000),
                CatalogEntry::new("contact", "Contact Us", 1000),
                CatalogEntry::new("service", "Service Page", 1000),
            ],
            vec![
                CatalogEntry::new("chapa", "Chapa", 10000),
                CatalogEntry::new("telebirr", "Tele Birr", 10000),
            ],
            vec![CatalogEntry::new("seo", "SEO", 4000)],
        )
    }

    fn test_app() -> Router {
        let backend = Arc::new(MemoryStore::seeded(&test_catalog()));
        build_app_with_state(
            Arc::new(AppState::from_backend(backend)),
            AdminAuth::new(ADMIN_TOKEN),
        )
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn get(path: &str) -> Request<Body> {
        Request::builder().uri(path).body(Body::empty()).unwrap()
    }

    fn post_json(path: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn admin(mut request: Request<Body>, token: &str) -> Request<Body> {
        request.headers_mut().insert(
            header::AUTHORIZATION,
            format!("Bearer {token}").parse().unwrap(),
        );
        request
    }

    #[tokio::test]
    async fn health_is_open() {
        let (status, _) = send(&test_app(), get("/health")).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn catalog_endpoint_serves_the_live_snapshot() {
        let (status, body) = send(&test_app(), get("/api/catalog")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["source"], "live");
        assert_eq!(body["websiteTypes"].as_array().unwrap().len(), 2);
        assert_eq!(body["pageTypes"].as_array().unwrap().len(), 3);
        // Name-ordered: Basic Company before E-commerce website.
        assert_eq!(body["websiteTypes"][0]["name"], "Basic Company");
    }

    #[tokio::test]
    async fn quote_submission_prices_included_pages_for_free() {
        // basic (7000, includes about) + contact (1000) = 8000.
        let app = test_app();
        let (status, body) = send(
            &app,
            post_json(
                "/api/quotes",
                json!({
                    "websiteType": "basic",
                    "selectedPages": ["about", "contact"],
                }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["totalPrice"], 8000);
        assert!(body["id"].is_string());

        let (_, listed) = send(
            &app,
            admin(get("/api/admin/quotes"), ADMIN_TOKEN),
        )
        .await;
        let quotes = listed.as_array().unwrap();
        assert_eq!(quotes.len(), 1);
        assert_eq!(quotes[0]["totalPrice"], 8000);
        assert_eq!(quotes[0]["status"], "pending");
        assert_eq!(quotes[0]["includedPages"][0]["name"], "About Us");
        assert_eq!(quotes[0]["additionalPages"][0]["name"], "Contact Us");
    }

    #[tokio::test]
    async fn quote_submission_without_website_type_sums_the_rest() {
        // 0 + 2x10000 + 4000 + 2x1000 = 26000.
        let (status, body) = send(
            &test_app(),
            post_json(
                "/api/quotes",
                json!({
                    "paymentSystems": ["chapa", "telebirr"],
                    "proServices": ["seo"],
                    "extraPageCount": 2,
                    "customPages": [
                        { "title": "Gallery", "description": "Photo gallery" },
                    ],
                }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["totalPrice"], 26000);
    }

    #[tokio::test]
    async fn oversized_extra_page_count_is_rejected() {
        // The count sizes a server-side allocation; an unauthenticated caller
        // must not be able to request an arbitrary one.
        let (status, body) = send(
            &test_app(),
            post_json("/api/quotes", json!({ "extraPageCount": 4_294_967_295u32 })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "validation_error");
    }

    #[tokio::test]
    async fn empty_quote_submission_is_tolerated() {
        let (status, body) = send(&test_app(), post_json("/api/quotes", json!({}))).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["totalPrice"], 0);
    }

    #[tokio::test]
    async fn admin_routes_reject_missing_or_wrong_tokens() {
        let app = test_app();

        let (status, _) = send(&app, get("/api/admin/quotes")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, _) = send(&app, admin(get("/api/admin/quotes"), "wrong-token")).await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let (status, _) = send(&app, admin(get("/api/admin/quotes"), ADMIN_TOKEN)).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn admin_catalog_crud_round_trip() {
        let app = test_app();

        let (status, body) = send(
            &app,
            admin(
                post_json(
                    "/api/admin/catalog/pro-services",
                    json!({ "name": "Booking", "price": 5000 }),
                ),
                ADMIN_TOKEN,
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let id = body["id"].as_str().unwrap().to_string();

        let (status, _) = send(
            &app,
            admin(
                Request::builder()
                    .method("PUT")
                    .uri(format!("/api/admin/catalog/pro-services/{id}"))
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(json!({ "price": 5500 }).to_string()))
                    .unwrap(),
                ADMIN_TOKEN,
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (_, catalog) = send(&app, get("/api/catalog")).await;
        let services = catalog["proServices"].as_array().unwrap();
        let booking = services.iter().find(|s| s["name"] == "Booking").unwrap();
        assert_eq!(booking["price"], 5500);

        let (status, _) = send(
            &app,
            admin(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/api/admin/catalog/pro-services/{id}"))
                    .body(Body::empty())
                    .unwrap(),
                ADMIN_TOKEN,
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn admin_catalog_rejects_bad_kind_and_blank_name() {
        let app = test_app();

        let (status, body) = send(
            &app,
            admin(
                post_json("/api/admin/catalog/gift-cards", json!({ "name": "X", "price": 1 })),
                ADMIN_TOKEN,
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "validation_error");

        let (status, _) = send(
            &app,
            admin(
                post_json("/api/admin/catalog/page-types", json!({ "name": "  ", "price": 1 })),
                ADMIN_TOKEN,
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn application_lifecycle_submit_list_review() {
        let app = test_app();

        let (status, body) = send(
            &app,
            post_json(
                "/api/applications",
                json!({
                    "name": "Abebe Kebede",
                    "address": "Addis Ababa",
                    "phone": "+251911000000",
                    "email": "abebe@example.com",
                    "role": "Frontend Developer",
                    "coverLetter": "Hello",
                    "resume": "cv.pdf",
                    "resumeData": "data:application/pdf;base64,JVBERi0x",
                }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let id = body["id"].as_str().unwrap().to_string();

        let (status, body) = send(
            &app,
            admin(
                post_json(
                    &format!("/api/admin/applications/{id}/status"),
                    json!({ "status": "accepted" }),
                ),
                ADMIN_TOKEN,
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK, "{body}");

        let (_, listed) = send(&app, admin(get("/api/admin/applications"), ADMIN_TOKEN)).await;
        assert_eq!(listed[0]["status"], "accepted");
        // The uploaded resume is available verbatim to the review flow.
        assert_eq!(listed[0]["resume"], "cv.pdf");
        assert_eq!(listed[0]["resumeData"], "data:application/pdf;base64,JVBERi0x");
    }

    #[tokio::test]
    async fn application_with_bad_email_is_rejected() {
        let (status, body) = send(
            &test_app(),
            post_json(
                "/api/applications",
                json!({
                    "name": "Abebe Kebede",
                    "address": "",
                    "phone": "",
                    "email": "not-an-email",
                    "role": "Frontend Developer",
                    "coverLetter": "",
                }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "validation_error");
    }

    /// Backend stub: catalog reads fail, quote writes fail with a fixed
    /// message, applications unsupported.
    struct FailingBackend;

    #[async_trait]
    impl CatalogStore for FailingBackend {
        async fn list(&self, _kind: CatalogKind) -> StoreResult<Vec<CatalogEntry>> {
            Err(StoreError::Http("connection refused".to_string()))
        }
        async fn create(&self, _kind: CatalogKind, _entry: &NewEntry) -> StoreResult<EntryId> {
            Err(StoreError::Http("connection refused".to_string()))
        }
        async fn update(
            &self,
            _kind: CatalogKind,
            _id: &EntryId,
            _patch: &EntryPatch,
        ) -> StoreResult<()> {
            Err(StoreError::Http("connection refused".to_string()))
        }
        async fn delete(&self, _kind: CatalogKind, _id: &EntryId) -> StoreResult<()> {
            Err(StoreError::Http("connection refused".to_string()))
        }
    }

    #[async_trait]
    impl QuoteStore for FailingBackend {
        async fn save_quote(&self, _quote: &Quote) -> StoreResult<QuoteId> {
            Err(StoreError::Backend {
                status: 503,
                message: "network".to_string(),
            })
        }
        async fn list_quotes(&self) -> StoreResult<Vec<PersistedQuote>> {
            Err(StoreError::Http("connection refused".to_string()))
        }
    }

    #[async_trait]
    impl ApplicationStore for FailingBackend {
        async fn save_application(
            &self,
            _application: &NewApplication,
            _submitted_at: chrono::DateTime<Utc>,
        ) -> StoreResult<ApplicationId> {
            Err(StoreError::Http("connection refused".to_string()))
        }
        async fn list_applications(&self) -> StoreResult<Vec<Application>> {
            Err(StoreError::Http("connection refused".to_string()))
        }
        async fn set_application_status(
            &self,
            _id: &ApplicationId,
            _status: ApplicationStatus,
        ) -> StoreResult<()> {
            Err(StoreError::Http("connection refused".to_string()))
        }
    }

    fn failing_app() -> Router {
        build_app_with_state(
            Arc::new(AppState::from_backend(Arc::new(FailingBackend))),
            AdminAuth::new(ADMIN_TOKEN),
        )
    }

    #[tokio::test]
    async fn catalog_degrades_to_the_default_snapshot() {
        let (status, body) = send(&failing_app(), get("/api/catalog")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["source"], "fallback");
        // The hardcoded defaults, not an empty catalog.
        assert_eq!(body["websiteTypes"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn failed_quote_save_surfaces_the_store_error() {
        // The store reports "network"; the submission
        // fails loudly and nothing is partially recorded.
        let (status, body) = send(
            &failing_app(),
            post_json("/api/quotes", json!({ "extraPageCount": 1 })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"], "store_error");
        assert!(body["message"].as_str().unwrap().contains("network"));
    }
}
