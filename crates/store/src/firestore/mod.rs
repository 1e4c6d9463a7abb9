//! Hosted document-store client (Firestore REST v1).
//!
//! Catalog kinds map to their own collections; quote requests and career
//! applications each get one collection. All requests are single-attempt;
//! failures come back as typed [`StoreError`]s and retrying is the caller's
//! decision.

pub mod value;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::{Value, json};

use sitequote_applications::{Application, ApplicationStatus, NewApplication};
use sitequote_catalog::{CatalogEntry, CatalogKind, EntryPatch, NewEntry};
use sitequote_core::{ApplicationId, EntryId, QuoteId};
use sitequote_pricing::Quote;

use crate::error::{StoreError, StoreResult};
use crate::records::PersistedQuote;
use crate::traits::{ApplicationStore, CatalogStore, QuoteStore};

const DEFAULT_BASE_URL: &str = "https://firestore.googleapis.com/v1";
const QUOTES_COLLECTION: &str = "quoteRequests";
const APPLICATIONS_COLLECTION: &str = "careerApplications";

#[derive(Debug, Clone)]
pub struct FirestoreStore {
    client: reqwest::Client,
    base_url: String,
    project: String,
    token: Option<String>,
}

impl FirestoreStore {
    pub fn new(project: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            project: project.into(),
            token: None,
        }
    }

    /// Point the client at a different endpoint (tests use a local mock).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Bearer token for the store; auth mechanics are opaque to this crate.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    fn collection_url(&self, collection: &str) -> String {
        format!(
            "{}/projects/{}/databases/(default)/documents/{}",
            self.base_url, self.project, collection
        )
    }

    fn document_url(&self, collection: &str, id: &str) -> String {
        format!("{}/{}", self.collection_url(collection), id)
    }

    fn authed(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Map the HTTP outcome to a typed result and parse the JSON body.
    async fn check(response: reqwest::Response) -> StoreResult<Value> {
        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(StoreError::NotFound);
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(StoreError::Backend {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response.json().await?)
    }

    /// List a whole collection, following `nextPageToken` until exhausted.
    /// The page loop is bounded so a misbehaving backend cannot spin forever;
    /// hitting the bound logs a warning and returns what was collected.
    async fn list_documents(&self, collection: &str, order_by: &str) -> StoreResult<Vec<Value>> {
        const MAX_PAGES: usize = 50;

        let mut documents = Vec::new();
        let mut page_token: Option<String> = None;
        for _ in 0..MAX_PAGES {
            let mut request = self
                .authed(self.client.get(self.collection_url(collection)))
                .query(&[("orderBy", order_by), ("pageSize", "300")]);
            if let Some(token) = &page_token {
                request = request.query(&[("pageToken", token.as_str())]);
            }
            let body = Self::check(request.send().await?).await?;
            // An empty page has no "documents" key at all.
            if let Some(page) = body.get("documents").and_then(Value::as_array) {
                documents.extend(page.iter().cloned());
            }
            match body.get("nextPageToken").and_then(Value::as_str) {
                Some(token) if !token.is_empty() => page_token = Some(token.to_string()),
                _ => return Ok(documents),
            }
        }
        tracing::warn!(collection, "listing stopped after {MAX_PAGES} pages");
        Ok(documents)
    }

    async fn create_document(&self, collection: &str, fields: &Value) -> StoreResult<String> {
        let body = value::to_document(fields)?;
        let response = self
            .authed(self.client.post(self.collection_url(collection)))
            .json(&body)
            .send()
            .await?;
        let created = Self::check(response).await?;
        let (id, _) = value::from_document(&created)?;
        Ok(id)
    }

    async fn patch_document(
        &self,
        collection: &str,
        id: &str,
        fields: &Value,
    ) -> StoreResult<()> {
        let Value::Object(map) = fields else {
            return Err(StoreError::decode("patch body must be a JSON object"));
        };
        let mask: Vec<(&str, String)> = map
            .keys()
            .map(|k| ("updateMask.fieldPaths", k.clone()))
            .collect();
        let body = value::to_document(fields)?;
        let response = self
            .authed(self.client.patch(self.document_url(collection, id)))
            .query(&mask)
            .json(&body)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }
}

/// Coerce a decoded document into a typed catalog entry.
///
/// `includedPageIds` may be absent (older records); any other malformed field
/// is a decode error rather than a silently wrong price.
fn decode_entry(kind: CatalogKind, id: String, plain: &Value) -> StoreResult<CatalogEntry> {
    let name = plain
        .get("name")
        .and_then(Value::as_str)
        .ok_or_else(|| StoreError::decode(format!("{kind} {id}: missing name")))?
        .to_string();
    let price = plain
        .get("price")
        .and_then(Value::as_u64)
        .ok_or_else(|| {
            StoreError::decode(format!("{kind} {id}: price must be a non-negative integer"))
        })?;

    let mut entry = CatalogEntry::new(id.clone(), name, price);
    if kind.has_included_pages() {
        if let Some(ids) = plain.get("includedPageIds") {
            let ids = ids
                .as_array()
                .ok_or_else(|| StoreError::decode(format!("{kind} {id}: includedPageIds must be an array")))?;
            entry.included_page_ids = ids
                .iter()
                .map(|v| {
                    v.as_str()
                        .map(EntryId::from)
                        .ok_or_else(|| StoreError::decode(format!("{kind} {id}: non-string page id")))
                })
                .collect::<Result<_, _>>()?;
        }
    }
    Ok(entry)
}

fn entry_fields(entry: &NewEntry) -> Value {
    let mut fields = json!({
        "name": entry.name,
        "price": entry.price,
    });
    if !entry.included_page_ids.is_empty() {
        fields["includedPageIds"] = json!(entry.included_page_ids);
    }
    fields
}

fn patch_fields(patch: &EntryPatch) -> Value {
    let mut fields = serde_json::Map::new();
    if let Some(name) = &patch.name {
        fields.insert("name".to_string(), json!(name));
    }
    if let Some(price) = patch.price {
        fields.insert("price".to_string(), json!(price));
    }
    if let Some(ids) = &patch.included_page_ids {
        fields.insert("includedPageIds".to_string(), json!(ids));
    }
    Value::Object(fields)
}

#[async_trait]
impl CatalogStore for FirestoreStore {
    async fn list(&self, kind: CatalogKind) -> StoreResult<Vec<CatalogEntry>> {
        let documents = self.list_documents(kind.collection(), "name").await?;
        documents
            .iter()
            .map(|doc| {
                let (id, plain) = value::from_document(doc)?;
                decode_entry(kind, id, &plain)
            })
            .collect()
    }

    async fn create(&self, kind: CatalogKind, entry: &NewEntry) -> StoreResult<EntryId> {
        let id = self
            .create_document(kind.collection(), &entry_fields(entry))
            .await?;
        Ok(EntryId::new(id))
    }

    async fn update(&self, kind: CatalogKind, id: &EntryId, patch: &EntryPatch) -> StoreResult<()> {
        self.patch_document(kind.collection(), id.as_str(), &patch_fields(patch))
            .await
    }

    async fn delete(&self, kind: CatalogKind, id: &EntryId) -> StoreResult<()> {
        let response = self
            .authed(
                self.client
                    .delete(self.document_url(kind.collection(), id.as_str())),
            )
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }
}

#[async_trait]
impl QuoteStore for FirestoreStore {
    async fn save_quote(&self, quote: &Quote) -> StoreResult<QuoteId> {
        let fields = serde_json::to_value(quote)
            .map_err(|e| StoreError::decode(format!("quote serialization: {e}")))?;
        let mut body = value::to_document(&fields)?;
        // createdAt as a real timestamp so the admin listing can order on it;
        // status starts out pending.
        body["fields"]["createdAt"] = json!({ "timestampValue": Utc::now().to_rfc3339() });
        body["fields"]["status"] = json!({ "stringValue": "pending" });

        let response = self
            .authed(self.client.post(self.collection_url(QUOTES_COLLECTION)))
            .json(&body)
            .send()
            .await?;
        let created = Self::check(response).await?;
        let (id, _) = value::from_document(&created)?;
        Ok(QuoteId::new(id))
    }

    async fn list_quotes(&self) -> StoreResult<Vec<PersistedQuote>> {
        let documents = self
            .list_documents(QUOTES_COLLECTION, "createdAt desc")
            .await?;
        documents
            .iter()
            .map(|doc| {
                let (id, mut plain) = value::from_document(doc)?;
                plain["id"] = Value::String(id.clone());
                serde_json::from_value(plain)
                    .map_err(|e| StoreError::decode(format!("quote {id}: {e}")))
            })
            .collect()
    }
}

#[async_trait]
impl ApplicationStore for FirestoreStore {
    async fn save_application(
        &self,
        application: &NewApplication,
        submitted_at: DateTime<Utc>,
    ) -> StoreResult<ApplicationId> {
        let fields = serde_json::to_value(application)
            .map_err(|e| StoreError::decode(format!("application serialization: {e}")))?;
        let mut body = value::to_document(&fields)?;
        body["fields"]["submittedAt"] = json!({ "timestampValue": submitted_at.to_rfc3339() });
        body["fields"]["status"] = json!({ "stringValue": ApplicationStatus::Pending.as_str() });

        let response = self
            .authed(
                self.client
                    .post(self.collection_url(APPLICATIONS_COLLECTION)),
            )
            .json(&body)
            .send()
            .await?;
        let created = Self::check(response).await?;
        let (id, _) = value::from_document(&created)?;
        Ok(ApplicationId::new(id))
    }

    async fn list_applications(&self) -> StoreResult<Vec<Application>> {
        let documents = self
            .list_documents(APPLICATIONS_COLLECTION, "submittedAt desc")
            .await?;
        documents
            .iter()
            .map(|doc| {
                let (id, mut plain) = value::from_document(doc)?;
                plain["id"] = Value::String(id.clone());
                serde_json::from_value(plain)
                    .map_err(|e| StoreError::decode(format!("application {id}: {e}")))
            })
            .collect()
    }

    async fn set_application_status(
        &self,
        id: &ApplicationId,
        status: ApplicationStatus,
    ) -> StoreResult<()> {
        self.patch_document(
            APPLICATIONS_COLLECTION,
            id.as_str(),
            &json!({ "status": status.as_str() }),
        )
        .await
    }
}
