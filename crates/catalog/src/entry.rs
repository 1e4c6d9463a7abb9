use std::collections::BTreeSet;

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use sitequote_core::{DomainError, DomainResult, EntryId};

/// The four catalog record kinds, each backed by its own store collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CatalogKind {
    WebsiteType,
    PageType,
    PaymentSystem,
    ProService,
}

impl CatalogKind {
    pub const ALL: [CatalogKind; 4] = [
        CatalogKind::WebsiteType,
        CatalogKind::PageType,
        CatalogKind::PaymentSystem,
        CatalogKind::ProService,
    ];

    /// Document-store collection name for this kind.
    pub fn collection(self) -> &'static str {
        match self {
            CatalogKind::WebsiteType => "websiteTypes",
            CatalogKind::PageType => "pageTypes",
            CatalogKind::PaymentSystem => "paymentSystems",
            CatalogKind::ProService => "proServices",
        }
    }

    /// Whether records of this kind carry an included-pages set.
    pub fn has_included_pages(self) -> bool {
        matches!(self, CatalogKind::WebsiteType)
    }
}

impl core::fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            CatalogKind::WebsiteType => "website-types",
            CatalogKind::PageType => "page-types",
            CatalogKind::PaymentSystem => "payment-systems",
            CatalogKind::ProService => "pro-services",
        };
        f.write_str(s)
    }
}

impl FromStr for CatalogKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "website-types" => Ok(CatalogKind::WebsiteType),
            "page-types" => Ok(CatalogKind::PageType),
            "payment-systems" => Ok(CatalogKind::PaymentSystem),
            "pro-services" => Ok(CatalogKind::ProService),
            other => Err(DomainError::validation(format!(
                "unknown catalog kind: {other} (expected one of: website-types, page-types, payment-systems, pro-services)"
            ))),
        }
    }
}

/// A priced catalog record.
///
/// `included_page_ids` is only meaningful for website types (page types
/// bundled free into the base price); it stays empty for every other kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub id: EntryId,
    pub name: String,
    /// Price in the minor currency unit (whole units, never fractional).
    pub price: u64,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub included_page_ids: BTreeSet<EntryId>,
}

impl CatalogEntry {
    pub fn new(id: impl Into<EntryId>, name: impl Into<String>, price: u64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            included_page_ids: BTreeSet::new(),
        }
    }

    pub fn with_included_pages<I>(mut self, page_ids: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<EntryId>,
    {
        self.included_page_ids = page_ids.into_iter().map(Into::into).collect();
        self
    }
}

/// Payload for creating a catalog record (id is store-assigned).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEntry {
    pub name: String,
    pub price: u64,
    #[serde(default)]
    pub included_page_ids: BTreeSet<EntryId>,
}

impl NewEntry {
    pub fn validate(&self, kind: CatalogKind) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name must not be empty"));
        }
        if !self.included_page_ids.is_empty() && !kind.has_included_pages() {
            return Err(DomainError::validation(format!(
                "includedPageIds is only valid for website types, not {kind}"
            )));
        }
        Ok(())
    }
}

/// Partial update for a catalog record; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryPatch {
    pub name: Option<String>,
    pub price: Option<u64>,
    pub included_page_ids: Option<BTreeSet<EntryId>>,
}

impl EntryPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none() && self.included_page_ids.is_none()
    }

    pub fn validate(&self) -> DomainResult<()> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(DomainError::validation("name must not be empty"));
            }
        }
        if self.is_empty() {
            return Err(DomainError::validation("patch must change at least one field"));
        }
        Ok(())
    }

    /// Apply the patch to an existing record.
    pub fn apply(&self, entry: &mut CatalogEntry) {
        if let Some(name) = &self.name {
            entry.name = name.clone();
        }
        if let Some(price) = self.price {
            entry.price = price;
        }
        if let Some(ids) = &self.included_page_ids {
            entry.included_page_ids = ids.clone();
        }
    }
}
