//! Read-only access to the vehicle registry document collection.
//!
//! Client-side (hydrate): real HTTP calls to the Firestore REST API via
//! `gloo-net`. Server-side (SSR): `fetch_all` reports `Unavailable`, since
//! the collection is only read from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure surfaces as a `DocumentStoreError`. The only consumer,
//! `log_collection`, turns errors into a warning so a broken store never
//! reaches page rendering.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "documents_test.rs"]
mod documents_test;

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::{Map, Value};

/// Collection holding vehicle access registrations.
pub const VEHICLE_REGISTRY: &str = "registro-veiculo";

const FIRESTORE_BASE_URL: &str = "https://firestore.googleapis.com/v1";

#[derive(Debug, thiserror::Error)]
pub enum DocumentStoreError {
    /// The store cannot be reached from this build target.
    #[error("document store unavailable: {0}")]
    Unavailable(&'static str),

    /// The HTTP request itself failed.
    #[error("request failed: {0}")]
    Request(String),

    /// The store answered with a non-success status.
    #[error("document store returned status {status}")]
    Status { status: u16 },

    /// The response body did not have the expected shape.
    #[error("could not decode documents: {0}")]
    Decode(String),
}

/// One stored document: its id and its fields as plain JSON.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub id: String,
    pub fields: BTreeMap<String, Value>,
}

/// A single page of a collection listing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DocumentPage {
    pub documents: Vec<Document>,
    pub next_page_token: Option<String>,
}

/// Project coordinates for the Firestore REST API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FirestoreConfig {
    pub project_id: String,
    pub api_key: Option<String>,
}

impl FirestoreConfig {
    /// Read `FIRESTORE_PROJECT_ID` and `FIRESTORE_API_KEY` captured at
    /// compile time. Returns `None` when no project is configured.
    pub fn from_build_env() -> Option<Self> {
        Self::from_parts(option_env!("FIRESTORE_PROJECT_ID"), option_env!("FIRESTORE_API_KEY"))
    }

    fn from_parts(project_id: Option<&str>, api_key: Option<&str>) -> Option<Self> {
        let project_id = project_id.map(str::trim).filter(|p| !p.is_empty())?;
        let api_key = api_key.map(str::trim).filter(|k| !k.is_empty()).map(str::to_owned);
        Some(Self { project_id: project_id.to_owned(), api_key })
    }

    /// List URL for `collection`, optionally continuing from `page_token`.
    /// Query values are percent-encoded; page tokens are opaque base64.
    pub fn collection_url(&self, collection: &str, page_token: Option<&str>) -> String {
        let mut url = format!(
            "{FIRESTORE_BASE_URL}/projects/{}/databases/(default)/documents/{collection}",
            self.project_id
        );
        let mut params = Vec::new();
        if let Some(key) = &self.api_key {
            params.push(format!("key={}", urlencoding::encode(key)));
        }
        if let Some(token) = page_token {
            params.push(format!("pageToken={}", urlencoding::encode(token)));
        }
        if !params.is_empty() {
            url.push('?');
            url.push_str(&params.join("&"));
        }
        url
    }
}

#[derive(Deserialize)]
struct RawListResponse {
    #[serde(default)]
    documents: Vec<RawDocument>,
    #[serde(default, rename = "nextPageToken")]
    next_page_token: Option<String>,
}

#[derive(Deserialize)]
struct RawDocument {
    name: String,
    #[serde(default)]
    fields: Map<String, Value>,
}

/// Decode one page of a Firestore `documents.list` response.
///
/// # Errors
///
/// Returns `Decode` if the body is not a list response or a field value has
/// an unknown type tag.
pub fn parse_list_response(body: &str) -> Result<DocumentPage, DocumentStoreError> {
    let raw: RawListResponse = serde_json::from_str(body).map_err(|e| DocumentStoreError::Decode(e.to_string()))?;
    let documents = raw
        .documents
        .into_iter()
        .map(|doc| {
            let id = doc.name.rsplit('/').next().unwrap_or_default().to_owned();
            let fields = doc
                .fields
                .iter()
                .map(|(key, value)| Ok((key.clone(), decode_value(value)?)))
                .collect::<Result<BTreeMap<_, _>, DocumentStoreError>>()?;
            Ok(Document { id, fields })
        })
        .collect::<Result<Vec<_>, DocumentStoreError>>()?;
    Ok(DocumentPage { documents, next_page_token: raw.next_page_token.filter(|t| !t.is_empty()) })
}

/// Convert a typed Firestore value (`{"stringValue": "x"}`) to plain JSON.
fn decode_value(value: &Value) -> Result<Value, DocumentStoreError> {
    let Some((tag, inner)) = value.as_object().and_then(|obj| obj.iter().next()) else {
        return Err(DocumentStoreError::Decode(format!("untyped value: {value}")));
    };
    match tag.as_str() {
        "nullValue" => Ok(Value::Null),
        "booleanValue" | "doubleValue" | "stringValue" | "timestampValue" | "referenceValue" | "bytesValue"
        | "geoPointValue" => Ok(inner.clone()),
        "integerValue" => match inner {
            Value::String(raw) => raw
                .parse::<i64>()
                .map(Value::from)
                .map_err(|e| DocumentStoreError::Decode(format!("integerValue {raw:?}: {e}"))),
            other => Ok(other.clone()),
        },
        "mapValue" => {
            let mut out = Map::new();
            if let Some(fields) = inner.get("fields").and_then(Value::as_object) {
                for (key, field) in fields {
                    out.insert(key.clone(), decode_value(field)?);
                }
            }
            Ok(Value::Object(out))
        }
        "arrayValue" => {
            let values = inner
                .get("values")
                .and_then(Value::as_array)
                .map(|values| values.iter().map(decode_value).collect::<Result<Vec<_>, _>>())
                .transpose()?
                .unwrap_or_default();
            Ok(Value::Array(values))
        }
        other => Err(DocumentStoreError::Decode(format!("unknown value type {other}"))),
    }
}

/// Read every document of `collection`, following page tokens.
///
/// # Errors
///
/// Returns `Unavailable` outside the browser, and `Request`, `Status` or
/// `Decode` when the store call fails.
pub async fn fetch_all(config: &FirestoreConfig, collection: &str) -> Result<Vec<Document>, DocumentStoreError> {
    #[cfg(feature = "hydrate")]
    {
        let mut documents = Vec::new();
        let mut page_token: Option<String> = None;
        loop {
            let url = config.collection_url(collection, page_token.as_deref());
            let resp = gloo_net::http::Request::get(&url)
                .send()
                .await
                .map_err(|e| DocumentStoreError::Request(e.to_string()))?;
            if !resp.ok() {
                return Err(DocumentStoreError::Status { status: resp.status() });
            }
            let body = resp.text().await.map_err(|e| DocumentStoreError::Request(e.to_string()))?;
            let page = parse_list_response(&body)?;
            documents.extend(page.documents);
            match page.next_page_token {
                Some(token) => page_token = Some(token),
                None => return Ok(documents),
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, collection);
        Err(DocumentStoreError::Unavailable("server build"))
    }
}

/// Fetch `collection` and log each document, or a warning on failure.
pub async fn log_collection(config: FirestoreConfig, collection: &'static str) {
    match fetch_all(&config, collection).await {
        Ok(documents) => {
            log::info!("{collection}: {} documents", documents.len());
            for doc in &documents {
                log::info!("{}", describe(doc));
            }
        }
        Err(e) => log::warn!("{collection}: {e}"),
    }
}

/// One-line rendering of a document: `id => {fields}`.
pub fn describe(doc: &Document) -> String {
    let fields = serde_json::to_string(&doc.fields).unwrap_or_default();
    format!("{} => {fields}", doc.id)
}
