//! Service client. The only place the client talks HTTP to the resource
//! services and the only place field names are translated.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::ClientError;
use crate::fields::FieldMap;
use crate::filter::Filterable;

/// Matches the axios client the document frontend used.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// An entity kind as seen by the client.
pub trait Entity:
    Filterable + Serialize + DeserializeOwned + Clone + Send + Sync + 'static
{
    /// Merge patch; only present fields are sent.
    type Patch: Serialize + Send + Sync;

    /// Base path of the resource, e.g. `/documents`.
    const PATH: &'static str;
    /// Noun used in confirmation prompts.
    const LABEL: &'static str;
    const FIELDS: FieldMap;

    fn id(&self) -> Option<i32>;
    fn display_name(&self) -> &str;
}

/// CRUD calls against one resource. Any non-2xx answer is an error.
#[async_trait]
pub trait ResourceApi<E: Entity>: Send + Sync {
    async fn list(&self) -> Result<Vec<E>, ClientError>;

    async fn get(&self, id: i32) -> Result<E, ClientError>;

    async fn create(&self, entity: &E) -> Result<E, ClientError>;

    async fn update(&self, id: i32, patch: &E::Patch) -> Result<E, ClientError>;

    /// Returns the id the server confirms as deleted.
    async fn delete(&self, id: i32) -> Result<i32, ClientError>;
}

/// Aggregate document counts from `GET /documents/stats`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DocumentStats {
    pub total: i64,
    pub active: i64,
    pub review: i64,
    pub draft: i64,
    pub archived: i64,
    pub projects: i64,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
    detail: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DeletedBody {
    #[serde(rename = "deletedId")]
    deleted_id: i32,
}

/// reqwest-backed implementation of [`ResourceApi`] for every entity kind.
#[derive(Clone)]
pub struct HttpResourceApi {
    client: Client,
    base_url: String,
}

impl HttpResourceApi {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            base_url,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn stats(&self) -> Result<DocumentStats, ClientError> {
        let value = self.send(self.client.get(self.url("/documents/stats"))).await?;
        Ok(serde_json::from_value(value)?)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Value, ClientError> {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("API returned {status}: {body}");
            return Err(api_error(status.as_u16(), &body));
        }

        Ok(response.json::<Value>().await?)
    }
}

/// Builds the error for a non-2xx answer; bodies that are not the structured
/// `{error, detail}` shape are kept verbatim as the detail.
fn api_error(status: u16, body: &str) -> ClientError {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => ClientError::Api {
            status,
            kind: parsed.error,
            detail: parsed.detail.unwrap_or_default(),
        },
        Err(_) => ClientError::Api {
            status,
            kind: "Unknown".to_string(),
            detail: body.to_string(),
        },
    }
}

fn to_wire<T: Serialize>(fields: FieldMap, domain: &T) -> Result<Value, ClientError> {
    Ok(fields.to_wire(serde_json::to_value(domain)?))
}

fn from_wire<T: DeserializeOwned>(fields: FieldMap, wire: Value) -> Result<T, ClientError> {
    Ok(serde_json::from_value(fields.to_domain(wire))?)
}

#[async_trait]
impl<E: Entity> ResourceApi<E> for HttpResourceApi {
    async fn list(&self) -> Result<Vec<E>, ClientError> {
        let value = self.send(self.client.get(self.url(E::PATH))).await?;
        let items: Vec<E> = from_wire(E::FIELDS, value)?;
        debug!("Fetched {} {} records", items.len(), E::LABEL);
        Ok(items)
    }

    async fn get(&self, id: i32) -> Result<E, ClientError> {
        let url = self.url(&format!("{}/{id}", E::PATH));
        from_wire(E::FIELDS, self.send(self.client.get(url)).await?)
    }

    async fn create(&self, entity: &E) -> Result<E, ClientError> {
        let body = to_wire(E::FIELDS, entity)?;
        let value = self
            .send(self.client.post(self.url(E::PATH)).json(&body))
            .await?;
        from_wire(E::FIELDS, value)
    }

    async fn update(&self, id: i32, patch: &E::Patch) -> Result<E, ClientError> {
        let body = to_wire(E::FIELDS, patch)?;
        let url = self.url(&format!("{}/{id}", E::PATH));
        from_wire(E::FIELDS, self.send(self.client.put(url).json(&body)).await?)
    }

    async fn delete(&self, id: i32) -> Result<i32, ClientError> {
        let url = self.url(&format!("{}/{id}", E::PATH));
        let value = self.send(self.client.delete(url)).await?;
        let body: DeletedBody = serde_json::from_value(value)?;
        Ok(body.deleted_id)
    }
}
