//! Resource store: the SQL behind every entity table.
//!
//! Services and handlers only see the `ResourceStore` / `DocumentStore`
//! traits. `PgStore` is the Postgres implementation; each entity's statements
//! live in their own submodule.

mod documents;
#[cfg(test)]
pub mod memory;
mod personnel;
mod projects;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::document::{Document, DocumentSearch, DocumentStats};
use crate::models::{Resource, ResourceId};

/// CRUD access to one entity table.
///
/// `get`, `update` and `delete` return `None` when the id is absent; mapping
/// that to NotFound is the service's job.
#[async_trait]
pub trait ResourceStore<R: Resource>: Send + Sync {
    /// All rows ordered by id ascending.
    async fn list(&self) -> Result<Vec<R>, AppError>;

    async fn get(&self, id: ResourceId) -> Result<Option<R>, AppError>;

    async fn insert(&self, draft: R::Draft) -> Result<R, AppError>;

    /// COALESCE-style merge: fields absent from the patch keep their value.
    async fn update(&self, id: ResourceId, patch: R::Update) -> Result<Option<R>, AppError>;

    /// Returns the deleted id.
    async fn delete(&self, id: ResourceId) -> Result<Option<ResourceId>, AppError>;
}

/// Document-only aggregate and filtered reads.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn stats(&self) -> Result<DocumentStats, AppError>;

    async fn search(&self, criteria: &DocumentSearch) -> Result<Vec<Document>, AppError>;
}

/// Postgres-backed store for all three entity tables.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Builds an `ILIKE` pattern matching `needle` as a literal substring.
/// `%`, `_` and the escape character itself are escaped.
pub(crate) fn contains_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for c in needle.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
