//! CRUD resource service over one entity table, plus the document stats and
//! search reads.

pub mod handlers;
pub mod validation;

use std::sync::Arc;

use tracing::{debug, info};

use crate::errors::AppError;
use crate::models::document::{Document, DocumentSearch, DocumentStats};
use crate::models::personnel::Personnel;
use crate::models::project::Project;
use crate::models::{Resource, ResourceId};
use crate::store::{DocumentStore, ResourceStore};
use validation::Validate;

/// Generic CRUD service. Holds no state besides the store handle; every call
/// round-trips to the store.
pub struct ResourceService<R: Resource> {
    store: Arc<dyn ResourceStore<R>>,
}

impl<R: Resource> Clone for ResourceService<R> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<R: Resource> ResourceService<R> {
    pub fn new(store: Arc<dyn ResourceStore<R>>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Result<Vec<R>, AppError> {
        let rows = self.store.list().await?;
        debug!("Listed {} {} rows", rows.len(), R::LABEL);
        Ok(rows)
    }

    pub async fn get(&self, id: ResourceId) -> Result<R, AppError> {
        self.store
            .get(id)
            .await?
            .ok_or_else(|| not_found::<R>(id))
    }

    pub async fn create(&self, input: R::Create) -> Result<R, AppError> {
        let draft = <R::Draft as TryFrom<R::Create>>::try_from(input)?;
        let created = self.store.insert(draft).await?;
        info!("Created {} {}", R::LABEL, created.id());
        Ok(created)
    }

    pub async fn update(&self, id: ResourceId, patch: R::Update) -> Result<R, AppError> {
        patch.validate()?;
        let updated = self
            .store
            .update(id, patch)
            .await?
            .ok_or_else(|| not_found::<R>(id))?;
        info!("Updated {} {id}", R::LABEL);
        Ok(updated)
    }

    pub async fn delete(&self, id: ResourceId) -> Result<ResourceId, AppError> {
        let deleted = self
            .store
            .delete(id)
            .await?
            .ok_or_else(|| not_found::<R>(id))?;
        info!("Deleted {} {deleted}", R::LABEL);
        Ok(deleted)
    }
}

fn not_found<R: Resource>(id: ResourceId) -> AppError {
    AppError::NotFound(format!("{} {id} not found", R::LABEL))
}

/// Document-only reads that aggregate or filter on the server.
#[derive(Clone)]
pub struct DocumentQueries {
    store: Arc<dyn DocumentStore>,
}

impl DocumentQueries {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn stats(&self) -> Result<DocumentStats, AppError> {
        self.store.stats().await
    }

    pub async fn search(&self, criteria: &DocumentSearch) -> Result<Vec<Document>, AppError> {
        self.store.search(criteria).await
    }
}

/// One service per entity kind, all backed by the same store.
#[derive(Clone)]
pub struct Services {
    pub documents: ResourceService<Document>,
    pub document_queries: DocumentQueries,
    pub personnel: ResourceService<Personnel>,
    pub projects: ResourceService<Project>,
}

impl Services {
    pub fn new<S>(store: Arc<S>) -> Self
    where
        S: ResourceStore<Document>
            + ResourceStore<Personnel>
            + ResourceStore<Project>
            + DocumentStore
            + 'static,
    {
        Self {
            documents: ResourceService::new(store.clone()),
            document_queries: DocumentQueries::new(store.clone()),
            personnel: ResourceService::new(store.clone()),
            projects: ResourceService::new(store),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::document::{CreateDocument, DocumentStatus, UpdateDocument};
    use crate::models::UNASSIGNED_PROJECT;
    use crate::store::memory::MemoryStore;

    fn services() -> (Arc<MemoryStore>, Services) {
        let store = Arc::new(MemoryStore::default());
        (store.clone(), Services::new(store))
    }

    fn contract(name: &str, author: &str) -> CreateDocument {
        CreateDocument {
            name: Some(name.to_string()),
            doc_type: Some("Contrato".to_string()),
            created_by: Some(author.to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_assigns_fresh_ids() {
        let (_, services) = services();
        let a = services.documents.create(contract("Contrato A", "Ana")).await.unwrap();
        let b = services.documents.create(contract("Contrato B", "Luis")).await.unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(a.name, "Contrato A");
        assert_eq!(a.status, DocumentStatus::Draft);
        assert_eq!(a.version, "v1.0");
        assert_eq!(a.project, UNASSIGNED_PROJECT);
    }

    #[tokio::test]
    async fn test_update_merges_only_provided_fields() {
        let (_, services) = services();
        let created = services.documents.create(contract("X", "Ana")).await.unwrap();

        let patch = UpdateDocument {
            status: Some(DocumentStatus::Archived),
            ..Default::default()
        };
        let updated = services.documents.update(created.id, patch).await.unwrap();

        assert_eq!(updated.status, DocumentStatus::Archived);
        assert_eq!(updated.name, "X");
        assert_eq!(updated.created_by, created.created_by);
        assert_eq!(updated.version, created.version);
        assert_eq!(updated.doc_type, created.doc_type);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let (_, services) = services();
        let err = services
            .documents
            .update(42, UpdateDocument::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_second_delete_is_not_found() {
        let (_, services) = services();
        let created = services.documents.create(contract("X", "Ana")).await.unwrap();

        assert_eq!(services.documents.delete(created.id).await.unwrap(), created.id);
        let err = services.documents.delete(created.id).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert!(matches!(
            services.documents.get(created.id).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_list_sorted_by_id() {
        let (store, services) = services();
        for id in [7, 2, 5] {
            store.seed_document(Document {
                id,
                name: format!("Doc {id}"),
                doc_type: "Informe".into(),
                project: UNASSIGNED_PROJECT.into(),
                version: "v1.0".into(),
                status: DocumentStatus::Draft,
                created_by: "Ana".into(),
            });
        }
        services.documents.create(contract("Nuevo", "Luis")).await.unwrap();

        let ids: Vec<ResourceId> = services
            .documents
            .list()
            .await
            .unwrap()
            .iter()
            .map(|d| d.id)
            .collect();
        assert_eq!(ids, vec![2, 5, 7, 8]);
    }

    #[tokio::test]
    async fn test_stats_counts_statuses_and_projects() {
        let (_, services) = services();
        let docs = &services.documents;
        let mut input = contract("A", "Ana");
        input.project = Some("Proyecto Alpha".into());
        input.status = Some(DocumentStatus::Active);
        docs.create(input).await.unwrap();

        let mut input = contract("B", "Ana");
        input.project = Some("Proyecto Alpha".into());
        docs.create(input).await.unwrap();

        let mut input = contract("C", "Luis");
        input.project = Some("Proyecto Beta".into());
        input.status = Some(DocumentStatus::InReview);
        docs.create(input).await.unwrap();

        docs.create(contract("D", "Luis")).await.unwrap();

        let stats = services.document_queries.stats().await.unwrap();
        assert_eq!(
            stats,
            DocumentStats {
                total: 4,
                active: 1,
                review: 1,
                draft: 2,
                archived: 0,
                projects: 2,
            }
        );
    }
}
