//! In-process store used by the handler and service tests.

use std::collections::{BTreeMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;

use super::{DocumentStore, ResourceStore};
use crate::errors::AppError;
use crate::models::document::{
    Document, DocumentSearch, DocumentStats, DocumentStatus, NewDocument, UpdateDocument,
};
use crate::models::personnel::{NewPersonnel, Personnel, UpdatePersonnel};
use crate::models::project::{NewProject, Project, UpdateProject};
use crate::models::{Resource, ResourceId, UNASSIGNED_PROJECT};

/// Builds a row from a validated draft and merges patches into it, mirroring
/// what the SQL statements do.
pub trait MemoryRow: Resource {
    fn assemble(id: ResourceId, draft: Self::Draft) -> Self;
    fn merge(&mut self, patch: Self::Update);
}

pub struct Table<R> {
    rows: BTreeMap<ResourceId, R>,
    next_id: ResourceId,
}

impl<R> Default for Table<R> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

#[derive(Default)]
pub struct MemoryStore {
    documents: Mutex<Table<Document>>,
    personnel: Mutex<Table<Personnel>>,
    projects: Mutex<Table<Project>>,
}

impl MemoryStore {
    /// Inserts a document under a caller-chosen id.
    pub fn seed_document(&self, document: Document) {
        let mut table = self.documents.lock().unwrap();
        table.next_id = table.next_id.max(document.id + 1);
        table.rows.insert(document.id, document);
    }
}

pub trait TableOf<R> {
    fn table(&self) -> &Mutex<Table<R>>;
}

impl TableOf<Document> for MemoryStore {
    fn table(&self) -> &Mutex<Table<Document>> {
        &self.documents
    }
}

impl TableOf<Personnel> for MemoryStore {
    fn table(&self) -> &Mutex<Table<Personnel>> {
        &self.personnel
    }
}

impl TableOf<Project> for MemoryStore {
    fn table(&self) -> &Mutex<Table<Project>> {
        &self.projects
    }
}

#[async_trait]
impl<R> ResourceStore<R> for MemoryStore
where
    R: MemoryRow,
    MemoryStore: TableOf<R>,
{
    async fn list(&self) -> Result<Vec<R>, AppError> {
        Ok(TableOf::<R>::table(self).lock().unwrap().rows.values().cloned().collect())
    }

    async fn get(&self, id: ResourceId) -> Result<Option<R>, AppError> {
        Ok(TableOf::<R>::table(self).lock().unwrap().rows.get(&id).cloned())
    }

    async fn insert(&self, draft: R::Draft) -> Result<R, AppError> {
        let mut table = TableOf::<R>::table(self).lock().unwrap();
        let id = table.next_id;
        table.next_id += 1;
        let row = R::assemble(id, draft);
        table.rows.insert(id, row.clone());
        Ok(row)
    }

    async fn update(&self, id: ResourceId, patch: R::Update) -> Result<Option<R>, AppError> {
        let mut table = TableOf::<R>::table(self).lock().unwrap();
        Ok(table.rows.get_mut(&id).map(|row| {
            row.merge(patch);
            row.clone()
        }))
    }

    async fn delete(&self, id: ResourceId) -> Result<Option<ResourceId>, AppError> {
        Ok(TableOf::<R>::table(self).lock().unwrap().rows.remove(&id).map(|_| id))
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn stats(&self) -> Result<DocumentStats, AppError> {
        let table = self.documents.lock().unwrap();
        let count = |status: DocumentStatus| {
            table.rows.values().filter(|d| d.status == status).count() as i64
        };
        let projects: HashSet<&str> = table
            .rows
            .values()
            .map(|d| d.project.as_str())
            .filter(|p| *p != UNASSIGNED_PROJECT)
            .collect();

        Ok(DocumentStats {
            total: table.rows.len() as i64,
            active: count(DocumentStatus::Active),
            review: count(DocumentStatus::InReview),
            draft: count(DocumentStatus::Draft),
            archived: count(DocumentStatus::Archived),
            projects: projects.len() as i64,
        })
    }

    async fn search(&self, criteria: &DocumentSearch) -> Result<Vec<Document>, AppError> {
        let needle = criteria.text().map(str::to_lowercase);
        let table = self.documents.lock().unwrap();
        Ok(table
            .rows
            .values()
            .filter(|d| {
                needle.as_deref().map_or(true, |n| {
                    d.name.to_lowercase().contains(n) || d.created_by.to_lowercase().contains(n)
                })
            })
            .filter(|d| criteria.doc_type().map_or(true, |t| d.doc_type == t))
            .filter(|d| criteria.project().map_or(true, |p| d.project == p))
            .cloned()
            .collect())
    }
}

impl MemoryRow for Document {
    fn assemble(id: ResourceId, draft: NewDocument) -> Self {
        Document {
            id,
            name: draft.name,
            doc_type: draft.doc_type,
            project: draft.project,
            version: draft.version,
            status: draft.status,
            created_by: draft.created_by,
        }
    }

    fn merge(&mut self, patch: UpdateDocument) {
        if let Some(v) = patch.name {
            self.name = v;
        }
        if let Some(v) = patch.doc_type {
            self.doc_type = v;
        }
        if let Some(v) = patch.project {
            self.project = v;
        }
        if let Some(v) = patch.version {
            self.version = v;
        }
        if let Some(v) = patch.status {
            self.status = v;
        }
        if let Some(v) = patch.created_by {
            self.created_by = v;
        }
    }
}

impl MemoryRow for Personnel {
    fn assemble(id: ResourceId, draft: NewPersonnel) -> Self {
        Personnel {
            id,
            full_name: draft.full_name,
            role: draft.role,
            specialization: draft.specialization,
            email: draft.email,
            phone: draft.phone,
            status: draft.status,
            assigned_project: draft.assigned_project,
        }
    }

    fn merge(&mut self, patch: UpdatePersonnel) {
        if let Some(v) = patch.full_name {
            self.full_name = v;
        }
        if let Some(v) = patch.role {
            self.role = v;
        }
        if patch.specialization.is_some() {
            self.specialization = patch.specialization;
        }
        if let Some(v) = patch.email {
            self.email = v;
        }
        if patch.phone.is_some() {
            self.phone = patch.phone;
        }
        if let Some(v) = patch.status {
            self.status = v;
        }
        if let Some(v) = patch.assigned_project {
            self.assigned_project = v;
        }
    }
}

impl MemoryRow for Project {
    fn assemble(id: ResourceId, draft: NewProject) -> Self {
        Project {
            id,
            name: draft.name,
            description: draft.description,
        }
    }

    fn merge(&mut self, patch: UpdateProject) {
        if let Some(v) = patch.name {
            self.name = v;
        }
        if patch.description.is_some() {
            self.description = patch.description;
        }
    }
}
