use async_trait::async_trait;

use super::{contains_pattern, DocumentStore, PgStore, ResourceStore};
use crate::errors::AppError;
use crate::models::document::{
    Document, DocumentSearch, DocumentStats, DocumentStatus, NewDocument, UpdateDocument,
};
use crate::models::{ResourceId, UNASSIGNED_PROJECT};

#[async_trait]
impl ResourceStore<Document> for PgStore {
    async fn list(&self) -> Result<Vec<Document>, AppError> {
        Ok(sqlx::query_as::<_, Document>(
            r#"
            SELECT id, name, type, project, version, status, created_by
            FROM gestion_schema.documents
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?)
    }

    async fn get(&self, id: ResourceId) -> Result<Option<Document>, AppError> {
        Ok(sqlx::query_as::<_, Document>(
            r#"
            SELECT id, name, type, project, version, status, created_by
            FROM gestion_schema.documents
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn insert(&self, draft: NewDocument) -> Result<Document, AppError> {
        Ok(sqlx::query_as::<_, Document>(
            r#"
            INSERT INTO gestion_schema.documents
                (name, type, project, version, status, created_by)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, type, project, version, status, created_by
            "#,
        )
        .bind(&draft.name)
        .bind(&draft.doc_type)
        .bind(&draft.project)
        .bind(&draft.version)
        .bind(draft.status.as_str())
        .bind(&draft.created_by)
        .fetch_one(&self.pool)
        .await?)
    }

    async fn update(
        &self,
        id: ResourceId,
        patch: UpdateDocument,
    ) -> Result<Option<Document>, AppError> {
        Ok(sqlx::query_as::<_, Document>(
            r#"
            UPDATE gestion_schema.documents
            SET name = COALESCE($1, name),
                type = COALESCE($2, type),
                project = COALESCE($3, project),
                version = COALESCE($4, version),
                status = COALESCE($5, status),
                created_by = COALESCE($6, created_by)
            WHERE id = $7
            RETURNING id, name, type, project, version, status, created_by
            "#,
        )
        .bind(patch.name)
        .bind(patch.doc_type)
        .bind(patch.project)
        .bind(patch.version)
        .bind(patch.status.map(DocumentStatus::as_str))
        .bind(patch.created_by)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn delete(&self, id: ResourceId) -> Result<Option<ResourceId>, AppError> {
        Ok(
            sqlx::query_scalar("DELETE FROM gestion_schema.documents WHERE id = $1 RETURNING id")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?,
        )
    }
}

#[async_trait]
impl DocumentStore for PgStore {
    async fn stats(&self) -> Result<DocumentStats, AppError> {
        Ok(sqlx::query_as::<_, DocumentStats>(
            r#"
            SELECT
                COUNT(*) AS total,
                COUNT(*) FILTER (WHERE status = $1) AS active,
                COUNT(*) FILTER (WHERE status = $2) AS review,
                COUNT(*) FILTER (WHERE status = $3) AS draft,
                COUNT(*) FILTER (WHERE status = $4) AS archived,
                COUNT(DISTINCT project) FILTER (WHERE project <> $5) AS projects
            FROM gestion_schema.documents
            "#,
        )
        .bind(DocumentStatus::Active.as_str())
        .bind(DocumentStatus::InReview.as_str())
        .bind(DocumentStatus::Draft.as_str())
        .bind(DocumentStatus::Archived.as_str())
        .bind(UNASSIGNED_PROJECT)
        .fetch_one(&self.pool)
        .await?)
    }

    async fn search(&self, criteria: &DocumentSearch) -> Result<Vec<Document>, AppError> {
        Ok(sqlx::query_as::<_, Document>(
            r#"
            SELECT id, name, type, project, version, status, created_by
            FROM gestion_schema.documents
            WHERE ($1::text IS NULL OR name ILIKE $1 OR created_by ILIKE $1)
              AND ($2::text IS NULL OR type = $2)
              AND ($3::text IS NULL OR project = $3)
            ORDER BY id ASC
            "#,
        )
        .bind(criteria.text().map(contains_pattern))
        .bind(criteria.doc_type())
        .bind(criteria.project())
        .fetch_all(&self.pool)
        .await?)
    }
}
