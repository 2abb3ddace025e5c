use async_trait::async_trait;

use super::{PgStore, ResourceStore};
use crate::errors::AppError;
use crate::models::project::{NewProject, Project, UpdateProject};
use crate::models::ResourceId;

#[async_trait]
impl ResourceStore<Project> for PgStore {
    async fn list(&self) -> Result<Vec<Project>, AppError> {
        Ok(sqlx::query_as::<_, Project>(
            "SELECT id, name, description FROM proyectos_schema.proyectos ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await?)
    }

    async fn get(&self, id: ResourceId) -> Result<Option<Project>, AppError> {
        Ok(sqlx::query_as::<_, Project>(
            "SELECT id, name, description FROM proyectos_schema.proyectos WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn insert(&self, draft: NewProject) -> Result<Project, AppError> {
        Ok(sqlx::query_as::<_, Project>(
            r#"
            INSERT INTO proyectos_schema.proyectos (name, description)
            VALUES ($1, $2)
            RETURNING id, name, description
            "#,
        )
        .bind(&draft.name)
        .bind(&draft.description)
        .fetch_one(&self.pool)
        .await?)
    }

    async fn update(
        &self,
        id: ResourceId,
        patch: UpdateProject,
    ) -> Result<Option<Project>, AppError> {
        Ok(sqlx::query_as::<_, Project>(
            r#"
            UPDATE proyectos_schema.proyectos
            SET name = COALESCE($1, name),
                description = COALESCE($2, description)
            WHERE id = $3
            RETURNING id, name, description
            "#,
        )
        .bind(patch.name)
        .bind(patch.description)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn delete(&self, id: ResourceId) -> Result<Option<ResourceId>, AppError> {
        Ok(
            sqlx::query_scalar("DELETE FROM proyectos_schema.proyectos WHERE id = $1 RETURNING id")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?,
        )
    }
}
