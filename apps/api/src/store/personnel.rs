use async_trait::async_trait;

use super::{PgStore, ResourceStore};
use crate::errors::AppError;
use crate::models::personnel::{NewPersonnel, Personnel, PersonnelStatus, UpdatePersonnel};
use crate::models::ResourceId;

#[async_trait]
impl ResourceStore<Personnel> for PgStore {
    async fn list(&self) -> Result<Vec<Personnel>, AppError> {
        Ok(sqlx::query_as::<_, Personnel>(
            r#"
            SELECT id, nombre_completo, rol, especializacion, email, telefono, estado, proyecto_asignado
            FROM recursos_schema.recursos
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?)
    }

    async fn get(&self, id: ResourceId) -> Result<Option<Personnel>, AppError> {
        Ok(sqlx::query_as::<_, Personnel>(
            r#"
            SELECT id, nombre_completo, rol, especializacion, email, telefono, estado, proyecto_asignado
            FROM recursos_schema.recursos
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn insert(&self, draft: NewPersonnel) -> Result<Personnel, AppError> {
        Ok(sqlx::query_as::<_, Personnel>(
            r#"
            INSERT INTO recursos_schema.recursos
                (nombre_completo, rol, especializacion, email, telefono, estado, proyecto_asignado)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, nombre_completo, rol, especializacion, email, telefono, estado, proyecto_asignado
            "#,
        )
        .bind(&draft.full_name)
        .bind(&draft.role)
        .bind(&draft.specialization)
        .bind(&draft.email)
        .bind(&draft.phone)
        .bind(draft.status.as_str())
        .bind(&draft.assigned_project)
        .fetch_one(&self.pool)
        .await?)
    }

    async fn update(
        &self,
        id: ResourceId,
        patch: UpdatePersonnel,
    ) -> Result<Option<Personnel>, AppError> {
        Ok(sqlx::query_as::<_, Personnel>(
            r#"
            UPDATE recursos_schema.recursos
            SET nombre_completo = COALESCE($1, nombre_completo),
                rol = COALESCE($2, rol),
                especializacion = COALESCE($3, especializacion),
                email = COALESCE($4, email),
                telefono = COALESCE($5, telefono),
                estado = COALESCE($6, estado),
                proyecto_asignado = COALESCE($7, proyecto_asignado)
            WHERE id = $8
            RETURNING id, nombre_completo, rol, especializacion, email, telefono, estado, proyecto_asignado
            "#,
        )
        .bind(patch.full_name)
        .bind(patch.role)
        .bind(patch.specialization)
        .bind(patch.email)
        .bind(patch.phone)
        .bind(patch.status.map(PersonnelStatus::as_str))
        .bind(patch.assigned_project)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn delete(&self, id: ResourceId) -> Result<Option<ResourceId>, AppError> {
        Ok(
            sqlx::query_scalar("DELETE FROM recursos_schema.recursos WHERE id = $1 RETURNING id")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?,
        )
    }
}
