//! List controller: owns the last fetched collection of one entity kind and
//! keeps the filtered view in sync with it.

use std::sync::Arc;

use tracing::{info, warn};

use crate::api::{Entity, ResourceApi};
use crate::error::ClientError;
use crate::filter::visible_items;
use crate::models::{Personal, PersonalPatch};

/// Asks the user before a destructive action.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The user said no; nothing was sent.
    Declined,
    Deleted(i32),
}

pub struct ListController<E: Entity> {
    api: Arc<dyn ResourceApi<E>>,
    base: Vec<E>,
    criteria: E::Criteria,
    visible: Vec<E>,
    last_error: Option<String>,
}

impl<E: Entity> ListController<E> {
    pub fn new(api: Arc<dyn ResourceApi<E>>) -> Self {
        Self {
            api,
            base: Vec::new(),
            criteria: E::Criteria::default(),
            visible: Vec::new(),
            last_error: None,
        }
    }

    /// Builds the controller and performs the initial fetch. A failed fetch
    /// still yields a controller, with the error recorded.
    pub async fn mount(api: Arc<dyn ResourceApi<E>>) -> Self {
        let mut controller = Self::new(api);
        let _ = controller.refresh().await;
        controller
    }

    pub fn base(&self) -> &[E] {
        &self.base
    }

    pub fn visible(&self) -> &[E] {
        &self.visible
    }

    pub fn criteria(&self) -> &E::Criteria {
        &self.criteria
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn set_criteria(&mut self, criteria: E::Criteria) {
        self.criteria = criteria;
        self.recompute();
    }

    pub fn update_criteria(&mut self, edit: impl FnOnce(&mut E::Criteria)) {
        edit(&mut self.criteria);
        self.recompute();
    }

    /// Replaces the base collection with a full re-fetch. On failure the
    /// previous collection stays in place.
    pub async fn refresh(&mut self) -> Result<(), ClientError> {
        match self.api.list().await {
            Ok(items) => {
                self.base = items;
                self.last_error = None;
                self.recompute();
                Ok(())
            }
            Err(e) => {
                warn!("Failed to fetch {} list: {e}", E::LABEL);
                self.last_error = Some(e.user_message());
                Err(e)
            }
        }
    }

    /// Re-issues the last fetch on user request.
    pub async fn retry(&mut self) -> Result<(), ClientError> {
        self.refresh().await
    }

    pub async fn create(&mut self, entity: &E) -> Result<E, ClientError> {
        let result = self.api.create(entity).await;
        let created = self.mutation(result)?;
        info!("Created {} {:?}", E::LABEL, created.id());
        self.refresh_after_mutation().await;
        Ok(created)
    }

    pub async fn update(&mut self, id: i32, patch: &E::Patch) -> Result<E, ClientError> {
        let result = self.api.update(id, patch).await;
        let updated = self.mutation(result)?;
        info!("Updated {} {id}", E::LABEL);
        self.refresh_after_mutation().await;
        Ok(updated)
    }

    pub async fn delete(
        &mut self,
        id: i32,
        confirm: &(dyn Confirm + Sync),
    ) -> Result<DeleteOutcome, ClientError> {
        let prompt = match self.base.iter().find(|item| item.id() == Some(id)) {
            Some(item) => format!("¿Eliminar {} \"{}\"?", E::LABEL, item.display_name()),
            None => format!("¿Eliminar {} {id}?", E::LABEL),
        };
        if !confirm.confirm(&prompt) {
            return Ok(DeleteOutcome::Declined);
        }

        let result = self.api.delete(id).await;
        let deleted = self.mutation(result)?;
        info!("Deleted {} {deleted}", E::LABEL);
        self.refresh_after_mutation().await;
        Ok(DeleteOutcome::Deleted(deleted))
    }

    fn recompute(&mut self) {
        self.visible = visible_items(&self.base, &self.criteria);
    }

    /// Records a failed mutation without touching the base collection.
    fn mutation<T>(&mut self, result: Result<T, ClientError>) -> Result<T, ClientError> {
        result.map_err(|e| {
            warn!("{} request failed: {e}", E::LABEL);
            self.last_error = Some(e.user_message());
            e
        })
    }

    /// The mutation already succeeded; a failed re-fetch only leaves the
    /// error indicator set.
    async fn refresh_after_mutation(&mut self) {
        let _ = self.refresh().await;
    }
}

impl ListController<Personal> {
    /// Moves a person to another project, or back to the unassigned pool.
    pub async fn assign_project(&mut self, id: i32, project: &str) -> Result<Personal, ClientError> {
        let patch = PersonalPatch {
            proyecto_asignado: Some(project.to_string()),
            ..Default::default()
        };
        self.update(id, &patch).await
    }
}
