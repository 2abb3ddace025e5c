use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{Resource, ResourceId};
use crate::errors::AppError;
use crate::resources::validation::{non_blank, reject_blank, require_fields, Validate};

/// A row from `proyectos_schema.proyectos`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Project {
    pub id: ResourceId,
    pub name: String,
    pub description: Option<String>,
}

impl Resource for Project {
    type Create = CreateProject;
    type Draft = NewProject;
    type Update = UpdateProject;

    const BASE_PATH: &'static str = "/proyectos";
    const LABEL: &'static str = "Project";

    fn id(&self) -> ResourceId {
        self.id
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateProject {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewProject {
    pub name: String,
    pub description: Option<String>,
}

impl TryFrom<CreateProject> for NewProject {
    type Error = AppError;

    fn try_from(input: CreateProject) -> Result<Self, Self::Error> {
        require_fields(&[("name", &input.name)])?;
        Ok(NewProject {
            name: input.name.unwrap_or_default(),
            description: non_blank(input.description),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProject {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl Validate for UpdateProject {
    fn validate(&self) -> Result<(), AppError> {
        reject_blank(&[("name", &self.name)])
    }
}
