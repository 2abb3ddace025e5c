use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{blank_as_none, Resource, ResourceId, UnknownStatus, UNASSIGNED_PROJECT};
use crate::errors::AppError;
use crate::resources::validation::{non_blank, reject_blank, require_fields, Validate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PersonnelStatus {
    #[default]
    Available,
    Assigned,
    Maintenance,
    Vacation,
}

impl PersonnelStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            PersonnelStatus::Available => "Disponible",
            PersonnelStatus::Assigned => "Asignado",
            PersonnelStatus::Maintenance => "En Mantenimiento",
            PersonnelStatus::Vacation => "Vacaciones",
        }
    }
}

impl fmt::Display for PersonnelStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PersonnelStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "disponible" | "available" => Ok(PersonnelStatus::Available),
            "asignado" | "assigned" => Ok(PersonnelStatus::Assigned),
            "en mantenimiento" | "mantenimiento" | "maintenance" => {
                Ok(PersonnelStatus::Maintenance)
            }
            "vacaciones" | "vacation" => Ok(PersonnelStatus::Vacation),
            _ => Err(UnknownStatus(s.to_string())),
        }
    }
}

impl TryFrom<String> for PersonnelStatus {
    type Error = UnknownStatus;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PersonnelStatus> for String {
    fn from(status: PersonnelStatus) -> Self {
        status.as_str().to_string()
    }
}

/// A row from `recursos_schema.recursos`. Wire and column names keep the
/// Spanish naming of the personnel service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Personnel {
    pub id: ResourceId,
    #[serde(rename = "nombre_completo")]
    #[sqlx(rename = "nombre_completo")]
    pub full_name: String,
    #[serde(rename = "rol")]
    #[sqlx(rename = "rol")]
    pub role: String,
    #[serde(rename = "especializacion")]
    #[sqlx(rename = "especializacion")]
    pub specialization: Option<String>,
    pub email: String,
    #[serde(rename = "telefono")]
    #[sqlx(rename = "telefono")]
    pub phone: Option<String>,
    #[serde(rename = "estado")]
    #[sqlx(rename = "estado")]
    #[sqlx(try_from = "String")]
    pub status: PersonnelStatus,
    #[serde(rename = "proyecto_asignado")]
    #[sqlx(rename = "proyecto_asignado")]
    pub assigned_project: String,
}

impl Resource for Personnel {
    type Create = CreatePersonnel;
    type Draft = NewPersonnel;
    type Update = UpdatePersonnel;

    const BASE_PATH: &'static str = "/recursos";
    const LABEL: &'static str = "Personnel";

    fn id(&self) -> ResourceId {
        self.id
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatePersonnel {
    #[serde(rename = "nombre_completo")]
    pub full_name: Option<String>,
    #[serde(rename = "rol")]
    pub role: Option<String>,
    #[serde(rename = "especializacion")]
    pub specialization: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "telefono")]
    pub phone: Option<String>,
    #[serde(rename = "estado", default, deserialize_with = "blank_as_none")]
    pub status: Option<PersonnelStatus>,
    #[serde(rename = "proyecto_asignado")]
    pub assigned_project: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewPersonnel {
    pub full_name: String,
    pub role: String,
    pub specialization: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub status: PersonnelStatus,
    pub assigned_project: String,
}

impl TryFrom<CreatePersonnel> for NewPersonnel {
    type Error = AppError;

    fn try_from(input: CreatePersonnel) -> Result<Self, Self::Error> {
        require_fields(&[
            ("nombre_completo", &input.full_name),
            ("rol", &input.role),
            ("email", &input.email),
        ])?;

        Ok(NewPersonnel {
            full_name: input.full_name.unwrap_or_default(),
            role: input.role.unwrap_or_default(),
            specialization: non_blank(input.specialization),
            email: input.email.unwrap_or_default(),
            phone: non_blank(input.phone),
            status: input.status.unwrap_or_default(),
            assigned_project: non_blank(input.assigned_project)
                .unwrap_or_else(|| UNASSIGNED_PROJECT.to_string()),
        })
    }
}

/// Merge patch for `PUT /recursos/:id`; also used to reassign a person to a
/// project by sending only `proyecto_asignado`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePersonnel {
    #[serde(rename = "nombre_completo")]
    pub full_name: Option<String>,
    #[serde(rename = "rol")]
    pub role: Option<String>,
    #[serde(rename = "especializacion")]
    pub specialization: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "telefono")]
    pub phone: Option<String>,
    #[serde(rename = "estado", default, deserialize_with = "blank_as_none")]
    pub status: Option<PersonnelStatus>,
    #[serde(rename = "proyecto_asignado")]
    pub assigned_project: Option<String>,
}

impl Validate for UpdatePersonnel {
    fn validate(&self) -> Result<(), AppError> {
        reject_blank(&[
            ("nombre_completo", &self.full_name),
            ("rol", &self.role),
            ("email", &self.email),
        ])
    }
}
