//! Localized domain models as the list views use them. Wire names are never
//! seen here; see [`crate::fields`].

use serde::{Deserialize, Serialize};

use crate::api::Entity;
use crate::fields::{FieldMap, DOCUMENT_FIELDS, PERSONNEL_FIELDS, PROJECT_FIELDS};
use crate::filter::{matches_category, FilterCriteria, Filterable};

/// Project reference meaning "not assigned to any project".
pub const UNASSIGNED_PROJECT: &str = "sin asignacion";

pub const ESTADO_DISPONIBLE: &str = "Disponible";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Documento {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    pub nombre: String,
    pub tipo: String,
    #[serde(default)]
    pub proyecto: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub estado: String,
    #[serde(default)]
    pub creado_por: String,
}

/// Merge patch: only `Some` fields are sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentoPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tipo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proyecto: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estado: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creado_por: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentoFilter {
    pub search: String,
    pub tipo: String,
    pub proyecto: String,
    pub estado: String,
}

impl FilterCriteria for DocumentoFilter {
    fn search(&self) -> &str {
        &self.search
    }
}

impl Filterable for Documento {
    type Criteria = DocumentoFilter;

    fn text_fields(&self) -> Vec<&str> {
        vec![self.nombre.as_str(), self.creado_por.as_str()]
    }

    fn matches_categories(&self, criteria: &DocumentoFilter) -> bool {
        matches_category(&criteria.tipo, &self.tipo)
            && matches_category(&criteria.proyecto, &self.proyecto)
            && matches_category(&criteria.estado, &self.estado)
    }
}

impl Entity for Documento {
    type Patch = DocumentoPatch;

    const PATH: &'static str = "/documents";
    const LABEL: &'static str = "documento";
    const FIELDS: FieldMap = DOCUMENT_FIELDS;

    fn id(&self) -> Option<i32> {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.nombre
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Personal {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    pub nombre_completo: String,
    pub rol: String,
    #[serde(default)]
    pub especializacion: Option<String>,
    pub email: String,
    #[serde(default)]
    pub telefono: Option<String>,
    #[serde(default)]
    pub estado: String,
    #[serde(default)]
    pub proyecto_asignado: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre_completo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub especializacion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telefono: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estado: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proyecto_asignado: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersonalFilter {
    pub search: String,
    pub estado: String,
    pub proyecto_asignado: String,
}

impl FilterCriteria for PersonalFilter {
    fn search(&self) -> &str {
        &self.search
    }
}

impl Filterable for Personal {
    type Criteria = PersonalFilter;

    fn text_fields(&self) -> Vec<&str> {
        vec![self.nombre_completo.as_str(), self.rol.as_str()]
    }

    fn matches_categories(&self, criteria: &PersonalFilter) -> bool {
        matches_category(&criteria.estado, &self.estado)
            && matches_category(&criteria.proyecto_asignado, &self.proyecto_asignado)
    }
}

impl Entity for Personal {
    type Patch = PersonalPatch;

    const PATH: &'static str = "/recursos";
    const LABEL: &'static str = "recurso";
    const FIELDS: FieldMap = PERSONNEL_FIELDS;

    fn id(&self) -> Option<i32> {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.nombre_completo
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Proyecto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    pub nombre: String,
    #[serde(default)]
    pub descripcion: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProyectoPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
}

/// Projects have no categorical fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProyectoFilter {
    pub search: String,
}

impl FilterCriteria for ProyectoFilter {
    fn search(&self) -> &str {
        &self.search
    }
}

impl Filterable for Proyecto {
    type Criteria = ProyectoFilter;

    fn text_fields(&self) -> Vec<&str> {
        vec![self.nombre.as_str(), self.descripcion.as_deref().unwrap_or_default()]
    }

    fn matches_categories(&self, _criteria: &ProyectoFilter) -> bool {
        true
    }
}

impl Entity for Proyecto {
    type Patch = ProyectoPatch;

    const PATH: &'static str = "/proyectos";
    const LABEL: &'static str = "proyecto";
    const FIELDS: FieldMap = PROJECT_FIELDS;

    fn id(&self) -> Option<i32> {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.nombre
    }
}
