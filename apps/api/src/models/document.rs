use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{blank_as_none, Resource, ResourceId, UnknownStatus, UNASSIGNED_PROJECT};
use crate::errors::AppError;
use crate::resources::validation::{non_blank, reject_blank, require_fields, Validate};

pub const DEFAULT_VERSION: &str = "v1.0";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DocumentStatus {
    #[default]
    Draft,
    Active,
    InReview,
    Archived,
}

impl DocumentStatus {
    /// Value stored in the `status` column and sent over the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            DocumentStatus::Draft => "Borrador",
            DocumentStatus::Active => "Activo",
            DocumentStatus::InReview => "En Revisión",
            DocumentStatus::Archived => "Archivado",
        }
    }
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentStatus {
    type Err = UnknownStatus;

    /// Accepts the stored Spanish labels and the lowercase English keys older
    /// clients send.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "borrador" | "draft" => Ok(DocumentStatus::Draft),
            "activo" | "active" => Ok(DocumentStatus::Active),
            "en revisión" | "en revision" | "review" | "in_review" => {
                Ok(DocumentStatus::InReview)
            }
            "archivado" | "archived" => Ok(DocumentStatus::Archived),
            _ => Err(UnknownStatus(s.to_string())),
        }
    }
}

impl TryFrom<String> for DocumentStatus {
    type Error = UnknownStatus;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DocumentStatus> for String {
    fn from(status: DocumentStatus) -> Self {
        status.as_str().to_string()
    }
}

/// A row from `gestion_schema.documents`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Document {
    pub id: ResourceId,
    pub name: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub doc_type: String,
    pub project: String,
    pub version: String,
    #[sqlx(try_from = "String")]
    pub status: DocumentStatus,
    pub created_by: String,
}

impl Resource for Document {
    type Create = CreateDocument;
    type Draft = NewDocument;
    type Update = UpdateDocument;

    const BASE_PATH: &'static str = "/documents";
    const LABEL: &'static str = "Document";

    fn id(&self) -> ResourceId {
        self.id
    }
}

/// Submission body for `POST /documents`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateDocument {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub doc_type: Option<String>,
    pub project: Option<String>,
    pub version: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub status: Option<DocumentStatus>,
    pub created_by: Option<String>,
}

/// A validated document insert with defaults applied.
#[derive(Debug, Clone, PartialEq)]
pub struct NewDocument {
    pub name: String,
    pub doc_type: String,
    pub project: String,
    pub version: String,
    pub status: DocumentStatus,
    pub created_by: String,
}

impl TryFrom<CreateDocument> for NewDocument {
    type Error = AppError;

    fn try_from(input: CreateDocument) -> Result<Self, Self::Error> {
        require_fields(&[
            ("name", &input.name),
            ("type", &input.doc_type),
            ("created_by", &input.created_by),
        ])?;

        Ok(NewDocument {
            name: input.name.unwrap_or_default(),
            doc_type: input.doc_type.unwrap_or_default(),
            project: non_blank(input.project).unwrap_or_else(|| UNASSIGNED_PROJECT.to_string()),
            version: non_blank(input.version).unwrap_or_else(|| DEFAULT_VERSION.to_string()),
            status: input.status.unwrap_or_default(),
            created_by: input.created_by.unwrap_or_default(),
        })
    }
}

/// Merge patch for `PUT /documents/:id`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateDocument {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub doc_type: Option<String>,
    pub project: Option<String>,
    pub version: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub status: Option<DocumentStatus>,
    pub created_by: Option<String>,
}

impl Validate for UpdateDocument {
    fn validate(&self) -> Result<(), AppError> {
        reject_blank(&[
            ("name", &self.name),
            ("type", &self.doc_type),
            ("created_by", &self.created_by),
        ])
    }
}

/// Aggregate counts returned by `GET /documents/stats`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
pub struct DocumentStats {
    pub total: i64,
    pub active: i64,
    pub review: i64,
    pub draft: i64,
    pub archived: i64,
    pub projects: i64,
}

/// Query string of `GET /documents/search`. Empty criteria are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DocumentSearch {
    pub search: Option<String>,
    #[serde(rename = "type")]
    pub doc_type: Option<String>,
    pub project: Option<String>,
}

impl DocumentSearch {
    pub fn text(&self) -> Option<&str> {
        active_criterion(&self.search)
    }

    pub fn doc_type(&self) -> Option<&str> {
        active_criterion(&self.doc_type)
    }

    pub fn project(&self) -> Option<&str> {
        active_criterion(&self.project)
    }
}

fn active_criterion(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_accepts_labels_and_aliases() {
        assert_eq!("Borrador".parse::<DocumentStatus>().unwrap(), DocumentStatus::Draft);
        assert_eq!("review".parse::<DocumentStatus>().unwrap(), DocumentStatus::InReview);
        assert_eq!(
            "En Revisión".parse::<DocumentStatus>().unwrap(),
            DocumentStatus::InReview
        );
        assert!("Perdido".parse::<DocumentStatus>().is_err());
    }

    #[test]
    fn test_status_serializes_as_label() {
        let json = serde_json::to_string(&DocumentStatus::Archived).unwrap();
        assert_eq!(json, "\"Archivado\"");
    }

    #[test]
    fn test_create_applies_defaults() {
        let input: CreateDocument = serde_json::from_value(serde_json::json!({
            "name": "Contrato A",
            "type": "Contrato",
            "created_by": "Ana"
        }))
        .unwrap();

        let draft = NewDocument::try_from(input).unwrap();
        assert_eq!(draft.status, DocumentStatus::Draft);
        assert_eq!(draft.version, "v1.0");
        assert_eq!(draft.project, UNASSIGNED_PROJECT);
        assert_eq!(draft.name, "Contrato A");
    }

    #[test]
    fn test_create_rejects_missing_required_fields() {
        let input: CreateDocument = serde_json::from_value(serde_json::json!({
            "name": "  ",
            "type": "Informe"
        }))
        .unwrap();

        match NewDocument::try_from(input) {
            Err(AppError::InvalidInput(msg)) => {
                assert!(msg.contains("name"));
                assert!(msg.contains("created_by"));
                assert!(!msg.contains("type"));
            }
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_blank_status_means_default() {
        let input: CreateDocument = serde_json::from_value(serde_json::json!({
            "name": "Plano B",
            "type": "Plano",
            "created_by": "Luis",
            "status": ""
        }))
        .unwrap();
        assert!(input.status.is_none());
    }

    #[test]
    fn test_update_rejects_blank_required_field() {
        let patch = UpdateDocument {
            name: Some(String::new()),
            ..Default::default()
        };
        assert!(patch.validate().is_err());

        let patch = UpdateDocument {
            status: Some(DocumentStatus::Archived),
            ..Default::default()
        };
        assert!(patch.validate().is_ok());
    }

    #[test]
    fn test_search_ignores_empty_criteria() {
        let search = DocumentSearch {
            search: Some("ana".into()),
            doc_type: Some(String::new()),
            project: None,
        };
        assert_eq!(search.text(), Some("ana"));
        assert_eq!(search.doc_type(), None);
        assert_eq!(search.project(), None);

        let spaces = DocumentSearch {
            search: Some("  ".into()),
            ..Default::default()
        };
        assert_eq!(spaces.text(), Some("  "));
    }
}
