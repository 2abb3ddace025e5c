//! Client side of the Gestión services: a typed HTTP client for the CRUD
//! resources, the field-name translation between the wire and the localized
//! domain models, and the list controller that keeps a filtered view in sync
//! with the server.

pub mod api;
pub mod controller;
pub mod dashboard;
pub mod error;
pub mod fields;
pub mod filter;
pub mod models;

pub use api::{DocumentStats, Entity, HttpResourceApi, ResourceApi};
pub use controller::{Confirm, DeleteOutcome, ListController};
pub use error::ClientError;
pub use fields::FieldMap;
pub use models::{Documento, DocumentoFilter, Personal, PersonalFilter, Proyecto, ProyectoFilter};
