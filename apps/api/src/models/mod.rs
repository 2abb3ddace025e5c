pub mod document;
pub mod personnel;
pub mod project;

use std::str::FromStr;

use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};

use crate::errors::AppError;
use crate::resources::validation::Validate;

/// Store-assigned identifier (`SERIAL` column).
pub type ResourceId = i32;

/// Sentinel stored in free-text project references that point at no project.
pub const UNASSIGNED_PROJECT: &str = "sin asignacion";

/// A table-backed entity kind served under its own base path.
///
/// `Create` is the raw submission body, `Draft` the validated insert with
/// defaults applied, and `Update` the merge patch (absent fields keep their
/// stored value).
pub trait Resource: Serialize + Clone + Send + Sync + Unpin + 'static {
    type Create: DeserializeOwned + Send + 'static;
    type Draft: TryFrom<Self::Create, Error = AppError> + Send + 'static;
    type Update: DeserializeOwned + Validate + Send + Sync + 'static;

    /// Route prefix, e.g. `/documents`.
    const BASE_PATH: &'static str;
    /// Human label used in log lines and NotFound details.
    const LABEL: &'static str;

    fn id(&self) -> ResourceId;
}

/// Deserializes an optional string-backed value, treating `null`, a missing
/// field and a blank string alike as "not provided".
pub fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw {
        Some(s) if !s.trim().is_empty() => s
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}

/// Error returned when a status string matches none of the known values.
#[derive(Debug, thiserror::Error)]
#[error("unknown status '{0}'")]
pub struct UnknownStatus(pub String);
