use crate::errors::AppError;

/// Checks a merge patch before it reaches the store.
pub trait Validate {
    fn validate(&self) -> Result<(), AppError>;
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |v| v.trim().is_empty())
}

/// Fails with `InvalidInput` naming every required field that is missing or
/// blank.
pub fn require_fields(fields: &[(&str, &Option<String>)]) -> Result<(), AppError> {
    let missing: Vec<&str> = fields
        .iter()
        .filter(|(_, value)| is_blank(value))
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(AppError::InvalidInput(format!(
            "{} required",
            missing.join(", ")
        )))
    }
}

/// Fails when a patch sets a required field to an empty string. Absent
/// fields are fine: the stored value is kept.
pub fn reject_blank(fields: &[(&str, &Option<String>)]) -> Result<(), AppError> {
    let blanked: Vec<&str> = fields
        .iter()
        .filter(|(_, value)| value.is_some() && is_blank(value))
        .map(|(name, _)| *name)
        .collect();

    if blanked.is_empty() {
        Ok(())
    } else {
        Err(AppError::InvalidInput(format!(
            "{} cannot be empty",
            blanked.join(", ")
        )))
    }
}

/// Drops blank optional values so the column default applies.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
