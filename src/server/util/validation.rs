//! Text input checks shared by the ticket and account services.

use crate::server::error::domain::DomainError;

/// Trims `value` and checks it holds between 1 and `max` characters.
pub fn required_text(field: &str, value: &str, max: usize) -> Result<String, DomainError> {
    let value = value.trim();

    if value.is_empty() {
        return Err(DomainError::Validation(format!("{} is required", field)));
    }

    check_length(field, value, max)?;

    Ok(value.to_string())
}

/// Trims `value`, treating a blank value as absent.
pub fn optional_text(
    field: &str,
    value: Option<&str>,
    max: usize,
) -> Result<Option<String>, DomainError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => {
            check_length(field, value, max)?;
            Ok(Some(value.to_string()))
        }
    }
}

/// Cuts a generated history description down to the column width.
pub fn fit_description(description: String, max: usize) -> String {
    if description.chars().count() <= max {
        return description;
    }

    description.chars().take(max).collect()
}

fn check_length(field: &str, value: &str, max: usize) -> Result<(), DomainError> {
    let length = value.chars().count();

    if length > max {
        return Err(DomainError::Validation(format!(
            "{} must be at most {} characters, got {}",
            field, max, length
        )));
    }

    Ok(())
}
