//! Input normalization for task fields.
//!
//! Titles and descriptions are trimmed before storage; a title that is
//! empty after trimming is rejected.

use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

pub const MAX_TITLE_LEN: usize = 100;
pub const MAX_DESCRIPTION_LEN: usize = 500;

/// Trim and validate a task title.
#[track_caller]
pub fn normalize_title(raw: &str) -> CoreErrorResult<String> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(CoreError::Validation {
            message: "Title cannot be empty or whitespace-only".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }
    if trimmed.chars().count() > MAX_TITLE_LEN {
        return Err(CoreError::Validation {
            message: format!("Title exceeds {} characters", MAX_TITLE_LEN),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(trimmed.to_string())
}

/// Trim and validate an optional task description. A description that is
/// empty after trimming collapses to `None`.
#[track_caller]
pub fn normalize_description(raw: Option<&str>) -> CoreErrorResult<Option<String>> {
    let Some(raw) = raw else {
        return Ok(None);
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    if trimmed.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(CoreError::Validation {
            message: format!("Description exceeds {} characters", MAX_DESCRIPTION_LEN),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(Some(trimmed.to_string()))
}
