//! Domain errors

use serde::Serialize;
use thiserror::Error;

/// A single field-scoped validation failure.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation failed")]
    Validation(Vec<FieldError>),

    #[error("File category with id {0} not found")]
    CategoryNotFound(String),

    #[error("A file category with this code already exists")]
    CategoryExists(String),

    #[error("Cannot delete file category. It is assigned to {0} user(s). Please unassign it from all users first.")]
    CategoryInUse(i64),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    pub fn validation(field: &str, message: &str) -> Self {
        DomainError::Validation(vec![FieldError {
            field: field.to_string(),
            message: message.to_string(),
        }])
    }
}

impl From<validator::ValidationErrors> for DomainError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut details: Vec<FieldError> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| FieldError {
                    field: field.to_string(),
                    message: e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Invalid value for {}", field)),
                })
            })
            .collect();
        details.sort_by(|a, b| a.field.cmp(&b.field));
        DomainError::Validation(details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_use_message_carries_count() {
        let err = DomainError::CategoryInUse(5);
        assert!(err.to_string().contains("5 user(s)"));
    }

    #[test]
    fn test_validation_helper_is_field_scoped() {
        let err = DomainError::validation("code", "Code is required");
        match err {
            DomainError::Validation(details) => {
                assert_eq!(details.len(), 1);
                assert_eq!(details[0].field, "code");
            }
            _ => panic!("expected validation error"),
        }
    }
}
