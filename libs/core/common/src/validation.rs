use std::fmt;

use validator::{Validate, ValidationError, ValidationErrors};

use crate::messages::{field_invalid, field_required};
use crate::repository::EntityId;

/// Error code marking a missing value; every other code reads as "invalid"
pub const REQUIRED: &str = "required";

/// A single field-level rule violation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn required(field: &'static str) -> Self {
        Self {
            field,
            message: field_required(field),
        }
    }

    pub fn invalid(field: &'static str) -> Self {
        Self {
            field,
            message: field_invalid(field),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Structural validation of a request value.
///
/// Implementations are pure and stateless. The returned list is empty when the
/// request is valid, otherwise it holds violations in declaration order so
/// callers that only report one error get a deterministic choice.
pub trait RequestValidator<T> {
    fn validate(&self, request: &T) -> Vec<FieldError>;

    fn first_error(&self, request: &T) -> Option<FieldError> {
        self.validate(request).into_iter().next()
    }
}

/// Run the `#[derive(Validate)]` rules of `request` and report one error per field.
///
/// `fields` pairs each struct field with the label used in messages and fixes
/// the reporting order. A `required` violation wins over any other on the same field.
pub fn validate_fields<T: Validate>(
    request: &T,
    fields: &[(&'static str, &'static str)],
) -> Vec<FieldError> {
    match request.validate() {
        Ok(()) => Vec::new(),
        Err(errors) => ordered_field_errors(&errors, fields),
    }
}

fn ordered_field_errors(
    errors: &ValidationErrors,
    fields: &[(&'static str, &'static str)],
) -> Vec<FieldError> {
    let by_field = errors.field_errors();

    fields
        .iter()
        .filter_map(|&(field, label)| {
            let violations = by_field.get(field).filter(|v| !v.is_empty())?;
            if violations.iter().any(|error| error.code == REQUIRED) {
                Some(FieldError::required(label))
            } else {
                Some(FieldError::invalid(label))
            }
        })
        .collect()
}

/// Custom rule: text with at least one non-whitespace character
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(REQUIRED));
    }
    Ok(())
}

/// Custom rule: an identity that was actually supplied
pub fn non_zero(value: &EntityId) -> Result<(), ValidationError> {
    if *value == 0 {
        return Err(ValidationError::new(REQUIRED));
    }
    Ok(())
}
