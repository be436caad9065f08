use core_common::{FieldError, RequestValidator, validate_fields};

use crate::models::{CreateUserRequest, EMAIL, NAME, PASSWORD};

#[derive(Debug, Clone, Copy, Default)]
pub struct CreateUserValidator;

impl CreateUserValidator {
    const FIELDS: &'static [(&'static str, &'static str)] =
        &[("name", NAME), ("email", EMAIL), ("password", PASSWORD)];
}

impl RequestValidator<CreateUserRequest> for CreateUserValidator {
    fn validate(&self, request: &CreateUserRequest) -> Vec<FieldError> {
        validate_fields(request, Self::FIELDS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_request() {
        let request = CreateUserRequest::new("Ann", "ann@x.com", "pw1");
        assert!(CreateUserValidator.validate(&request).is_empty());
    }

    #[test]
    fn test_empty_request_reports_fields_in_order() {
        let request = CreateUserRequest::new("", "", "");
        let messages: Vec<_> = CreateUserValidator
            .validate(&request)
            .into_iter()
            .map(|e| e.message)
            .collect();

        assert_eq!(
            messages,
            vec![
                "The name is required.",
                "The email is required.",
                "The password is required.",
            ]
        );
    }

    #[test]
    fn test_malformed_email_is_invalid() {
        let request = CreateUserRequest::new("Ann", "not-an-email", "pw1");
        let first = CreateUserValidator.first_error(&request).unwrap();
        assert_eq!(first.message, "The email is invalid.");
    }

    #[test]
    fn test_whitespace_password_is_required() {
        let request = CreateUserRequest::new("Ann", "ann@x.com", "   ");
        assert_eq!(
            CreateUserValidator.validate(&request),
            vec![FieldError::required(PASSWORD)]
        );
    }

    #[test]
    fn test_overlong_fields_are_invalid() {
        let long_email = format!("{}@x.com", "a".repeat(150));
        let request = CreateUserRequest::new("Ann", long_email, "pw1");
        assert_eq!(
            CreateUserValidator.validate(&request),
            vec![FieldError::invalid(EMAIL)]
        );

        let request = CreateUserRequest::new("n".repeat(101), "ann@x.com", "pw1");
        assert_eq!(
            CreateUserValidator.validate(&request),
            vec![FieldError::invalid(NAME)]
        );
    }
}
