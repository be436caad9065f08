use core_common::messages::{ID, USER_ID};
use core_common::{FieldError, RequestValidator, validate_fields};

use crate::models::{CreateCategoryRequest, NAME, TRANSACTION_TYPE, UpdateCategoryRequest};

/// Create rules, reported name first
#[derive(Debug, Clone, Copy, Default)]
pub struct CreateCategoryValidator;

impl CreateCategoryValidator {
    const FIELDS: &'static [(&'static str, &'static str)] = &[
        ("name", NAME),
        ("transaction_type", TRANSACTION_TYPE),
        ("user_id", USER_ID),
    ];
}

impl RequestValidator<CreateCategoryRequest> for CreateCategoryValidator {
    fn validate(&self, request: &CreateCategoryRequest) -> Vec<FieldError> {
        validate_fields(request, Self::FIELDS)
    }
}

/// Update rules, reported identity first
#[derive(Debug, Clone, Copy, Default)]
pub struct UpdateCategoryValidator;

impl UpdateCategoryValidator {
    const FIELDS: &'static [(&'static str, &'static str)] = &[
        ("id", ID),
        ("user_id", USER_ID),
        ("name", NAME),
        ("transaction_type", TRANSACTION_TYPE),
    ];
}

impl RequestValidator<UpdateCategoryRequest> for UpdateCategoryValidator {
    fn validate(&self, request: &UpdateCategoryRequest) -> Vec<FieldError> {
        validate_fields(request, Self::FIELDS)
    }
}
