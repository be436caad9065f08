use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

use crate::either::Either;

/// Single human-readable message returned for every service failure,
/// and for operations whose success carries no entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for MessageResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

pub type ServiceOutcome<T> = Either<MessageResponse, T>;
