use chrono::{DateTime, Utc};
use core_common::EntityId;
use core_common::validation::not_blank;
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;
use validator::Validate;

pub const USER: &str = "User";
pub const NAME: &str = "name";
pub const EMAIL: &str = "email";
pub const PASSWORD: &str = "password";

pub const EMAIL_ALREADY_IN_USE: &str = "Email already in use.";

pub const NAME_MAX_CHARS: u64 = 100;
pub const EMAIL_MAX_CHARS: u64 = 150;

/// User aggregate
///
/// `password` holds the Argon2 hash once the user has gone through
/// `UserService`; the plaintext only lives on the request.
#[derive(Clone, PartialEq, Eq)]
pub struct User {
    pub id: EntityId,
    pub name: String,
    pub email: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(name: String, email: String, password: String) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            name,
            email,
            password,
            created_at: now,
            updated_at: now,
        }
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .finish()
    }
}

/// DTO for registering a user
#[derive(Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    #[serde(default)]
    #[schema(example = "John Doe")]
    #[validate(
        length(min = 1, max = NAME_MAX_CHARS),
        custom(function = "not_blank")
    )]
    pub name: String,
    #[serde(default)]
    #[schema(example = "john.doe@example.com")]
    #[validate(
        email,
        length(min = 1, max = EMAIL_MAX_CHARS),
        custom(function = "not_blank")
    )]
    pub email: String,
    #[serde(default)]
    #[schema(example = "P@ssw0rd")]
    #[validate(custom(function = "not_blank"))]
    pub password: String,
}

impl CreateUserRequest {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn into_domain_entity(self) -> User {
        User::new(self.name, self.email, self.password)
    }
}

impl fmt::Debug for CreateUserRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreateUserRequest")
            .field("name", &self.name)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

/// Public projection of a newly created user (never carries the password)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CreateUserResponse {
    pub id: EntityId,
    pub name: String,
    pub email: String,
}

impl From<User> for CreateUserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}
