//! Users Domain
//!
//! Registration of the people who own categories. Emails are unique and
//! passwords are stored as Argon2 hashes only.
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_users::{
//!     Argon2HashService, InMemoryUserRepository, UserService, handlers,
//! };
//!
//! let service = UserService::new(InMemoryUserRepository::new(), Argon2HashService::new());
//! let router = handlers::router(service);
//! ```

pub mod entity;
pub mod handlers;
pub mod hashing;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;
pub mod validation;

// Re-export commonly used types
pub use hashing::{Argon2HashService, HashError, HashService};
pub use models::{CreateUserRequest, CreateUserResponse, User};
pub use postgres::PgUserRepository;
pub use repository::{InMemoryUserRepository, UserRepository};
pub use service::UserService;
pub use validation::CreateUserValidator;
