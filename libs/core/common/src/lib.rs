//! Building blocks shared by the bookkeeping domains.
//!
//! - [`Either`]: the two-outcome value every repository and service returns
//! - [`Repository`]: base persistence contract with [`RepositoryError`]
//! - [`RequestValidator`] and [`validate_fields`]: ordered field errors from `#[derive(Validate)]` rules
//! - [`MessageResponse`]: the failure envelope handed to callers
//! - [`messages`]: message templates
//!
//! Failures never travel as panics or `Result` across the repository and service
//! seams; they are carried on the error side of an [`Either`].

pub mod either;
#[cfg(feature = "http")]
pub mod http;
pub mod messages;
pub mod repository;
pub mod response;
pub mod validation;

pub use either::Either;
pub use messages::{Operation, Outcome};
pub use repository::{EntityId, Repository, RepositoryError, RepositoryOutcome};
pub use response::{MessageResponse, ServiceOutcome};
pub use validation::{FieldError, RequestValidator, validate_fields};
