//! Categories Domain
//!
//! Income and expense categories owned by a user. Removing a category only
//! flags it as deleted: it disappears from the per-user listings but can
//! still be fetched by id.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← axum routes, 400 + MessageResponse on failure
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← validation, message composition, breakdown
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← CategoryRepository (in-memory + PostgreSQL)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Category, TransactionType, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_categories::{
//!     handlers,
//!     repository::InMemoryCategoryRepository,
//!     service::CategoryService,
//! };
//!
//! let repository = InMemoryCategoryRepository::new();
//! let service = CategoryService::new(repository);
//!
//! let router = handlers::router(service);
//! ```

pub mod entity;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;
pub mod validation;

// Re-export commonly used types
pub use models::{
    Category, CategoryBreakdownResponse, CategoryResponse, CreateCategoryRequest,
    TransactionType, UpdateCategoryRequest,
};
pub use postgres::PgCategoryRepository;
pub use repository::{CategoryRepository, InMemoryCategoryRepository};
pub use service::CategoryService;
pub use validation::{CreateCategoryValidator, UpdateCategoryValidator};
