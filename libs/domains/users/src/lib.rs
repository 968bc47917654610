//! Users Domain
//!
//! In-memory user management: a store of user records keyed by an opaque
//! id, with email uniqueness enforced atomically, and the HTTP endpoints
//! that expose it.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, status mapping
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← NotFound mapping, tracing spans
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Records + email index under one lock
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs, validation rules
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_users::{
//!     handlers,
//!     repository::InMemoryUserRepository,
//!     service::UserService,
//! };
//!
//! let repository = InMemoryUserRepository::with_demo_users();
//! let service = UserService::new(repository);
//!
//! let router = axum::Router::new().nest("/users", handlers::router(service));
//! ```

pub mod error;
pub mod handlers;
pub mod id;
pub mod models;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{UserError, UserResult};
pub use id::{IdGenerator, UuidIdGenerator};
pub use models::{CreateUser, UpdateUser, User};
pub use repository::{DEMO_USERS, InMemoryUserRepository, UserRepository};
pub use service::UserService;
