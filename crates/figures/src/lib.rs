//! Historical Figures Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Record entity, typed query filter, repository trait
//! - `application/` - Use cases (one per CRUD operation)
//! - `infra/` - Store implementations (PostgreSQL, in-memory)
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Request-to-store mapping contract
//! - Path identifiers are validated syntactically before any store call
//! - Body identifiers are ignored; the store assigns identifiers on insert
//!   and the path identifier wins on update
//! - Update is a full replacement of every non-identifier field and
//!   reports success whether or not the target existed
//! - Delete is idempotent; only a store-level failure is an error

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use domain::repository::FigureRepository;
pub use error::{FigureError, FigureResult};
pub use infra::memory::InMemoryFigureRepository;
pub use infra::postgres::PgFigureRepository;
pub use presentation::router::figures_router;
