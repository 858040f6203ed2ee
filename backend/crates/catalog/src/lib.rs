//! Catalog Backend Module
//!
//! The cheese resource served under `/api/v1/cheeses`. Authentication is
//! applied by the caller as a layer; this crate knows nothing about users.
//!
//! - `domain/` - Cheese entity, validation, repository trait
//! - `infra/` - In-memory repository
//! - `presentation/` - HTTP handlers, DTOs, router

pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use domain::repository::CheeseRepository;
pub use error::{CatalogError, CatalogResult};
pub use infra::memory::InMemoryCheeseRepository;
pub use presentation::router::{cheese_router, cheese_router_generic};
