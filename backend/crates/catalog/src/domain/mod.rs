//! Domain Layer
//!
//! - Entities (Cheese)
//! - Value objects (CheeseId, validated CheeseDraft)
//! - Repository traits (interfaces)

pub mod entities;
pub mod repository;
pub mod value_objects;
