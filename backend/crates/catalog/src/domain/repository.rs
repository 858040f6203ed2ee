//! Repository Traits

use crate::domain::entities::Cheese;
use crate::domain::value_objects::{CheeseDraft, CheeseId};
use crate::error::CatalogResult;

/// Cheese repository trait
#[trait_variant::make(CheeseRepository: Send)]
pub trait LocalCheeseRepository {
    /// All cheeses, ordered by id
    async fn list(&self) -> CatalogResult<Vec<Cheese>>;

    /// Find cheese by ID
    async fn find(&self, id: CheeseId) -> CatalogResult<Option<Cheese>>;

    /// Store a new cheese under a fresh id
    async fn create(&self, draft: CheeseDraft) -> CatalogResult<Cheese>;

    /// Replace an existing cheese; `None` if the id is unknown
    async fn update(&self, id: CheeseId, draft: CheeseDraft) -> CatalogResult<Option<Cheese>>;

    /// Remove a cheese; `false` if the id is unknown
    async fn delete(&self, id: CheeseId) -> CatalogResult<bool>;
}
