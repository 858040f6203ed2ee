//! In-Memory Cheese Repository

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::entities::Cheese;
use crate::domain::repository::CheeseRepository;
use crate::domain::value_objects::{CheeseDraft, CheeseId};
use crate::error::{CatalogError, CatalogResult};

struct Shelf {
    cheeses: BTreeMap<CheeseId, Cheese>,
    next_id: u32,
}

/// Cheese repository backed by a `BTreeMap`, so listing is ordered by id
#[derive(Clone)]
pub struct InMemoryCheeseRepository {
    shelf: Arc<RwLock<Shelf>>,
}

impl Default for InMemoryCheeseRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryCheeseRepository {
    /// Empty repository; ids start at 1
    pub fn new() -> Self {
        Self::with_cheeses(Vec::new())
    }

    /// Repository stocked with Marble, Camembert and Leicester
    pub fn seeded() -> Self {
        let seed = [
            ("Marble", 7.99, None, "Cheddar"),
            ("Camembert", 12.5, Some(4.0), "Soft-ripened"),
            ("Leicester", 9.25, Some(2.0), "Hard"),
        ];

        let cheeses = seed
            .into_iter()
            .zip(1..)
            .map(|((name, price, stink_rating, category), id)| Cheese {
                id: CheeseId(id),
                name: name.to_string(),
                price,
                stink_rating,
                category: category.to_string(),
            })
            .collect();

        Self::with_cheeses(cheeses)
    }

    fn with_cheeses(cheeses: Vec<Cheese>) -> Self {
        let next_id = cheeses
            .iter()
            .map(|c| c.id.0)
            .max()
            .map_or(1, |max| max.saturating_add(1));
        let cheeses = cheeses.into_iter().map(|c| (c.id, c)).collect();

        Self {
            shelf: Arc::new(RwLock::new(Shelf { cheeses, next_id })),
        }
    }
}

impl CheeseRepository for InMemoryCheeseRepository {
    async fn list(&self) -> CatalogResult<Vec<Cheese>> {
        Ok(self.shelf.read().await.cheeses.values().cloned().collect())
    }

    async fn find(&self, id: CheeseId) -> CatalogResult<Option<Cheese>> {
        Ok(self.shelf.read().await.cheeses.get(&id).cloned())
    }

    async fn create(&self, draft: CheeseDraft) -> CatalogResult<Cheese> {
        let mut shelf = self.shelf.write().await;

        let id = CheeseId(shelf.next_id);
        shelf.next_id = shelf
            .next_id
            .checked_add(1)
            .ok_or_else(|| CatalogError::Internal("Cheese id space exhausted".to_string()))?;

        let cheese = Cheese::from_draft(id, draft);
        shelf.cheeses.insert(id, cheese.clone());
        Ok(cheese)
    }

    async fn update(&self, id: CheeseId, draft: CheeseDraft) -> CatalogResult<Option<Cheese>> {
        let mut shelf = self.shelf.write().await;

        Ok(shelf.cheeses.get_mut(&id).map(|slot| {
            *slot = Cheese::from_draft(id, draft);
            slot.clone()
        }))
    }

    async fn delete(&self, id: CheeseId) -> CatalogResult<bool> {
        Ok(self.shelf.write().await.cheeses.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str) -> CheeseDraft {
        CheeseDraft::new(name, 10.0, None, "Blue").unwrap()
    }

    #[tokio::test]
    async fn test_seeded_order() {
        let repo = InMemoryCheeseRepository::seeded();
        let names: Vec<_> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, ["Marble", "Camembert", "Leicester"]);
    }

    #[tokio::test]
    async fn test_create_assigns_next_id() {
        let repo = InMemoryCheeseRepository::seeded();
        let created = repo.create(draft("Stilton")).await.unwrap();
        assert_eq!(created.id, CheeseId(4));
        assert_eq!(repo.find(CheeseId(4)).await.unwrap(), Some(created));
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_delete() {
        let repo = InMemoryCheeseRepository::new();
        let first = repo.create(draft("Stilton")).await.unwrap();
        assert!(repo.delete(first.id).await.unwrap());
        let second = repo.create(draft("Roquefort")).await.unwrap();
        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn test_create_fails_when_ids_run_out() {
        let last = Cheese::from_draft(CheeseId(u32::MAX - 1), draft("Gorgonzola"));
        let repo = InMemoryCheeseRepository::with_cheeses(vec![last]);

        let result = repo.create(draft("Stilton")).await;
        assert!(matches!(result, Err(CatalogError::Internal(_))));
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_and_delete_unknown() {
        let repo = InMemoryCheeseRepository::new();
        assert_eq!(repo.update(CheeseId(9), draft("Feta")).await.unwrap(), None);
        assert!(!repo.delete(CheeseId(9)).await.unwrap());
    }

    #[tokio::test]
    async fn test_update_replaces_fields() {
        let repo = InMemoryCheeseRepository::seeded();
        let updated = repo
            .update(CheeseId(1), draft("Marble Reserve"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.id, CheeseId(1));
        assert_eq!(updated.category, "Blue");
        assert_eq!(repo.find(CheeseId(1)).await.unwrap(), Some(updated));
    }
}
