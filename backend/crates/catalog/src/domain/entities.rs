//! Domain Entities

use serde::Serialize;

use crate::domain::value_objects::{CheeseDraft, CheeseId};

/// Cheese entity
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cheese {
    pub id: CheeseId,
    pub name: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stink_rating: Option<f64>,
    pub category: String,
}

impl Cheese {
    pub fn from_draft(id: CheeseId, draft: CheeseDraft) -> Self {
        Self {
            id,
            name: draft.name().to_string(),
            price: draft.price(),
            stink_rating: draft.stink_rating(),
            category: draft.category().to_string(),
        }
    }
}
