//! API DTOs

use serde::Deserialize;

use crate::domain::value_objects::{CheeseDraft, CheeseError};

/// Create/replace request body
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheeseRequest {
    #[serde(default)]
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub stink_rating: Option<f64>,
    #[serde(default)]
    pub category: String,
}

impl TryFrom<CheeseRequest> for CheeseDraft {
    type Error = CheeseError;

    fn try_from(req: CheeseRequest) -> Result<Self, Self::Error> {
        CheeseDraft::new(req.name, req.price, req.stink_rating, req.category)
    }
}
