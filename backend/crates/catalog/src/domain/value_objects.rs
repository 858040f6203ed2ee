//! Domain Value Objects

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Lowest accepted price
pub const MIN_PRICE: f64 = 0.01;

/// Highest accepted price
pub const MAX_PRICE: f64 = 50.0;

/// Cheese identifier (sequential, assigned by the repository)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CheeseId(pub u32);

impl fmt::Display for CheeseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CheeseId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(CheeseId)
    }
}

/// Cheese validation errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CheeseError {
    #[error("Name is required")]
    MissingName,

    #[error("Category is required")]
    MissingCategory,

    #[error("Price must be between 0.01 and 50 (got {0})")]
    PriceOutOfRange(f64),
}

/// Validated cheese fields, without an id
#[derive(Debug, Clone, PartialEq)]
pub struct CheeseDraft {
    name: String,
    price: f64,
    stink_rating: Option<f64>,
    category: String,
}

impl CheeseDraft {
    /// Trim and validate
    ///
    /// Name and category must be non-blank; price must lie within
    /// [`MIN_PRICE`]..=[`MAX_PRICE`].
    pub fn new(
        name: impl AsRef<str>,
        price: f64,
        stink_rating: Option<f64>,
        category: impl AsRef<str>,
    ) -> Result<Self, CheeseError> {
        let name = name.as_ref().trim();
        if name.is_empty() {
            return Err(CheeseError::MissingName);
        }

        let category = category.as_ref().trim();
        if category.is_empty() {
            return Err(CheeseError::MissingCategory);
        }

        if !(MIN_PRICE..=MAX_PRICE).contains(&price) {
            return Err(CheeseError::PriceOutOfRange(price));
        }

        Ok(Self {
            name: name.to_string(),
            price,
            stink_rating,
            category: category.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn stink_rating(&self) -> Option<f64> {
        self.stink_rating
    }

    pub fn category(&self) -> &str {
        &self.category
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_draft_is_trimmed() {
        let draft = CheeseDraft::new("  Brie ", 9.5, Some(4.0), " Soft ").unwrap();
        assert_eq!(draft.name(), "Brie");
        assert_eq!(draft.category(), "Soft");
        assert_eq!(draft.stink_rating(), Some(4.0));
    }

    #[test]
    fn test_blank_fields_rejected() {
        assert_eq!(
            CheeseDraft::new(" ", 5.0, None, "Hard"),
            Err(CheeseError::MissingName)
        );
        assert_eq!(
            CheeseDraft::new("Gouda", 5.0, None, ""),
            Err(CheeseError::MissingCategory)
        );
    }

    #[test]
    fn test_price_bounds_inclusive() {
        assert!(CheeseDraft::new("Gouda", 0.01, None, "Hard").is_ok());
        assert!(CheeseDraft::new("Gouda", 50.0, None, "Hard").is_ok());
        assert!(CheeseDraft::new("Gouda", 0.0, None, "Hard").is_err());
        assert!(CheeseDraft::new("Gouda", 50.01, None, "Hard").is_err());
        assert!(CheeseDraft::new("Gouda", f64::NAN, None, "Hard").is_err());
    }

    #[test]
    fn test_cheese_id_parse() {
        assert_eq!("7".parse::<CheeseId>(), Ok(CheeseId(7)));
        assert!("seven".parse::<CheeseId>().is_err());
        assert!("-1".parse::<CheeseId>().is_err());
    }
}
