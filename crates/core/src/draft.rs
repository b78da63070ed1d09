//! Creation form input and its validation.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{Category, MAX_SIZE_EU, MIN_SIZE_EU, ShoeId, ShoeRecord};

/// Reasons a creation form submission is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    /// One of ID, brand, model, color or price was left empty.
    ///
    /// A price of zero also counts as not filled in.
    #[error("Please fill in all required fields 😉")]
    MissingFields,

    /// The price is not a number.
    #[error("Price must be a number (got {0:?})")]
    InvalidPrice(String),

    /// The size is not a whole number between the form's bounds.
    #[error("Size EU must be a whole number from 35 to 49 (got {0:?})")]
    InvalidSize(String),

    /// The category is not one of the selectable names.
    #[error("Unknown category {0:?}")]
    InvalidCategory(String),
}

/// Raw values submitted by the creation form.
///
/// Every field is text so that an empty input can be reported as a warning
/// instead of failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoeDraft {
    #[serde(default)]
    pub shoes_id: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub size_eu: String,
    #[serde(default)]
    pub price_idr: String,
}

impl ShoeDraft {
    /// Check the draft and build the record it describes.
    ///
    /// # Errors
    ///
    /// Returns `DraftError::MissingFields` when a required field is empty or
    /// the price is zero, and the other variants when a value does not parse.
    pub fn validate(&self) -> Result<ShoeRecord, DraftError> {
        let required = [
            &self.shoes_id,
            &self.brand,
            &self.model,
            &self.color,
            &self.price_idr,
        ];
        if required.iter().any(|field| field.is_empty()) {
            return Err(DraftError::MissingFields);
        }

        let price_idr = Decimal::from_str(self.price_idr.trim())
            .map_err(|_| DraftError::InvalidPrice(self.price_idr.clone()))?;
        if price_idr.is_zero() {
            return Err(DraftError::MissingFields);
        }

        let category = Category::from_str(&self.category)
            .map_err(|_| DraftError::InvalidCategory(self.category.clone()))?;

        let size_eu = self
            .size_eu
            .trim()
            .parse::<u8>()
            .ok()
            .filter(|size| (MIN_SIZE_EU..=MAX_SIZE_EU).contains(size))
            .ok_or_else(|| DraftError::InvalidSize(self.size_eu.clone()))?;

        Ok(ShoeRecord {
            id: ShoeId::new(self.shoes_id.clone()),
            brand: self.brand.clone(),
            model: self.model.clone(),
            category,
            color: self.color.clone(),
            size_eu,
            price_idr,
        })
    }
}
