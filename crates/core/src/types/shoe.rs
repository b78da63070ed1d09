//! The shoe record.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::category::{Capability, Category};
use super::id::ShoeId;

/// Smallest EU size offered by the creation form.
pub const MIN_SIZE_EU: u8 = 35;

/// Largest EU size offered by the creation form.
pub const MAX_SIZE_EU: u8 = 49;

/// One pair of shoes in stock.
///
/// A plain value: nothing is validated on construction, so records loaded
/// from the data file may carry unknown categories or any price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoeRecord {
    pub id: ShoeId,
    pub brand: String,
    pub model: String,
    pub category: Category,
    pub color: String,
    pub size_eu: u8,
    /// Price in Indonesian rupiah.
    pub price_idr: Decimal,
}

impl ShoeRecord {
    /// True iff the category is exactly `Football`.
    #[must_use]
    pub fn is_football_capable(&self) -> bool {
        self.category.has(Capability::Football)
    }

    /// True iff the category is `Running`, `Basketball` or `Football`.
    #[must_use]
    pub fn is_running_capable(&self) -> bool {
        self.category.has(Capability::Running)
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::shoe;
    use super::*;

    #[test]
    fn test_football_shoe_is_capable_of_both() {
        let boot = shoe("1", Category::Football);
        assert!(boot.is_football_capable());
        assert!(boot.is_running_capable());
    }

    #[test]
    fn test_running_categories() {
        assert!(shoe("1", Category::Running).is_running_capable());
        assert!(shoe("2", Category::Basketball).is_running_capable());
        assert!(!shoe("3", Category::Casual).is_running_capable());
        assert!(!shoe("4", Category::Running).is_football_capable());
    }

    #[test]
    fn test_unknown_category_has_no_capability() {
        let odd = shoe("1", Category::Other("Football ".to_string()));
        assert!(!odd.is_football_capable());
        assert!(!odd.is_running_capable());
    }

    #[test]
    fn test_negative_price_is_accepted() {
        let mut record = shoe("1", Category::Boots);
        record.price_idr = Decimal::from(-5);
        assert!(record.price_idr.is_sign_negative());
    }
}
