//! The in-memory inventory of one store.

use serde::{Deserialize, Serialize};

use crate::types::{ShoeRecord, StoreId};

/// Identity of the store owning an inventory. Fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreInfo {
    pub id: StoreId,
    pub name: String,
    pub address: String,
}

impl StoreInfo {
    /// Create store information.
    #[must_use]
    pub fn new(id: StoreId, name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            address: address.into(),
        }
    }
}

impl Default for StoreInfo {
    fn default() -> Self {
        Self::new(
            StoreId::new(1),
            "My Shoes Store",
            "Rengasdengklok Street No. 45",
        )
    }
}

/// Ordered collection of shoe records belonging to one store.
///
/// Insertion order is display order and duplicates are kept. Records are
/// never edited or removed individually; a bulk load replaces all of them.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    store: StoreInfo,
    records: Vec<ShoeRecord>,
}

impl Inventory {
    /// Create an empty inventory for `store`.
    #[must_use]
    pub const fn new(store: StoreInfo) -> Self {
        Self {
            store,
            records: Vec::new(),
        }
    }

    /// The owning store.
    #[must_use]
    pub const fn store(&self) -> &StoreInfo {
        &self.store
    }

    /// All records in insertion order.
    #[must_use]
    pub fn records(&self) -> &[ShoeRecord] {
        &self.records
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the inventory holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Add a record to the end. No duplicate check.
    pub fn append(&mut self, record: ShoeRecord) {
        self.records.push(record);
    }

    /// Records suitable for playing football, in insertion order.
    #[must_use]
    pub fn football_shoes(&self) -> Vec<&ShoeRecord> {
        self.records
            .iter()
            .filter(|shoe| shoe.is_football_capable())
            .collect()
    }

    /// Records suitable for running, in insertion order.
    #[must_use]
    pub fn running_shoes(&self) -> Vec<&ShoeRecord> {
        self.records
            .iter()
            .filter(|shoe| shoe.is_running_capable())
            .collect()
    }

    /// Discard every record and install `records` verbatim.
    pub fn replace_all(&mut self, records: Vec<ShoeRecord>) {
        self.records = records;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;
    use crate::types::shoe::fixtures::shoe;

    fn ids(records: &[&ShoeRecord]) -> Vec<String> {
        records.iter().map(|r| r.id.to_string()).collect()
    }

    #[test]
    fn test_default_store_identity() {
        let inventory = Inventory::default();
        assert_eq!(inventory.store().id, StoreId::new(1));
        assert_eq!(inventory.store().name, "My Shoes Store");
        assert!(inventory.is_empty());
    }

    #[test]
    fn test_append_is_reflected_by_filters_in_order() {
        let mut inventory = Inventory::default();
        inventory.append(shoe("1", Category::Running));
        inventory.append(shoe("2", Category::Casual));
        inventory.append(shoe("3", Category::Football));

        assert_eq!(ids(&inventory.running_shoes()), ["1", "3"]);
        assert_eq!(ids(&inventory.football_shoes()), ["3"]);

        inventory.append(shoe("4", Category::Football));
        assert_eq!(ids(&inventory.football_shoes()), ["3", "4"]);
        assert_eq!(ids(&inventory.running_shoes()), ["1", "3", "4"]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut inventory = Inventory::default();
        inventory.append(shoe("1", Category::Football));
        inventory.append(shoe("1", Category::Football));
        assert_eq!(inventory.len(), 2);
        assert_eq!(inventory.football_shoes().len(), 2);
    }

    #[test]
    fn test_replace_all_with_nothing_empties_filters() {
        let mut inventory = Inventory::default();
        inventory.append(shoe("1", Category::Football));
        inventory.replace_all(Vec::new());
        assert!(inventory.football_shoes().is_empty());
        assert!(inventory.running_shoes().is_empty());
    }

    #[test]
    fn test_replace_all_does_not_merge() {
        let mut inventory = Inventory::default();
        inventory.append(shoe("1", Category::Running));
        inventory.replace_all(vec![shoe("9", Category::Basketball)]);
        assert_eq!(inventory.len(), 1);
        assert_eq!(ids(&inventory.running_shoes()), ["9"]);
    }
}
