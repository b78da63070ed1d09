//! Dashboard filter toggles.
//!
//! The dashboard lists the persisted rows, not the in-memory inventory. A
//! toggle selects IDs from the inventory and keeps persisted rows whose ID
//! text is in that set, so the two must stay in sync for filtering to be
//! meaningful.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::inventory::Inventory;
use crate::types::ShoeRecord;

/// The two independent dashboard toggles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoeFilter {
    /// Show shoes suitable for football.
    pub football: bool,
    /// Show shoes suitable for running.
    pub running: bool,
}

impl ShoeFilter {
    /// No toggle enabled.
    pub const NONE: Self = Self {
        football: false,
        running: false,
    };

    /// Create a filter from toggle states.
    #[must_use]
    pub const fn new(football: bool, running: bool) -> Self {
        Self { football, running }
    }

    /// Whether any toggle is on.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.football || self.running
    }

    /// IDs selected by the enabled toggles, or `None` when no toggle is on.
    ///
    /// With both toggles on this is the union of both ID sets.
    #[must_use]
    pub fn allowed_ids<'a>(&self, inventory: &'a Inventory) -> Option<HashSet<&'a str>> {
        if !self.is_active() {
            return None;
        }

        let mut ids = HashSet::new();
        if self.football {
            ids.extend(inventory.football_shoes().into_iter().map(|s| s.id.as_str()));
        }
        if self.running {
            ids.extend(inventory.running_shoes().into_iter().map(|s| s.id.as_str()));
        }
        Some(ids)
    }

    /// Keep the persisted `rows` selected by this filter, preserving row order.
    #[must_use]
    pub fn apply(&self, rows: Vec<ShoeRecord>, inventory: &Inventory) -> Vec<ShoeRecord> {
        match self.allowed_ids(inventory) {
            None => rows,
            Some(ids) => rows
                .into_iter()
                .filter(|row| ids.contains(row.id.as_str()))
                .collect(),
        }
    }

    /// Informational line describing the active combination.
    #[must_use]
    pub const fn banner(&self) -> Option<&'static str> {
        match (self.football, self.running) {
            (true, false) => Some("🥅 Showing shoes suitable for playing football"),
            (false, true) => Some("🏃\u{200d}♂️ Showing shoes suitable for running"),
            (true, true) => {
                Some("⚽🏃\u{200d}♂️ Showing shoes suitable for playing football and running")
            }
            (false, false) => None,
        }
    }
}
