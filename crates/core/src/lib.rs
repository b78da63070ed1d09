//! Shoe Inventory Core - Shared domain library.
//!
//! This crate provides the domain model used by every shoe inventory
//! component:
//! - `dashboard` - Web dashboard and creation form
//! - `cli` - Command-line tools for the data file
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no file access,
//! no HTTP. Persistence lives in the dashboard crate.
//!
//! # Modules
//!
//! - [`types`] - IDs, categories with their capability table, shoe records
//! - [`inventory`] - The ordered per-session collection of records
//! - [`filter`] - Football/running toggles applied to persisted rows
//! - [`draft`] - Validation of creation form input
//! - [`stats`] - Group-by aggregations backing the dashboard charts

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod draft;
pub mod filter;
pub mod inventory;
pub mod stats;
pub mod types;

pub use draft::{DraftError, ShoeDraft};
pub use filter::ShoeFilter;
pub use inventory::{Inventory, StoreInfo};
pub use types::*;
