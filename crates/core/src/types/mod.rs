//! Core types for the shoe inventory.
//!
//! This module provides type-safe wrappers for the domain concepts.

pub mod category;
pub mod id;
pub mod shoe;

pub use category::{Capability, Category};
pub use id::*;
pub use shoe::{MAX_SIZE_EU, MIN_SIZE_EU, ShoeRecord};
