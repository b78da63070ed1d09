//! Session-scoped models.

pub mod session;

pub use session::{SessionContext, keys as session_keys};
