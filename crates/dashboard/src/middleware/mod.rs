//! HTTP middleware stack for the dashboard.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. Sentry layers (capture errors, outermost; added in `main`)
//! 2. `TraceLayer` (request tracing)
//! 3. Session layer (tower-sessions with in-memory store)
//!
//! The [`CurrentSession`] extractor resolves the session's inventory inside
//! handlers.

pub mod context;
pub mod session;

pub use context::CurrentSession;
pub use session::create_session_layer;
