//! HTTP route handlers for the dashboard.
//!
//! Every user action has its own handler; nothing re-runs unrelated page
//! logic.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Liveness check
//! GET  /health/ready           - Readiness check (data file loads)
//!
//! # Dashboard
//! GET  /                       - Dashboard (toggles: ?football=on&running=on)
//! POST /inventory/reload       - Replace the session inventory from the data file
//!
//! # Create Shoes
//! GET  /shoes/new              - Creation form
//! POST /shoes                  - Submit the creation form
//! ```

pub mod dashboard;
pub mod health;
pub mod shoes;

use axum::{
    Router,
    http::Uri,
    routing::{get, post},
};

use crate::error::AppError;
use crate::state::AppState;

/// Navigation entries shown on every page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

/// The two pages of the application.
pub const NAV_LINKS: [NavLink; 2] = [
    NavLink {
        href: "/",
        label: "Dashboard",
    },
    NavLink {
        href: "/shoes/new",
        label: "Create Shoes",
    },
];

/// Build the application routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::readiness))
        .route("/", get(dashboard::index))
        .route("/inventory/reload", post(dashboard::reload))
        .route("/shoes/new", get(shoes::new_shoe))
        .route("/shoes", post(shoes::create))
        .fallback(not_found)
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
