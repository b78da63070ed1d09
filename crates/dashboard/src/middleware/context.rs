//! Session context extractor.
//!
//! Gives handlers the inventory of the requesting session, creating it on the
//! session's first request.

use axum::{extract::FromRequestParts, http::request::Parts};
use tower_sessions::Session;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{SessionContext, session_keys};
use crate::state::AppState;

/// Extractor for the requesting session's [`SessionContext`].
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(CurrentSession(context): CurrentSession) -> String {
///     format!("{} shoes", context.inventory().await.len())
/// }
/// ```
pub struct CurrentSession(pub SessionContext);

impl FromRequestParts<AppState> for CurrentSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Get the session from extensions (set by SessionManagerLayer)
        let session = parts
            .extensions
            .get::<Session>()
            .cloned()
            .ok_or_else(|| AppError::Internal("session layer is not installed".to_string()))?;

        let context_id = match session.get::<Uuid>(session_keys::CONTEXT_ID).await? {
            Some(id) => id,
            None => {
                let id = Uuid::new_v4();
                session.insert(session_keys::CONTEXT_ID, id).await?;
                tracing::debug!(context_id = %id, "Started session context");
                id
            }
        };

        let context = state.sessions().get_or_seed(context_id).await?;
        Ok(Self(context))
    }
}
