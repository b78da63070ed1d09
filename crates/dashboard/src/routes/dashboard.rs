//! Dashboard route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::{IntoResponse, Redirect},
};
use serde::Deserialize;
use tracing::instrument;

use shoe_inventory_core::{ShoeFilter, ShoeRecord, StoreInfo};

use crate::components::{DashboardCharts, TableColumn, shoe_columns};
use crate::error::{Result, add_breadcrumb};
use crate::filters;
use crate::middleware::CurrentSession;
use crate::models::SessionContext;
use crate::state::AppState;

use super::{NAV_LINKS, NavLink};

/// Dashboard toggle query parameters.
///
/// Checkboxes submit `on` when ticked and nothing when cleared.
#[derive(Debug, Default, Deserialize)]
pub struct FilterQuery {
    pub football: Option<String>,
    pub running: Option<String>,
}

fn toggled(value: Option<&str>) -> bool {
    matches!(value, Some("on" | "true" | "1"))
}

impl FilterQuery {
    /// Toggle states as a filter.
    #[must_use]
    pub fn filter(&self) -> ShoeFilter {
        ShoeFilter::new(
            toggled(self.football.as_deref()),
            toggled(self.running.as_deref()),
        )
    }
}

/// Notice shown once on the dashboard rendered right after a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShoeCreated {
    pub shoes_id: String,
    pub brand: String,
    pub model: String,
}

impl From<&ShoeRecord> for ShoeCreated {
    fn from(record: &ShoeRecord) -> Self {
        Self {
            shoes_id: record.id.to_string(),
            brand: record.brand.clone(),
            model: record.model.clone(),
        }
    }
}

/// Dashboard page template.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub nav_links: &'static [NavLink],
    pub current_path: String,
    pub store: StoreInfo,
    pub filter: ShoeFilter,
    pub banner: Option<&'static str>,
    pub columns: Vec<TableColumn>,
    pub shoes: Vec<ShoeRecord>,
    pub charts: Option<DashboardCharts>,
    pub created: Option<ShoeCreated>,
}

/// Render the dashboard for `filter`.
///
/// Rows come from the data file (created with only a header if missing);
/// the toggles select among them using the session inventory.
pub(crate) async fn render_dashboard(
    state: &AppState,
    context: &SessionContext,
    filter: ShoeFilter,
    created: Option<ShoeCreated>,
) -> Result<DashboardTemplate> {
    let repository = state.repository();
    repository.ensure_file_exists().await?;
    let rows = repository.load_all().await?;

    let inventory = context.inventory().await;
    let shoes = filter.apply(rows, &inventory);
    let store = inventory.store().clone();
    drop(inventory);

    tracing::debug!(
        football = filter.football,
        running = filter.running,
        rows = shoes.len(),
        "Rendering dashboard"
    );

    Ok(DashboardTemplate {
        nav_links: &NAV_LINKS,
        current_path: "/".to_string(),
        store,
        filter,
        banner: filter.banner(),
        columns: shoe_columns(),
        charts: DashboardCharts::from_rows(&shoes),
        shoes,
        created,
    })
}

/// Dashboard page handler.
#[instrument(skip(context, state))]
pub async fn index(
    CurrentSession(context): CurrentSession,
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> Result<DashboardTemplate> {
    render_dashboard(&state, &context, query.filter(), None).await
}

/// Replace the session inventory with the current contents of the data file.
#[instrument(skip(context, state))]
pub async fn reload(
    CurrentSession(context): CurrentSession,
    State(state): State<AppState>,
) -> Result<impl IntoResponse> {
    let records = state.repository().load_or_empty().await?;
    let count = records.len();
    context.inventory_mut().await.replace_all(records);

    tracing::info!(rows = count, "Reloaded session inventory");
    add_breadcrumb("inventory", "Reloaded inventory from data file", None);

    Ok(Redirect::to("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkbox_values() {
        let query = FilterQuery {
            football: Some("on".to_string()),
            running: None,
        };
        assert_eq!(query.filter(), ShoeFilter::new(true, false));

        let query = FilterQuery {
            football: Some(String::new()),
            running: Some("true".to_string()),
        };
        assert_eq!(query.filter(), ShoeFilter::new(false, true));
    }

    #[test]
    fn test_no_toggles_is_inactive() {
        assert!(!FilterQuery::default().filter().is_active());
    }
}
