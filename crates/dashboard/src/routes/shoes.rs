//! Create Shoes route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Response},
};
use tracing::instrument;

use shoe_inventory_core::{Category, MAX_SIZE_EU, MIN_SIZE_EU, ShoeDraft, ShoeFilter};

use crate::error::{Result, add_breadcrumb};
use crate::filters;
use crate::middleware::CurrentSession;
use crate::state::AppState;

use super::dashboard::{ShoeCreated, render_dashboard};
use super::{NAV_LINKS, NavLink};

/// One `<option>` of a picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionView {
    pub value: String,
    pub selected: bool,
}

fn category_options(selected: &str) -> Vec<OptionView> {
    Category::ALL
        .iter()
        .map(|category| OptionView {
            value: category.to_string(),
            selected: category.as_str() == selected,
        })
        .collect()
}

fn size_options(selected: &str) -> Vec<OptionView> {
    (MIN_SIZE_EU..=MAX_SIZE_EU)
        .map(|size| {
            let value = size.to_string();
            OptionView {
                selected: value == selected,
                value,
            }
        })
        .collect()
}

/// Create Shoes form template.
#[derive(Template, WebTemplate)]
#[template(path = "shoes/new.html")]
pub struct NewShoeTemplate {
    pub nav_links: &'static [NavLink],
    pub current_path: String,
    pub draft: ShoeDraft,
    pub categories: Vec<OptionView>,
    pub sizes: Vec<OptionView>,
    pub warning: Option<String>,
}

impl NewShoeTemplate {
    fn new(draft: ShoeDraft, warning: Option<String>) -> Self {
        Self {
            nav_links: &NAV_LINKS,
            current_path: "/shoes/new".to_string(),
            categories: category_options(&draft.category),
            sizes: size_options(&draft.size_eu),
            draft,
            warning,
        }
    }
}

/// The form's initial values: first category and smallest size preselected.
fn blank_draft() -> ShoeDraft {
    ShoeDraft {
        category: Category::Running.to_string(),
        size_eu: MIN_SIZE_EU.to_string(),
        ..ShoeDraft::default()
    }
}

/// Create Shoes form handler.
#[instrument]
pub async fn new_shoe() -> NewShoeTemplate {
    NewShoeTemplate::new(blank_draft(), None)
}

/// Create Shoes submit handler.
///
/// A rejected draft re-renders the form with a warning and changes nothing.
/// An accepted one is written to the data file, appended to the session
/// inventory, and answered with the dashboard carrying a one-time notice.
#[instrument(skip(context, state, draft), fields(shoes_id = %draft.shoes_id))]
pub async fn create(
    CurrentSession(context): CurrentSession,
    State(state): State<AppState>,
    Form(draft): Form<ShoeDraft>,
) -> Result<Response> {
    let record = match draft.validate() {
        Ok(record) => record,
        Err(e) => {
            tracing::info!(reason = %e, "Rejected shoe submission");
            return Ok(NewShoeTemplate::new(draft, Some(e.to_string())).into_response());
        }
    };

    state.repository().append_row(&record).await?;
    context.inventory_mut().await.append(record.clone());

    tracing::info!(
        shoes_id = %record.id,
        brand = %record.brand,
        category = %record.category,
        "Shoe created"
    );
    add_breadcrumb(
        "inventory",
        "Created shoe",
        Some(&[("shoes_id", record.id.as_str())]),
    );

    let created = ShoeCreated::from(&record);
    let dashboard = render_dashboard(&state, &context, ShoeFilter::NONE, Some(created)).await?;
    Ok(dashboard.into_response())
}
