//! Integration tests for the shoe inventory dashboard.
//!
//! Requests are driven through the full router in-process, with a data file
//! in a temporary directory. No server or network is involved.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p shoe-inventory-integration-tests
//! ```

use std::path::{Path, PathBuf};

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use tempfile::TempDir;
use tower::ServiceExt;

use shoe_inventory_dashboard::config::DashboardConfig;
use shoe_inventory_dashboard::state::AppState;

/// Header row of the data file.
pub const HEADER: &str = "shoes_id,brand,model,category,color,size_eu,price_idr\n";

/// Largest response body read by the helpers.
const BODY_LIMIT: usize = 1024 * 1024;

/// A dashboard router backed by a data file in its own temporary directory.
pub struct TestContext {
    _dir: TempDir,
    data_file: PathBuf,
    app: Router,
}

/// Status, session cookie and body of a response.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    /// `name=value` of the `Set-Cookie` header, if one was sent.
    pub cookie: Option<String>,
    pub location: Option<String>,
    pub body: String,
}

impl TestContext {
    /// A context whose data file does not exist yet.
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let data_file = dir.path().join("shoes_data.csv");

        let config = DashboardConfig {
            data_file: data_file.clone(),
            ..DashboardConfig::default()
        };
        let app = shoe_inventory_dashboard::app(AppState::new(config));

        Self {
            _dir: dir,
            data_file,
            app,
        }
    }

    /// A context whose data file holds `rows` below the header.
    ///
    /// # Panics
    ///
    /// Panics if the data file cannot be written.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn with_rows(rows: &str) -> Self {
        let ctx = Self::new();
        std::fs::write(&ctx.data_file, format!("{HEADER}{rows}")).expect("write data file");
        ctx
    }

    /// Path of the data file.
    #[must_use]
    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    /// Contents of the data file, or `None` if it does not exist.
    #[must_use]
    pub fn data(&self) -> Option<String> {
        std::fs::read_to_string(&self.data_file).ok()
    }

    /// Send a GET request, with a session cookie if given.
    pub async fn get(&self, uri: &str, cookie: Option<&str>) -> TestResponse {
        self.send(Request::get(uri), Body::empty(), cookie).await
    }

    /// Send a POST with a form-encoded body, with a session cookie if given.
    pub async fn post_form(&self, uri: &str, form: &str, cookie: Option<&str>) -> TestResponse {
        let builder = Request::post(uri).header(
            header::CONTENT_TYPE,
            "application/x-www-form-urlencoded",
        );
        self.send(builder, Body::from(form.to_string()), cookie).await
    }

    #[allow(clippy::expect_used)]
    async fn send(
        &self,
        mut builder: axum::http::request::Builder,
        body: Body,
        cookie: Option<&str>,
    ) -> TestResponse {
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        let request = builder.body(body).expect("build request");

        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let header_text = |name: header::HeaderName| {
            response
                .headers()
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };
        let cookie = header_text(header::SET_COOKIE)
            .and_then(|c| c.split(';').next().map(str::to_string));
        let location = header_text(header::LOCATION);
        let status = response.status();

        let bytes = axum::body::to_bytes(response.into_body(), BODY_LIMIT)
            .await
            .expect("read body");

        TestResponse {
            status,
            cookie,
            location,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether the dashboard table in `body` lists a shoe of model `model`.
#[must_use]
pub fn lists_model(body: &str, model: &str) -> bool {
    body.contains(&format!("<td>{model}</td>"))
}
