//! Sidebar navigation endpoints.
//!
//! - `GET /api/navigation` returns the navigation model as JSON
//! - `GET /navigation?path=/assets` returns the rendered sidebar fragment

use axum::extract::{Query, State};
use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::menu::{NavigationModel, build_navigation};
use crate::middleware::CurrentUser;
use crate::state::AppState;

/// Query parameters for the rendered sidebar.
#[derive(Debug, Deserialize)]
struct SidebarQuery {
    /// Path being viewed, used to highlight the active entry.
    #[serde(default = "default_path")]
    path: String,
}

fn default_path() -> String {
    "/".to_string()
}

/// Build the model for the requesting user.
fn model_for(state: &AppState, user: &CurrentUser) -> NavigationModel {
    build_navigation(
        user.profile.as_ref(),
        user.role,
        state.catalog(),
        state.restrictions(),
    )
}

/// Navigation model as JSON.
///
/// GET /api/navigation
async fn navigation_json(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Json<NavigationModel> {
    Json(model_for(&state, &user))
}

/// Rendered sidebar.
///
/// GET /navigation
async fn navigation_html(
    State(state): State<AppState>,
    user: CurrentUser,
    Query(query): Query<SidebarQuery>,
) -> AppResult<Html<String>> {
    if !query.path.starts_with('/') {
        return Err(AppError::BadRequest("path must start with /".to_string()));
    }

    let model = model_for(&state, &user);
    let html = state.theme().render_navigation(&model, &query.path)?;
    Ok(Html(html))
}

/// Create the navigation router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/navigation", get(navigation_json))
        .route("/navigation", get(navigation_html))
}
