//! Signed-in catalog routes: dashboard, search, and market detail.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use frontino_core::MarketId;

use crate::error::Result;
use crate::filters;
use crate::middleware::RequireUser;
use crate::models::{CurrentUser, Market};
use crate::routes::{MessageQuery, flash_message};
use crate::state::AppState;

// =============================================================================
// Form / Query Types
// =============================================================================

/// Search filter parameters, accepted both as query string and as form body.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub category: Option<String>,
}

// =============================================================================
// Templates
// =============================================================================

/// Dashboard and search results template.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub user: CurrentUser,
    pub markets: Vec<Market>,
    pub categories: Vec<String>,
    pub q: String,
    pub selected_category: String,
    pub error: Option<&'static str>,
}

/// Market detail template.
#[derive(Template, WebTemplate)]
#[template(path = "detail.html")]
pub struct DetailTemplate {
    pub user: CurrentUser,
    pub market: Market,
}

// =============================================================================
// Handlers
// =============================================================================

/// Display every market plus the category filter.
pub async fn dashboard(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Query(query): Query<MessageQuery>,
) -> Result<Response> {
    let catalog = state.catalog();
    let markets = catalog.list().await?;
    let categories = catalog.categories().await?;

    Ok(DashboardTemplate {
        user,
        markets,
        categories,
        q: String::new(),
        selected_category: String::new(),
        error: query.error.as_deref().and_then(flash_message),
    }
    .into_response())
}

/// Render the dashboard restricted to the given filters.
async fn render_search(state: &AppState, user: CurrentUser, params: SearchParams) -> Result<Response> {
    let catalog = state.catalog();
    let markets = catalog
        .search(params.q.as_deref(), params.category.as_deref())
        .await?;
    let categories = catalog.categories().await?;

    Ok(DashboardTemplate {
        user,
        markets,
        categories,
        q: params.q.unwrap_or_default(),
        selected_category: params.category.unwrap_or_default(),
        error: None,
    }
    .into_response())
}

/// Handle search via the query string.
pub async fn search(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Query(params): Query<SearchParams>,
) -> Result<Response> {
    render_search(&state, user, params).await
}

/// Handle search via form post.
pub async fn search_form(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Form(params): Form<SearchParams>,
) -> Result<Response> {
    render_search(&state, user, params).await
}

/// Display one market.
pub async fn detail(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Path(id): Path<i64>,
) -> Result<Response> {
    match state.catalog().get(MarketId::new(id)).await? {
        Some(market) => Ok(DetailTemplate { user, market }.into_response()),
        None => Ok(Redirect::to("/dashboard?error=not_found").into_response()),
    }
}
