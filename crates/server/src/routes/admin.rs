//! Administration route handlers for catalog management.
//!
//! Every handler takes `RequireAdmin`; anonymous or `user`-role visitors are
//! redirected to the login page before these run.

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
use crate::middleware::RequireAdmin;
use crate::models::{CurrentUser, Market, MarketDraft};
use crate::routes::{MessageQuery, flash_message};
use crate::services::catalog::CatalogError;
use crate::state::AppState;

// =============================================================================
// Form Types
// =============================================================================

/// Market form data (shared by the add and edit forms).
///
/// On the edit form, an empty `image` means "keep the current image".
#[derive(Debug, Deserialize)]
pub struct MarketForm {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub opens_at: String,
    pub closes_at: String,
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub image: String,
}

impl From<MarketForm> for MarketDraft {
    fn from(form: MarketForm) -> Self {
        Self {
            name: form.name,
            address: form.address,
            phone: form.phone,
            opens_at: form.opens_at,
            closes_at: form.closes_at,
            description: form.description,
            category: Some(form.category),
            image: Some(form.image),
        }
    }
}

// =============================================================================
// Templates
// =============================================================================

/// Management panel template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/panel.html")]
pub struct PanelTemplate {
    pub user: CurrentUser,
    pub markets: Vec<Market>,
    pub error: Option<&'static str>,
    pub success: Option<&'static str>,
}

/// Add form template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/add.html")]
pub struct AddTemplate {
    pub user: CurrentUser,
}

/// Edit form template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/edit.html")]
pub struct EditTemplate {
    pub user: CurrentUser,
    pub market: Market,
}

// =============================================================================
// Handlers
// =============================================================================

/// List all markets for management.
pub async fn panel(
    State(state): State<AppState>,
    RequireAdmin(user): RequireAdmin,
    Query(query): Query<MessageQuery>,
) -> Result<Response> {
    let markets = state.catalog().list().await?;

    Ok(PanelTemplate {
        user,
        markets,
        error: query.error.as_deref().and_then(flash_message),
        success: query.success.as_deref().and_then(flash_message),
    }
    .into_response())
}

/// Display the add form.
pub async fn add_page(RequireAdmin(user): RequireAdmin) -> impl IntoResponse {
    AddTemplate { user }
}

/// Create a new market.
pub async fn add(
    State(state): State<AppState>,
    RequireAdmin(_user): RequireAdmin,
    Form(form): Form<MarketForm>,
) -> Result<Redirect> {
    state.catalog().create(form.into()).await?;
    Ok(Redirect::to("/admin?success=added"))
}

/// Display the edit form for one market.
pub async fn edit_page(
    State(state): State<AppState>,
    RequireAdmin(user): RequireAdmin,
    Path(id): Path<i64>,
) -> Result<Response> {
    match state.catalog().get(MarketId::new(id)).await? {
        Some(market) => Ok(EditTemplate { user, market }.into_response()),
        None => Ok(Redirect::to("/admin?error=not_found").into_response()),
    }
}

/// Update an existing market.
pub async fn edit(
    State(state): State<AppState>,
    RequireAdmin(_user): RequireAdmin,
    Path(id): Path<i64>,
    Form(form): Form<MarketForm>,
) -> Result<Response> {
    match state.catalog().update(MarketId::new(id), form.into()).await {
        Ok(_) => Ok(Redirect::to("/admin?success=updated").into_response()),
        Err(CatalogError::NotFound) => Ok(Redirect::to("/admin?error=not_found").into_response()),
        Err(e) => Err(e.into()),
    }
}

/// Delete a market and its image file.
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_user): RequireAdmin,
    Path(id): Path<i64>,
) -> Result<Response> {
    match state.catalog().delete(MarketId::new(id)).await {
        Ok(()) => Ok(Redirect::to("/admin?success=deleted").into_response()),
        Err(CatalogError::NotFound) => Ok(Redirect::to("/admin?error=not_found").into_response()),
        Err(e) => Err(e.into()),
    }
}
