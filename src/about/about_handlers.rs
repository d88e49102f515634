use axum::{
    extract::{Path, Query, State},
    response::Html,
    Json,
};
use serde::Deserialize;

use crate::{error::Result, news::NewsItem, state::AppState};

use super::{
    about_models::{AboutData, Level},
    about_service::AchievementsView,
    about_views::{render_about_page, render_achievements},
};

#[derive(Debug, Deserialize)]
pub struct LevelQuery {
    level: Option<String>,
}

impl LevelQuery {
    /// The selected level, `UMUM` when none was given.
    pub fn level(&self) -> Result<Level> {
        match self.level.as_deref() {
            Some(code) if !code.is_empty() => code.parse(),
            _ => Ok(Level::default()),
        }
    }
}

/// Render an about page
pub async fn about_page(
    State(state): State<AppState>,
    Path(section): Path<String>,
    Query(query): Query<LevelQuery>,
) -> Result<Html<String>> {
    let page = state.about_service.compose(&section, query.level()?);
    Ok(Html(render_about_page(&page)))
}

/// Render the about landing page
pub async fn about_index(
    State(state): State<AppState>,
    Query(query): Query<LevelQuery>,
) -> Result<Html<String>> {
    let page = state.about_service.compose("", query.level()?);
    Ok(Html(render_about_page(&page)))
}

/// Achievements list fragment loaded by the prestasi page
pub async fn achievements_fragment(
    State(state): State<AppState>,
    Query(query): Query<LevelQuery>,
) -> Result<Html<String>> {
    let level = query.level()?;
    let items = state.about_service.achievements(level).await;
    Ok(Html(render_achievements(
        level,
        &AchievementsView::from_items(items),
    )))
}

/// Get the configured about content
#[utoipa::path(
    get,
    path = "/api/about",
    params(
        ("level" = Option<String>, Query, description = "Active level (UMUM, TK, SD, SMP, SMA, PT)")
    ),
    responses(
        (status = 200, description = "About content", body = AboutData),
        (status = 400, description = "Unknown level")
    ),
    tag = "about"
)]
pub async fn get_about(
    State(state): State<AppState>,
    Query(query): Query<LevelQuery>,
) -> Result<Json<AboutData>> {
    query.level()?;
    Ok(Json(state.about_service.about().as_ref().clone()))
}

/// Get achievements for the active level
#[utoipa::path(
    get,
    path = "/api/about/prestasi",
    params(
        ("level" = Option<String>, Query, description = "Active level; UMUM returns every item")
    ),
    responses(
        (status = 200, description = "Achievements, empty when the news service fails", body = Vec<NewsItem>),
        (status = 400, description = "Unknown level")
    ),
    tag = "about"
)]
pub async fn get_achievements(
    State(state): State<AppState>,
    Query(query): Query<LevelQuery>,
) -> Result<Json<Vec<NewsItem>>> {
    let level = query.level()?;
    Ok(Json(state.about_service.achievements(level).await))
}
