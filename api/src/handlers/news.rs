//! News handlers
//!
//! Endpoints for reading, searching and reloading the news feed.
//! Supports content negotiation: Accept: application/json for JSON, otherwise text/plain.

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::app::NewsView;
use crate::domain::entities::NewsRecord;
use crate::error::AppError;
use crate::feed::{render_article, render_news};
use crate::AppState;

/// Check if the client wants JSON response
fn wants_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.contains("application/json"))
        .unwrap_or(false)
}

fn plain_text(body: String) -> Response {
    ([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], body).into_response()
}

fn view_response(view: NewsView, headers: &HeaderMap) -> Response {
    if wants_json(headers) {
        Json(view).into_response()
    } else {
        plain_text(render_news(&view))
    }
}

/// GET /news
///
/// Returns every story, ordered for display.
/// - Accept: application/json → JSON response
/// - Otherwise → Plain text
pub async fn get_news(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let view = state.news_service.display_view().await;
    view_response(view, &headers)
}

/// Query params for search
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

/// GET /news/search?q=term
///
/// Stories whose title, description, content, category or country contain
/// the term (case-insensitive), ordered for display.
pub async fn search_news(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
    headers: HeaderMap,
) -> Response {
    let view = state.news_service.search(&params.q).await;
    view_response(view, &headers)
}

/// Single story response
#[derive(Serialize)]
pub struct ArticleResponse {
    pub position: usize,
    pub high_priority: bool,
    pub record: NewsRecord,
}

/// GET /news/:position
///
/// One story by its 1-based display position.
pub async fn get_article(
    State(state): State<AppState>,
    Path(position): Path<String>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let position: usize = position
        .parse()
        .map_err(|_| AppError::BadRequest(format!("Invalid story position: {}", position)))?;

    let record = state
        .news_service
        .record_at(position)
        .await
        .ok_or_else(|| AppError::NotFound(format!("No story at position {}", position)))?;

    if wants_json(&headers) {
        Ok(Json(ArticleResponse {
            position,
            high_priority: record.is_high_priority(),
            record,
        })
        .into_response())
    } else {
        Ok(plain_text(render_article(position, &record)))
    }
}

/// JSON response for reload results
#[derive(Serialize)]
pub struct ReloadResponse {
    pub success: bool,
    pub message: String,
    pub count: usize,
    pub high_priority: usize,
}

/// POST /news/reload
///
/// Manual reload and retry control. Refused with 409 while another reload runs.
pub async fn reload_news(State(state): State<AppState>) -> Result<Json<ReloadResponse>, AppError> {
    let summary = state.news_service.load().await?;

    Ok(Json(ReloadResponse {
        success: true,
        message: format!("Loaded {} stories", summary.count),
        count: summary.count,
        high_priority: summary.high_priority,
    }))
}
