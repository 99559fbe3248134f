//! Paper query handlers
//!
//! One route, three shapes: `GET /papers` serves a single date, a search,
//! or the index payload depending on which query parameters are present,
//! plus `GET /papers/{id}` for direct lookup.

use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::AppState;
use paperblog_common::{
    errors::{AppError, Result},
    metrics,
    store::{DailyPapers, Paper},
};

/// Query parameters for `GET /papers`
#[derive(Debug, Default, Deserialize)]
pub struct PapersQuery {
    /// Serve the document for this date
    pub date: Option<String>,

    /// Substring search across the whole store
    pub q: Option<String>,

    /// Truncates search results; never expands them
    pub limit: Option<usize>,
}

/// Search response: the returned slice and its length
#[derive(Serialize)]
pub struct SearchResponse {
    pub papers: Vec<Paper>,
    pub total: usize,
}

/// Index response when no query parameters are supplied
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexResponse {
    pub latest: Option<DailyPapers>,
    pub available_dates: Vec<String>,
}

/// `GET /papers` - a date takes precedence over a search query
pub async fn list_papers(
    State(state): State<AppState>,
    Query(query): Query<PapersQuery>,
) -> Result<Response> {
    if let Some(date) = query.date {
        return match state.store.get_for_date(&date)? {
            Some(daily) => Ok(Json(daily).into_response()),
            None => Err(AppError::DateNotFound { date }),
        };
    }

    if let Some(q) = query.q {
        let start = Instant::now();

        let mut papers = state.store.search(&q)?;
        if let Some(limit) = query.limit {
            papers.truncate(limit);
        }

        metrics::record_search(start.elapsed().as_secs_f64(), papers.len());
        tracing::info!(query = %q, results = papers.len(), "Search completed");

        let total = papers.len();
        return Ok(Json(SearchResponse { papers, total }).into_response());
    }

    let latest = state.store.get_latest()?;
    let available_dates = state.store.list_dates()?;

    Ok(Json(IndexResponse {
        latest,
        available_dates,
    })
    .into_response())
}

/// `GET /papers/{id}` - direct lookup by paper id
pub async fn get_paper(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Paper>> {
    let paper = state
        .store
        .get_by_id(&id)?
        .ok_or(AppError::PaperNotFound { id })?;

    Ok(Json(paper))
}
