use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};
use tracing::{debug, info};

use crate::models::{AppState, SearchParams, SearchResponse};
use crate::search::filter_records;
use crate::types::{AppError, AppResult, QUERY_REQUIRED};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/users", get(search_users))
        .with_state(state)
}

/// GET /api/users?q= - Records with a field containing `q`, case-insensitively
async fn search_users(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> AppResult<Json<SearchResponse>> {
    let query = match params {
        Ok(Query(SearchParams { q: Some(q) })) if !q.is_empty() => q,
        Ok(_) => return Err(AppError::validation(QUERY_REQUIRED)),
        Err(rejection) => {
            debug!(%rejection, "Unreadable search query");
            return Err(AppError::validation(QUERY_REQUIRED));
        }
    };

    let dataset = state.store.snapshot().await;
    let data = filter_records(&dataset, &query);
    info!(query = %query, matched = data.len(), total = dataset.len(), "Search");

    Ok(Json(SearchResponse { data }))
}
