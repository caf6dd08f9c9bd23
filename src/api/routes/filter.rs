//! Filter Routes
//!
//! - POST /api/v1/filter - Recompute the filtered overview charts

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::{FilterRequest, FilterResponse};
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::filter::{self, FilterSelection};

/// POST /api/v1/filter
///
/// Validate the selection and return both refreshed chart specs.
/// Malformed or inverted date ranges reject with 400 and no specs; a
/// range that matches no rows returns valid empty specs with 200.
pub async fn apply_filter(
    State(state): State<Arc<AppState>>,
    Json(request): Json<FilterRequest>,
) -> ApiResult<Json<FilterResponse>> {
    let selection =
        FilterSelection::parse(&request.start, &request.end, request.municipality)?;

    let row_count = state
        .dataset
        .between(selection.start, selection.end)
        .len();
    let update = filter::filter_update(&state.dataset, &selection)?;

    Ok(Json(FilterResponse {
        trend: update.trend,
        sectors: update.sectors,
        row_count,
    }))
}
