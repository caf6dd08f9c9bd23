//! Dataset Routes
//!
//! - GET /api/v1/dataset - Indicator rows and summary statistics

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{DatasetParams, DatasetResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use chrono::NaiveDate;

/// GET /api/v1/dataset
///
/// Return the dataset, optionally bounded to an inclusive date range,
/// together with per-column statistics over the returned rows.
pub async fn get_dataset(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DatasetParams>,
) -> ApiResult<Json<DatasetResponse>> {
    let start = parse_optional_date("start", params.start.as_deref())?;
    let end = parse_optional_date("end", params.end.as_deref())?;

    let subset = match (start, end, state.dataset.span()) {
        (_, _, None) => (*state.dataset).clone(),
        (start, end, Some((first, last))) => state
            .dataset
            .between(start.unwrap_or(first), end.unwrap_or(last)),
    };

    Ok(Json(DatasetResponse {
        stats: subset.column_stats(),
        row_count: subset.len(),
        rows: subset.rows().to_vec(),
    }))
}

fn parse_optional_date(
    field: &'static str,
    value: Option<&str>,
) -> Result<Option<NaiveDate>, ApiError> {
    match value {
        None => Ok(None),
        Some(raw) => raw
            .parse::<NaiveDate>()
            .map(Some)
            .map_err(|_| ApiError::Validation(format!("malformed {field} date: {raw:?}"))),
    }
}
