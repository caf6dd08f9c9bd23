//! Page Routes
//!
//! - GET /api/v1/page?path=... - Composed page document for a path

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{PageParams, PageResponse};
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::router::{self, Topic};

/// GET /api/v1/page
///
/// Resolve a navigation path and return the composed document. Unknown
/// paths are not an error: they resolve to the overview page, matching
/// the in-browser navigation fallback.
pub async fn get_page(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PageParams>,
) -> ApiResult<Json<PageResponse>> {
    let path = params.path.unwrap_or_else(|| "/".to_string());
    let topic = Topic::from_path(&path);

    tracing::info!(%path, %topic, "rendering page");

    let document = router::render(topic, &state.dataset, &state.region);

    Ok(Json(PageResponse {
        topic,
        path: topic.path().to_string(),
        document,
    }))
}
