use axum::{extract::rejection::JsonRejection, extract::Extension, Json};

use crate::domains::summarization::{summarize, SummarizeRequest, SummarizeResponse};
use crate::server::app::AppState;
use crate::server::error::ApiError;

/// Summarize endpoint
///
/// Returns 400 when the body is not valid JSON or `text` is missing/blank.
/// Every other failure degrades the response rather than failing it.
pub async fn summarize_handler(
    Extension(state): Extension<AppState>,
    payload: Result<Json<SummarizeRequest>, JsonRejection>,
) -> Result<Json<SummarizeResponse>, ApiError> {
    let Json(request) = payload?;
    let response = summarize(request, &state.deps).await?;
    Ok(Json(response))
}
