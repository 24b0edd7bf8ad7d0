use crate::error::Result;
use crate::model::{ShortenRequest, ShortenResponse};
use crate::state::AppState;
use axum::extract::State;
use axum::Json;
use snaplink_assigner::AssignParams;

pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(request): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>> {
    let expires_in_minutes = request.expires_in_minutes();
    let params = AssignParams {
        long_url: request.long_url.unwrap_or_default(),
        custom_code: request.custom_code,
        expires_in_minutes,
    };

    let assignment = state.assigner().assign(params).await?;

    Ok(Json(ShortenResponse {
        short_url: assignment.short_url,
        expires_at: assignment.mapping.expires_at,
    }))
}
