use crate::error::{ApiError, Result};
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use snaplink_core::ShortCode;
use snaplink_resolver::ResolveOutcome;

pub async fn redirect_handler(
    Path(short_code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response> {
    // A path segment that can't be a valid code can't be in the store
    // either; skip the lookup.
    let Ok(code) = ShortCode::new(short_code) else {
        return Err(ApiError::NotFound);
    };

    match state.resolver().resolve(&code).await? {
        ResolveOutcome::Found(mapping) => {
            Ok((StatusCode::FOUND, [(header::LOCATION, mapping.long_url)]).into_response())
        }
        ResolveOutcome::NotFound => Err(ApiError::NotFound),
        ResolveOutcome::Expired => Err(ApiError::Gone),
    }
}
