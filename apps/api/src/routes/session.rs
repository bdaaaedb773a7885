use axum::{extract::State, http::StatusCode, Json};

use crate::errors::AppError;
use crate::session::SavedSession;
use crate::state::AppState;

/// GET /api/v1/session
/// A missing or unreadable session comes back as the empty default.
pub async fn handle_load_session(
    State(state): State<AppState>,
) -> Result<Json<SavedSession>, AppError> {
    Ok(Json(state.sessions.load().await?))
}

/// PUT /api/v1/session
pub async fn handle_save_session(
    State(state): State<AppState>,
    Json(session): Json<SavedSession>,
) -> Result<Json<SavedSession>, AppError> {
    Ok(Json(state.sessions.save(session).await?))
}

/// DELETE /api/v1/session
pub async fn handle_clear_session(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.sessions.clear().await?;
    Ok(StatusCode::NO_CONTENT)
}
