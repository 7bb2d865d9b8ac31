use crate::{
    db,
    error::{AppError, AppResult, MISSING_FIELDS, MISSING_ID, NOT_FOUND},
    models::{DeleteResponse, ResponseRecord, SubmitPayload, SubmitResponse},
    state::AppState,
};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::Html,
    Json,
};
use std::path::PathBuf;

pub async fn submit_response(
    State(app_state): State<AppState>,
    payload: Result<Json<SubmitPayload>, JsonRejection>,
) -> AppResult<(StatusCode, Json<SubmitResponse>)> {
    let Json(payload) = payload.map_err(|rejection| {
        tracing::debug!(%rejection, "unreadable submission body");
        AppError::Validation(MISSING_FIELDS.to_string())
    })?;

    let name = payload.name.as_deref().map(str::trim).unwrap_or_default();
    let dates = payload.dates.unwrap_or_default();
    if name.is_empty() || dates.is_empty() {
        return Err(AppError::Validation(MISSING_FIELDS.to_string()));
    }

    let id = db::insert_response(&app_state.pool, name, &dates)
        .await
        .map_err(AppError::storage("Failed to save response."))?;
    tracing::info!(id, dates = dates.len(), "response saved");

    Ok((
        StatusCode::CREATED,
        Json(SubmitResponse {
            message: "Response saved successfully!",
            id,
        }),
    ))
}

pub async fn list_responses(
    State(app_state): State<AppState>,
) -> AppResult<Json<Vec<ResponseRecord>>> {
    db::list_responses(&app_state.pool)
        .await
        .map(Json)
        .map_err(AppError::storage("Failed to retrieve responses."))
}

pub async fn delete_response(
    State(app_state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<DeleteResponse>> {
    let trimmed = raw_id.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation(MISSING_ID.to_string()));
    }
    // A path segment that is not an integer cannot name a stored row.
    let id: i64 = trimmed
        .parse()
        .map_err(|_| AppError::NotFound(NOT_FOUND.to_string()))?;

    let affected = db::delete_response(&app_state.pool, id)
        .await
        .map_err(AppError::storage("Failed to delete response."))?;
    if affected == 0 {
        return Err(AppError::NotFound(NOT_FOUND.to_string()));
    }
    tracing::info!(id, "response deleted");

    Ok(Json(DeleteResponse {
        message: "Response deleted successfully!",
        id: raw_id,
    }))
}

/// `DELETE /api/responses` with no id segment.
pub async fn delete_without_id() -> AppError {
    AppError::Validation(MISSING_ID.to_string())
}

pub async fn view_responses_page(views_dir: PathBuf) -> Html<String> {
    tokio::fs::read_to_string(views_dir.join("responses.html"))
        .await
        .map(Html)
        .unwrap_or_else(|err| {
            tracing::warn!(error = %err, "responses.html unavailable");
            Html("<h1>Error: could not load responses.html</h1>".to_string())
        })
}
