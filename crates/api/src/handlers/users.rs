use axum::{extract::State, Json};

use crate::{ApiError, AppState};
use db::models::UserRow;
use db::repository::users as users_repo;

/// `GET /users` — the whole table, or a 500 if it cannot be read.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<UserRow>>, ApiError> {
    let rows = users_repo::fetch_all(&state.config).await?;
    Ok(Json(rows))
}
