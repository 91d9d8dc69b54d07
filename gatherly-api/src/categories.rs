use axum::{extract::State, routing::get, Json, Router};

use gatherly_core::handle_error;
use gatherly_shared::models::Category;

use crate::error::ApiError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/categories", get(list_categories))
}

/// GET /categories — the one-shot fetch behind the category filter.
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<Category>>, ApiError> {
    let categories = state
        .categories
        .list_categories()
        .await
        .map_err(handle_error)?;
    Ok(Json(categories))
}
