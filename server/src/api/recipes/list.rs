use crate::api::{internal_error, ErrorResponse};
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use cookbook_core::Recipe;

#[utoipa::path(
    get,
    path = "/api/recipes",
    tag = "recipes",
    responses(
        (status = 200, description = "All recipes in insertion order", body = Vec<Recipe>),
        (status = 500, description = "Internal error", body = ErrorResponse)
    )
)]
pub async fn list_recipes(State(store): State<AppState>) -> impl IntoResponse {
    match store.recipes() {
        Ok(recipes) => (StatusCode::OK, Json(recipes)).into_response(),
        Err(e) => internal_error("failed to list recipes", e),
    }
}
