use crate::api::{internal_error, ErrorResponse};
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use cookbook_core::Comment;

/// Listing does not check that the recipe exists: a recipe with no comments
/// and an unknown (or deleted) recipe id both yield an empty list.
#[utoipa::path(
    get,
    path = "/api/recipes/{id}/comments",
    tag = "comments",
    params(
        ("id" = String, Path, description = "Recipe ID")
    ),
    responses(
        (status = 200, description = "Comments for the recipe in insertion order", body = Vec<Comment>),
        (status = 500, description = "Internal error", body = ErrorResponse)
    )
)]
pub async fn list_comments(
    State(store): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match store.comments_for(&id) {
        Ok(comments) => (StatusCode::OK, Json(comments)).into_response(),
        Err(e) => internal_error("failed to list comments", e),
    }
}
