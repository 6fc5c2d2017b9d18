use crate::api::body::ApiJson;
use crate::api::{internal_error, ErrorResponse};
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use cookbook_core::{Comment, NewComment, DEMO_USER_ID};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateCommentRequest {
    pub content: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/recipes/{id}/comments",
    tag = "comments",
    params(
        ("id" = String, Path, description = "Recipe ID")
    ),
    request_body = CreateCommentRequest,
    responses(
        (status = 201, description = "Comment created successfully", body = Comment),
        (status = 400, description = "Missing comment content", body = ErrorResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse),
        (status = 500, description = "Internal error", body = ErrorResponse)
    )
)]
pub async fn create_comment(
    State(store): State<AppState>,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<CreateCommentRequest>,
) -> impl IntoResponse {
    let content = request.content.unwrap_or_default();
    if content.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Comment content is required".to_string(),
            }),
        )
            .into_response();
    }

    // The referenced recipe must exist at creation time.
    match store.recipe(&id) {
        Ok(Some(_)) => {}
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: "Recipe not found".to_string(),
                }),
            )
                .into_response()
        }
        Err(e) => return internal_error("failed to fetch recipe", e),
    }

    let new = NewComment {
        recipe_id: id,
        user_id: DEMO_USER_ID.to_string(),
        content,
    };

    match store.create_comment(new) {
        Ok(comment) => (StatusCode::CREATED, Json(comment)).into_response(),
        Err(e) => internal_error("failed to create comment", e),
    }
}
