use crate::api::body::{ApiJson, LinesInput};
use crate::api::{internal_error, ErrorResponse};
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use cookbook_core::{Recipe, RecipePatch};
use serde::Deserialize;
use utoipa::ToSchema;

/// Partial update: absent fields keep their stored value. String-typed
/// `ingredients`/`instructions` are normalized to sequences here too.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateRecipeRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub ingredients: Option<LinesInput>,
    pub instructions: Option<LinesInput>,
    pub image_url: Option<String>,
}

#[utoipa::path(
    put,
    path = "/api/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = String, Path, description = "Recipe ID")
    ),
    request_body = UpdateRecipeRequest,
    responses(
        (status = 200, description = "Recipe updated successfully", body = Recipe),
        (status = 404, description = "Recipe not found", body = ErrorResponse),
        (status = 500, description = "Internal error", body = ErrorResponse)
    )
)]
pub async fn update_recipe(
    State(store): State<AppState>,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<UpdateRecipeRequest>,
) -> impl IntoResponse {
    let patch = RecipePatch {
        title: request.title,
        description: request.description,
        ingredients: request.ingredients.map(LinesInput::into_lines),
        instructions: request.instructions.map(LinesInput::into_lines),
        image_url: request.image_url,
    };

    match store.update_recipe(&id, patch) {
        Ok(Some(recipe)) => (StatusCode::OK, Json(recipe)).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Recipe not found".to_string(),
            }),
        )
            .into_response(),
        Err(e) => internal_error("failed to update recipe", e),
    }
}
