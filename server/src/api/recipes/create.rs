use crate::api::body::{ApiJson, LinesInput};
use crate::api::{internal_error, ErrorResponse};
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use cookbook_core::{NewRecipe, Recipe, DEMO_USER_ID, PLACEHOLDER_IMAGE_URL};
use serde::Deserialize;
use utoipa::ToSchema;

/// All four content fields are required; `image_url` falls back to the
/// placeholder photo. Fields are optional here so that absence produces a 400
/// rather than a deserialization failure.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateRecipeRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub ingredients: Option<LinesInput>,
    pub instructions: Option<LinesInput>,
    pub image_url: Option<String>,
}

impl CreateRecipeRequest {
    /// Presence check matching the web form validation: a missing field
    /// or an empty string fails, an array (even empty) passes.
    fn has_required_fields(&self) -> bool {
        let text_present = |value: &Option<String>| value.as_deref().is_some_and(|s| !s.is_empty());
        let lines_present = |value: &Option<LinesInput>| {
            value.as_ref().is_some_and(LinesInput::is_present)
        };

        text_present(&self.title)
            && text_present(&self.description)
            && lines_present(&self.ingredients)
            && lines_present(&self.instructions)
    }
}

#[utoipa::path(
    post,
    path = "/api/recipes",
    tag = "recipes",
    request_body = CreateRecipeRequest,
    responses(
        (status = 201, description = "Recipe created successfully", body = Recipe),
        (status = 400, description = "Missing required fields", body = ErrorResponse),
        (status = 500, description = "Internal error", body = ErrorResponse)
    )
)]
pub async fn create_recipe(
    State(store): State<AppState>,
    ApiJson(request): ApiJson<CreateRecipeRequest>,
) -> impl IntoResponse {
    if !request.has_required_fields() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Missing required fields".to_string(),
            }),
        )
            .into_response();
    }

    let image_url = request
        .image_url
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| PLACEHOLDER_IMAGE_URL.to_string());

    // has_required_fields checked the four content fields are present
    let new = NewRecipe {
        title: request.title.unwrap_or_default(),
        description: request.description.unwrap_or_default(),
        ingredients: request
            .ingredients
            .map(LinesInput::into_lines)
            .unwrap_or_default(),
        instructions: request
            .instructions
            .map(LinesInput::into_lines)
            .unwrap_or_default(),
        image_url,
        author_id: DEMO_USER_ID.to_string(),
    };

    match store.create_recipe(new) {
        Ok(recipe) => (StatusCode::CREATED, Json(recipe)).into_response(),
        Err(e) => internal_error("failed to create recipe", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_request() -> CreateRecipeRequest {
        CreateRecipeRequest {
            title: Some("Toast".to_string()),
            description: Some("Simple".to_string()),
            ingredients: Some(LinesInput::Text("Bread\nButter".to_string())),
            instructions: Some(LinesInput::Text("Toast it".to_string())),
            image_url: None,
        }
    }

    #[test]
    fn complete_request_passes_validation() {
        assert!(full_request().has_required_fields());
    }

    #[test]
    fn absent_or_empty_text_fields_fail_validation() {
        let mut request = full_request();
        request.title = None;
        assert!(!request.has_required_fields());

        let mut request = full_request();
        request.description = Some(String::new());
        assert!(!request.has_required_fields());
    }

    #[test]
    fn empty_string_lines_fail_but_empty_array_passes() {
        let mut request = full_request();
        request.ingredients = Some(LinesInput::Text(String::new()));
        assert!(!request.has_required_fields());

        let mut request = full_request();
        request.ingredients = Some(LinesInput::Items(Vec::new()));
        assert!(request.has_required_fields());
    }
}
