pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use crate::api::{method_not_allowed, preflight};
use crate::AppState;
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /api/recipes endpoints (mounted at /api/recipes)
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(list::list_recipes)
                .post(create::create_recipe)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .route(
            "/{id}",
            get(get::get_recipe)
                .put(update::update_recipe)
                .delete(delete::delete_recipe)
                .options(preflight)
                .fallback(method_not_allowed),
        )
}

#[derive(OpenApi)]
#[openapi(
    paths(
        list::list_recipes,
        get::get_recipe,
        create::create_recipe,
        update::update_recipe,
        delete::delete_recipe,
    ),
    components(schemas(
        create::CreateRecipeRequest,
        update::UpdateRecipeRequest,
        delete::DeleteRecipeResponse,
        crate::api::body::LinesInput,
    ))
)]
pub struct ApiDoc;
