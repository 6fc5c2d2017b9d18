pub mod create;
pub mod list;

use crate::api::{method_not_allowed, preflight};
use crate::AppState;
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for comment endpoints (mounted at /api/recipes, so the
/// full path is /api/recipes/{id}/comments)
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/{id}/comments",
        get(list::list_comments)
            .post(create::create_comment)
            .options(preflight)
            .fallback(method_not_allowed),
    )
}

#[derive(OpenApi)]
#[openapi(
    paths(list::list_comments, create::create_comment),
    components(schemas(create::CreateCommentRequest))
)]
pub struct ApiDoc;
