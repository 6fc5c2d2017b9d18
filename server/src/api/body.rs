//! Request-body plumbing shared by the POST and PUT handlers.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::response::Response;
use axum::Json;
use serde::Deserialize;
use utoipa::ToSchema;

use super::internal_error;

/// `Json` wrapper whose rejection is the generic 500 instead of axum's 4xx
/// rejections. A body that cannot be parsed is an unhandled internal failure
/// as far as callers are concerned; the parse error only goes to the log.
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(internal_error("failed to read request body", rejection)),
        }
    }
}

/// Ingredients and instructions arrive either as an ordered JSON array or as
/// one newline-delimited string (the web form submits the latter). Both
/// normalize to an ordered sequence of lines.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum LinesInput {
    Text(String),
    Items(Vec<String>),
}

impl LinesInput {
    /// Normalized ordered sequence: strings are split on newline with blank
    /// lines dropped; arrays pass through untouched.
    pub fn into_lines(self) -> Vec<String> {
        match self {
            LinesInput::Text(text) => text
                .split('\n')
                .map(|line| line.trim_end_matches('\r'))
                .filter(|line| !line.trim().is_empty())
                .map(str::to_string)
                .collect(),
            LinesInput::Items(items) => items,
        }
    }

    /// Presence in the web-form sense: an empty string counts as missing,
    /// an array (even an empty one) counts as present.
    pub fn is_present(&self) -> bool {
        match self {
            LinesInput::Text(text) => !text.is_empty(),
            LinesInput::Items(_) => true,
        }
    }
}
