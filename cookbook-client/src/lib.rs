//! HTTP client for the CookBook API.
//!
//! One method per endpoint. A response with a structured `{error}` body maps
//! to [`Error::Api`]; anything that never produced a response maps to
//! [`Error::Network`], whose message is the generic connection-check text the
//! UI shows.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use cookbook_core::{Comment, Recipe};

#[derive(Error, Debug)]
pub enum Error {
    /// The server answered with an error status; `message` is the body's
    /// `error` field when present.
    #[error("{message}")]
    Api {
        status: reqwest::StatusCode,
        message: String,
    },

    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
}

/// Recipe payload for `create_recipe`. The server accepts newline-delimited
/// strings too, but the adapter always submits split sequences, as the web
/// form does.
#[derive(Debug, Clone, Serialize)]
pub struct RecipeDraft {
    pub title: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Partial payload for `update_recipe`; `None` fields are omitted from the
/// request body entirely so the server keeps their stored values.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RecipeUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Client {
    base_url: String,
    http: reqwest::Client,
}

impl Client {
    /// A client for the API at `base_url` (e.g. `http://localhost:3000`).
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    pub async fn ping(&self) -> Result<String, Error> {
        #[derive(Deserialize)]
        struct PingResponse {
            message: String,
        }

        let response = self.http.get(self.url("/api/ping")).send().await?;
        let ping: PingResponse = Self::parse(response).await?;
        Ok(ping.message)
    }

    pub async fn list_recipes(&self) -> Result<Vec<Recipe>, Error> {
        let response = self.http.get(self.url("/api/recipes")).send().await?;
        Self::parse(response).await
    }

    pub async fn get_recipe(&self, id: &str) -> Result<Recipe, Error> {
        let response = self
            .http
            .get(self.url(&format!("/api/recipes/{id}")))
            .send()
            .await?;
        Self::parse(response).await
    }

    pub async fn create_recipe(&self, draft: &RecipeDraft) -> Result<Recipe, Error> {
        let response = self
            .http
            .post(self.url("/api/recipes"))
            .json(draft)
            .send()
            .await?;
        Self::parse(response).await
    }

    pub async fn update_recipe(&self, id: &str, update: &RecipeUpdate) -> Result<Recipe, Error> {
        let response = self
            .http
            .put(self.url(&format!("/api/recipes/{id}")))
            .json(update)
            .send()
            .await?;
        Self::parse(response).await
    }

    /// Returns the server's confirmation message.
    pub async fn delete_recipe(&self, id: &str) -> Result<String, Error> {
        #[derive(Deserialize)]
        struct DeleteResponse {
            message: String,
        }

        let response = self
            .http
            .delete(self.url(&format!("/api/recipes/{id}")))
            .send()
            .await?;
        let deleted: DeleteResponse = Self::parse(response).await?;
        Ok(deleted.message)
    }

    pub async fn list_comments(&self, recipe_id: &str) -> Result<Vec<Comment>, Error> {
        let response = self
            .http
            .get(self.url(&format!("/api/recipes/{recipe_id}/comments")))
            .send()
            .await?;
        Self::parse(response).await
    }

    pub async fn add_comment(&self, recipe_id: &str, content: &str) -> Result<Comment, Error> {
        #[derive(Serialize)]
        struct CreateCommentRequest<'a> {
            content: &'a str,
        }

        let response = self
            .http
            .post(self.url(&format!("/api/recipes/{recipe_id}/comments")))
            .json(&CreateCommentRequest { content })
            .send()
            .await?;
        Self::parse(response).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn parse<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, Error> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        #[derive(Deserialize)]
        struct ErrorBody {
            error: String,
        }

        // Surface the body's error field verbatim; fall back to a generic
        // message when the body isn't the expected shape.
        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.error,
            Err(_) => "Something went wrong!".to_string(),
        };

        Err(Error::Api { status, message })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slashes_are_stripped() {
        let client = Client::new("http://localhost:3000///");
        assert_eq!(client.url("/api/recipes"), "http://localhost:3000/api/recipes");
    }

    #[test]
    fn api_error_displays_server_message() {
        let error = Error::Api {
            status: reqwest::StatusCode::NOT_FOUND,
            message: "Recipe not found".to_string(),
        };
        assert_eq!(error.to_string(), "Recipe not found");
    }

    #[test]
    fn update_omits_unset_fields() {
        let update = RecipeUpdate {
            title: Some("French Toast".to_string()),
            ..RecipeUpdate::default()
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({"title": "French Toast"}));
    }

    #[test]
    fn draft_serializes_sequences() {
        let draft = RecipeDraft {
            title: "Toast".to_string(),
            description: "Simple".to_string(),
            ingredients: vec!["Bread".to_string(), "Butter".to_string()],
            instructions: vec!["Toast it".to_string()],
            image_url: None,
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["ingredients"], serde_json::json!(["Bread", "Butter"]));
        assert!(json.get("image_url").is_none());
    }
}
