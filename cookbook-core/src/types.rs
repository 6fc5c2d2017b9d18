use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Fixed demo identity used in place of real authentication.
/// Recipes created over HTTP are attributed to this user, as are comments.
pub const DEMO_USER_ID: &str = "1";
pub const DEMO_USERNAME: &str = "ChefPixel";
pub const DEMO_USER_EMAIL: &str = "chef@cookbook.com";

/// Image shown for recipes submitted without a photo URL.
pub const PLACEHOLDER_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1546069901-ba9599a7e63c?w=400";

/// Identity placeholder. The `password_hash` is never verified anywhere;
/// users are seeded or created through the (unused) registration path and
/// never updated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// A stored recipe. `ingredients` and `instructions` are always ordered
/// sequences; callers submitting newline-delimited strings are normalized
/// before a `Recipe` is ever constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub image_url: String,
    pub author_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A comment attached to a recipe. `recipe_id` referenced an existing recipe
/// at creation time; comments are not removed when their recipe is deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Comment {
    pub id: String,
    pub recipe_id: String,
    pub user_id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Fields required to create a recipe. The store assigns `id`, `created_at`
/// and `updated_at`.
#[derive(Debug, Clone)]
pub struct NewRecipe {
    pub title: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub image_url: String,
    pub author_id: String,
}

/// Partial update for a recipe. `None` fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct RecipePatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub ingredients: Option<Vec<String>>,
    pub instructions: Option<Vec<String>>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewComment {
    pub recipe_id: String,
    pub user_id: String,
    pub content: String,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub username: String,
    pub password_hash: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn recipe_serializes_with_sequence_fields() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let recipe = Recipe {
            id: "1714564800000".to_string(),
            title: "Toast".to_string(),
            description: "Simple".to_string(),
            ingredients: vec!["Bread".to_string(), "Butter".to_string()],
            instructions: vec!["Toast it".to_string(), "Spread butter".to_string()],
            image_url: PLACEHOLDER_IMAGE_URL.to_string(),
            author_id: DEMO_USER_ID.to_string(),
            created_at: at,
            updated_at: at,
        };

        let json = serde_json::to_value(&recipe).unwrap();
        assert_eq!(json["ingredients"], serde_json::json!(["Bread", "Butter"]));
        assert_eq!(
            json["instructions"],
            serde_json::json!(["Toast it", "Spread butter"])
        );
        assert_eq!(json["author_id"], "1");
    }

    #[test]
    fn comment_round_trips() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let comment = Comment {
            id: "1714564800001".to_string(),
            recipe_id: "1714564800000".to_string(),
            user_id: DEMO_USER_ID.to_string(),
            content: "Great!".to_string(),
            created_at: at,
        };

        let json = serde_json::to_string(&comment).unwrap();
        let back: Comment = serde_json::from_str(&json).unwrap();
        assert_eq!(back, comment);
    }
}
