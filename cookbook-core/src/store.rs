//! In-memory store for users, recipes and comments.
//!
//! The store is the only mutation surface in the system. It is process-local
//! and deliberately non-durable: every process start begins from the seed
//! dataset (or whatever initial state was injected), and writes do not survive
//! a restart. Handlers hold no state of their own.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;

use crate::error::StoreError;
use crate::id::IdGenerator;
use crate::types::{
    Comment, NewComment, NewRecipe, NewUser, Recipe, RecipePatch, User, DEMO_USERNAME,
    DEMO_USER_EMAIL, DEMO_USER_ID,
};

pub struct Store {
    ids: IdGenerator,
    users: RwLock<Vec<User>>,
    recipes: RwLock<Vec<Recipe>>,
    comments: RwLock<Vec<Comment>>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    /// An empty store.
    pub fn new() -> Self {
        Self::with_data(Vec::new(), Vec::new(), Vec::new())
    }

    /// A store with injected initial state. Collections keep the given order;
    /// new records are appended after them.
    pub fn with_data(users: Vec<User>, recipes: Vec<Recipe>, comments: Vec<Comment>) -> Self {
        Self {
            ids: IdGenerator::new(),
            users: RwLock::new(users),
            recipes: RwLock::new(recipes),
            comments: RwLock::new(comments),
        }
    }

    /// The fixed dataset the server boots with: the demo user and a couple of
    /// sample recipes so the front page is never empty.
    pub fn seeded() -> Self {
        let now = Utc::now();

        let demo_user = User {
            id: DEMO_USER_ID.to_string(),
            email: DEMO_USER_EMAIL.to_string(),
            username: DEMO_USERNAME.to_string(),
            password_hash: String::new(),
            created_at: now,
        };

        let recipes = vec![
            Recipe {
                id: "1".to_string(),
                title: "Classic Pancakes".to_string(),
                description: "Fluffy weekend pancakes from pantry staples.".to_string(),
                ingredients: vec![
                    "1 cup flour".to_string(),
                    "2 eggs".to_string(),
                    "1 cup milk".to_string(),
                    "1 tsp baking powder".to_string(),
                    "Pinch of salt".to_string(),
                ],
                instructions: vec![
                    "Whisk the dry ingredients together".to_string(),
                    "Beat in the eggs and milk until smooth".to_string(),
                    "Cook on a buttered pan until bubbles form".to_string(),
                    "Flip and cook one more minute".to_string(),
                ],
                image_url: "https://images.unsplash.com/photo-1567620905732-2d1ec7ab7445?w=400"
                    .to_string(),
                author_id: DEMO_USER_ID.to_string(),
                created_at: now,
                updated_at: now,
            },
            Recipe {
                id: "2".to_string(),
                title: "Tomato Basil Pasta".to_string(),
                description: "A quick weeknight pasta with fresh basil.".to_string(),
                ingredients: vec![
                    "300 g spaghetti".to_string(),
                    "400 g canned tomatoes".to_string(),
                    "2 cloves garlic".to_string(),
                    "Handful of basil leaves".to_string(),
                    "Olive oil".to_string(),
                ],
                instructions: vec![
                    "Boil the spaghetti until al dente".to_string(),
                    "Soften the garlic in olive oil".to_string(),
                    "Add tomatoes and simmer ten minutes".to_string(),
                    "Toss with pasta and torn basil".to_string(),
                ],
                image_url: "https://images.unsplash.com/photo-1621996346565-e3dbc646d9a9?w=400"
                    .to_string(),
                author_id: DEMO_USER_ID.to_string(),
                created_at: now,
                updated_at: now,
            },
        ];

        let comments = vec![Comment {
            id: "3".to_string(),
            recipe_id: "1".to_string(),
            user_id: DEMO_USER_ID.to_string(),
            content: "Made these on Sunday, the whole batch disappeared.".to_string(),
            created_at: now,
        }];

        Self::with_data(vec![demo_user], recipes, comments)
    }

    // Recipes

    /// All recipes in insertion order.
    pub fn recipes(&self) -> Result<Vec<Recipe>, StoreError> {
        Ok(self.read_recipes()?.clone())
    }

    /// A single recipe by id, or `None` if no recipe has that id.
    pub fn recipe(&self, id: &str) -> Result<Option<Recipe>, StoreError> {
        Ok(self.read_recipes()?.iter().find(|r| r.id == id).cloned())
    }

    /// Creates a recipe, assigning its id and timestamps, and returns the
    /// stored record.
    pub fn create_recipe(&self, new: NewRecipe) -> Result<Recipe, StoreError> {
        let now = Utc::now();
        let recipe = Recipe {
            id: self.ids.next_id(),
            title: new.title,
            description: new.description,
            ingredients: new.ingredients,
            instructions: new.instructions,
            image_url: new.image_url,
            author_id: new.author_id,
            created_at: now,
            updated_at: now,
        };

        self.write_recipes()?.push(recipe.clone());
        Ok(recipe)
    }

    /// Merges the patch over the recipe with the given id and refreshes
    /// `updated_at`. Returns the updated record, or `None` if the id is
    /// unknown.
    pub fn update_recipe(
        &self,
        id: &str,
        patch: RecipePatch,
    ) -> Result<Option<Recipe>, StoreError> {
        let mut recipes = self.write_recipes()?;
        let Some(recipe) = recipes.iter_mut().find(|r| r.id == id) else {
            return Ok(None);
        };

        if let Some(title) = patch.title {
            recipe.title = title;
        }
        if let Some(description) = patch.description {
            recipe.description = description;
        }
        if let Some(ingredients) = patch.ingredients {
            recipe.ingredients = ingredients;
        }
        if let Some(instructions) = patch.instructions {
            recipe.instructions = instructions;
        }
        if let Some(image_url) = patch.image_url {
            recipe.image_url = image_url;
        }
        recipe.updated_at = Utc::now();

        Ok(Some(recipe.clone()))
    }

    /// Removes the recipe with the given id and returns it, or `None` if the
    /// id is unknown. Comments referencing the recipe are left in place.
    pub fn delete_recipe(&self, id: &str) -> Result<Option<Recipe>, StoreError> {
        let mut recipes = self.write_recipes()?;
        let Some(index) = recipes.iter().position(|r| r.id == id) else {
            return Ok(None);
        };
        Ok(Some(recipes.remove(index)))
    }

    // Comments

    /// All comments for a recipe in insertion order. An unknown recipe id
    /// yields an empty list, not an error.
    pub fn comments_for(&self, recipe_id: &str) -> Result<Vec<Comment>, StoreError> {
        Ok(self
            .read_comments()?
            .iter()
            .filter(|c| c.recipe_id == recipe_id)
            .cloned()
            .collect())
    }

    /// Creates a comment and returns the stored record. Referential checks
    /// against the recipe collection are the caller's job.
    pub fn create_comment(&self, new: NewComment) -> Result<Comment, StoreError> {
        let comment = Comment {
            id: self.ids.next_id(),
            recipe_id: new.recipe_id,
            user_id: new.user_id,
            content: new.content,
            created_at: Utc::now(),
        };

        self.write_comments()?.push(comment.clone());
        Ok(comment)
    }

    // Users

    /// All users in insertion order.
    pub fn users(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.read_users()?.clone())
    }

    /// A user by exact email match, or `None`.
    pub fn user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(self.read_users()?.iter().find(|u| u.email == email).cloned())
    }

    /// Creates a user and returns the stored record. Nothing in the HTTP
    /// surface calls this today; the registration path exists for parity with
    /// the rest of the store.
    pub fn create_user(&self, new: NewUser) -> Result<User, StoreError> {
        let user = User {
            id: self.ids.next_id(),
            email: new.email,
            username: new.username,
            password_hash: new.password_hash,
            created_at: Utc::now(),
        };

        self.write_users()?.push(user.clone());
        Ok(user)
    }

    // Lock plumbing. A poisoned lock means a writer panicked; surface that as
    // a StoreError instead of propagating the panic to every later request.

    fn read_recipes(&self) -> Result<RwLockReadGuard<'_, Vec<Recipe>>, StoreError> {
        self.recipes
            .read()
            .map_err(|_| StoreError::Poisoned("recipes"))
    }

    fn write_recipes(&self) -> Result<RwLockWriteGuard<'_, Vec<Recipe>>, StoreError> {
        self.recipes
            .write()
            .map_err(|_| StoreError::Poisoned("recipes"))
    }

    fn read_comments(&self) -> Result<RwLockReadGuard<'_, Vec<Comment>>, StoreError> {
        self.comments
            .read()
            .map_err(|_| StoreError::Poisoned("comments"))
    }

    fn write_comments(&self) -> Result<RwLockWriteGuard<'_, Vec<Comment>>, StoreError> {
        self.comments
            .write()
            .map_err(|_| StoreError::Poisoned("comments"))
    }

    fn read_users(&self) -> Result<RwLockReadGuard<'_, Vec<User>>, StoreError> {
        self.users.read().map_err(|_| StoreError::Poisoned("users"))
    }

    fn write_users(&self) -> Result<RwLockWriteGuard<'_, Vec<User>>, StoreError> {
        self.users
            .write()
            .map_err(|_| StoreError::Poisoned("users"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PLACEHOLDER_IMAGE_URL;

    fn toast() -> NewRecipe {
        NewRecipe {
            title: "Toast".to_string(),
            description: "Simple".to_string(),
            ingredients: vec!["Bread".to_string(), "Butter".to_string()],
            instructions: vec!["Toast it".to_string(), "Spread butter".to_string()],
            image_url: PLACEHOLDER_IMAGE_URL.to_string(),
            author_id: DEMO_USER_ID.to_string(),
        }
    }

    #[test]
    fn created_recipe_is_returned_by_lookup() {
        let store = Store::new();
        let created = store.create_recipe(toast()).unwrap();

        let fetched = store.recipe(&created.id).unwrap().unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.ingredients, vec!["Bread", "Butter"]);
        assert_eq!(created.created_at, created.updated_at);
    }

    #[test]
    fn recipes_keep_insertion_order() {
        let store = Store::new();
        let first = store.create_recipe(toast()).unwrap();
        let mut second_draft = toast();
        second_draft.title = "Cereal".to_string();
        let second = store.create_recipe(second_draft).unwrap();

        let all = store.recipes().unwrap();
        assert_eq!(
            all.iter().map(|r| r.id.as_str()).collect::<Vec<_>>(),
            vec![first.id.as_str(), second.id.as_str()]
        );
    }

    #[test]
    fn unknown_recipe_lookup_is_none() {
        let store = Store::new();
        assert!(store.recipe("424242").unwrap().is_none());
    }

    #[test]
    fn update_merges_only_supplied_fields() {
        let store = Store::new();
        let created = store.create_recipe(toast()).unwrap();

        let updated = store
            .update_recipe(
                &created.id,
                RecipePatch {
                    title: Some("French Toast".to_string()),
                    ..RecipePatch::default()
                },
            )
            .unwrap()
            .unwrap();

        assert_eq!(updated.title, "French Toast");
        assert_eq!(updated.description, created.description);
        assert_eq!(updated.ingredients, created.ingredients);
        assert_eq!(updated.image_url, created.image_url);
        assert!(updated.updated_at >= created.updated_at);
        assert_eq!(updated.created_at, created.created_at);
    }

    #[test]
    fn update_unknown_recipe_is_none() {
        let store = Store::new();
        let result = store.update_recipe("424242", RecipePatch::default()).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn delete_returns_removed_record_then_none() {
        let store = Store::new();
        let created = store.create_recipe(toast()).unwrap();

        let removed = store.delete_recipe(&created.id).unwrap().unwrap();
        assert_eq!(removed.id, created.id);
        assert!(store.delete_recipe(&created.id).unwrap().is_none());
        assert!(store.recipe(&created.id).unwrap().is_none());
    }

    #[test]
    fn deleting_recipe_orphans_its_comments() {
        let store = Store::new();
        let recipe = store.create_recipe(toast()).unwrap();
        store
            .create_comment(NewComment {
                recipe_id: recipe.id.clone(),
                user_id: DEMO_USER_ID.to_string(),
                content: "Great!".to_string(),
            })
            .unwrap();

        store.delete_recipe(&recipe.id).unwrap().unwrap();

        // The comment stays, reachable only through the now-dangling id.
        let orphans = store.comments_for(&recipe.id).unwrap();
        assert_eq!(orphans.len(), 1);
    }

    #[test]
    fn comments_are_scoped_and_ordered() {
        let store = Store::new();
        let recipe = store.create_recipe(toast()).unwrap();
        let other = store.create_recipe(toast()).unwrap();

        for content in ["first", "second"] {
            store
                .create_comment(NewComment {
                    recipe_id: recipe.id.clone(),
                    user_id: DEMO_USER_ID.to_string(),
                    content: content.to_string(),
                })
                .unwrap();
        }
        store
            .create_comment(NewComment {
                recipe_id: other.id.clone(),
                user_id: DEMO_USER_ID.to_string(),
                content: "elsewhere".to_string(),
            })
            .unwrap();

        let comments = store.comments_for(&recipe.id).unwrap();
        assert_eq!(
            comments.iter().map(|c| c.content.as_str()).collect::<Vec<_>>(),
            vec!["first", "second"]
        );
    }

    #[test]
    fn comments_for_unknown_recipe_is_empty() {
        let store = Store::new();
        assert!(store.comments_for("424242").unwrap().is_empty());
    }

    #[test]
    fn user_lookup_by_email() {
        let store = Store::seeded();
        let user = store.user_by_email(DEMO_USER_EMAIL).unwrap().unwrap();
        assert_eq!(user.id, DEMO_USER_ID);
        assert_eq!(user.username, DEMO_USERNAME);
        assert!(store.user_by_email("nobody@example.com").unwrap().is_none());
    }

    #[test]
    fn created_user_is_listed() {
        let store = Store::new();
        let user = store
            .create_user(NewUser {
                email: "cook@example.com".to_string(),
                username: "cook".to_string(),
                password_hash: "unused".to_string(),
            })
            .unwrap();

        let users = store.users().unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].id, user.id);
        assert_eq!(
            store.user_by_email("cook@example.com").unwrap().unwrap().id,
            user.id
        );
    }

    #[test]
    fn seeded_store_has_demo_dataset() {
        let store = Store::seeded();
        let recipes = store.recipes().unwrap();
        assert_eq!(recipes.len(), 2);
        assert!(recipes.iter().all(|r| r.author_id == DEMO_USER_ID));
        assert!(recipes
            .iter()
            .all(|r| r.id.chars().all(|c| c.is_ascii_digit())));
        assert_eq!(store.comments_for("1").unwrap().len(), 1);
    }

    #[test]
    fn generated_ids_do_not_collide_with_seed_ids() {
        let store = Store::seeded();
        let created = store.create_recipe(toast()).unwrap();
        assert!(store.recipe("1").unwrap().is_some());
        assert_ne!(created.id, "1");
        assert_ne!(created.id, "2");
    }
}
