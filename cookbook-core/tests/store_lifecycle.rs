//! Lifecycle test driving the store the way the HTTP surface does: create,
//! read back, patch, comment, delete, and observe the orphaned comment.

use cookbook_core::{NewComment, NewRecipe, RecipePatch, Store, DEMO_USER_ID};

#[test]
fn full_recipe_lifecycle() {
    let store = Store::seeded();
    let baseline = store.recipes().unwrap().len();

    let created = store
        .create_recipe(NewRecipe {
            title: "Shakshuka".to_string(),
            description: "Eggs poached in spiced tomato sauce.".to_string(),
            ingredients: vec![
                "4 eggs".to_string(),
                "400 g canned tomatoes".to_string(),
                "1 onion".to_string(),
                "1 tsp cumin".to_string(),
            ],
            instructions: vec![
                "Soften the onion".to_string(),
                "Simmer the tomatoes with cumin".to_string(),
                "Crack in the eggs and cover until set".to_string(),
            ],
            image_url: String::new(),
            author_id: DEMO_USER_ID.to_string(),
        })
        .unwrap();

    assert_eq!(store.recipes().unwrap().len(), baseline + 1);
    assert_eq!(store.recipe(&created.id).unwrap().unwrap(), created);

    let patched = store
        .update_recipe(
            &created.id,
            RecipePatch {
                description: Some("Brunch staple.".to_string()),
                ..RecipePatch::default()
            },
        )
        .unwrap()
        .unwrap();
    assert_eq!(patched.title, "Shakshuka");
    assert_eq!(patched.description, "Brunch staple.");
    assert!(patched.updated_at >= created.updated_at);

    let comment = store
        .create_comment(NewComment {
            recipe_id: created.id.clone(),
            user_id: DEMO_USER_ID.to_string(),
            content: "Adding feta next time.".to_string(),
        })
        .unwrap();
    assert_eq!(store.comments_for(&created.id).unwrap(), vec![comment.clone()]);

    let removed = store.delete_recipe(&created.id).unwrap().unwrap();
    assert_eq!(removed.id, created.id);
    assert!(store.recipe(&created.id).unwrap().is_none());
    assert_eq!(store.recipes().unwrap().len(), baseline);

    // Comments outlive their recipe.
    assert_eq!(store.comments_for(&created.id).unwrap(), vec![comment]);
}
