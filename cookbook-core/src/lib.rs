pub mod error;
pub mod id;
pub mod store;
pub mod types;

pub use error::StoreError;
pub use id::IdGenerator;
pub use store::Store;
pub use types::{
    Comment, NewComment, NewRecipe, NewUser, Recipe, RecipePatch, User, DEMO_USERNAME,
    DEMO_USER_EMAIL, DEMO_USER_ID, PLACEHOLDER_IMAGE_URL,
};
