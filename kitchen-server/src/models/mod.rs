//! Domain models with validation at construction
//!
//! All user input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod catalog;
pub mod field;
pub mod recipe;
pub mod validation;

pub use catalog::{parse_tag_list, CuisineName, TagName};
pub use field::RecipeField;
pub use recipe::{name_from_url, normalize_notes, NewRecipe, NewUrl, RecipeName};
pub use validation::ValidationError;
