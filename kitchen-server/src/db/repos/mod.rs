//! Repository implementations for database access
//!
//! Each repository borrows the pool and issues parameterized SQL:
//! - get-or-create uses ON CONFLICT ... RETURNING (no check-then-insert)
//! - recipe reads enrich each row with its URLs and tags
//! - transactions wrap multi-step writes

pub mod cuisines;
pub mod recipes;
pub mod tags;
pub mod urls;

pub use cuisines::{Cuisine, CuisineRepo};
pub use recipes::{RecipeChanges, RecipeDetail, RecipeRepo};
pub use tags::{Tag, TagRepo};
pub use urls::{RecipeUrl, UrlRepo};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}
