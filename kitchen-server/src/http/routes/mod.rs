//! Route handlers organized by resource

pub mod autocomplete;
pub mod fields;
pub mod health;
pub mod pages;
pub mod recipes;
pub mod urls;
