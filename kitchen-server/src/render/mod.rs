//! Server-rendered HTML
//!
//! Full pages wrap their content in [`layout::page`]; everything else is a
//! fragment meant to be swapped into an existing page by htmx. All dynamic
//! text goes through maud and is escaped.

pub mod forms;
pub mod layout;
pub mod recipes;

pub use forms::{add_page, error_notice, error_page, form_text, form_url, save_success};
pub use recipes::{
    detail_page, field_display, field_edit, index_page, recipe_list, url_list,
};
