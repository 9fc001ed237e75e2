//! Recipe pages and fragments
//!
//! Fragment ids follow `recipe-{id}` for list rows and `recipe-{id}-{field}`
//! for editable fields so htmx targets stay stable across swaps.

use maud::{html, Markup};

use super::layout::page;
use crate::db::{RecipeDetail, RecipeUrl};
use crate::models::RecipeField;

fn row_id(id: i64) -> String {
    format!("recipe-{}", id)
}

fn field_id(id: i64, field: RecipeField) -> String {
    format!("recipe-{}-{}", id, field)
}

fn urls_id(id: i64) -> String {
    format!("recipe-{}-urls", id)
}

/// Index page: search box above the full list
pub fn index_page(recipes: &[RecipeDetail], query: Option<&str>) -> Markup {
    page(
        "Recipes",
        html! {
            section.search {
                input type="search" name="q" placeholder="Search by name or tag"
                    value=[query]
                    hx-get="/recipes/search"
                    hx-trigger="input changed delay:300ms, search"
                    hx-target="#recipe-list"
                    hx-swap="outerHTML";
                a.button href="/recipes/add" { "Add recipe" }
            }
            (recipe_list(recipes))
        },
    )
}

/// Recipe list fragment, grouped visually by cuisine
pub fn recipe_list(recipes: &[RecipeDetail]) -> Markup {
    html! {
        div #recipe-list {
            @if recipes.is_empty() {
                p.empty { "No recipes yet." }
            } @else {
                table.recipes {
                    thead {
                        tr { th { "Cuisine" } th { "Recipe" } th { "Tags" } th { "Links" } th {} }
                    }
                    tbody {
                        @for recipe in recipes {
                            (recipe_row(recipe))
                        }
                    }
                }
            }
        }
    }
}

/// One list row with a delete button that removes the row in place
pub fn recipe_row(recipe: &RecipeDetail) -> Markup {
    html! {
        tr id=(row_id(recipe.id)) {
            td.cuisine { (recipe.cuisine) }
            td.name { a href=(format!("/recipes/{}", recipe.id)) { (recipe.name) } }
            td.tags { (tag_badges(&recipe.tags)) }
            td.links {
                @for url in &recipe.urls {
                    a href=(url.url) target="_blank" rel="noopener" {
                        (url.label.as_deref().unwrap_or("link"))
                    }
                    " "
                }
            }
            td.actions {
                button.danger
                    hx-delete=(format!("/recipes/{}", recipe.id))
                    hx-confirm=(format!("Delete {}?", recipe.name))
                    hx-target=(format!("#{}", row_id(recipe.id)))
                    hx-swap="outerHTML" { "Delete" }
            }
        }
    }
}

/// Search link for a tag; the tag is percent-encoded into the query
fn tag_search_href(tag: &str) -> String {
    format!("/recipes?q={}", urlencoding::encode(tag))
}

fn tag_badges(tags: &[String]) -> Markup {
    html! {
        @for tag in tags {
            a.tag href=(tag_search_href(tag)) { (tag) }
            " "
        }
    }
}

/// Full detail page with every field editable in place
pub fn detail_page(recipe: &RecipeDetail) -> Markup {
    page(
        &recipe.name,
        html! {
            article.recipe-detail {
                @for field in RecipeField::ALL {
                    section.field {
                        h2 { (field_label(field)) }
                        (field_display(recipe, field))
                    }
                }
                section.field {
                    h2 { "Links" }
                    (url_list(recipe.id, &recipe.urls))
                }
                p.meta { "Added " (recipe.created_at.format("%Y-%m-%d").to_string()) }
                button.danger
                    hx-delete=(format!("/recipes/{}?redirect=/recipes", recipe.id))
                    hx-confirm="Delete this recipe?" { "Delete recipe" }
            }
        },
    )
}

fn field_label(field: RecipeField) -> &'static str {
    match field {
        RecipeField::Name => "Name",
        RecipeField::Cuisine => "Cuisine",
        RecipeField::Notes => "Notes",
        RecipeField::Tags => "Tags",
    }
}

/// Current value of a field as the edit form pre-fills it
pub fn field_value(recipe: &RecipeDetail, field: RecipeField) -> String {
    match field {
        RecipeField::Name => recipe.name.clone(),
        RecipeField::Cuisine => recipe.cuisine.clone(),
        RecipeField::Notes => recipe.notes.clone().unwrap_or_default(),
        RecipeField::Tags => recipe.tags.join(", "),
    }
}

/// Read-only view of a field with an edit button
pub fn field_display(recipe: &RecipeDetail, field: RecipeField) -> Markup {
    let target = field_id(recipe.id, field);
    html! {
        div.field-value id=(target) {
            @match field {
                RecipeField::Tags => {
                    @if recipe.tags.is_empty() { span.muted { "No tags" } }
                    @else { (tag_badges(&recipe.tags)) }
                }
                RecipeField::Notes => {
                    @match &recipe.notes {
                        Some(notes) => { p.notes { (notes) } }
                        None => { span.muted { "No notes" } }
                    }
                }
                _ => { span { (field_value(recipe, field)) } }
            }
            button.link
                hx-get=(format!("/recipes/{}/{}/edit", recipe.id, field))
                hx-target=(format!("#{}", target))
                hx-swap="outerHTML" { "Edit" }
        }
    }
}

/// Inline edit form for a field; saving swaps back to the display fragment
pub fn field_edit(recipe: &RecipeDetail, field: RecipeField) -> Markup {
    let target = field_id(recipe.id, field);
    let value = field_value(recipe, field);
    html! {
        form.field-edit id=(target)
            hx-put=(format!("/recipes/{}/{}", recipe.id, field))
            hx-target="this"
            hx-swap="outerHTML" {
            @match field {
                RecipeField::Notes => {
                    textarea name="value" rows="6" { (value) }
                }
                RecipeField::Cuisine => {
                    input type="text" name="value" value=(value) list="cuisine-options" required autofocus;
                }
                RecipeField::Tags => {
                    input type="text" name="value" value=(value) list="tag-options"
                        placeholder="comma, separated, tags" autofocus;
                }
                RecipeField::Name => {
                    input type="text" name="value" value=(value) required autofocus;
                }
            }
            button type="submit" { "Save" }
            button.link type="button"
                hx-get=(format!("/recipes/{}/{}", recipe.id, field))
                hx-target=(format!("#{}", target))
                hx-swap="outerHTML" { "Cancel" }
        }
    }
}

/// Source links with per-link edit and delete, plus an add form
pub fn url_list(recipe_id: i64, urls: &[RecipeUrl]) -> Markup {
    let target = format!("#{}", urls_id(recipe_id));
    html! {
        div.urls id=(urls_id(recipe_id)) {
            ul {
                @for url in urls {
                    li {
                        form.url-edit
                            hx-put=(format!("/recipes/{}/urls/{}", recipe_id, url.id))
                            hx-target=(target)
                            hx-swap="outerHTML" {
                            a href=(url.url) target="_blank" rel="noopener" {
                                (url.label.as_deref().unwrap_or(&url.url))
                            }
                            input type="url" name="url" value=(url.url) required;
                            input type="text" name="label" value=[url.label.as_deref()] placeholder="label";
                            button type="submit" { "Save" }
                            button.danger type="button"
                                hx-delete=(format!("/recipes/{}/urls/{}", recipe_id, url.id))
                                hx-target=(target)
                                hx-swap="outerHTML" { "Remove" }
                        }
                    }
                }
            }
            form.url-add
                hx-post=(format!("/recipes/{}/urls", recipe_id))
                hx-target=(target)
                hx-swap="outerHTML" {
                input type="url" name="url" placeholder="https://..." required;
                input type="text" name="label" placeholder="label (optional)";
                button type="submit" { "Add link" }
            }
        }
    }
}
