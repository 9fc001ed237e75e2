//! Add-recipe page and its form partials

use maud::{html, Markup};

use super::layout::page;

/// Add page; the form body is swapped between text and URL modes
pub fn add_page() -> Markup {
    page(
        "Add recipe",
        html! {
            h1 { "Add a recipe" }
            nav.tabs {
                button hx-get="/recipes/add/form/text" hx-target="#add-form" hx-swap="innerHTML" {
                    "Details"
                }
                button hx-get="/recipes/add/form/url" hx-target="#add-form" hx-swap="innerHTML" {
                    "Just a link"
                }
            }
            div #add-form { (form_text()) }
            div #save-result {}
        },
    )
}

/// Structured form: name, cuisine, tags, notes and any number of links
pub fn form_text() -> Markup {
    html! {
        form.recipe-form hx-post="/recipes" hx-target="#save-result" hx-swap="innerHTML" {
            label { "Name" input type="text" name="name" required; }
            label { "Cuisine" input type="text" name="cuisine" list="cuisine-options" required; }
            label { "Tags" input type="text" name="tags" list="tag-options" placeholder="comma, separated"; }
            label { "Notes" textarea name="notes" rows="4" {} }
            fieldset.links {
                legend { "Links" }
                div.link-row {
                    input type="url" name="url" placeholder="https://...";
                    input type="text" name="label" placeholder="label (optional)";
                }
                div.link-row {
                    input type="url" name="url" placeholder="https://...";
                    input type="text" name="label" placeholder="label (optional)";
                }
            }
            button type="submit" { "Save recipe" }
        }
    }
}

/// Quick form: a single link, everything else derived
pub fn form_url() -> Markup {
    html! {
        form.recipe-form hx-post="/recipes" hx-target="#save-result" hx-swap="innerHTML" {
            label { "Recipe URL" input type="url" name="recipe_url" placeholder="https://..." required; }
            label { "Name (optional)" input type="text" name="name"; }
            button type="submit" { "Save link" }
        }
    }
}

/// Confirmation shown after a successful save
pub fn save_success(recipe_id: i64, name: &str) -> Markup {
    html! {
        div.notice.success role="status" {
            "Saved "
            a href=(format!("/recipes/{}", recipe_id)) { (name) }
            "."
        }
    }
}

/// Inline error notice for rejected input
pub fn error_notice(message: &str) -> Markup {
    html! {
        div.notice.error role="alert" { (message) }
    }
}

/// Full page for errors outside an htmx swap
pub fn error_page(title: &str, message: &str) -> Markup {
    page(
        title,
        html! {
            h1 { (title) }
            (error_notice(message))
            p { a href="/recipes" { "Back to recipes" } }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_form_posts_repeated_links() {
        let out = form_text().into_string();
        assert!(out.contains(r#"hx-post="/recipes""#));
        assert_eq!(out.matches(r#"name="url""#).count(), 2);
        assert_eq!(out.matches(r#"name="label""#).count(), 2);
    }

    #[test]
    fn url_form_uses_recipe_url() {
        let out = form_url().into_string();
        assert!(out.contains(r#"name="recipe_url""#));
    }

    #[test]
    fn success_links_to_recipe() {
        let out = save_success(42, "Bánh mì & co").into_string();
        assert!(out.contains(r#"href="/recipes/42""#));
        assert!(out.contains("Bánh mì &amp; co"));
    }

    #[test]
    fn add_page_embeds_text_form() {
        let out = add_page().into_string();
        assert!(out.contains(r#"id="add-form""#));
        assert!(out.contains(r#"name="cuisine""#));
    }
}
