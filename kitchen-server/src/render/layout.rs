//! Page shell shared by all full-page responses

use maud::{html, Markup, DOCTYPE};

const HTMX_SRC: &str = "https://unpkg.com/htmx.org@2.0.4";

/// Wrap `body` in the full HTML document.
pub fn page(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " · Kitchen Companion" }
                link rel="stylesheet" href="/static/app.css";
                script src=(HTMX_SRC) defer {}
                script src="/static/app.js" defer {}
            }
            body {
                header.site-header {
                    a.brand href="/" { "Kitchen Companion" }
                    nav {
                        a href="/recipes" { "Recipes" }
                        a href="/recipes/add" { "Add recipe" }
                    }
                }
                main #content {
                    div #flash aria-live="polite" {}
                    (body)
                }
                (autocomplete_lists())
            }
        }
    }
}

/// Datalists filled from the JSON autocomplete endpoints by app.js
fn autocomplete_lists() -> Markup {
    html! {
        datalist #cuisine-options data-source="/api/cuisines" {}
        datalist #tag-options data-source="/api/tags" {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_escapes_title() {
        let out = page("<b>x</b>", html! { p { "body" } }).into_string();
        assert!(out.starts_with("<!DOCTYPE html>"));
        assert!(out.contains("&lt;b&gt;x&lt;/b&gt; · Kitchen Companion"));
        assert!(out.contains("<p>body</p>"));
    }

    #[test]
    fn page_carries_flash_slot() {
        let out = page("x", html! {}).into_string();
        assert!(out.contains(r#"<div id="flash" aria-live="polite"></div>"#));
    }
}
