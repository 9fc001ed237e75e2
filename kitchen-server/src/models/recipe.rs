//! Recipe submissions
//!
//! Form bodies arrive as ordered key/value pairs so that repeated `url` and
//! `label` fields keep their pairing. [`NewRecipe::from_form`] turns those
//! pairs into a validated submission.

use once_cell::sync::Lazy;
use regex::Regex;

use super::catalog::{parse_tag_list, CuisineName, TagName};
use super::validation::{optional, required};
use super::ValidationError;

/// Maximum length for recipe names
const MAX_RECIPE_NAME_LEN: usize = 200;

/// Maximum length for notes
pub(crate) const MAX_NOTES_LEN: usize = 10_000;

/// Maximum length for a source URL
const MAX_URL_LEN: usize = 2048;

/// Maximum length for a URL label
const MAX_LABEL_LEN: usize = 100;

/// scheme://host/path (query and fragment excluded)
static URL_PARTS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<scheme>[A-Za-z][A-Za-z0-9+.-]*)://(?P<host>[^/?#\s]+)(?P<path>[^?#\s]*)")
        .expect("invalid url regex")
});

/// Trailing file extension on the last path segment (".html", ".php", ...)
static EXTENSION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\.[A-Za-z0-9]{1,5}$").expect("invalid extension regex"));

/// Validated recipe name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeName(String);

impl RecipeName {
    /// Create a recipe name.
    ///
    /// # Rules
    /// - Non-empty after trimming
    /// - Max 200 characters
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        required(s, "name", MAX_RECIPE_NAME_LEN).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A source link to attach to a recipe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUrl {
    pub url: String,
    pub label: Option<String>,
}

impl NewUrl {
    /// Validate a URL with an optional label. Blank labels become `None`.
    ///
    /// Only absolute `http` and `https` links are accepted; anything else
    /// (`javascript:`, `data:`, relative paths) is rejected.
    pub fn new(url: &str, label: Option<&str>) -> Result<Self, ValidationError> {
        let url = required(url, "url", MAX_URL_LEN)?;

        let is_web = URL_PARTS_RE
            .captures(&url)
            .and_then(|caps| caps.name("scheme"))
            .is_some_and(|scheme| {
                scheme.as_str().eq_ignore_ascii_case("http")
                    || scheme.as_str().eq_ignore_ascii_case("https")
            });
        if !is_web {
            return Err(ValidationError::InvalidFormat {
                field: "url",
                reason: "must be an http or https link",
            });
        }

        Ok(Self {
            url,
            label: optional(label, "label", MAX_LABEL_LEN)?,
        })
    }
}

/// Notes value; blank input clears the notes.
pub fn normalize_notes(raw: &str) -> Result<Option<String>, ValidationError> {
    optional(Some(raw), "notes", MAX_NOTES_LEN)
}

/// A complete, validated recipe submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecipe {
    pub name: RecipeName,
    pub cuisine: CuisineName,
    pub notes: Option<String>,
    pub urls: Vec<NewUrl>,
    pub tags: Vec<TagName>,
}

impl NewRecipe {
    /// Build a submission from ordered form pairs.
    ///
    /// Recognized keys: `name`, `cuisine`, `notes`, `tags` (comma-separated),
    /// `url` / `recipe_url` (repeatable) and `label` (applies to the URL
    /// immediately before it). Blank URLs are skipped. A missing name is
    /// derived from the first URL; a missing cuisine files the recipe under
    /// `uncategorized`.
    pub fn from_form(pairs: &[(String, String)]) -> Result<Self, ValidationError> {
        let mut name = "";
        let mut cuisine = "";
        let mut notes = "";
        let mut tags = "";
        let mut raw_urls: Vec<(&str, Option<&str>)> = Vec::new();

        for (key, value) in pairs {
            let value = value.as_str();
            match key.as_str() {
                "name" => name = value,
                "cuisine" => cuisine = value,
                "notes" => notes = value,
                "tags" => tags = value,
                "url" | "recipe_url" => raw_urls.push((value, None)),
                "label" => {
                    if let Some(last) = raw_urls.last_mut() {
                        if last.1.is_none() {
                            last.1 = Some(value);
                        }
                    }
                }
                _ => {}
            }
        }

        let urls = raw_urls
            .into_iter()
            .filter(|(url, _)| !url.trim().is_empty())
            .map(|(url, label)| NewUrl::new(url, label))
            .collect::<Result<Vec<_>, _>>()?;

        let name = if name.trim().is_empty() {
            let derived = urls
                .first()
                .and_then(|u| name_from_url(&u.url))
                .ok_or(ValidationError::Empty { field: "name" })?;
            RecipeName::new(&derived)?
        } else {
            RecipeName::new(name)?
        };

        let cuisine = if cuisine.trim().is_empty() {
            CuisineName::uncategorized()
        } else {
            CuisineName::new(cuisine)?
        };

        Ok(Self {
            name,
            cuisine,
            notes: normalize_notes(notes)?,
            urls,
            tags: parse_tag_list(tags)?,
        })
    }
}

/// Guess a readable recipe name from a link.
///
/// Uses the last path segment ("/recipes/pad-see-ew.html" → "Pad see ew"),
/// falling back to the host without a leading "www.".
///
/// # Example
/// ```
/// use kitchen_server::models::name_from_url;
///
/// assert_eq!(
///     name_from_url("https://example.com/recipes/green_curry/").as_deref(),
///     Some("Green curry")
/// );
/// assert_eq!(name_from_url("https://www.seriouseats.com").as_deref(), Some("seriouseats.com"));
/// assert_eq!(name_from_url("not a url"), None);
/// ```
pub fn name_from_url(url: &str) -> Option<String> {
    let caps = URL_PARTS_RE.captures(url.trim())?;
    let host = caps.name("host")?.as_str();
    let path = caps.name("path").map_or("", |m| m.as_str());

    let from_path = path
        .split('/')
        .filter(|s| !s.is_empty())
        .next_back()
        .map(|segment| {
            EXTENSION_RE
                .replace(segment, "")
                .replace(['-', '_', '+'], " ")
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ")
        })
        .filter(|s| !s.is_empty());

    let name = match from_path {
        Some(segment) => capitalize(&segment),
        None => host.trim_start_matches("www.").to_owned(),
    };

    (!name.is_empty()).then_some(name)
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn structured_submission() {
        let form = pairs(&[
            ("name", "  Pad Thai "),
            ("cuisine", "Thai"),
            ("tags", "noodles, Quick"),
            ("notes", "less sugar"),
            ("url", "https://a.example/pad-thai"),
            ("label", "Blog"),
            ("url", "https://b.example/video"),
            ("label", ""),
        ]);
        let recipe = NewRecipe::from_form(&form).unwrap();

        assert_eq!(recipe.name.as_str(), "Pad Thai");
        assert_eq!(recipe.cuisine.as_str(), "thai");
        assert_eq!(recipe.notes.as_deref(), Some("less sugar"));
        assert_eq!(
            recipe.urls,
            vec![
                NewUrl {
                    url: "https://a.example/pad-thai".into(),
                    label: Some("Blog".into())
                },
                NewUrl {
                    url: "https://b.example/video".into(),
                    label: None
                },
            ]
        );
        let tags: Vec<&str> = recipe.tags.iter().map(TagName::as_str).collect();
        assert_eq!(tags, ["noodles", "quick"]);
    }

    #[test]
    fn blank_urls_are_skipped() {
        let form = pairs(&[
            ("name", "Soup"),
            ("cuisine", "french"),
            ("url", "   "),
            ("label", "ignored"),
        ]);
        let recipe = NewRecipe::from_form(&form).unwrap();
        assert!(recipe.urls.is_empty());
        assert_eq!(recipe.notes, None);
    }

    #[test]
    fn url_only_submission_derives_name() {
        let form = pairs(&[("recipe_url", "https://cooking.example/recipes/1234-miso-glazed-salmon")]);
        let recipe = NewRecipe::from_form(&form).unwrap();

        assert_eq!(recipe.name.as_str(), "1234 miso glazed salmon");
        assert_eq!(recipe.cuisine, CuisineName::uncategorized());
        assert_eq!(recipe.urls.len(), 1);
    }

    #[test]
    fn missing_name_without_url_is_rejected() {
        let form = pairs(&[("cuisine", "thai")]);
        let err = NewRecipe::from_form(&form).unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "name" });
    }

    #[test]
    fn name_from_url_variants() {
        assert_eq!(
            name_from_url("https://x.example/a/b/shakshuka.html?ref=1").as_deref(),
            Some("Shakshuka")
        );
        assert_eq!(
            name_from_url("http://www.example.org/").as_deref(),
            Some("example.org")
        );
        assert_eq!(name_from_url("example.org/recipe"), None);
    }

    #[test]
    fn url_scheme_must_be_web() {
        for bad in [
            "javascript:alert(document.cookie)",
            "JavaScript://%0aalert(1)",
            "data:text/html,<script>alert(1)</script>",
            "ftp://files.example/recipe.txt",
            "/recipes/1",
        ] {
            assert!(
                matches!(
                    NewUrl::new(bad, None),
                    Err(ValidationError::InvalidFormat { field: "url", .. })
                ),
                "accepted {}",
                bad
            );
        }

        assert!(NewUrl::new("https://example.com/curry", None).is_ok());
        assert!(NewUrl::new("HTTP://example.com/curry", Some("Old")).is_ok());
    }

    #[test]
    fn form_with_script_link_is_rejected() {
        let form = pairs(&[("name", "Trap"), ("url", "javascript:alert(1)")]);
        assert!(NewRecipe::from_form(&form).is_err());
    }

    #[test]
    fn notes_blank_clears() {
        assert_eq!(normalize_notes("  ").unwrap(), None);
        assert_eq!(normalize_notes(" x ").unwrap().as_deref(), Some("x"));
    }
}
