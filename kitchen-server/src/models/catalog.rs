//! Cuisine and tag names
//!
//! Both are stored case-normalized: surrounding whitespace is trimmed and the
//! name is lowercased before it ever reaches the database, so "Thai", " thai"
//! and "THAI" all resolve to the same row.

use super::ValidationError;

/// Maximum length for cuisine and tag names
const MAX_CATALOG_NAME_LEN: usize = 64;

fn normalize(s: &str, field: &'static str) -> Result<String, ValidationError> {
    let normalized = s.trim().to_lowercase();

    if normalized.is_empty() {
        return Err(ValidationError::Empty { field });
    }

    if normalized.chars().count() > MAX_CATALOG_NAME_LEN {
        return Err(ValidationError::TooLong {
            field,
            max: MAX_CATALOG_NAME_LEN,
        });
    }

    Ok(normalized)
}

/// Normalized cuisine name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CuisineName(String);

impl CuisineName {
    /// Normalize a display name into a cuisine name.
    ///
    /// # Example
    /// ```
    /// use kitchen_server::models::CuisineName;
    ///
    /// assert_eq!(CuisineName::new("  Thai ").unwrap().as_str(), "thai");
    /// assert!(CuisineName::new("   ").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        normalize(s, "cuisine").map(Self)
    }

    /// Cuisine used when a submission names none.
    pub fn uncategorized() -> Self {
        Self("uncategorized".to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CuisineName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Normalized tag name
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TagName(String);

impl TagName {
    /// Normalize a display name into a tag name.
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        normalize(s, "tag").map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TagName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Parse a comma-separated tag list.
///
/// Blank entries are skipped and duplicates (after normalization) are dropped,
/// keeping the first occurrence.
pub fn parse_tag_list(raw: &str) -> Result<Vec<TagName>, ValidationError> {
    let mut tags: Vec<TagName> = Vec::new();
    for part in raw.split(',') {
        if part.trim().is_empty() {
            continue;
        }
        let tag = TagName::new(part)?;
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    Ok(tags)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cuisine_is_lowercased_and_trimmed() {
        let a = CuisineName::new("Italian").unwrap();
        let b = CuisineName::new("  ITALIAN  ").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "italian");
    }

    #[test]
    fn rejects_empty() {
        let err = TagName::new(" \t").unwrap_err();
        assert!(matches!(err, ValidationError::Empty { field: "tag" }));
    }

    #[test]
    fn max_length() {
        assert!(TagName::new(&"a".repeat(64)).is_ok());
        let err = TagName::new(&"a".repeat(65)).unwrap_err();
        assert!(matches!(err, ValidationError::TooLong { max: 64, .. }));
    }

    #[test]
    fn tag_list_skips_blanks_and_duplicates() {
        let tags = parse_tag_list("Quick, , weeknight,quick ,Vegan").unwrap();
        let names: Vec<&str> = tags.iter().map(TagName::as_str).collect();
        assert_eq!(names, ["quick", "weeknight", "vegan"]);
    }

    #[test]
    fn empty_tag_list() {
        assert!(parse_tag_list("").unwrap().is_empty());
        assert!(parse_tag_list(" , ,").unwrap().is_empty());
    }
}
