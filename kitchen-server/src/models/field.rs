//! Editable recipe fields

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use super::ValidationError;

/// A recipe field that can be edited in place
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecipeField {
    Name,
    Cuisine,
    Notes,
    Tags,
}

impl RecipeField {
    pub const ALL: [RecipeField; 4] = [Self::Name, Self::Cuisine, Self::Notes, Self::Tags];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Cuisine => "cuisine",
            Self::Notes => "notes",
            Self::Tags => "tags",
        }
    }
}

impl fmt::Display for RecipeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecipeField {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| ValidationError::InvalidVariant {
                field: "field",
                value: s.to_owned(),
            })
    }
}
