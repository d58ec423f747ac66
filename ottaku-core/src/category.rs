use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{ALL_CATEGORIES, ALL_CATEGORY_ALIASES};

/// A category filter token.
///
/// Tokens are case-insensitive and percent-decoded; `null`, `undefined`,
/// blank input and the `todos` sentinel all mean "every category".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Category {
    #[default]
    All,
    Named(String),
}

impl Category {
    /// Normalize a raw, still percent-encoded token (URL segment, button
    /// attribute).
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::All;
        };
        let decoded = urlencoding::decode(raw)
            .map(std::borrow::Cow::into_owned)
            .unwrap_or_else(|_| raw.to_string());
        Self::from_decoded(Some(&decoded))
    }

    /// Normalize a token that was already percent-decoded, such as a query
    /// string value.
    ///
    /// `.` and `..` are not categories: browsers fold them out of a path.
    #[must_use]
    pub fn from_decoded(token: Option<&str>) -> Self {
        let Some(token) = token else {
            return Self::All;
        };
        let token = token.trim().trim_matches('/').trim().to_lowercase();
        if token.is_empty()
            || token == "."
            || token == ".."
            || ALL_CATEGORY_ALIASES.contains(&token.as_str())
        {
            Self::All
        } else {
            Self::Named(token)
        }
    }

    #[must_use]
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Lowercase token, `todos` for [`Category::All`].
    #[must_use]
    pub fn token(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Named(name) => name,
        }
    }

    /// URL path segment, `None` for [`Category::All`].
    #[must_use]
    pub fn segment(&self) -> Option<String> {
        match self {
            Self::All => None,
            Self::Named(name) => Some(urlencoding::encode(name).into_owned()),
        }
    }

    /// Case-insensitive comparison against an item's category label or key.
    #[must_use]
    pub fn matches(&self, item_category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Named(name) => item_category.trim().to_lowercase() == *name,
        }
    }

    /// Human label: first letter upper-cased (`anime` -> `Anime`).
    #[must_use]
    pub fn label(&self) -> String {
        let token = self.token();
        let mut chars = token.chars();
        chars.next().map_or_else(String::new, |first| {
            first.to_uppercase().chain(chars).collect()
        })
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.token().to_string()
    }
}

impl From<String> for Category {
    fn from(token: String) -> Self {
        Self::from_decoded(Some(&token))
    }
}

impl From<&str> for Category {
    fn from(raw: &str) -> Self {
        Self::parse(Some(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinels_collapse_to_all() {
        for raw in ["Todos", "todos", "", "undefined", "null", "ALL", " / "] {
            assert_eq!(Category::parse(Some(raw)), Category::All, "{raw:?}");
        }
        assert_eq!(Category::parse(None), Category::All);
    }

    #[test]
    fn named_tokens_are_lowercased_and_decoded() {
        assert_eq!(
            Category::parse(Some("Anime/")),
            Category::Named("anime".into())
        );
        assert_eq!(
            Category::parse(Some("Cultura%20Pop")),
            Category::Named("cultura pop".into())
        );
        assert_eq!(
            Category::Named("cultura pop".into()).segment().as_deref(),
            Some("cultura%20pop")
        );
    }

    #[test]
    fn decoded_tokens_are_not_decoded_again() {
        assert_eq!(
            Category::from_decoded(Some("100%25")),
            Category::Named("100%25".into())
        );
        assert_eq!(
            Category::parse(Some("100%2525")),
            Category::Named("100%25".into())
        );
        let json = serde_json::to_string(&Category::Named("100%25".into())).unwrap();
        let back: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Category::Named("100%25".into()));
    }

    #[test]
    fn dot_segments_are_not_categories() {
        for raw in [".", "..", "%2E%2E", " .. "] {
            assert_eq!(Category::parse(Some(raw)), Category::All, "{raw:?}");
        }
        assert_eq!(
            Category::parse(Some("...")),
            Category::Named("...".into())
        );
    }

    #[test]
    fn matching_ignores_case() {
        let cat = Category::parse(Some("Mangá"));
        assert!(cat.matches("MANGÁ"));
        assert!(cat.matches(" mangá "));
        assert!(!cat.matches("anime"));
        assert!(Category::All.matches(""));
        assert_eq!(cat.label(), "Mangá");
    }

    #[test]
    fn serde_uses_tokens() {
        let json = serde_json::to_string(&Category::parse(Some("Games"))).unwrap();
        assert_eq!(json, "\"games\"");
        let back: Category = serde_json::from_str("\"todos\"").unwrap();
        assert!(back.is_all());
    }
}
