use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::route::RouteState;

/// Anything the category filter can show or hide.
pub trait Filterable {
    /// Lowercase category key; empty when the item has none.
    fn category_key(&self) -> &str;
    fn title(&self) -> &str;
}

/// Client-side visibility rule: category match AND title substring match.
///
/// Works on already-loaded items only; applying it never triggers a fetch.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CategoryFilter {
    pub category: Category,
    search: String,
}

impl CategoryFilter {
    #[must_use]
    pub fn new(category: Category, search: &str) -> Self {
        Self {
            category,
            search: search.trim().to_lowercase(),
        }
    }

    #[must_use]
    pub fn from_state(state: &RouteState) -> Self {
        Self::new(state.category.clone(), &state.search)
    }

    /// Lowercased search term.
    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    #[must_use]
    pub fn is_unfiltered(&self) -> bool {
        self.category.is_all() && self.search.is_empty()
    }

    #[must_use]
    pub fn is_visible<T: Filterable + ?Sized>(&self, item: &T) -> bool {
        self.category.matches(item.category_key())
            && (self.search.is_empty() || item.title().to_lowercase().contains(&self.search))
    }

    /// Visibility flag per item, in input order.
    #[must_use]
    pub fn visibility<T: Filterable>(&self, items: &[T]) -> Vec<bool> {
        items.iter().map(|item| self.is_visible(item)).collect()
    }

    /// The visible subset, in input order.
    #[must_use]
    pub fn visible<'a, T: Filterable>(&self, items: &'a [T]) -> Vec<&'a T> {
        items.iter().filter(|item| self.is_visible(*item)).collect()
    }

    #[must_use]
    pub fn visible_count<T: Filterable>(&self, items: &[T]) -> usize {
        items.iter().filter(|item| self.is_visible(*item)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Card {
        category: &'static str,
        title: &'static str,
    }

    impl Filterable for Card {
        fn category_key(&self) -> &str {
            self.category
        }
        fn title(&self) -> &str {
            self.title
        }
    }

    fn cards() -> Vec<Card> {
        vec![
            Card {
                category: "anime",
                title: "Novo trailer de Frieren",
            },
            Card {
                category: "games",
                title: "Genshin 5.0",
            },
            Card {
                category: "anime",
                title: "One Piece volta",
            },
            Card {
                category: "",
                title: "Aviso da comunidade",
            },
        ]
    }

    #[test]
    fn category_and_search_are_anded() {
        let items = cards();
        let filter = CategoryFilter::new(Category::parse(Some("Anime")), "PIECE");
        assert_eq!(filter.visibility(&items), vec![false, false, true, false]);
    }

    #[test]
    fn unfiltered_shows_everything() {
        let items = cards();
        let filter = CategoryFilter::default();
        assert!(filter.is_unfiltered());
        assert_eq!(filter.visible_count(&items), items.len());
    }

    #[test]
    fn applying_twice_is_idempotent() {
        let items = cards();
        let filter = CategoryFilter::new(Category::parse(Some("games")), "");
        let once = filter.visibility(&items);
        let twice = filter.visibility(&items);
        assert_eq!(once, twice);
        assert_eq!(filter.visible(&items).len(), 1);
    }

    #[test]
    fn all_sentinels_match_no_filter() {
        let items = cards();
        let baseline = CategoryFilter::default().visibility(&items);
        for raw in [Some("Todos"), Some("todos"), None, Some(""), Some("undefined")] {
            let filter = CategoryFilter::new(Category::parse(raw), "");
            assert_eq!(filter.visibility(&items), baseline, "{raw:?}");
        }
    }
}
