//! Derived filtered/sorted views, recomputed on read, never persisted.

use super::MenuStore;
use serde::{Deserialize, Serialize};
use shared::models::MenuItem;
use std::cmp::Ordering;

/// Reserved category value meaning "no category filter".
pub const ALL_CATEGORIES: &str = "All";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Name,
    Price,
    Category,
    Popularity,
    Created,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// Filter and sort parameters for a menu view.
#[derive(Debug, Clone, Default)]
pub struct MenuQuery {
    /// Free text, matched case-insensitively against name, description,
    /// and category (any field matching suffices). Empty means no filter.
    pub search: String,
    /// Exact category match; empty or [`ALL_CATEGORIES`] means no filter.
    pub category: String,
    pub sort_by: SortKey,
    pub direction: SortDirection,
}

impl MenuQuery {
    pub fn search(text: impl Into<String>) -> Self {
        Self {
            search: text.into(),
            ..Self::default()
        }
    }

    pub fn in_category(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            ..Self::default()
        }
    }

    pub fn sorted_by(sort_by: SortKey, direction: SortDirection) -> Self {
        Self {
            sort_by,
            direction,
            ..Self::default()
        }
    }

    fn matches(&self, item: &MenuItem) -> bool {
        if !self.search.is_empty() {
            let needle = self.search.to_lowercase();
            let hit = item.name.to_lowercase().contains(&needle)
                || item.description.to_lowercase().contains(&needle)
                || item.category.to_lowercase().contains(&needle);
            if !hit {
                return false;
            }
        }
        if !self.category.is_empty()
            && self.category != ALL_CATEGORIES
            && item.category != self.category
        {
            return false;
        }
        true
    }

    fn compare(&self, a: &MenuItem, b: &MenuItem) -> Ordering {
        let ordering = match self.sort_by {
            SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortKey::Price => a.price.partial_cmp(&b.price).unwrap_or(Ordering::Equal),
            SortKey::Category => a.category.to_lowercase().cmp(&b.category.to_lowercase()),
            SortKey::Popularity => a.popularity.cmp(&b.popularity),
            SortKey::Created => a.created_at.cmp(&b.created_at),
        };
        match self.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

impl MenuStore {
    /// The filtered, sorted view described by `query`.
    pub fn filtered(&self, query: &MenuQuery) -> Vec<&MenuItem> {
        let mut view: Vec<&MenuItem> = self
            .items()
            .iter()
            .filter(|item| query.matches(item))
            .collect();
        view.sort_by(|a, b| query.compare(a, b));
        view
    }
}
