use crate::catalog::{Catalog, CatalogEntry};

/// The category titles a user has clicked so far.
///
/// Grows only through [`CategorySelection::with_added`], which produces a new
/// selection instead of mutating in place. Repeated additions of the same
/// title accumulate duplicates; membership drives chip highlighting, so the
/// missing deduplication is an explicit choice rather than an accident.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct CategorySelection(Vec<String>);

impl CategorySelection {
    /// Returns a new selection with `title` appended. Does not deduplicate.
    pub fn with_added(&self, title: &str) -> Self {
        let mut titles = self.0.clone();
        titles.push(title.to_string());
        CategorySelection(titles)
    }

    pub fn contains(&self, title: &str) -> bool {
        self.0.iter().any(|t| t == title)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn titles(&self) -> &[String] {
        &self.0
    }
}

/// The three user-selectable filter fields. Lives for one browsing session
/// and is only ever mutated by direct user actions.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct FilterState {
    /// Name of the selected owning user; empty means no user filter.
    pub selected_user_name: String,
    /// Category titles the user has clicked. Highlighted in the filter panel
    /// but never consulted by [`FilterState::is_visible`]; see the note
    /// there.
    pub selected_categories: CategorySelection,
    /// Raw (untrimmed) search input; empty means no text filter.
    pub search_text: String,
}

impl FilterState {
    pub fn new() -> Self {
        FilterState::default()
    }

    /// Decides whether a catalog entry appears in the table.
    ///
    /// The user filter matches the owning user's name exactly; the search
    /// filter matches a case-insensitive substring of the product name. When
    /// both are active, both must match.
    ///
    /// `selected_categories` is intentionally not consulted: clicking a
    /// category chip highlights it but has never narrowed the table. The
    /// test `category_selection_does_not_narrow_the_table` pins this down;
    /// update it first if that behavior is ever deliberately revisited.
    pub fn is_visible(&self, entry: &CatalogEntry) -> bool {
        let owner_matches = || entry.user.name == self.selected_user_name;
        let name_matches = || {
            entry
                .product
                .name
                .to_lowercase()
                .contains(&self.search_text.to_lowercase())
        };

        if !self.selected_user_name.is_empty() && !self.search_text.is_empty() {
            owner_matches() && name_matches()
        } else if !self.selected_user_name.is_empty() {
            owner_matches()
        } else if !self.search_text.is_empty() {
            name_matches()
        } else {
            true
        }
    }

    /// Applies the predicate to the whole catalog, preserving entry order.
    /// Recomputed in full on every call; the data sets are tens of rows.
    pub fn visible_entries<'a>(&self, catalog: &'a Catalog) -> Vec<&'a CatalogEntry> {
        catalog.entries().iter().filter(|entry| self.is_visible(entry)).collect()
    }

    pub fn select_user(&mut self, name: &str) {
        self.selected_user_name = name.to_string();
    }

    pub fn select_all_users(&mut self) {
        self.selected_user_name.clear();
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    pub fn clear_search(&mut self) {
        self.search_text.clear();
    }

    pub fn add_category(&mut self, title: &str) {
        self.selected_categories = self.selected_categories.with_added(title);
    }

    pub fn reset(&mut self) {
        *self = FilterState::default();
    }
}
