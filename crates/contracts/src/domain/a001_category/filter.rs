use super::aggregate::{CategoryNode, CategoryTree, SubCategoryNode};
use serde::{Deserialize, Serialize};

/// Wildcard value of every filter level
pub const ALL: &str = "all";

/// Anything a list page can filter by category chain and title
pub trait FilterableItem {
    /// Main category label stored on the item
    fn main_label(&self) -> &str;
    fn sub_name(&self) -> Option<&str>;
    fn child_name(&self) -> Option<&str>;
    fn title(&self) -> &str;
}

/// Read-only category cascade with an "all" wildcard on every level,
/// combined with a free-text title search.
///
/// Levels hold display names rather than ids: list items carry names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryFilter {
    pub main: String,
    pub sub: String,
    pub child: String,
    pub search: String,
}

impl Default for CategoryFilter {
    fn default() -> Self {
        Self {
            main: ALL.to_string(),
            sub: ALL.to_string(),
            child: ALL.to_string(),
            search: String::new(),
        }
    }
}

fn is_all(value: &str) -> bool {
    value.is_empty() || value == ALL
}

fn push_unique(names: &mut Vec<String>, name: &str) {
    if !names.iter().any(|n| n == name) {
        names.push(name.to_string());
    }
}

impl CategoryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_main(&mut self, main: &str) {
        self.main = normalize(main);
        self.sub = ALL.to_string();
        self.child = ALL.to_string();
    }

    pub fn select_sub(&mut self, sub: &str) {
        self.sub = normalize(sub);
        self.child = ALL.to_string();
    }

    pub fn select_child(&mut self, child: &str) {
        self.child = normalize(child);
    }

    pub fn set_search(&mut self, search: &str) {
        self.search = search.to_string();
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn mains_in_scope<'a>(&self, tree: &'a CategoryTree) -> Vec<&'a CategoryNode> {
        tree.mains()
            .iter()
            .filter(|m| is_all(&self.main) || m.name.eq_ignore_ascii_case(&self.main))
            .collect()
    }

    fn subs_in_scope<'a>(&self, tree: &'a CategoryTree) -> Vec<&'a SubCategoryNode> {
        self.mains_in_scope(tree)
            .into_iter()
            .flat_map(|m| m.sub_categories.iter())
            .filter(|s| is_all(&self.sub) || s.name == self.sub)
            .collect()
    }

    /// Main names, deduplicated, without the wildcard
    pub fn main_options(&self, tree: &CategoryTree) -> Vec<String> {
        let mut names = Vec::new();
        for main in tree.mains() {
            push_unique(&mut names, &main.name);
        }
        names
    }

    /// Sub names under the selected main (every main while it is "all")
    pub fn sub_options(&self, tree: &CategoryTree) -> Vec<String> {
        let mut names = Vec::new();
        for main in self.mains_in_scope(tree) {
            for sub in &main.sub_categories {
                push_unique(&mut names, &sub.name);
            }
        }
        names
    }

    /// Child names under the selected sub (every sub in scope while it is "all")
    pub fn child_options(&self, tree: &CategoryTree) -> Vec<String> {
        let mut names = Vec::new();
        for sub in self.subs_in_scope(tree) {
            for child in &sub.child_categories {
                push_unique(&mut names, &child.name);
            }
        }
        names
    }

    pub fn matches<T: FilterableItem + ?Sized>(&self, item: &T) -> bool {
        let main_ok = is_all(&self.main) || item.main_label().eq_ignore_ascii_case(&self.main);
        let sub_ok = is_all(&self.sub) || item.sub_name() == Some(self.sub.as_str());
        let child_ok = is_all(&self.child) || item.child_name() == Some(self.child.as_str());
        let search_ok = self.search.is_empty()
            || item.title().to_lowercase().contains(&self.search.to_lowercase());
        main_ok && sub_ok && child_ok && search_ok
    }

    pub fn apply<'a, T: FilterableItem>(&self, items: &'a [T]) -> Vec<&'a T> {
        items.iter().filter(|i| self.matches(*i)).collect()
    }

    /// Number of constrained levels plus search
    pub fn active_count(&self) -> usize {
        [&self.main, &self.sub, &self.child]
            .iter()
            .filter(|v| !is_all(v.as_str()))
            .count()
            + usize::from(!self.search.is_empty())
    }

    /// Main filter as sent to the server (`mainCategory` query parameter)
    pub fn server_main_category(&self) -> Option<&str> {
        if is_all(&self.main) {
            None
        } else {
            Some(self.main.as_str())
        }
    }

    /// Sub, child or search narrow only the loaded page
    pub fn has_page_local_constraints(&self) -> bool {
        !is_all(&self.sub) || !is_all(&self.child) || !self.search.is_empty()
    }
}

fn normalize(value: &str) -> String {
    if value.is_empty() {
        ALL.to_string()
    } else {
        value.to_string()
    }
}
