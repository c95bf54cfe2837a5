use super::aggregate::{CategoryNode, CategoryTree, ChildCategoryNode, SubCategoryNode};
use serde::{Deserialize, Serialize};

/// Selected ids of the three levels. Empty string means "not chosen".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub main_id: String,
    pub sub_id: String,
    pub child_id: String,
}

impl Selection {
    pub fn new(main_id: impl Into<String>, sub_id: impl Into<String>, child_id: impl Into<String>) -> Self {
        Self {
            main_id: main_id.into(),
            sub_id: sub_id.into(),
            child_id: child_id.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.main_id.is_empty() && self.sub_id.is_empty() && self.child_id.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        !self.main_id.is_empty() && !self.sub_id.is_empty() && !self.child_id.is_empty()
    }
}

/// One entry of a `<select>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryOption {
    pub id: String,
    pub name: String,
}

impl From<&CategoryNode> for CategoryOption {
    fn from(node: &CategoryNode) -> Self {
        Self {
            id: node.id.clone(),
            name: node.name.clone(),
        }
    }
}

impl From<&SubCategoryNode> for CategoryOption {
    fn from(node: &SubCategoryNode) -> Self {
        Self {
            id: node.id.clone(),
            name: node.name.clone(),
        }
    }
}

impl From<&ChildCategoryNode> for CategoryOption {
    fn from(node: &ChildCategoryNode) -> Self {
        Self {
            id: node.id.clone(),
            name: node.name.clone(),
        }
    }
}

/// Main options for a product form.
///
/// With a label only main categories of that name are offered (the product
/// type tab), otherwise every main category.
pub fn main_options(tree: &CategoryTree, label: Option<&str>) -> Vec<CategoryOption> {
    match label {
        Some(label) => tree.mains_for_label(label).into_iter().map(CategoryOption::from).collect(),
        None => tree.mains().iter().map(CategoryOption::from).collect(),
    }
}

/// Cascading main -> sub -> child selection.
///
/// Mutations go top-down only: choosing a main clears sub and child,
/// choosing a sub clears child. Ids missing from the current options are
/// stored as given; the options below them are then empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategorySelector {
    selection: Selection,
    sub_options: Vec<CategoryOption>,
    child_options: Vec<CategoryOption>,
}

impl CategorySelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hydrate from a stored chain (edit form)
    pub fn with_selection(tree: &CategoryTree, selection: &Selection) -> Self {
        let mut selector = Self::new();
        selector.select_main(tree, &selection.main_id);
        selector.select_sub(tree, &selection.sub_id);
        selector.select_child(&selection.child_id);
        selector
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn main_id(&self) -> &str {
        &self.selection.main_id
    }

    pub fn sub_id(&self) -> &str {
        &self.selection.sub_id
    }

    pub fn child_id(&self) -> &str {
        &self.selection.child_id
    }

    pub fn sub_options(&self) -> &[CategoryOption] {
        &self.sub_options
    }

    pub fn child_options(&self) -> &[CategoryOption] {
        &self.child_options
    }

    pub fn sub_enabled(&self) -> bool {
        !self.sub_options.is_empty()
    }

    pub fn child_enabled(&self) -> bool {
        !self.child_options.is_empty()
    }

    pub fn select_main(&mut self, tree: &CategoryTree, main_id: &str) {
        self.selection = Selection {
            main_id: main_id.to_string(),
            ..Selection::default()
        };
        self.sub_options = tree
            .main(main_id)
            .map(|m| m.sub_categories.iter().map(CategoryOption::from).collect())
            .unwrap_or_default();
        self.child_options.clear();
    }

    pub fn select_sub(&mut self, tree: &CategoryTree, sub_id: &str) {
        self.selection.sub_id = sub_id.to_string();
        self.selection.child_id.clear();
        self.child_options = tree
            .sub(&self.selection.main_id, sub_id)
            .map(|s| s.child_categories.iter().map(CategoryOption::from).collect())
            .unwrap_or_default();
    }

    pub fn select_child(&mut self, child_id: &str) {
        self.selection.child_id = child_id.to_string();
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Re-check the selection against a reloaded tree.
    ///
    /// Levels are dropped top-down: an unknown main clears everything, an
    /// unknown sub clears sub and child, an unknown child clears child.
    /// Returns `true` when something was cleared.
    pub fn revalidate(&mut self, tree: &CategoryTree) -> bool {
        let before = self.selection.clone();
        let Selection {
            main_id,
            sub_id,
            child_id,
        } = before.clone();

        if main_id.is_empty() || tree.main(&main_id).is_none() {
            self.reset();
            return !before.is_empty();
        }

        self.select_main(tree, &main_id);
        if !sub_id.is_empty() && tree.sub(&main_id, &sub_id).is_some() {
            self.select_sub(tree, &sub_id);
            if !child_id.is_empty() && tree.child(&main_id, &sub_id, &child_id).is_some() {
                self.select_child(&child_id);
            }
        }

        self.selection != before
    }
}

#[cfg(test)]
mod tests {
    use super::super::aggregate::fixtures::tree;
    use super::*;

    fn ids(options: &[CategoryOption]) -> Vec<&str> {
        options.iter().map(|o| o.id.as_str()).collect()
    }

    #[test]
    fn full_chain_selection_yields_id_triple() {
        let tree = tree();
        let mut selector = CategorySelector::new();
        selector.select_main(&tree, "m1");
        selector.select_sub(&tree, "s1");
        selector.select_child("c1");

        assert_eq!(selector.selection(), &Selection::new("m1", "s1", "c1"));
        assert!(selector.selection().is_complete());
    }

    #[test]
    fn select_main_offers_exactly_its_subs_and_clears_lower_levels() {
        let tree = tree();
        let mut selector = CategorySelector::new();
        selector.select_main(&tree, "m1");
        selector.select_sub(&tree, "s1");
        selector.select_child("c1");

        for main in tree.mains() {
            selector.select_main(&tree, &main.id);
            let expected: Vec<&str> = main.sub_categories.iter().map(|s| s.id.as_str()).collect();
            assert_eq!(ids(selector.sub_options()), expected);
            assert_eq!(selector.sub_id(), "");
            assert_eq!(selector.child_id(), "");
            assert!(selector.child_options().is_empty());
        }
    }

    #[test]
    fn reselecting_same_main_resets_sub_and_child() {
        let tree = tree();
        let mut selector = CategorySelector::new();
        selector.select_main(&tree, "m1");
        selector.select_sub(&tree, "s1");
        selector.select_child("c1");

        selector.select_main(&tree, "m1");
        assert_eq!(selector.selection(), &Selection::new("m1", "", ""));
        assert_eq!(ids(selector.sub_options()), vec!["s1", "s2"]);
    }

    #[test]
    fn sub_from_another_main_yields_no_children() {
        let tree = tree();
        let mut selector = CategorySelector::new();
        selector.select_main(&tree, "m3");
        selector.select_sub(&tree, "s1");

        assert_eq!(selector.sub_id(), "s1");
        assert!(selector.child_options().is_empty());
        assert!(!selector.child_enabled());
    }

    #[test]
    fn unknown_or_empty_main_disables_lower_levels() {
        let tree = tree();
        let mut selector = CategorySelector::new();
        selector.select_main(&tree, "nope");
        assert_eq!(selector.main_id(), "nope");
        assert!(!selector.sub_enabled());

        selector.select_main(&CategoryTree::default(), "");
        assert!(selector.sub_options().is_empty());
        assert!(selector.child_options().is_empty());
    }

    #[test]
    fn hydrate_keeps_stored_chain() {
        let tree = tree();
        let selector = CategorySelector::with_selection(&tree, &Selection::new("m2", "s1", "c1"));
        assert_eq!(selector.selection(), &Selection::new("m2", "s1", "c1"));
        assert_eq!(ids(selector.child_options()), vec!["c1"]);
    }

    #[test]
    fn revalidate_drops_levels_missing_from_reloaded_tree() {
        let mut selector = CategorySelector::with_selection(&tree(), &Selection::new("m1", "s1", "c2"));

        // c2 disappears
        let mut reloaded = tree();
        let mains = vec![{
            let mut m = reloaded.mains()[0].clone();
            m.sub_categories[0].child_categories.truncate(1);
            m
        }];
        reloaded = CategoryTree::new(mains);

        assert!(selector.revalidate(&reloaded));
        assert_eq!(selector.selection(), &Selection::new("m1", "s1", ""));

        // whole main disappears
        assert!(selector.revalidate(&CategoryTree::default()));
        assert!(selector.selection().is_empty());
        assert!(!selector.revalidate(&tree()));
    }

    #[test]
    fn revalidate_keeps_valid_selection() {
        let tree = tree();
        let mut selector = CategorySelector::with_selection(&tree, &Selection::new("m1", "s2", "c3"));
        assert!(!selector.revalidate(&tree));
        assert_eq!(selector.selection(), &Selection::new("m1", "s2", "c3"));
    }

    #[test]
    fn main_options_follow_product_type_label() {
        let tree = tree();
        assert_eq!(main_options(&tree, None).len(), 3);
        let goods = main_options(&tree, Some("general goods"));
        assert_eq!(ids(&goods), vec!["m2"]);
    }
}
