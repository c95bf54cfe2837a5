use serde::{Deserialize, Serialize};

// ============================================================================
// Nodes
// ============================================================================

/// Третий уровень: дочерняя категория
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChildCategoryNode {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

/// Второй уровень: подкатегория
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubCategoryNode {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(rename = "childCategories", default)]
    pub child_categories: Vec<ChildCategoryNode>,
}

impl SubCategoryNode {
    pub fn child(&self, child_id: &str) -> Option<&ChildCategoryNode> {
        self.child_categories.iter().find(|c| c.id == child_id)
    }
}

/// Верхний уровень: основная категория
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryNode {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "mainCategory")]
    pub name: String,
    #[serde(rename = "mainCategoryImage", default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(rename = "subCategories", default)]
    pub sub_categories: Vec<SubCategoryNode>,
    /// Supplied by the backend, never computed locally
    #[serde(rename = "productCount", default)]
    pub product_count: u64,
}

impl CategoryNode {
    pub fn sub(&self, sub_id: &str) -> Option<&SubCategoryNode> {
        self.sub_categories.iter().find(|s| s.id == sub_id)
    }
}

/// `data` of `GET /category`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryListData {
    #[serde(default)]
    pub categories: Vec<CategoryNode>,
}

// ============================================================================
// Tree
// ============================================================================

/// Display names of a category chain. `None` where the id did not resolve.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChainNames {
    pub main: Option<String>,
    pub sub: Option<String>,
    pub child: Option<String>,
}

/// Forest of main categories as returned by the category provider.
///
/// Sub ids are only unique within their main category and child ids only
/// within their sub category, so every lookup below takes the full parent
/// chain.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryTree {
    mains: Vec<CategoryNode>,
}

impl CategoryTree {
    pub fn new(mains: Vec<CategoryNode>) -> Self {
        Self { mains }
    }

    pub fn mains(&self) -> &[CategoryNode] {
        &self.mains
    }

    pub fn is_empty(&self) -> bool {
        self.mains.is_empty()
    }

    pub fn len(&self) -> usize {
        self.mains.len()
    }

    pub fn main(&self, main_id: &str) -> Option<&CategoryNode> {
        if main_id.is_empty() {
            return None;
        }
        self.mains.iter().find(|m| m.id == main_id)
    }

    pub fn sub(&self, main_id: &str, sub_id: &str) -> Option<&SubCategoryNode> {
        self.main(main_id)?.sub(sub_id)
    }

    pub fn child(&self, main_id: &str, sub_id: &str, child_id: &str) -> Option<&ChildCategoryNode> {
        self.sub(main_id, sub_id)?.child(child_id)
    }

    /// Main categories whose name equals `label`, ignoring case
    pub fn mains_for_label(&self, label: &str) -> Vec<&CategoryNode> {
        let label = label.trim().to_lowercase();
        self.mains
            .iter()
            .filter(|m| m.name.trim().to_lowercase() == label)
            .collect()
    }

    /// Main categories whose name contains `query`, ignoring case.
    /// An empty query returns everything.
    pub fn search_main(&self, query: &str) -> Vec<&CategoryNode> {
        let query = query.trim().to_lowercase();
        self.mains
            .iter()
            .filter(|m| query.is_empty() || m.name.to_lowercase().contains(&query))
            .collect()
    }

    /// Resolve display names of a chain, each level only inside its parent
    pub fn resolve_names(&self, main_id: &str, sub_id: &str, child_id: &str) -> ChainNames {
        let main = self.main(main_id);
        let sub = main.and_then(|m| m.sub(sub_id));
        let child = sub.and_then(|s| s.child(child_id));
        ChainNames {
            main: main.map(|m| m.name.clone()),
            sub: sub.map(|s| s.name.clone()),
            child: child.map(|c| c.name.clone()),
        }
    }
}

impl From<Vec<CategoryNode>> for CategoryTree {
    fn from(mains: Vec<CategoryNode>) -> Self {
        Self::new(mains)
    }
}

impl From<CategoryListData> for CategoryTree {
    fn from(data: CategoryListData) -> Self {
        Self::new(data.categories)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    fn child(id: &str, name: &str) -> ChildCategoryNode {
        ChildCategoryNode {
            id: id.into(),
            name: name.into(),
            thumbnail: None,
        }
    }

    fn sub(id: &str, name: &str, children: Vec<ChildCategoryNode>) -> SubCategoryNode {
        SubCategoryNode {
            id: id.into(),
            name: name.into(),
            thumbnail: None,
            child_categories: children,
        }
    }

    /// Two mains that reuse the sub id `s1` and the child id `c1`
    pub fn tree() -> CategoryTree {
        CategoryTree::new(vec![
            CategoryNode {
                id: "m1".into(),
                name: "Electronics".into(),
                image: None,
                sub_categories: vec![
                    sub("s1", "Phones", vec![child("c1", "Smartphones"), child("c2", "Feature phones")]),
                    sub("s2", "Laptops", vec![child("c3", "Ultrabooks")]),
                ],
                product_count: 12,
            },
            CategoryNode {
                id: "m2".into(),
                name: "General Goods".into(),
                image: Some("/img/goods.png".into()),
                sub_categories: vec![sub("s1", "Kitchen", vec![child("c1", "Cutlery")])],
                product_count: 3,
            },
            CategoryNode {
                id: "m3".into(),
                name: "Vehicles".into(),
                image: None,
                sub_categories: vec![],
                product_count: 0,
            },
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::tree;
    use super::*;

    #[test]
    fn deserializes_backend_shape() {
        let json = r#"{"categories":[{"_id":"m1","mainCategory":"Vehicles","mainCategoryImage":"/v.png",
            "productCount":4,"subCategories":[{"_id":"s1","name":"Cars","thumbnail":"/c.png",
            "childCategories":[{"_id":"c1","name":"Sedan"}]}]}]}"#;
        let data: CategoryListData = serde_json::from_str(json).unwrap();
        let tree = CategoryTree::from(data);
        assert_eq!(tree.len(), 1);
        let main = tree.main("m1").unwrap();
        assert_eq!(main.name, "Vehicles");
        assert_eq!(main.product_count, 4);
        assert_eq!(tree.child("m1", "s1", "c1").unwrap().name, "Sedan");
    }

    #[test]
    fn lookups_are_scoped_to_parent_chain() {
        let tree = tree();
        assert_eq!(tree.sub("m1", "s1").unwrap().name, "Phones");
        assert_eq!(tree.sub("m2", "s1").unwrap().name, "Kitchen");
        assert_eq!(tree.child("m2", "s1", "c1").unwrap().name, "Cutlery");
        assert!(tree.child("m2", "s1", "c2").is_none());
        assert!(tree.sub("m3", "s1").is_none());
        assert!(tree.main("").is_none());
    }

    #[test]
    fn resolve_names_stops_at_first_unknown_level() {
        let tree = tree();
        let names = tree.resolve_names("m2", "s1", "c1");
        assert_eq!(names.main.as_deref(), Some("General Goods"));
        assert_eq!(names.sub.as_deref(), Some("Kitchen"));
        assert_eq!(names.child.as_deref(), Some("Cutlery"));

        let names = tree.resolve_names("m1", "s9", "c1");
        assert_eq!(names.main.as_deref(), Some("Electronics"));
        assert_eq!(names.sub, None);
        assert_eq!(names.child, None);
    }

    #[test]
    fn mains_for_label_ignores_case() {
        let tree = tree();
        let found = tree.mains_for_label("general goods");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "m2");
        assert!(tree.mains_for_label("services").is_empty());
    }

    #[test]
    fn search_main_matches_substring() {
        let tree = tree();
        assert_eq!(tree.search_main("").len(), 3);
        let found = tree.search_main("ELEC");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "m1");
    }
}
