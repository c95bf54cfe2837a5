use crate::domain::a001_category::{CategoryTree, ChainNames, FilterableItem, Selection};
use crate::shared::loose::{number_or_string, opt_string, string_list};
use crate::shared::Pagination;
use serde::{Deserialize, Serialize};

// ============================================================================
// Product type
// ============================================================================

/// Product type tab. Its label doubles as the `mainCategory` string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductType {
    #[default]
    GeneralGoods,
    Vehicles,
    Services,
}

impl ProductType {
    pub const ALL: [ProductType; 3] = [Self::GeneralGoods, Self::Vehicles, Self::Services];

    /// `mainCategory` value sent to the backend
    pub fn label(&self) -> &'static str {
        match self {
            Self::GeneralGoods => "general goods",
            Self::Vehicles => "vehicles",
            Self::Services => "services",
        }
    }

    /// Tab caption
    pub fn title(&self) -> &'static str {
        match self {
            Self::GeneralGoods => "General Goods",
            Self::Vehicles => "Vehicles",
            Self::Services => "Services",
        }
    }

    /// Stable key for `<select>`/tab values
    pub fn key(&self) -> &'static str {
        match self {
            Self::GeneralGoods => "generalgoods",
            Self::Vehicles => "vehicles",
            Self::Services => "services",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.key() == key)
    }

    /// Anything but "vehicles"/"services" is general goods
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "vehicles" => Self::Vehicles,
            "services" => Self::Services,
            _ => Self::GeneralGoods,
        }
    }
}

// ============================================================================
// References
// ============================================================================

/// A reference field that comes either as a bare id or as a populated document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DocRef {
    Id(String),
    Populated {
        #[serde(rename = "_id")]
        id: String,
        #[serde(default, alias = "mainCategory", alias = "storeName", skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    },
}

impl DocRef {
    pub fn id(&self) -> &str {
        match self {
            Self::Id(id) => id,
            Self::Populated { id, .. } => id,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Id(_) => None,
            Self::Populated { name, .. } => name.as_deref().filter(|n| !n.is_empty()),
        }
    }
}

fn ref_id(r: &Option<DocRef>) -> String {
    r.as_ref().map(|r| r.id().to_string()).unwrap_or_default()
}

// ============================================================================
// Product
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneralGoods {
    #[serde(rename = "stockQuantity", default, deserialize_with = "opt_string", serialize_with = "number_or_string")]
    pub stock_quantity: Option<String>,
    #[serde(rename = "wholesalePrice", default, deserialize_with = "opt_string", serialize_with = "number_or_string")]
    pub wholesale_price: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub size: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub brand: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub measurement: Option<String>,
    #[serde(default, deserialize_with = "string_list")]
    pub color: Vec<String>,
}

/// Product as returned by the backend (list items and `GET /product/:id`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, deserialize_with = "opt_string")]
    pub description: Option<String>,
    #[serde(rename = "deliveryAndReturnPolicy", default, deserialize_with = "opt_string")]
    pub delivery_policy: Option<String>,

    /// Product type label ("general goods", "vehicles", "services")
    #[serde(rename = "mainCategory", default)]
    pub main_category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<DocRef>,
    #[serde(rename = "subCategory", default, skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<DocRef>,
    #[serde(rename = "childCategory", default, skip_serializing_if = "Option::is_none")]
    pub child_category: Option<DocRef>,

    #[serde(default, deserialize_with = "opt_string", serialize_with = "number_or_string")]
    pub price: Option<String>,
    #[serde(rename = "discountPrice", default, deserialize_with = "opt_string", serialize_with = "number_or_string")]
    pub discount_price: Option<String>,
    #[serde(default, deserialize_with = "string_list")]
    pub tags: Vec<String>,

    #[serde(rename = "generalGoods", default, skip_serializing_if = "Option::is_none")]
    pub general_goods: Option<GeneralGoods>,

    #[serde(rename = "vehicleCondition", default, deserialize_with = "opt_string", skip_serializing_if = "Option::is_none")]
    pub vehicle_condition: Option<String>,
    #[serde(default, deserialize_with = "opt_string", skip_serializing_if = "Option::is_none")]
    pub registration: Option<String>,
    #[serde(rename = "specialFeatures", default, deserialize_with = "opt_string", skip_serializing_if = "Option::is_none")]
    pub special_features: Option<String>,
    #[serde(rename = "fuelType", default, deserialize_with = "opt_string", skip_serializing_if = "Option::is_none")]
    pub fuel_type: Option<String>,
    #[serde(default, deserialize_with = "opt_string", skip_serializing_if = "Option::is_none")]
    pub cc: Option<String>,
    #[serde(default, deserialize_with = "opt_string", skip_serializing_if = "Option::is_none")]
    pub transmission: Option<String>,
    #[serde(rename = "serviceFeatures", default, deserialize_with = "opt_string", skip_serializing_if = "Option::is_none")]
    pub service_features: Option<String>,

    #[serde(rename = "mainImage", default, deserialize_with = "opt_string", skip_serializing_if = "Option::is_none")]
    pub main_image: Option<String>,
    #[serde(default, deserialize_with = "opt_string", skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store: Option<DocRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(rename = "isActive", default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Product {
    pub fn product_type(&self) -> ProductType {
        ProductType::from_label(&self.main_category)
    }

    /// Stored image: `mainImage`, else legacy `photo`
    pub fn display_image(&self) -> Option<&str> {
        self.main_image.as_deref().or(self.photo.as_deref())
    }

    pub fn store_id(&self) -> Option<&str> {
        self.store.as_ref().map(DocRef::id)
    }

    pub fn category_selection(&self) -> Selection {
        Selection::new(
            ref_id(&self.category),
            ref_id(&self.sub_category),
            ref_id(&self.child_category),
        )
    }

    /// Names of the category chain.
    ///
    /// Names populated on the product win; missing ones are looked up in the
    /// tree, each level only inside the resolved parent.
    pub fn category_names(&self, tree: &CategoryTree) -> ChainNames {
        let selection = self.category_selection();
        let resolved = tree.resolve_names(&selection.main_id, &selection.sub_id, &selection.child_id);
        let populated = |r: &Option<DocRef>| r.as_ref().and_then(DocRef::name).map(str::to_string);
        ChainNames {
            main: populated(&self.category).or(resolved.main),
            sub: populated(&self.sub_category).or(resolved.sub),
            child: populated(&self.child_category).or(resolved.child),
        }
    }
}

impl FilterableItem for Product {
    fn main_label(&self) -> &str {
        &self.main_category
    }

    fn sub_name(&self) -> Option<&str> {
        self.sub_category.as_ref().and_then(DocRef::name)
    }

    fn child_name(&self) -> Option<&str> {
        self.child_category.as_ref().and_then(DocRef::name)
    }

    fn title(&self) -> &str {
        &self.title
    }
}

/// `data` of `GET /vendor/get-all-products`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductListData {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub pagination: Pagination,
}

/// Query of `GET /vendor/get-all-products`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_category: Option<String>,
    #[serde(default = "first_page")]
    pub page: usize,
    #[serde(default = "page_limit")]
    pub limit: usize,
}

fn first_page() -> usize {
    1
}

fn page_limit() -> usize {
    10
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_category::aggregate::fixtures::tree;

    const DETAIL: &str = r#"{
        "_id": "p1",
        "title": "Fork set",
        "mainCategory": "general goods",
        "category": {"_id": "m2", "mainCategory": "General Goods"},
        "subCategory": {"_id": "s1", "name": "Kitchen"},
        "childCategory": "c1",
        "price": 20,
        "discountPrice": null,
        "tags": ["steel", "kitchen"],
        "generalGoods": {"stockQuantity": "5", "wholesalePrice": 15.5, "color": ["silver"]},
        "photo": "/uploads/fork.png",
        "store": {"_id": "st1"}
    }"#;

    #[test]
    fn deserializes_mixed_reference_shapes() {
        let p: Product = serde_json::from_str(DETAIL).unwrap();
        assert_eq!(p.category_selection(), Selection::new("m2", "s1", "c1"));
        assert_eq!(p.price.as_deref(), Some("20"));
        assert_eq!(p.discount_price, None);
        assert_eq!(p.display_image(), Some("/uploads/fork.png"));
        assert_eq!(p.store_id(), Some("st1"));
        assert_eq!(p.product_type(), ProductType::GeneralGoods);
        let goods = p.general_goods.unwrap();
        assert_eq!(goods.wholesale_price.as_deref(), Some("15.5"));
        assert_eq!(goods.color, vec!["silver"]);
    }

    #[test]
    fn category_names_prefer_populated_then_chain_scoped_lookup() {
        let p: Product = serde_json::from_str(DETAIL).unwrap();
        let names = p.category_names(&tree());
        assert_eq!(names.main.as_deref(), Some("General Goods"));
        assert_eq!(names.sub.as_deref(), Some("Kitchen"));
        // c1 exists under m1/s1 too; the m2/s1 chain must win
        assert_eq!(names.child.as_deref(), Some("Cutlery"));
    }

    #[test]
    fn unresolvable_names_stay_empty() {
        let p = Product {
            category: Some(DocRef::Id("m9".into())),
            sub_category: Some(DocRef::Id("s1".into())),
            child_category: Some(DocRef::Id("c1".into())),
            ..Product::default()
        };
        assert_eq!(p.category_names(&tree()), ChainNames::default());
    }

    #[test]
    fn product_type_labels() {
        assert_eq!(ProductType::from_label("Vehicles"), ProductType::Vehicles);
        assert_eq!(ProductType::from_label(" services "), ProductType::Services);
        assert_eq!(ProductType::from_label("anything"), ProductType::GeneralGoods);
        for t in ProductType::ALL {
            assert_eq!(ProductType::from_label(t.label()), t);
            assert_eq!(ProductType::from_key(t.key()), Some(t));
        }
    }

    #[test]
    fn list_query_is_camel_case() {
        let q = ProductListQuery {
            store_id: Some("st1".into()),
            main_category: Some("vehicles".into()),
            page: 2,
            limit: 10,
        };
        let json = serde_json::to_value(&q).unwrap();
        assert_eq!(json["storeId"], "st1");
        assert_eq!(json["mainCategory"], "vehicles");
    }
}
