//! Product form draft and its multipart binder
//!
//! `serialize` produces the flat payload of `POST /product` and
//! `PUT /product/:id`; `from_payload` reads it back (mock backend, tests).

use super::aggregate::{Product, ProductType};
use super::tags::TagSet;
use crate::domain::a001_category::Selection;
use crate::shared::{Attachment, FormPayload, ValidationError};

/// Multipart part names
pub mod fields {
    pub const STORE: &str = "store";
    pub const TITLE: &str = "title";
    pub const DESCRIPTION: &str = "description";
    pub const DELIVERY_POLICY: &str = "deliveryAndReturnPolicy";
    pub const CATEGORY: &str = "category";
    pub const SUB_CATEGORY: &str = "subCategory";
    pub const CHILD_CATEGORY: &str = "childCategory";
    pub const MAIN_CATEGORY: &str = "mainCategory";
    pub const STOCK_QUANTITY: &str = "stockQuantity";
    pub const PRICE: &str = "price";
    pub const DISCOUNT_PRICE: &str = "discountPrice";
    pub const WHOLESALE_PRICE: &str = "wholesalePrice";
    pub const SIZE: &str = "size";
    pub const BRAND: &str = "brand";
    pub const MEASUREMENT: &str = "measurement";
    pub const COLOR: &str = "color";
    pub const VEHICLE_CONDITION: &str = "vehicleCondition";
    pub const REGISTRATION: &str = "registration";
    pub const SPECIAL_FEATURES: &str = "specialFeatures";
    pub const FUEL_TYPE: &str = "fuelType";
    pub const CC: &str = "cc";
    pub const TRANSMISSION: &str = "transmission";
    pub const SERVICE_FEATURES: &str = "serviceFeatures";
    pub const TAGS: &str = "tags";
    pub const MAIN_IMAGE: &str = "mainImage";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Update,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneralGoodsFields {
    pub stock_quantity: String,
    pub wholesale_price: String,
    pub size: String,
    pub brand: String,
    pub color: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VehicleFields {
    pub condition: String,
    pub registration: String,
    pub special_features: String,
    pub fuel_type: String,
    pub cc: String,
    pub transmission: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceFields {
    pub features: String,
}

/// In-progress product form state.
///
/// `F` is the file handle type of the chosen image.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft<F> {
    pub store_id: Option<String>,
    pub product_type: ProductType,
    pub title: String,
    pub description: String,
    pub delivery_policy: String,
    pub category: Selection,
    pub price: String,
    pub discount_price: String,
    pub tags: TagSet,
    pub general: GeneralGoodsFields,
    pub vehicle: VehicleFields,
    pub service: ServiceFields,
    /// Newly chosen file; `None` keeps the stored image
    pub main_image: Option<Attachment<F>>,
    /// Stored image URL, display only
    pub existing_image: Option<String>,
}

impl<F> Default for ProductDraft<F> {
    fn default() -> Self {
        Self {
            store_id: None,
            product_type: ProductType::default(),
            title: String::new(),
            description: String::new(),
            delivery_policy: String::new(),
            category: Selection::default(),
            price: String::new(),
            discount_price: String::new(),
            tags: TagSet::default(),
            general: GeneralGoodsFields::default(),
            vehicle: VehicleFields::default(),
            service: ServiceFields::default(),
            main_image: None,
            existing_image: None,
        }
    }
}

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn or_zero(value: &str) -> String {
    if blank(value) {
        "0".to_string()
    } else {
        value.trim().to_string()
    }
}

/// Plain decimal: digits with at most one dot, no sign or exponent
fn is_decimal(value: &str) -> bool {
    let mut dots = 0;
    let mut digits = 0;
    for c in value.chars() {
        match c {
            '0'..='9' => digits += 1,
            '.' => dots += 1,
            _ => return false,
        }
    }
    digits > 0 && dots <= 1
}

fn check_amount(label: &str, value: &str) -> Result<(), ValidationError> {
    if blank(value) || is_decimal(value.trim()) {
        return Ok(());
    }
    Err(ValidationError::invalid(format!(
        "{label} must be a non-negative number"
    )))
}

impl<F> ProductDraft<F> {
    pub fn new(store_id: Option<String>) -> Self {
        Self {
            store_id,
            ..Self::default()
        }
    }

    /// Switch the product type tab; the category chain belongs to the old tab
    pub fn set_product_type(&mut self, product_type: ProductType) {
        if self.product_type != product_type {
            self.product_type = product_type;
            self.category = Selection::default();
        }
    }

    pub fn validate(&self, mode: FormMode) -> Result<(), ValidationError> {
        let mut missing = Vec::new();
        if blank(&self.title) {
            missing.push(fields::TITLE);
        }
        if self.category.main_id.is_empty() {
            missing.push(fields::CATEGORY);
        }
        if mode == FormMode::Create && self.category.sub_id.is_empty() {
            missing.push(fields::SUB_CATEGORY);
        }
        if self.category.child_id.is_empty() {
            missing.push(fields::CHILD_CATEGORY);
        }
        if !missing.is_empty() {
            return Err(ValidationError::MissingFields(missing));
        }

        if mode == FormMode::Create && self.store_id.as_deref().map_or(true, blank) {
            return Err(ValidationError::invalid("Store ID is missing. Please re-login."));
        }

        check_amount("Price", &self.price)?;
        check_amount("Discount price", &self.discount_price)?;
        check_amount("Stock quantity", &self.general.stock_quantity)?;
        check_amount("Wholesale price", &self.general.wholesale_price)?;
        Ok(())
    }

    /// Build the multipart payload. Call [`validate`](Self::validate) first.
    pub fn serialize(&self) -> FormPayload<F>
    where
        F: Clone,
    {
        let mut form = FormPayload::new();
        if let Some(store) = self.store_id.as_deref().filter(|s| !blank(s)) {
            form.text(fields::STORE, store);
        }
        form.text(fields::TITLE, self.title.as_str())
            .text(fields::DESCRIPTION, self.description.as_str())
            .text(fields::DELIVERY_POLICY, self.delivery_policy.as_str())
            .text(fields::CATEGORY, self.category.main_id.as_str())
            .text(fields::SUB_CATEGORY, self.category.sub_id.as_str())
            .text(fields::CHILD_CATEGORY, self.category.child_id.as_str())
            .text(fields::MAIN_CATEGORY, self.product_type.label());

        form.text(fields::STOCK_QUANTITY, self.general.stock_quantity.trim())
            .text(fields::PRICE, or_zero(&self.price))
            .text(fields::DISCOUNT_PRICE, or_zero(&self.discount_price))
            .text(fields::WHOLESALE_PRICE, or_zero(&self.general.wholesale_price));

        form.text(fields::SIZE, self.general.size.as_str())
            .text(fields::BRAND, self.general.brand.as_str())
            .text(fields::MEASUREMENT, "")
            .text(fields::COLOR, self.general.color.as_str());

        match self.product_type {
            ProductType::Vehicles => {
                form.text(fields::VEHICLE_CONDITION, self.vehicle.condition.as_str())
                    .text(fields::REGISTRATION, self.vehicle.registration.as_str())
                    .text(fields::SPECIAL_FEATURES, self.vehicle.special_features.as_str())
                    .text(fields::FUEL_TYPE, self.vehicle.fuel_type.as_str())
                    .text(fields::CC, self.vehicle.cc.as_str())
                    .text(fields::TRANSMISSION, self.vehicle.transmission.as_str());
            }
            ProductType::Services => {
                form.text(fields::SERVICE_FEATURES, self.service.features.as_str());
            }
            ProductType::GeneralGoods => {}
        }

        if !self.tags.is_empty() {
            form.text(fields::TAGS, self.tags.join());
        }

        if let Some(image) = &self.main_image {
            form.file(fields::MAIN_IMAGE, image.clone());
        }
        form
    }

    /// Read a payload produced by [`serialize`](Self::serialize)
    pub fn from_payload(payload: &FormPayload<F>) -> Self
    where
        F: Clone,
    {
        let text = |name: &str| payload.get_text(name).unwrap_or_default().to_string();
        let product_type = ProductType::from_label(&text(fields::MAIN_CATEGORY));

        let mut draft = Self {
            store_id: payload
                .get_text(fields::STORE)
                .filter(|s| !blank(s))
                .map(str::to_string),
            product_type,
            title: text(fields::TITLE),
            description: text(fields::DESCRIPTION),
            delivery_policy: text(fields::DELIVERY_POLICY),
            category: Selection::new(
                text(fields::CATEGORY),
                text(fields::SUB_CATEGORY),
                text(fields::CHILD_CATEGORY),
            ),
            price: text(fields::PRICE),
            discount_price: text(fields::DISCOUNT_PRICE),
            tags: TagSet::parse(&text(fields::TAGS)),
            general: GeneralGoodsFields {
                stock_quantity: text(fields::STOCK_QUANTITY),
                wholesale_price: text(fields::WHOLESALE_PRICE),
                size: text(fields::SIZE),
                brand: text(fields::BRAND),
                color: text(fields::COLOR),
            },
            main_image: payload.get_file(fields::MAIN_IMAGE).cloned(),
            ..Self::default()
        };

        match product_type {
            ProductType::Vehicles => {
                draft.vehicle = VehicleFields {
                    condition: text(fields::VEHICLE_CONDITION),
                    registration: text(fields::REGISTRATION),
                    special_features: text(fields::SPECIAL_FEATURES),
                    fuel_type: text(fields::FUEL_TYPE),
                    cc: text(fields::CC),
                    transmission: text(fields::TRANSMISSION),
                };
            }
            ProductType::Services => {
                draft.service.features = text(fields::SERVICE_FEATURES);
            }
            ProductType::GeneralGoods => {}
        }
        draft
    }

    /// Hydrate the edit form from a stored product
    pub fn from_product(product: &Product) -> Self {
        let goods = product.general_goods.clone().unwrap_or_default();
        let owned = |v: &Option<String>| v.clone().unwrap_or_default();
        Self {
            store_id: product.store_id().map(str::to_string),
            product_type: product.product_type(),
            title: product.title.clone(),
            description: owned(&product.description),
            delivery_policy: owned(&product.delivery_policy),
            category: product.category_selection(),
            price: owned(&product.price),
            discount_price: owned(&product.discount_price),
            tags: product.tags.iter().collect(),
            general: GeneralGoodsFields {
                stock_quantity: owned(&goods.stock_quantity),
                wholesale_price: owned(&goods.wholesale_price),
                size: owned(&goods.size),
                brand: owned(&goods.brand),
                color: goods.color.first().cloned().unwrap_or_default(),
            },
            vehicle: VehicleFields {
                condition: owned(&product.vehicle_condition),
                registration: owned(&product.registration),
                special_features: owned(&product.special_features),
                fuel_type: owned(&product.fuel_type),
                cc: owned(&product.cc),
                transmission: owned(&product.transmission),
            },
            service: ServiceFields {
                features: owned(&product.service_features),
            },
            main_image: None,
            existing_image: product.display_image().map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::PartValue;

    type Draft = ProductDraft<Vec<u8>>;

    fn filled() -> Draft {
        let mut draft = Draft::new(Some("store-1".into()));
        draft.title = "Pixel 9".into();
        draft.description = "Phone".into();
        draft.category = Selection::new("m1", "s1", "c1");
        draft.price = "499.99".into();
        draft.tags.add("android");
        draft.tags.add("5g");
        draft.general.brand = "Google".into();
        draft
    }

    fn names(form: &FormPayload<Vec<u8>>) -> Vec<&str> {
        form.parts().iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn empty_title_fails_citing_title() {
        let mut draft = filled();
        draft.title = "   ".into();
        let err = draft.validate(FormMode::Create).unwrap_err();
        assert_eq!(err.missing_fields(), &[fields::TITLE]);
    }

    #[test]
    fn missing_chain_lists_every_field() {
        let draft = Draft::new(Some("store-1".into()));
        let err = draft.validate(FormMode::Create).unwrap_err();
        assert_eq!(
            err.missing_fields(),
            &["title", "category", "subCategory", "childCategory"]
        );

        let mut draft = filled();
        draft.category = Selection::new("m1", "", "c1");
        assert!(draft.validate(FormMode::Update).is_ok());
        assert!(draft.validate(FormMode::Create).is_err());
    }

    #[test]
    fn store_id_required_on_create_only() {
        let mut draft = filled();
        draft.store_id = None;
        let err = draft.validate(FormMode::Create).unwrap_err();
        assert_eq!(err.to_string(), "Store ID is missing. Please re-login.");
        assert!(draft.validate(FormMode::Update).is_ok());
    }

    #[test]
    fn amounts_must_be_non_negative_numbers() {
        let mut draft = filled();
        draft.discount_price = "-1".into();
        assert_eq!(
            draft.validate(FormMode::Update).unwrap_err().to_string(),
            "Discount price must be a non-negative number"
        );
        draft.discount_price = "abc".into();
        assert!(draft.validate(FormMode::Update).is_err());
        draft.discount_price = String::new();
        draft.general.stock_quantity = "12".into();
        assert!(draft.validate(FormMode::Update).is_ok());
    }

    #[test]
    fn amounts_reject_exponent_and_sign_forms() {
        let mut draft = filled();
        for bad in ["1e3", "2E-1", "+5", "1.2.3", ".", "inf"] {
            draft.price = bad.into();
            assert!(draft.validate(FormMode::Update).is_err(), "{bad} accepted");
        }
        draft.price = " 12.50 ".into();
        assert!(draft.validate(FormMode::Update).is_ok());
        draft.price = ".5".into();
        assert!(draft.validate(FormMode::Update).is_ok());
    }

    #[test]
    fn general_goods_payload() {
        let form = filled().serialize();
        assert_eq!(
            names(&form),
            vec![
                "store", "title", "description", "deliveryAndReturnPolicy", "category", "subCategory",
                "childCategory", "mainCategory", "stockQuantity", "price", "discountPrice",
                "wholesalePrice", "size", "brand", "measurement", "color", "tags",
            ]
        );
        assert_eq!(form.get_text(fields::MAIN_CATEGORY), Some("general goods"));
        assert_eq!(form.get_text(fields::CATEGORY), Some("m1"));
        assert_eq!(form.get_text(fields::PRICE), Some("499.99"));
        assert_eq!(form.get_text(fields::DISCOUNT_PRICE), Some("0"));
        assert_eq!(form.get_text(fields::WHOLESALE_PRICE), Some("0"));
        assert_eq!(form.get_text(fields::STOCK_QUANTITY), Some(""));
        assert_eq!(form.get_text(fields::TAGS), Some("android,5g"));
        assert!(!form.contains(fields::MAIN_IMAGE));
    }

    #[test]
    fn type_specific_parts() {
        let mut draft = filled();
        draft.set_product_type(ProductType::Vehicles);
        assert!(draft.category.is_empty());
        draft.category = Selection::new("mv", "sv", "cv");
        draft.vehicle.fuel_type = "diesel".into();
        let form = draft.serialize();
        assert_eq!(form.get_text(fields::MAIN_CATEGORY), Some("vehicles"));
        assert_eq!(form.get_text(fields::FUEL_TYPE), Some("diesel"));
        assert!(form.contains(fields::TRANSMISSION));
        assert!(!form.contains(fields::SERVICE_FEATURES));

        draft.set_product_type(ProductType::Services);
        draft.service.features = "24/7".into();
        let form = draft.serialize();
        assert_eq!(form.get_text(fields::SERVICE_FEATURES), Some("24/7"));
        assert!(!form.contains(fields::FUEL_TYPE));
    }

    #[test]
    fn empty_tags_are_omitted_and_image_only_when_chosen() {
        let mut draft = filled();
        draft.tags.clear();
        draft.existing_image = Some("/uploads/old.png".into());
        let form = draft.serialize();
        assert!(!form.contains(fields::TAGS));
        assert!(!form.contains(fields::MAIN_IMAGE));

        draft.main_image = Some(Attachment::new("new.png", vec![7, 7]));
        let form = draft.serialize();
        let last = form.parts().last().unwrap();
        assert_eq!(last.name, fields::MAIN_IMAGE);
        assert!(matches!(&last.value, PartValue::File(a) if a.file == vec![7, 7]));
    }

    #[test]
    fn serialize_hydrate_serialize_is_stable() {
        let mut vehicle = filled();
        vehicle.set_product_type(ProductType::Vehicles);
        vehicle.category = Selection::new("mv", "sv", "cv");
        vehicle.vehicle.cc = "1600".into();
        vehicle.general.stock_quantity = " 3 ".into();

        let mut service = filled();
        service.set_product_type(ProductType::Services);
        service.store_id = None;
        service.service.features = "On-site".into();

        for draft in [filled(), vehicle, service] {
            let mut with_image = draft.clone();
            with_image.main_image = Some(Attachment::new("a.png", vec![1]));

            let first = with_image.serialize();
            let echoed = Draft::from_payload(&first);
            let second = echoed.serialize();
            assert_eq!(first.text_parts(), second.text_parts());
            assert_eq!(echoed.main_image.map(|a| a.file_name), Some("a.png".to_string()));
        }
    }

    #[test]
    fn hydrate_from_product() {
        let json = r#"{"_id":"p1","title":"Van","mainCategory":"vehicles",
            "category":{"_id":"mv","mainCategory":"Vehicles"},"subCategory":"sv","childCategory":"cv",
            "price":12000,"tags":["used"],"fuelType":"petrol","mainImage":"/uploads/van.png",
            "store":"st9"}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        let draft: Draft = ProductDraft::from_product(&product);
        assert_eq!(draft.product_type, ProductType::Vehicles);
        assert_eq!(draft.category, Selection::new("mv", "sv", "cv"));
        assert_eq!(draft.price, "12000");
        assert_eq!(draft.vehicle.fuel_type, "petrol");
        assert_eq!(draft.store_id.as_deref(), Some("st9"));
        assert_eq!(draft.existing_image.as_deref(), Some("/uploads/van.png"));
        assert!(draft.main_image.is_none());
        assert!(draft.validate(FormMode::Update).is_ok());
        assert!(!draft.serialize().contains(fields::MAIN_IMAGE));
    }
}
