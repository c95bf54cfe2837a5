use contracts::domain::a001_category::{CategoryTree, Selection};
use contracts::domain::a002_product::{
    DocRef, FormMode, GeneralGoods, Product, ProductDraft, ProductListData, ProductListQuery,
    ProductType,
};
use contracts::shared::{Attachment, PageQuery};
use uuid::Uuid;

use crate::shared::data::store::{page_of, Store, Upload};
use crate::shared::error::ApiError;

/// Draft decoded from an uploaded multipart body
pub type UploadedDraft = ProductDraft<Vec<u8>>;

fn opt(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn doc_ref(id: &str, name: Option<String>) -> Option<DocRef> {
    if id.is_empty() {
        return None;
    }
    Some(match name {
        Some(name) => DocRef::Populated {
            id: id.to_string(),
            name: Some(name),
        },
        None => DocRef::Id(id.to_string()),
    })
}

/// Every non-empty level must exist inside its parent
fn check_chain(tree: &CategoryTree, selection: &Selection) -> Result<(), ApiError> {
    let unknown = || ApiError::bad_request("Selected category does not exist");
    let main = tree.main(&selection.main_id).ok_or_else(unknown)?;
    if selection.sub_id.is_empty() {
        return Ok(());
    }
    let sub = main.sub(&selection.sub_id).ok_or_else(unknown)?;
    if !selection.child_id.is_empty() && sub.child(&selection.child_id).is_none() {
        return Err(unknown());
    }
    Ok(())
}

fn file_name_safe(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Keep uploaded bytes and return the public URL
fn save_image(store: &mut Store, image: &Attachment<Vec<u8>>) -> String {
    let name = format!("{}-{}", Uuid::new_v4().simple(), file_name_safe(&image.file_name));
    store.uploads.insert(
        name.clone(),
        Upload {
            content_type: image
                .content_type
                .clone()
                .unwrap_or_else(|| "application/octet-stream".to_string()),
            bytes: image.file.clone(),
        },
    );
    format!("/uploads/{name}")
}

/// Copy form values onto the stored product.
///
/// Store and image are left alone here; the caller decides about them.
fn apply(product: &mut Product, draft: &UploadedDraft, tree: &CategoryTree) {
    let selection = &draft.category;
    let names = tree.resolve_names(&selection.main_id, &selection.sub_id, &selection.child_id);

    product.title = draft.title.trim().to_string();
    product.description = opt(&draft.description);
    product.delivery_policy = opt(&draft.delivery_policy);
    product.main_category = draft.product_type.label().to_string();
    product.category = doc_ref(&selection.main_id, names.main);
    product.sub_category = doc_ref(&selection.sub_id, names.sub);
    product.child_category = doc_ref(&selection.child_id, names.child);
    product.price = opt(&draft.price);
    product.discount_price = opt(&draft.discount_price);
    product.tags = draft.tags.as_slice().to_vec();

    let general = &draft.general;
    product.general_goods = (draft.product_type == ProductType::GeneralGoods).then(|| GeneralGoods {
        stock_quantity: opt(&general.stock_quantity),
        wholesale_price: opt(&general.wholesale_price),
        size: opt(&general.size),
        brand: opt(&general.brand),
        measurement: None,
        color: opt(&general.color).into_iter().collect(),
    });

    let vehicle = (draft.product_type == ProductType::Vehicles).then_some(&draft.vehicle);
    product.vehicle_condition = vehicle.and_then(|v| opt(&v.condition));
    product.registration = vehicle.and_then(|v| opt(&v.registration));
    product.special_features = vehicle.and_then(|v| opt(&v.special_features));
    product.fuel_type = vehicle.and_then(|v| opt(&v.fuel_type));
    product.cc = vehicle.and_then(|v| opt(&v.cc));
    product.transmission = vehicle.and_then(|v| opt(&v.transmission));

    product.service_features = match draft.product_type {
        ProductType::Services => opt(&draft.service.features),
        _ => None,
    };
}

/// Products of a store, optionally narrowed to one main category
pub fn list(store: &Store, query: &ProductListQuery) -> ProductListData {
    let main_category = query
        .main_category
        .as_deref()
        .map(str::trim)
        .filter(|m| !m.is_empty());

    let items: Vec<Product> = store
        .products
        .iter()
        .filter(|p| match query.store_id.as_deref() {
            Some(store_id) => p.store_id() == Some(store_id),
            None => true,
        })
        .filter(|p| match main_category {
            Some(main) => {
                p.main_category.eq_ignore_ascii_case(main)
                    || p.category
                        .as_ref()
                        .and_then(DocRef::name)
                        .is_some_and(|n| n.eq_ignore_ascii_case(main))
            }
            None => true,
        })
        .cloned()
        .collect();

    let (products, pagination) = page_of(&items, PageQuery::new(query.page, query.limit));
    ProductListData {
        products,
        pagination,
    }
}

pub fn get_by_id(store: &Store, id: &str) -> Result<Product, ApiError> {
    store
        .product_index(id)
        .map(|i| store.products[i].clone())
        .ok_or_else(|| ApiError::not_found("Product"))
}

/// Создание товара из формы
pub fn create(store: &mut Store, draft: UploadedDraft) -> Result<Product, ApiError> {
    draft.validate(FormMode::Create)?;
    let tree = store.category_tree();
    check_chain(&tree, &draft.category)?;

    let mut product = Product {
        id: format!("prod-{}", Uuid::new_v4().simple()),
        status: Some("pending".to_string()),
        is_active: Some(true),
        created_at: Some(chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)),
        ..Product::default()
    };
    apply(&mut product, &draft, &tree);
    product.store = draft.store_id.clone().map(DocRef::Id);
    if let Some(image) = &draft.main_image {
        product.main_image = Some(save_image(store, image));
    }

    tracing::info!("Product {} created: {}", product.id, product.title);
    store.products.push(product.clone());
    Ok(product)
}

/// Обновление товара.
///
/// No `mainImage` part keeps the stored image, no `store` part keeps the owner.
pub fn update(store: &mut Store, id: &str, draft: UploadedDraft) -> Result<Product, ApiError> {
    draft.validate(FormMode::Update)?;
    let tree = store.category_tree();
    check_chain(&tree, &draft.category)?;
    let index = store
        .product_index(id)
        .ok_or_else(|| ApiError::not_found("Product"))?;

    let image_url = draft.main_image.as_ref().map(|image| save_image(store, image));

    let product = &mut store.products[index];
    apply(product, &draft, &tree);
    if let Some(store_id) = &draft.store_id {
        product.store = Some(DocRef::Id(store_id.clone()));
    }
    if let Some(url) = image_url {
        product.main_image = Some(url);
    }

    tracing::info!("Product {} updated", id);
    Ok(product.clone())
}

pub fn delete(store: &mut Store, id: &str) -> Result<(), ApiError> {
    let index = store
        .product_index(id)
        .ok_or_else(|| ApiError::not_found("Product"))?;
    let product = store.products.remove(index);
    if let Some(name) = product
        .main_image
        .as_deref()
        .and_then(|url| url.strip_prefix("/uploads/"))
    {
        store.uploads.remove(name);
    }
    tracing::info!("Product {} deleted", id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::seed::{build_store, DEMO_STORE_ID};

    fn draft() -> UploadedDraft {
        let mut draft = UploadedDraft::new(Some(DEMO_STORE_ID.to_string()));
        draft.title = "Steak knives".into();
        draft.category = Selection::new("cat-goods", "sub-kitchen", "child-cutlery");
        draft.price = "25".into();
        draft.general.color = "silver".into();
        draft
    }

    #[test]
    fn create_populates_category_names() {
        let mut store = build_store(true);
        let product = create(&mut store, draft()).unwrap();
        assert_eq!(product.main_category, "general goods");
        assert_eq!(product.sub_category.as_ref().and_then(DocRef::name), Some("Home & Kitchen"));
        assert_eq!(product.child_category.as_ref().and_then(DocRef::name), Some("Cutlery"));
        assert_eq!(product.store_id(), Some(DEMO_STORE_ID));
        assert_eq!(product.general_goods.unwrap().color, vec!["silver".to_string()]);
        assert!(product.vehicle_condition.is_none());
    }

    #[test]
    fn child_from_another_branch_is_rejected() {
        let mut store = build_store(true);
        let mut d = draft();
        d.category.child_id = "child-phones".into();
        let err = create(&mut store, d).unwrap_err();
        assert_eq!(err.to_string(), "Selected category does not exist");
    }

    #[test]
    fn update_without_image_keeps_stored_one() {
        let mut store = build_store(true);
        let mut d = draft();
        d.main_image = Some(Attachment::new("knife.png", b"png".to_vec()).with_content_type("image/png"));
        let created = create(&mut store, d).unwrap();
        let url = created.main_image.clone().unwrap();
        assert_eq!(store.uploads.len(), 1);

        let mut edit = UploadedDraft::from_product(&created);
        edit.store_id = None;
        edit.title = "Steak knife set".into();
        let updated = update(&mut store, &created.id, edit).unwrap();
        assert_eq!(updated.main_image.as_deref(), Some(url.as_str()));
        assert_eq!(updated.store_id(), Some(DEMO_STORE_ID));
        assert_eq!(updated.title, "Steak knife set");

        delete(&mut store, &created.id).unwrap();
        assert!(store.uploads.is_empty());
        assert!(get_by_id(&store, &created.id).is_err());
    }

    #[test]
    fn list_filters_by_main_category_case_insensitively() {
        let store = build_store(true);
        let query = ProductListQuery {
            store_id: Some(DEMO_STORE_ID.into()),
            main_category: Some("Vehicles".into()),
            page: 1,
            limit: 10,
        };
        let data = list(&store, &query);
        assert_eq!(data.products.len(), 1);
        assert_eq!(data.products[0].id, "prod-2");
        assert_eq!(data.pagination.total, 1);

        let other_store = ProductListQuery {
            store_id: Some("store-9".into()),
            ..ProductListQuery::default()
        };
        assert!(list(&store, &other_store).products.is_empty());
    }
}
