use axum::extract::{Json, Multipart, Path, Query, State};
use contracts::domain::a002_product::{Product, ProductListData, ProductListQuery};
use contracts::shared::{ApiResponse, Attachment, FormPayload};
use serde_json::Value;

use crate::domain::a002_product::service::{self, UploadedDraft};
use crate::shared::data::store::AppState;
use crate::shared::error::{done, ApiError, ApiResult};

/// Read the multipart body part by part.
///
/// A file part without a file name and without bytes is an empty file
/// input and is skipped.
async fn read_form(mut multipart: Multipart) -> Result<FormPayload<Vec<u8>>, ApiError> {
    let mut payload = FormPayload::new();
    while let Some(field) = multipart.next_field().await? {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        match field.file_name().map(str::to_string) {
            Some(file_name) => {
                let content_type = field.content_type().map(str::to_string);
                let bytes = field.bytes().await?;
                if file_name.is_empty() && bytes.is_empty() {
                    continue;
                }
                let mut attachment = Attachment::new(file_name, bytes.to_vec());
                attachment.content_type = content_type;
                payload.file(&name, attachment);
            }
            None => {
                let text = field.text().await?;
                payload.text(&name, text);
            }
        }
    }
    Ok(payload)
}

/// GET /vendor/get-all-products
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ProductListQuery>,
) -> ApiResult<ProductListData> {
    let store = state.store.read().await;
    Ok(Json(ApiResponse::ok(service::list(&store, &query))))
}

/// GET /product/:id
pub async fn get_by_id(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Product> {
    let store = state.store.read().await;
    Ok(Json(ApiResponse::ok(service::get_by_id(&store, &id)?)))
}

/// POST /product (multipart)
pub async fn create(State(state): State<AppState>, multipart: Multipart) -> ApiResult<Product> {
    let payload = read_form(multipart).await?;
    let draft = UploadedDraft::from_payload(&payload);
    let mut store = state.store.write().await;
    let product = service::create(&mut store, draft)?;
    Ok(Json(ApiResponse::ok_with_message(product, "Product created successfully")))
}

/// PUT /product/:id (multipart)
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    multipart: Multipart,
) -> ApiResult<Product> {
    let payload = read_form(multipart).await?;
    let draft = UploadedDraft::from_payload(&payload);
    let mut store = state.store.write().await;
    let product = service::update(&mut store, &id, draft)?;
    Ok(Json(ApiResponse::ok_with_message(product, "Product updated successfully")))
}

/// DELETE /product/:id
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Value> {
    let mut store = state.store.write().await;
    service::delete(&mut store, &id)?;
    done("Product deleted successfully")
}

#[cfg(test)]
mod tests {
    use crate::routes::test_support::{app, call, login_token, send_form};
    use axum::http::{Method, StatusCode};
    use contracts::domain::a001_category::Selection;
    use contracts::domain::a002_product::{fields, ProductDraft, ProductType};
    use contracts::shared::Attachment;

    fn draft() -> ProductDraft<Vec<u8>> {
        let mut draft = ProductDraft::new(Some("store-1".to_string()));
        draft.set_product_type(ProductType::Vehicles);
        draft.title = "Family sedan".into();
        draft.category = Selection::new("cat-vehicles", "sub-cars", "child-sedan");
        draft.price = "12000".into();
        draft.vehicle.fuel_type = "diesel".into();
        draft.tags.add("family, automatic");
        draft.main_image =
            Some(Attachment::new("sedan.jpg", vec![0xFF, 0xD8, 0xFF]).with_content_type("image/jpeg"));
        draft
    }

    #[tokio::test]
    async fn list_filters_by_store_and_main_category() {
        let (router, _) = app(true);
        let token = login_token(&router).await;

        let (status, body) = call(
            &router,
            Method::GET,
            "/vendor/get-all-products?storeId=store-1&page=1&limit=10",
            Some(&token),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["products"].as_array().unwrap().len(), 2);
        assert_eq!(body["data"]["pagination"]["totalPages"], 1);

        let (_, body) = call(
            &router,
            Method::GET,
            "/vendor/get-all-products?storeId=store-1&mainCategory=general%20goods",
            Some(&token),
            None,
        )
        .await;
        let products = body["data"]["products"].as_array().unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0]["title"], "Pixel 9");
    }

    #[tokio::test]
    async fn edit_without_new_image_keeps_stored_image() {
        let (router, _) = app(true);
        let token = login_token(&router).await;

        let (status, body) =
            send_form(&router, Method::POST, "/product", &token, &draft().serialize()).await;
        assert_eq!(status, StatusCode::OK, "{body}");
        let id = body["data"]["_id"].as_str().unwrap().to_string();
        let image = body["data"]["mainImage"].as_str().unwrap().to_string();
        assert_eq!(body["data"]["childCategory"]["name"], "Sedan");
        assert_eq!(body["data"]["tags"][1], "automatic");

        let (status, _) = call(&router, Method::GET, &image, None, None).await;
        assert_eq!(status, StatusCode::OK);

        let mut edit = draft();
        edit.main_image = None;
        edit.title = "Family sedan, low mileage".into();
        let payload = edit.serialize();
        assert!(!payload.contains(fields::MAIN_IMAGE));

        let (status, body) =
            send_form(&router, Method::PUT, &format!("/product/{id}"), &token, &payload).await;
        assert_eq!(status, StatusCode::OK, "{body}");
        assert_eq!(body["data"]["mainImage"], image.as_str());
        assert_eq!(body["data"]["title"], "Family sedan, low mileage");

        let (status, _) =
            call(&router, Method::DELETE, &format!("/product/{id}"), Some(&token), None).await;
        assert_eq!(status, StatusCode::OK);
        let (status, body) =
            call(&router, Method::GET, &format!("/product/{id}"), Some(&token), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Product not found");
    }

    #[tokio::test]
    async fn create_reports_missing_fields() {
        let (router, _) = app(true);
        let token = login_token(&router).await;

        let mut bad = draft();
        bad.title = "  ".into();
        let (status, body) =
            send_form(&router, Method::POST, "/product", &token, &bad.serialize()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Please fill in all required fields: title");
    }
}
