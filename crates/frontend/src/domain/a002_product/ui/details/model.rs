use contracts::domain::a002_product::{FormMode, Product, ProductDraft};
use contracts::shared::Attachment;
use wasm_bindgen::JsValue;

use crate::shared::http::{self, BrowserForm, Verb};

/// Draft holding a file picked in the browser
pub type BrowserDraft = ProductDraft<web_sys::File>;

/// Wrap a picked file for the multipart body
pub fn attachment(file: web_sys::File) -> Attachment<web_sys::File> {
    let content_type = file.type_();
    let attachment = Attachment::new(file.name(), file);
    if content_type.is_empty() {
        attachment
    } else {
        attachment.with_content_type(content_type)
    }
}

/// Object URL for the local preview; has to be revoked
pub fn preview_url(file: &web_sys::File) -> Result<String, JsValue> {
    web_sys::Url::create_object_url_with_blob(file)
}

pub fn revoke_preview(url: &str) {
    if let Err(e) = web_sys::Url::revoke_object_url(url) {
        log::warn!("cannot revoke preview url: {e:?}");
    }
}

/// POST for a new product, PUT for an existing one
pub async fn save(mode: FormMode, id: Option<String>, payload: BrowserForm) -> Result<Product, String> {
    let result = match (mode, id) {
        (FormMode::Update, Some(id)) => {
            http::send_form::<Product>(Verb::Put, &format!("/product/{}", urlencoding::encode(&id)), &payload).await
        }
        _ => http::send_form::<Product>(Verb::Post, "/product", &payload).await,
    };
    let fallback = match mode {
        FormMode::Create => "Failed to create product",
        FormMode::Update => "Failed to update product",
    };
    result.map_err(|e| e.message_or(fallback))
}
