//! HTTP client for the vendor backend
//!
//! Every call attaches the bearer token of the current session and unwraps
//! the `{status, message, data}` envelope. A 401 ends the session.

use contracts::shared::{ApiResponse, FormPayload, PartValue, RequestError};
use gloo_net::http::{Request, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::JsValue;

use super::api_utils::api_url;
use crate::system::auth::storage;

/// Form payload carrying browser files
pub type BrowserForm = FormPayload<web_sys::File>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

/// Unwrapped envelope
struct Reply<T> {
    data: Option<T>,
    message: Option<String>,
}

fn builder(verb: Verb, path: &str) -> RequestBuilder {
    let url = api_url(path);
    let builder = match verb {
        Verb::Get => Request::get(&url),
        Verb::Post => Request::post(&url),
        Verb::Put => Request::put(&url),
        Verb::Patch => Request::patch(&url),
        Verb::Delete => Request::delete(&url),
    };
    match storage::access_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
        None => builder,
    }
}

fn transport(e: impl std::fmt::Display) -> RequestError {
    RequestError::Transport(e.to_string())
}

fn js_error(e: JsValue) -> RequestError {
    RequestError::Transport(format!("{e:?}"))
}

/// Session is gone: forget it and go to the login page
fn expire_session() {
    storage::clear_session();
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href("/auth/login");
    }
}

async fn fetch<T: DeserializeOwned>(
    request: Result<Request, gloo_net::Error>,
) -> Result<Reply<T>, RequestError> {
    let request = request.map_err(transport)?;
    let response = request.send().await.map_err(transport)?;
    let status = response.status();
    let body = response.text().await.map_err(transport)?;

    if !response.ok() {
        let err = RequestError::from_response(status, &body);
        if err == RequestError::Unauthorized {
            log::warn!("session rejected by backend");
            expire_session();
        }
        return Err(err);
    }

    let envelope: ApiResponse<T> =
        serde_json::from_str(&body).map_err(|e| RequestError::Decode(e.to_string()))?;
    let message = envelope.message.clone();
    let data = envelope.into_optional(status)?;
    Ok(Reply { data, message })
}

fn required<T>(reply: Reply<T>) -> Result<T, RequestError> {
    reply
        .data
        .ok_or_else(|| RequestError::Decode("response has no data".into()))
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, RequestError> {
    required(fetch(builder(Verb::Get, path).build()).await?)
}

pub async fn send_json<B: Serialize, T: DeserializeOwned>(
    verb: Verb,
    path: &str,
    body: &B,
) -> Result<T, RequestError> {
    required(fetch(builder(verb, path).json(body)).await?)
}

/// JSON request whose response carries no `data`; returns the backend message
pub async fn send_action<B: Serialize>(
    verb: Verb,
    path: &str,
    body: &B,
) -> Result<Option<String>, RequestError> {
    let reply = fetch::<serde_json::Value>(builder(verb, path).json(body)).await?;
    Ok(reply.message)
}

pub async fn delete(path: &str) -> Result<Option<String>, RequestError> {
    let reply = fetch::<serde_json::Value>(builder(Verb::Delete, path).build()).await?;
    Ok(reply.message)
}

fn to_form_data(payload: &BrowserForm) -> Result<web_sys::FormData, RequestError> {
    let form = web_sys::FormData::new().map_err(js_error)?;
    for part in payload.parts() {
        match &part.value {
            PartValue::Text(value) => form.append_with_str(&part.name, value),
            PartValue::File(attachment) => {
                form.append_with_blob_and_filename(&part.name, &attachment.file, &attachment.file_name)
            }
        }
        .map_err(js_error)?;
    }
    Ok(form)
}

/// Multipart request; the browser sets the boundary header itself
pub async fn send_form<T: DeserializeOwned>(
    verb: Verb,
    path: &str,
    payload: &BrowserForm,
) -> Result<T, RequestError> {
    let form = to_form_data(payload)?;
    required(fetch(builder(verb, path).body(form)).await?)
}
