use std::fmt;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

use super::config::ApiConfig;
use crate::constants::{
    HEADER_CSRF, HEADER_REQUEST_ID, PATH_CART_ADD, PATH_CART_REMOVE, PATH_CHECKOUT,
    PATH_FAVORITES_TOGGLE, PATH_PRODUCTS,
};
use crate::csrf::CsrfToken;
use crate::debug_log;
use crate::models::{
    parse_outcome, AddToCartRequest, CartUpdate, CheckoutOutcome, CheckoutRequest,
    FavoriteUpdate, NewProduct, Outcome, PidRequest, Product, ProductId,
};
use crate::utils::new_request_id;

/// Why a request produced no usable answer.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    /// fetch() rejected, or a browser API on the request path failed.
    Network(String),
    /// A body arrived but could not be decoded.
    Malformed(String),
    /// The collection API answered with a non-2xx status.
    Status(u16),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(e) => write!(f, "network error: {}", e),
            FetchError::Malformed(e) => write!(f, "malformed response: {}", e),
            FetchError::Status(code) => write!(f, "request failed with status {}", code),
        }
    }
}

impl From<JsValue> for FetchError {
    fn from(value: JsValue) -> Self {
        FetchError::Network(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

/// Status and text of a response, whatever the status was.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpReply {
    pub status: u16,
    pub ok: bool,
    pub body: String,
}

/// REST client for the storefront endpoints.  Cheap to clone: executors take
/// a copy out of the store so no borrow spans an `.await`.
#[derive(Debug, Clone, Default)]
pub struct ApiClient {
    config: ApiConfig,
    csrf: CsrfToken,
}

impl ApiClient {
    pub fn new(config: ApiConfig, csrf: CsrfToken) -> Self {
        Self { config, csrf }
    }

    // ---------------- Cart ----------------

    pub async fn add_to_cart(&self, pid: &str) -> Result<Outcome<CartUpdate>, FetchError> {
        let body = to_json(&AddToCartRequest {
            pid,
            qty: 1,
            csrf_token: self.csrf.as_str(),
        })?;
        let reply = self.send("POST", PATH_CART_ADD, Some(body)).await?;
        parse_outcome(&reply.body).map_err(|e| FetchError::Malformed(e.to_string()))
    }

    pub async fn remove_from_cart(&self, pid: &str) -> Result<Outcome<CartUpdate>, FetchError> {
        let body = to_json(&PidRequest {
            pid,
            csrf_token: self.csrf.as_str(),
        })?;
        let reply = self.send("POST", PATH_CART_REMOVE, Some(body)).await?;
        parse_outcome(&reply.body).map_err(|e| FetchError::Malformed(e.to_string()))
    }

    // ---------------- Favorites ----------------

    pub async fn toggle_favorite(&self, pid: &str) -> Result<Outcome<FavoriteUpdate>, FetchError> {
        let body = to_json(&PidRequest {
            pid,
            csrf_token: self.csrf.as_str(),
        })?;
        let reply = self.send("POST", PATH_FAVORITES_TOGGLE, Some(body)).await?;
        parse_outcome(&reply.body).map_err(|e| FetchError::Malformed(e.to_string()))
    }

    // ---------------- Checkout ----------------

    /// Never fails on the body: non-JSON answers are classified, not errors.
    pub async fn checkout(&self) -> Result<CheckoutOutcome, FetchError> {
        let body = to_json(&CheckoutRequest {
            csrf_token: self.csrf.as_str(),
        })?;
        let reply = self.send("POST", PATH_CHECKOUT, Some(body)).await?;
        Ok(CheckoutOutcome::from_body(reply.status, &reply.body))
    }

    // ---------------- Product collection ----------------

    pub async fn fetch_products(&self) -> Result<Vec<Product>, FetchError> {
        let resp = self.send_raw("GET", PATH_PRODUCTS, None).await?;
        if !resp.ok() {
            return Err(FetchError::Status(resp.status()));
        }
        let json = JsFuture::from(resp.json()?)
            .await
            .map_err(|e| FetchError::Malformed(format!("{:?}", e)))?;
        serde_wasm_bindgen::from_value::<Vec<Product>>(json)
            .map_err(|e| FetchError::Malformed(e.to_string()))
    }

    pub async fn create_product(&self, product: &NewProduct) -> Result<Product, FetchError> {
        let body = to_json(product)?;
        let reply = self.send("POST", PATH_PRODUCTS, Some(body)).await?;
        if !reply.ok {
            return Err(FetchError::Status(reply.status));
        }
        serde_json::from_str(&reply.body).map_err(|e| FetchError::Malformed(e.to_string()))
    }

    pub async fn delete_product(&self, id: ProductId) -> Result<(), FetchError> {
        let path = format!("{}/{}", PATH_PRODUCTS, id);
        let reply = self.send("DELETE", &path, None).await?;
        if !reply.ok {
            return Err(FetchError::Status(reply.status));
        }
        Ok(())
    }

    // ---------------- Transport ----------------

    /// Send a request and read the body as text regardless of status; the
    /// action endpoints put `{error}` in 4xx bodies.
    pub async fn send(&self, method: &str, path: &str, body: Option<String>) -> Result<HttpReply, FetchError> {
        let resp = self.send_raw(method, path, body).await?;
        let text = JsFuture::from(resp.text()?).await?;
        let reply = HttpReply {
            status: resp.status(),
            ok: resp.ok(),
            body: text.as_string().unwrap_or_default(),
        };
        debug_log!("{} {} -> {}", method, path, reply.status);
        Ok(reply)
    }

    async fn send_raw(&self, method: &str, path: &str, body: Option<String>) -> Result<Response, FetchError> {
        let url = self.config.url(path);
        let request_id = new_request_id();

        let opts = RequestInit::new();
        opts.set_method(method);
        opts.set_mode(if self.config.is_same_origin() {
            RequestMode::SameOrigin
        } else {
            RequestMode::Cors
        });

        // ----------------------------------------------------------------
        // Headers
        // ----------------------------------------------------------------
        let headers = Headers::new()?;
        headers.append("Accept", "application/json")?;
        headers.append(HEADER_REQUEST_ID, &request_id)?;
        if method != "GET" {
            headers.append(HEADER_CSRF, self.csrf.as_str())?;
        }
        if let Some(data) = body {
            opts.set_body(&JsValue::from_str(&data));
            headers.append("Content-Type", "application/json")?;
        }
        opts.set_headers(&headers);

        let request = Request::new_with_str_and_init(&url, &opts)?;

        let window = web_sys::window().ok_or_else(|| FetchError::Network("no global window".into()))?;
        debug_log!("{} {} req={}", method, url, request_id);
        let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
        let resp: Response = resp_value.dyn_into()?;
        Ok(resp)
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, FetchError> {
    serde_json::to_string(value).map_err(|e| FetchError::Malformed(e.to_string()))
}
