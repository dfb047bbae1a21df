//! Wire types for the storefront endpoints and the structured outcomes the
//! reducers consume.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::PLACEHOLDER_IMAGE;

/// Product id as carried by `data-pid` attributes.
pub type Pid = String;

/// Backend-assigned product key of the collection API.
pub type ProductId = u64;

// ---------------------------------------------------------------------------
// Products (collection API)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub img: Option<String>,
    /// Served URL for uploaded images, preferred over `img` when present.
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Product {
    pub fn display_image(&self) -> &str {
        [self.image_url.as_deref(), self.img.as_deref()]
            .into_iter()
            .flatten()
            .find(|url| !url.trim().is_empty())
            .unwrap_or(PLACEHOLDER_IMAGE)
    }

    /// Price as the template shows it, without currency formatting.
    pub fn display_price(&self) -> String {
        self.price.map(|p| p.to_string()).unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewProduct {
    pub title: String,
    pub price: f64,
    pub img: String,
}

// ---------------------------------------------------------------------------
// Request bodies
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct AddToCartRequest<'a> {
    pub pid: &'a str,
    pub qty: u32,
    pub csrf_token: &'a str,
}

#[derive(Debug, Serialize)]
pub struct PidRequest<'a> {
    pub pid: &'a str,
    pub csrf_token: &'a str,
}

#[derive(Debug, Serialize)]
pub struct CheckoutRequest<'a> {
    pub csrf_token: &'a str,
}

// ---------------------------------------------------------------------------
// Action responses
// ---------------------------------------------------------------------------

/// `{ok, error, ...data}` as returned by every JSON action endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    #[serde(default, deserialize_with = "truthy")]
    pub ok: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(flatten)]
    pub data: T,
}

/// `ok` read with JavaScript truthiness: `1` and `"yes"` count, `0`, `""`
/// and `null` do not.
fn truthy<'de, D: serde::Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => false,
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().map_or(false, |f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    })
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Accepted(T),
    /// Server said no; the message is `None` when it gave no usable reason.
    Rejected(Option<String>),
}

impl<T> Envelope<T> {
    pub fn into_outcome(self) -> Outcome<T> {
        if self.ok {
            Outcome::Accepted(self.data)
        } else {
            Outcome::Rejected(self.error.filter(|e| !e.is_empty()))
        }
    }
}

/// Decode an action response body.  Valid JSON that is not an object is a
/// reasonless rejection; invalid JSON is an error for the caller.
pub fn parse_outcome<T: DeserializeOwned>(body: &str) -> Result<Outcome<T>, serde_json::Error> {
    let value: Value = serde_json::from_str(body)?;
    if !value.is_object() {
        return Ok(Outcome::Rejected(None));
    }
    let envelope: Envelope<T> = serde_json::from_value(value)?;
    Ok(envelope.into_outcome())
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CartUpdate {
    #[serde(default)]
    pub total_items: Option<u32>,
    /// Authoritative amounts, when the backend sends them.
    #[serde(default)]
    pub subtotal: Option<f64>,
    #[serde(default)]
    pub total: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FavoriteUpdate {
    #[serde(default)]
    pub action: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteAction {
    Added,
    Removed,
}

impl FavoriteAction {
    /// Anything other than `"added"` means the favorite is gone.
    pub fn from_server(action: Option<&str>) -> Self {
        match action {
            Some("added") => FavoriteAction::Added,
            _ => FavoriteAction::Removed,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CheckoutPlaced {
    #[serde(default)]
    pub order_id: Option<Value>,
}

/// Everything `/checkout` can answer, classified.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutOutcome {
    Placed { order_id: Option<String> },
    Rejected(String),
    /// Body was not JSON (e.g. a rendered page).
    NonJson { status: u16, body: String },
    /// JSON without a usable `ok`/`error`, or an empty body.
    Unrecognized,
}

impl CheckoutOutcome {
    pub fn from_body(status: u16, body: &str) -> Self {
        let value: Value = match serde_json::from_str(body) {
            Ok(v) => v,
            Err(_) if body.is_empty() => return CheckoutOutcome::Unrecognized,
            Err(_) => {
                return CheckoutOutcome::NonJson {
                    status,
                    body: body.to_string(),
                }
            }
        };
        if !value.is_object() {
            return CheckoutOutcome::Unrecognized;
        }
        match serde_json::from_value::<Envelope<CheckoutPlaced>>(value) {
            Ok(env) if env.ok => CheckoutOutcome::Placed {
                order_id: env.data.order_id.map(|id| match id {
                    Value::String(s) => s,
                    other => other.to_string(),
                }),
            },
            Ok(Envelope { error: Some(err), .. }) if !err.is_empty() => {
                CheckoutOutcome::Rejected(err)
            }
            _ => CheckoutOutcome::Unrecognized,
        }
    }
}
