//! Client-side checks that block a submission before it reaches the network.

use std::fmt;

use crate::constants::PLACEHOLDER_IMAGE;
use crate::models::NewProduct;
use crate::utils::parse_float_prefix;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceError {
    NotANumber,
    NotFinite,
    Negative,
}

impl fmt::Display for PriceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriceError::NotANumber => write!(f, "price is not a number"),
            PriceError::NotFinite => write!(f, "price is not finite"),
            PriceError::Negative => write!(f, "price is negative"),
        }
    }
}

/// Validate a price field value the way the admin product forms require:
/// any finite, non-negative number (zero included).
pub fn validate_price(raw: &str) -> Result<f64, PriceError> {
    let value = parse_float_prefix(raw.trim());
    if value.is_nan() {
        Err(PriceError::NotANumber)
    } else if value.is_infinite() {
        Err(PriceError::NotFinite)
    } else if value < 0.0 {
        Err(PriceError::Negative)
    } else {
        Ok(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductFormError {
    MissingTitle,
}

impl fmt::Display for ProductFormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductFormError::MissingTitle => write!(f, "title is required"),
        }
    }
}

/// Build the create payload from the inline form fields.
///
/// Title is trimmed and required; an unparseable price becomes 0; an empty
/// image falls back to the placeholder.
pub fn parse_product_form(title: &str, price: &str, img: &str) -> Result<NewProduct, ProductFormError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(ProductFormError::MissingTitle);
    }
    let price = parse_float_prefix(price);
    let img = img.trim();
    Ok(NewProduct {
        title: title.to_string(),
        // JSON has no NaN/Infinity.
        price: if price.is_finite() { price } else { 0.0 },
        img: if img.is_empty() { PLACEHOLDER_IMAGE.to_string() } else { img.to_string() },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_invalid_prices() {
        assert_eq!(validate_price("-1"), Err(PriceError::Negative));
        assert_eq!(validate_price("abc"), Err(PriceError::NotANumber));
        assert_eq!(validate_price(""), Err(PriceError::NotANumber));
        assert_eq!(validate_price("   "), Err(PriceError::NotANumber));
        assert_eq!(validate_price("Infinity"), Err(PriceError::NotFinite));
    }

    #[test]
    fn accepts_zero_and_decimals() {
        assert_eq!(validate_price("0"), Ok(0.0));
        assert_eq!(validate_price("19.99"), Ok(19.99));
        assert_eq!(validate_price(" 450 "), Ok(450.0));
        // parseFloat reads the numeric prefix only
        assert_eq!(validate_price("12abc"), Ok(12.0));
    }

    #[test]
    fn product_form_requires_title() {
        assert_eq!(parse_product_form("   ", "10", ""), Err(ProductFormError::MissingTitle));
    }

    #[test]
    fn product_form_defaults() {
        let p = parse_product_form("  XBOX SERIES X 2TB ", "oops", "").unwrap();
        assert_eq!(p.title, "XBOX SERIES X 2TB");
        assert_eq!(p.price, 0.0);
        assert_eq!(p.img, PLACEHOLDER_IMAGE);

        let p = parse_product_form("Control", "760.5", " /static/img/c.png ").unwrap();
        assert_eq!(p.price, 760.5);
        assert_eq!(p.img, "/static/img/c.png");
    }
}
