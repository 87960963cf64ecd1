//! Input validation helpers
//!
//! Handlers validate payloads before touching any actor. Text must contain
//! something besides whitespace; quantities and prices must be finite, and
//! strictly positive where a record is being created.

use super::error::ApiError;
use crate::model::{OrderCreate, ProduceCreate, ProduceUpdate, VendorCreate, VendorUpdate};

// ── Field helpers ───────────────────────────────────────────────────

/// Validate that a required string is non-empty after trimming.
pub fn validate_required_text(value: &str, field: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::validation(format!("{field} must not be empty")));
    }
    Ok(())
}

/// Validate that an optional string, if present, is non-empty after trimming.
pub fn validate_optional_text(value: &Option<String>, field: &str) -> Result<(), ApiError> {
    match value {
        Some(v) => validate_required_text(v, field),
        None => Ok(()),
    }
}

/// Validate that a number is finite and strictly greater than zero.
pub fn validate_positive(value: f64, field: &str) -> Result<(), ApiError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ApiError::validation(format!(
            "{field} must be greater than 0"
        )));
    }
    Ok(())
}

/// Validate that an optional number, if present, is finite and not negative.
pub fn validate_optional_non_negative(value: Option<f64>, field: &str) -> Result<(), ApiError> {
    match value {
        Some(v) if !v.is_finite() || v < 0.0 => Err(ApiError::validation(format!(
            "{field} must not be negative"
        ))),
        _ => Ok(()),
    }
}

// ── Payloads ────────────────────────────────────────────────────────

pub fn validate_vendor_create(payload: &VendorCreate) -> Result<(), ApiError> {
    validate_required_text(&payload.name, "name")?;
    validate_required_text(&payload.market_location, "market_location")?;
    validate_required_text(&payload.phone, "phone")
}

pub fn validate_vendor_update(payload: &VendorUpdate) -> Result<(), ApiError> {
    validate_optional_text(&payload.name, "name")?;
    validate_optional_text(&payload.market_location, "market_location")?;
    validate_optional_text(&payload.phone, "phone")
}

pub fn validate_produce_create(payload: &ProduceCreate) -> Result<(), ApiError> {
    validate_required_text(&payload.name, "name")?;
    validate_positive(payload.quantity_kg, "quantity_kg")?;
    validate_positive(payload.price_per_kg, "price_per_kg")?;
    validate_required_text(&payload.category, "category")
}

pub fn validate_produce_update(payload: &ProduceUpdate) -> Result<(), ApiError> {
    validate_optional_text(&payload.name, "name")?;
    validate_optional_non_negative(payload.quantity_kg, "quantity_kg")?;
    validate_optional_non_negative(payload.price_per_kg, "price_per_kg")?;
    validate_optional_text(&payload.category, "category")
}

pub fn validate_order_create(payload: &OrderCreate) -> Result<(), ApiError> {
    if payload.produce_id.0 == 0 {
        return Err(ApiError::validation("produce_id is required"));
    }
    validate_required_text(&payload.buyer_name, "buyer_name")?;
    validate_required_text(&payload.buyer_phone, "buyer_phone")?;
    validate_positive(payload.quantity_kg, "quantity_kg")?;
    validate_required_text(&payload.delivery_area, "delivery_area")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProduceId;

    fn detail(result: Result<(), ApiError>) -> String {
        match result {
            Err(ApiError::Validation(msg)) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    fn tomato() -> ProduceCreate {
        ProduceCreate {
            name: "Tomato".into(),
            quantity_kg: 10.0,
            price_per_kg: 2.5,
            category: "Vegetable".into(),
            is_available: true,
        }
    }

    #[test]
    fn whitespace_only_text_is_rejected() {
        let vendor = VendorCreate {
            name: "Ada".into(),
            market_location: "   ".into(),
            phone: "555-0100".into(),
        };
        assert_eq!(
            detail(validate_vendor_create(&vendor)),
            "market_location must not be empty"
        );
    }

    #[test]
    fn produce_quantities_must_be_positive_at_creation() {
        assert!(validate_produce_create(&tomato()).is_ok());

        let zero = ProduceCreate {
            quantity_kg: 0.0,
            ..tomato()
        };
        assert_eq!(
            detail(validate_produce_create(&zero)),
            "quantity_kg must be greater than 0"
        );

        let nan = ProduceCreate {
            price_per_kg: f64::NAN,
            ..tomato()
        };
        assert!(validate_produce_create(&nan).is_err());
    }

    #[test]
    fn unavailable_produce_is_still_valid() {
        let unavailable = ProduceCreate {
            is_available: false,
            ..tomato()
        };
        assert!(validate_produce_create(&unavailable).is_ok());
    }

    #[test]
    fn patches_allow_zero_but_not_negative() {
        let sold_out = ProduceUpdate {
            quantity_kg: Some(0.0),
            ..Default::default()
        };
        assert!(validate_produce_update(&sold_out).is_ok());

        let negative = ProduceUpdate {
            price_per_kg: Some(-1.0),
            ..Default::default()
        };
        assert_eq!(
            detail(validate_produce_update(&negative)),
            "price_per_kg must not be negative"
        );

        let blank_name = VendorUpdate {
            name: Some(String::new()),
            ..Default::default()
        };
        assert!(validate_vendor_update(&blank_name).is_err());
        assert!(validate_vendor_update(&VendorUpdate::default()).is_ok());
    }

    #[test]
    fn orders_need_a_produce_and_a_quantity() {
        let order = OrderCreate {
            produce_id: ProduceId(1),
            buyer_name: "Grace".into(),
            buyer_phone: "555-0142".into(),
            quantity_kg: 4.0,
            delivery_area: "Riverside".into(),
        };
        assert!(validate_order_create(&order).is_ok());

        let missing_produce = OrderCreate {
            produce_id: ProduceId(0),
            ..order.clone()
        };
        assert_eq!(
            detail(validate_order_create(&missing_produce)),
            "produce_id is required"
        );

        let negative = OrderCreate {
            quantity_kg: -2.0,
            ..order
        };
        assert!(validate_order_create(&negative).is_err());
    }
}
