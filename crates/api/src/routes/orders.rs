//! Order echo endpoint.
//!
//! The submitted body is opaque: any JSON value is accepted and returned
//! unchanged inside an [`OrderResponse`] envelope.

use axum::Json;
use axum::body::Bytes;
use serde::Serialize;
use serde_json::Value;

use crate::error::ApiError;

pub const ORDER_CREATED_MESSAGE: &str = "Order created";

#[derive(Debug, Serialize)]
pub struct OrderResponse {
    pub message: &'static str,
    pub order: Value,
}

impl OrderResponse {
    pub fn created(order: Value) -> Self {
        Self {
            message: ORDER_CREATED_MESSAGE,
            order,
        }
    }
}

/// POST /order — parse the body as JSON and echo it back.
///
/// The content type is not checked. An empty or malformed body is a 400.
#[tracing::instrument(skip(body), fields(body_len = body.len()))]
pub async fn create(body: Bytes) -> Result<Json<OrderResponse>, ApiError> {
    let order = parse_order(&body).inspect_err(|err| {
        metrics::counter!("orders_rejected_total").increment(1);
        tracing::warn!(error = %err, "rejected order payload");
    })?;

    metrics::counter!("orders_received_total").increment(1);
    tracing::debug!(%order, "order received");

    Ok(Json(OrderResponse::created(order)))
}

fn parse_order(body: &[u8]) -> Result<Value, ApiError> {
    serde_json::from_slice(body).map_err(ApiError::invalid_json)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_parse_order_object() {
        let order = parse_order(br#"{"item":"widget","qty":3}"#).unwrap();
        assert_eq!(order, json!({"item": "widget", "qty": 3}));
    }

    #[test]
    fn test_parse_order_null_literal() {
        assert_eq!(parse_order(b"null").unwrap(), Value::Null);
    }

    #[test]
    fn test_parse_order_keeps_wide_integer_digits() {
        let order = parse_order(b"[98765432109876543210, -12345678901234567890123]").unwrap();
        assert_eq!(
            serde_json::to_string(&order).unwrap(),
            "[98765432109876543210,-12345678901234567890123]"
        );
    }

    #[test]
    fn test_parse_order_rejects_empty_body() {
        assert!(matches!(parse_order(b""), Err(ApiError::BadRequest(_))));
    }

    #[test]
    fn test_envelope_shape() {
        let response = OrderResponse::created(json!({}));
        let serialized = serde_json::to_value(&response).unwrap();
        assert_eq!(
            serialized,
            json!({"message": "Order created", "order": {}})
        );
    }
}
