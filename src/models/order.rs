use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{AppError, Result};

pub const STATUS_PENDING: &str = "pending";

/// Keys an order submission must carry, in column order.
pub const ORDER_FIELDS: [&str; 15] = [
    "name",
    "phone",
    "company",
    "address",
    "inn",
    "kpp",
    "bik",
    "city",
    "country",
    "addresspost",
    "post",
    "pay",
    "scope",
    "price",
    "product",
];

// DB models

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Order {
    pub id: i32,
    pub name: String,
    pub phone: String,
    pub date: String,
    pub status: Option<String>,
    pub company: Option<String>,
    pub address: Option<String>,
    pub inn: Option<String>,
    pub kpp: Option<String>,
    pub bik: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub addresspost: Option<String>,
    pub post: Option<String>,
    pub pay: Option<String>,
    pub scope: Option<String>,
    pub price: Option<String>,
    pub product: Option<Value>,
}

// Request types

#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub name: String,
    pub phone: String,
    pub date: String,
    pub status: String,
    pub company: Option<String>,
    pub address: Option<String>,
    pub inn: Option<String>,
    pub kpp: Option<String>,
    pub bik: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub addresspost: Option<String>,
    pub post: Option<String>,
    pub pay: Option<String>,
    pub scope: Option<String>,
    pub price: Option<String>,
    pub product: Value,
}

impl NewOrder {
    /// Reads a submission body. Every key in [`ORDER_FIELDS`] must be present;
    /// unknown keys are ignored. Status is always pending.
    pub fn from_json(body: &Value, date: String) -> Result<Self> {
        let fields = as_object(body)?;

        if let Some(missing) = ORDER_FIELDS.iter().find(|key| !fields.contains_key(**key)) {
            return Err(AppError::missing_field(missing));
        }

        Ok(Self {
            name: required_text(fields, "name")?,
            phone: required_text(fields, "phone")?,
            date,
            status: STATUS_PENDING.to_string(),
            company: optional_text(fields, "company")?,
            address: optional_text(fields, "address")?,
            inn: optional_text(fields, "inn")?,
            kpp: optional_text(fields, "kpp")?,
            bik: optional_text(fields, "bik")?,
            city: optional_text(fields, "city")?,
            country: optional_text(fields, "country")?,
            addresspost: optional_text(fields, "addresspost")?,
            post: optional_text(fields, "post")?,
            pay: optional_text(fields, "pay")?,
            scope: optional_text(fields, "scope")?,
            price: optional_text(fields, "price")?,
            product: fields.get("product").cloned().unwrap_or(Value::Null),
        })
    }
}

pub(crate) fn as_object(body: &Value) -> Result<&Map<String, Value>> {
    body.as_object()
        .ok_or_else(|| AppError::Validation("request body must be a JSON object".to_string()))
}

pub(crate) fn required_text(fields: &Map<String, Value>, key: &str) -> Result<String> {
    optional_text(fields, key)?
        .ok_or_else(|| AppError::Validation(format!("field `{}` must not be null", key)))
}

/// Text columns take strings as-is and other scalars in their JSON form.
pub(crate) fn optional_text(fields: &Map<String, Value>, key: &str) -> Result<Option<String>> {
    match fields.get(key) {
        None => Err(AppError::missing_field(key)),
        Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(_) => Err(AppError::Validation(format!(
            "field `{}` must be a scalar value",
            key
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_body() -> Value {
        json!({
            "name": "Ivan",
            "phone": "+79990001122",
            "company": "Acme",
            "address": "Lenina 1",
            "inn": "7701234567",
            "kpp": "770101001",
            "bik": "044525225",
            "city": "Moscow",
            "country": "RU",
            "addresspost": "Lenina 1, office 2",
            "post": "101000",
            "pay": "invoice",
            "scope": "retail",
            "price": 15000,
            "product": [{ "id": 3, "qty": 2 }]
        })
    }

    #[test]
    fn parses_complete_submission() {
        let order = NewOrder::from_json(&full_body(), "2024-05-01 10:00:00.000000".to_string())
            .unwrap();

        assert_eq!(order.name, "Ivan");
        assert_eq!(order.status, STATUS_PENDING);
        assert_eq!(order.date, "2024-05-01 10:00:00.000000");
        assert_eq!(order.price.as_deref(), Some("15000"));
        assert_eq!(order.product, json!([{ "id": 3, "qty": 2 }]));
    }

    #[test]
    fn client_status_is_ignored() {
        let mut body = full_body();
        body["status"] = json!("done");

        let order = NewOrder::from_json(&body, String::new()).unwrap();
        assert_eq!(order.status, STATUS_PENDING);
    }

    #[test]
    fn every_field_is_required() {
        for key in ORDER_FIELDS {
            let mut body = full_body();
            body.as_object_mut().unwrap().remove(key);

            let err = NewOrder::from_json(&body, String::new()).unwrap_err();
            assert_eq!(err.to_string(), format!("missing field `{}`", key));
        }
    }

    #[test]
    fn nullable_fields_accept_null() {
        let mut body = full_body();
        body["company"] = Value::Null;
        body["product"] = Value::Null;

        let order = NewOrder::from_json(&body, String::new()).unwrap();
        assert_eq!(order.company, None);
        assert_eq!(order.product, Value::Null);
    }

    #[test]
    fn null_name_is_rejected() {
        let mut body = full_body();
        body["name"] = Value::Null;

        let err = NewOrder::from_json(&body, String::new()).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn structured_text_field_is_rejected() {
        let mut body = full_body();
        body["city"] = json!({ "name": "Moscow" });

        let err = NewOrder::from_json(&body, String::new()).unwrap_err();
        assert_eq!(err.to_string(), "field `city` must be a scalar value");
    }

    #[test]
    fn non_object_body_is_rejected() {
        let err = NewOrder::from_json(&json!(["name"]), String::new()).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
