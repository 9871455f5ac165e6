use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::order::{as_object, required_text};
use crate::error::Result;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Contact {
    pub id: i32,
    pub name: String,
    pub phone: String,
    pub date: String,
    pub status: Option<String>,
}

/// Contact submission. Status is left to the column default.
#[derive(Debug, Clone, PartialEq)]
pub struct NewContact {
    pub name: String,
    pub phone: String,
    pub date: String,
}

impl NewContact {
    pub fn from_json(body: &Value, date: String) -> Result<Self> {
        let fields = as_object(body)?;

        Ok(Self {
            name: required_text(fields, "name")?,
            phone: required_text(fields, "phone")?,
            date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_name_and_phone() {
        let contact = NewContact::from_json(
            &json!({ "name": "Olga", "phone": "+7 900 000 00 00", "comment": "call me" }),
            "2024-05-01 10:00:00.000000".to_string(),
        )
        .unwrap();

        assert_eq!(contact.name, "Olga");
        assert_eq!(contact.phone, "+7 900 000 00 00");
        assert_eq!(contact.date, "2024-05-01 10:00:00.000000");
    }

    #[test]
    fn phone_is_required() {
        let err = NewContact::from_json(&json!({ "name": "Olga" }), String::new()).unwrap_err();
        assert_eq!(err.to_string(), "missing field `phone`");
    }
}
