//! The order: one adoption request as edited by the form

use super::error::{DecodeError, EncodeError, LookupError, ValidationError};
use super::field::{FieldValue, OrderField};
use super::options::CatalogOptions;
use serde::Serialize;
use serde_json::{Map, Value};

/// Current selections of the order form
///
/// Only the nine wire fields are serialized; `special_request` is form
/// state and never leaves the process.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Index into the breed list
    #[serde(rename = "type")]
    pub cat_type: i64,
    /// Index into the colour list
    pub color: i64,
    /// Index into the hair length list
    #[serde(rename = "hair")]
    pub hair_length: i64,
    #[serde(skip)]
    pub special_request: bool,
    /// Age in months
    pub age: i64,
    pub hypoallergenic: bool,
    pub name: String,
    pub street_address: String,
    pub city: String,
    pub postal_code: String,
}

impl Order {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign one attribute
    ///
    /// Only the value kind is checked. Index and range bounds are the
    /// caller's responsibility.
    pub fn set_field(
        &mut self,
        field: OrderField,
        value: impl Into<FieldValue>,
    ) -> Result<(), ValidationError> {
        let value = value.into();
        let mismatch = || ValidationError::TypeMismatch {
            field: field.key(),
            expected: field.expected_kind(),
        };

        match field {
            OrderField::Type => self.cat_type = value.as_integer().ok_or_else(mismatch)?,
            OrderField::Color => self.color = value.as_integer().ok_or_else(mismatch)?,
            OrderField::HairLength => self.hair_length = value.as_integer().ok_or_else(mismatch)?,
            OrderField::Age => self.age = value.as_integer().ok_or_else(mismatch)?,
            OrderField::SpecialRequest => {
                self.special_request = value.as_boolean().ok_or_else(mismatch)?
            }
            OrderField::Hypoallergenic => {
                self.hypoallergenic = value.as_boolean().ok_or_else(mismatch)?
            }
            OrderField::Name
            | OrderField::StreetAddress
            | OrderField::City
            | OrderField::PostalCode => {
                let FieldValue::Text(text) = value else {
                    return Err(mismatch());
                };
                *self.text_mut(field) = text;
            }
        }
        Ok(())
    }

    fn text_mut(&mut self, field: OrderField) -> &mut String {
        match field {
            OrderField::StreetAddress => &mut self.street_address,
            OrderField::City => &mut self.city,
            OrderField::PostalCode => &mut self.postal_code,
            _ => &mut self.name,
        }
    }

    /// True iff every address field is non-empty. Whitespace is not trimmed.
    pub fn is_valid(&self) -> bool {
        !(self.name.is_empty()
            || self.street_address.is_empty()
            || self.city.is_empty()
            || self.postal_code.is_empty())
    }

    /// Encode to a JSON object with exactly the nine wire keys
    pub fn encode(&self) -> Result<Value, EncodeError> {
        Ok(serde_json::to_value(self)?)
    }

    /// Encode straight to a request body
    pub fn encode_bytes(&self) -> Result<Vec<u8>, EncodeError> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Decode a response body
    ///
    /// Keys beyond the nine wire keys are ignored, echo services commonly
    /// add an id or timestamp. Indices are not checked against the option
    /// lists.
    pub fn decode(body: &[u8]) -> Result<Self, DecodeError> {
        let raw = || String::from_utf8_lossy(body).into_owned();
        let value: Value = serde_json::from_slice(body).map_err(|e| DecodeError::Malformed {
            message: e.to_string(),
            raw: raw(),
        })?;
        Self::from_value(&value).map_err(|e| e.with_raw(raw()))
    }

    /// Decode an already-parsed JSON value
    pub fn from_value(value: &Value) -> Result<Self, DecodeError> {
        let Some(object) = value.as_object() else {
            return Err(DecodeError::Malformed {
                message: "expected a JSON object".to_string(),
                raw: value.to_string(),
            });
        };

        let reader = FieldReader { object, value };
        Ok(Order {
            cat_type: reader.integer(OrderField::Type)?,
            color: reader.integer(OrderField::Color)?,
            hair_length: reader.integer(OrderField::HairLength)?,
            special_request: false,
            age: reader.integer(OrderField::Age)?,
            hypoallergenic: reader.boolean(OrderField::Hypoallergenic)?,
            name: reader.text(OrderField::Name)?,
            street_address: reader.text(OrderField::StreetAddress)?,
            city: reader.text(OrderField::City)?,
            postal_code: reader.text(OrderField::PostalCode)?,
        })
    }

    /// Sentence confirming the search, built from the option labels
    pub fn confirmation_message(&self, options: &CatalogOptions) -> Result<String, LookupError> {
        Ok(format!(
            "Your search for {}, {}, {} hair cat is found.",
            options.types.label(self.cat_type)?,
            options.colours.label(self.color)?,
            options.hair_lengths.label(self.hair_length)?,
        ))
    }
}

struct FieldReader<'a> {
    object: &'a Map<String, Value>,
    value: &'a Value,
}

impl FieldReader<'_> {
    fn get(&self, field: OrderField) -> Result<&Value, DecodeError> {
        self.object
            .get(field.key())
            .ok_or_else(|| DecodeError::MissingField {
                field: field.key(),
                raw: self.value.to_string(),
            })
    }

    fn wrong_type(&self, field: OrderField) -> DecodeError {
        DecodeError::WrongType {
            field: field.key(),
            expected: field.expected_kind(),
            raw: self.value.to_string(),
        }
    }

    fn integer(&self, field: OrderField) -> Result<i64, DecodeError> {
        self.get(field)?
            .as_i64()
            .ok_or_else(|| self.wrong_type(field))
    }

    fn boolean(&self, field: OrderField) -> Result<bool, DecodeError> {
        self.get(field)?
            .as_bool()
            .ok_or_else(|| self.wrong_type(field))
    }

    fn text(&self, field: OrderField) -> Result<String, DecodeError> {
        self.get(field)?
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| self.wrong_type(field))
    }
}

impl DecodeError {
    fn with_raw(self, body: String) -> Self {
        match self {
            DecodeError::Malformed { message, .. } => DecodeError::Malformed { message, raw: body },
            DecodeError::MissingField { field, .. } => DecodeError::MissingField { field, raw: body },
            DecodeError::WrongType {
                field, expected, ..
            } => DecodeError::WrongType {
                field,
                expected,
                raw: body,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn filled() -> Order {
        Order {
            name: "Trang".to_string(),
            street_address: "1 Main St".to_string(),
            city: "Toronto".to_string(),
            postal_code: "M5V".to_string(),
            ..Order::default()
        }
    }

    #[test]
    fn test_default_order_is_invalid() {
        assert!(!Order::new().is_valid());
    }

    #[test]
    fn test_filled_order_is_valid() {
        assert!(filled().is_valid());
    }

    #[test]
    fn test_whitespace_counts_as_filled() {
        let mut order = filled();
        order.set_field(OrderField::City, " ").unwrap();
        assert!(order.is_valid());
    }

    #[test]
    fn test_set_field_type_mismatch() {
        let mut order = Order::new();
        let err = order.set_field(OrderField::Age, "three").unwrap_err();
        assert_eq!(
            err,
            ValidationError::TypeMismatch {
                field: "age",
                expected: "an integer"
            }
        );
        assert_eq!(order.age, 0);
    }

    #[test]
    fn test_set_field_does_not_bounds_check() {
        let mut order = Order::new();
        order.set_field(OrderField::Type, 42).unwrap();
        assert_eq!(order.cat_type, 42);
    }

    #[test]
    fn test_set_field_writes_text_fields() {
        let mut order = filled();
        order.set_field(OrderField::SpecialRequest, true).unwrap();
        order.set_field(OrderField::PostalCode, "K1A").unwrap();
        assert!(order.special_request);
        assert_eq!(order.postal_code, "K1A");
        assert_eq!(order.city, "Toronto");
    }

    #[test]
    fn test_encode_has_exactly_wire_keys() {
        let mut order = filled();
        order.special_request = true;
        let json = order.encode().unwrap();
        let object = json.as_object().unwrap();

        assert_eq!(object.len(), 9);
        for field in OrderField::WIRE {
            assert!(object.contains_key(field.key()), "missing {}", field);
        }
        assert!(!object.contains_key("specialRequest"));
        assert!(!object.contains_key("isValid"));
        assert_eq!(json["hair"], 0);
        assert_eq!(json["streetAddress"], "1 Main St");
    }

    #[test]
    fn test_decode_ignores_extra_keys() {
        let body = json!({
            "type": 1, "color": 2, "hair": 1, "age": 12, "hypoallergenic": true,
            "name": "A", "streetAddress": "B", "city": "C", "postalCode": "D",
            "id": "431", "createdAt": "2019-08-04T00:00:00.000Z"
        });
        let order = Order::decode(body.to_string().as_bytes()).unwrap();
        assert_eq!(order.cat_type, 1);
        assert!(order.hypoallergenic);
        assert_eq!(order.postal_code, "D");
    }

    #[test]
    fn test_decode_not_json() {
        let err = Order::decode(b"<html>502</html>").unwrap_err();
        assert!(matches!(err, DecodeError::Malformed { .. }));
        assert_eq!(err.raw(), "<html>502</html>");
    }

    #[test]
    fn test_decode_array_is_malformed() {
        let err = Order::decode(b"[1,2,3]").unwrap_err();
        assert!(matches!(err, DecodeError::Malformed { .. }));
    }

    #[test]
    fn test_confirmation_message() {
        let order = Order {
            cat_type: 7,
            color: 4,
            hair_length: 1,
            ..filled()
        };
        assert_eq!(
            order.confirmation_message(CatalogOptions::standard()).unwrap(),
            "Your search for Russian Blue, Black and White, Long hair cat is found."
        );
    }

    #[test]
    fn test_confirmation_message_out_of_range_hair() {
        let order = Order {
            hair_length: 2,
            ..filled()
        };
        let err = order
            .confirmation_message(CatalogOptions::standard())
            .unwrap_err();
        assert!(matches!(
            err,
            LookupError::IndexOutOfRange {
                list: "hairLengths",
                index: 2,
                ..
            }
        ));
    }
}
