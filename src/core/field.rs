//! Order field names and the values they accept

use serde::{Deserialize, Serialize};
use std::fmt;

/// A value assigned to an order field
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FieldValue {
    Integer(i64),
    Boolean(bool),
    Text(String),
}

impl FieldValue {
    /// Get the value as an integer if possible
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Get the value as a boolean if possible
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            FieldValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Get the value as text if possible
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Integer(i64::from(value))
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Boolean(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

/// Every attribute the form can edit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OrderField {
    Type,
    Color,
    #[serde(rename = "hair")]
    HairLength,
    SpecialRequest,
    Age,
    Hypoallergenic,
    Name,
    StreetAddress,
    City,
    PostalCode,
}

impl OrderField {
    /// The nine fields that travel over the wire, in wire order
    pub const WIRE: [OrderField; 9] = [
        OrderField::Type,
        OrderField::Color,
        OrderField::HairLength,
        OrderField::Age,
        OrderField::Hypoallergenic,
        OrderField::Name,
        OrderField::StreetAddress,
        OrderField::City,
        OrderField::PostalCode,
    ];

    /// The address fields that must be filled in
    pub const ADDRESS: [OrderField; 4] = [
        OrderField::Name,
        OrderField::StreetAddress,
        OrderField::City,
        OrderField::PostalCode,
    ];

    /// JSON key used for this field
    pub fn key(&self) -> &'static str {
        match self {
            OrderField::Type => "type",
            OrderField::Color => "color",
            OrderField::HairLength => "hair",
            OrderField::SpecialRequest => "specialRequest",
            OrderField::Age => "age",
            OrderField::Hypoallergenic => "hypoallergenic",
            OrderField::Name => "name",
            OrderField::StreetAddress => "streetAddress",
            OrderField::City => "city",
            OrderField::PostalCode => "postalCode",
        }
    }

    /// Kind of value the field holds, phrased for error messages
    pub fn expected_kind(&self) -> &'static str {
        match self {
            OrderField::Type | OrderField::Color | OrderField::HairLength | OrderField::Age => {
                "an integer"
            }
            OrderField::SpecialRequest | OrderField::Hypoallergenic => "a boolean",
            OrderField::Name
            | OrderField::StreetAddress
            | OrderField::City
            | OrderField::PostalCode => "text",
        }
    }
}

impl fmt::Display for OrderField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
