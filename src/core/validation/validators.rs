//! Reusable field validators
//!
//! These mirror the constraints the form's controls impose: pickers only
//! offer valid indices and the age stepper is bounded.

use crate::core::field::FieldValue;
use crate::core::options::OptionList;

/// Validator: text must not be empty (whitespace counts as content)
pub fn required() -> impl Fn(&str, &FieldValue) -> Result<(), String> + Send + Sync + Clone {
    |field: &str, value: &FieldValue| match value.as_text() {
        Some("") => Err(format!("'{}' is required", field)),
        _ => Ok(()),
    }
}

/// Validator: integer must be within `min..=max`
pub fn range(
    min: i64,
    max: i64,
) -> impl Fn(&str, &FieldValue) -> Result<(), String> + Send + Sync + Clone {
    move |field: &str, value: &FieldValue| {
        if let Some(num) = value.as_integer() {
            if num < min || num > max {
                Err(format!(
                    "'{}' must be between {} and {} (value: {})",
                    field, min, max, num
                ))
            } else {
                Ok(())
            }
        } else {
            Ok(()) // type checks happen on assignment
        }
    }
}

/// Validator: integer must address an entry of `list`
pub fn index_in(
    list: OptionList,
) -> impl Fn(&str, &FieldValue) -> Result<(), String> + Send + Sync + Clone {
    move |field: &str, value: &FieldValue| {
        if let Some(index) = value.as_integer() {
            if list.contains(index) {
                Ok(())
            } else {
                Err(format!(
                    "'{}' must index {} (0..{}, value: {})",
                    field,
                    list.name(),
                    list.len(),
                    index
                ))
            }
        } else {
            Ok(())
        }
    }
}
