//! Caller-side validation for form edits
//!
//! [`Order::set_field`](crate::core::order::Order::set_field) never checks
//! bounds. The form session runs these checks first, standing in for the
//! constraints a picker or stepper enforces on screen.

pub mod validators;

use crate::core::error::ValidationError;
use crate::core::field::{FieldValue, OrderField};
use crate::core::options::CatalogOptions;
use std::ops::RangeInclusive;

/// Months of age the form accepts
pub const AGE_RANGE: RangeInclusive<i64> = 0..=48;

/// Check that `value` is an acceptable selection for `field`
pub fn check_selection(
    field: OrderField,
    value: &FieldValue,
    options: &CatalogOptions,
) -> Result<(), ValidationError> {
    let key = field.key();
    let outcome = match field {
        OrderField::Type => validators::index_in(options.types)(key, value),
        OrderField::Color => validators::index_in(options.colours)(key, value),
        OrderField::HairLength => validators::index_in(options.hair_lengths)(key, value),
        OrderField::Age => validators::range(*AGE_RANGE.start(), *AGE_RANGE.end())(key, value),
        _ => Ok(()),
    };

    outcome.map_err(|message| ValidationError::OutOfBounds {
        field: key,
        message,
    })
}

/// Name the first address field that is still empty, if any
pub fn first_missing_address(fields: [&str; 4]) -> Option<ValidationError> {
    let required = validators::required();
    OrderField::ADDRESS
        .iter()
        .zip(fields)
        .find(|(field, value)| required(field.key(), &FieldValue::from(*value)).is_err())
        .map(|(field, _)| ValidationError::Required { field: field.key() })
}
