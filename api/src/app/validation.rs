//! Custom checks for the `validator` derives on commands and queries
//!
//! Lengths, ranges and email shape are declared with `#[validate(...)]`
//! attributes on the request types; the checks here cover what the stock
//! validators cannot express.

use std::borrow::Cow;

use rust_decimal::Decimal;
use validator::ValidationError;

use crate::domain::entities::{Page, MAX_SKIP};

fn failure(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

/// Money amounts must be strictly positive
pub fn positive_price(value: &Decimal) -> Result<(), ValidationError> {
    if *value <= Decimal::ZERO {
        return Err(failure("positive", "must be greater than 0"));
    }
    Ok(())
}

/// Like [`positive_price`], for a field of a partial update
pub fn positive_price_change(value: Option<Decimal>) -> Result<(), ValidationError> {
    match value {
        Some(price) => positive_price(&price),
        None => Ok(()),
    }
}

pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(failure("blank", "must not be empty"));
    }
    Ok(())
}

/// A listing query with a `skip`/`limit` window
pub trait Paged {
    fn page(&self) -> Page;
}

impl<T: Paged + ?Sized> Paged for &T {
    fn page(&self) -> Page {
        (**self).page()
    }
}

/// `skip` must fit the signed 64-bit OFFSET the database binds.
///
/// `limit` bounds are declared with `range` on each query.
pub fn offset_in_range<T: Paged>(query: &T) -> Result<(), ValidationError> {
    if query.page().skip > MAX_SKIP {
        return Err(failure("skip_range", "skip is out of range"));
    }
    Ok(())
}
