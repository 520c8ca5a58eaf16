//! Input validation for contact records.
//!
//! Provides:
//! - [`is_valid_phone`], [`is_valid_email`], [`is_valid_vat`]: the patterns
//!   used by entry forms
//! - [`is_phone_keystroke`]: keystroke filter for phone-number fields
//! - [`RecordValidator`]: applies those patterns to named fields of a record
//!   and reports [`FieldErrors`] in the same shape the backend uses for 400
//!   responses

mod errors;
mod patterns;
mod record;

pub use errors::FieldErrors;
pub use patterns::{
    EMAIL_PATTERN, PHONE_PATTERN, VAT_PATTERN, filter_phone_input, is_phone_keystroke,
    is_valid_email, is_valid_phone, is_valid_vat,
};
pub use record::{FieldRule, RecordValidator};
