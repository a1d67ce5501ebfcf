//! Form domain layer
//!
//! Type-safe form handling for the data-entry steps.

mod field;
mod form_state;

pub use field::{FieldValue, FormField, InputFilter};
pub use form_state::{CustomerDetailsForm, CustomerNumberForm, Form, FormState, ShowroomForm};
