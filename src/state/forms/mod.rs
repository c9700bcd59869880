//! Form domain layer
//!
//! Type-safe field handling for the contact form.

mod contact_form;
mod field;

pub use contact_form::{ContactForm, ContactSubmission, Form};
pub use field::{FieldKind, FormField};
