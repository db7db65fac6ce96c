//! Form state module

mod contact_form;
mod field;

pub use contact_form::*;
pub use field::*;
