//! Reusable render components.

pub mod numeric_field;
