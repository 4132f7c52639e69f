//! Input field state.

pub mod numeric_input;

pub use numeric_input::{FieldState, NumericInput};
