//! Small shared helpers.
//!
//! - **Text sanitizing**: Making remote feed text safe for terminal output

mod text;

pub use text::sanitize_field;
