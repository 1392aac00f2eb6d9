pub mod jss;
pub mod naming;

// Re-export main functions
pub use jss::{css_to_object, css_to_object_literal, JssError, JssObject};
