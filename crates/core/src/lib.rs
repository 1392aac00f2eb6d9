pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::ConvertError;
pub use types::{Breakpoint, ConversionResult, GroupOutput, ModifierGroup, PseudoClass};
