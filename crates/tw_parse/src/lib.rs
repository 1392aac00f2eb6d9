pub mod arbitrary;
pub mod tokenizer;

// Re-export main types
pub use arbitrary::{parse_arbitrary, ArbitraryError, ArbitraryToken};
pub use tokenizer::{classify, group_tokens, tokenize, ClassifiedToken, TokenGroup};
