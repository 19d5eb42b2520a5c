//! Formula parsing
//!
//! Tokenization of formula text (including the ASCII aliases of the
//! plain-text problem format) and the precedence-climbing parser over symbol
//! sequences.

pub mod tokens;
pub mod wff;


pub use tokens::tokenize;
pub use wff::{is_wff, normalize, parse};
