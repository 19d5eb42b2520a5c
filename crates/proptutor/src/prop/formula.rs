//! Formulas as ordered symbol sequences

use super::symbol::Symbol;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An ordered sequence of symbols.
///
/// Two formulas are equal iff their symbol sequences are identical, so
/// cosmetic parenthesization differences make formulas unequal. Use
/// [`crate::parser::normalize`] before comparing for logical identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Formula {
    pub symbols: Vec<Symbol>,
}

impl Formula {
    /// Create a formula from a symbol sequence
    pub fn new(symbols: Vec<Symbol>) -> Self {
        Formula { symbols }
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// All variable names occurring in the formula, in order of first
    /// appearance
    pub fn variables(&self) -> Vec<char> {
        let mut vars = Vec::new();
        for symbol in &self.symbols {
            if let Symbol::Variable(c) = symbol {
                if !vars.contains(c) {
                    vars.push(*c);
                }
            }
        }
        vars
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}

impl From<Vec<Symbol>> for Formula {
    fn from(symbols: Vec<Symbol>) -> Self {
        Formula { symbols }
    }
}
