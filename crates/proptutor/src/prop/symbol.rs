//! Logical symbols

use serde::{Deserialize, Serialize};
use std::fmt;

/// A logical connective
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Not,
    And,
    Or,
    Implies,
    Iff,
}

impl Operator {
    /// Binding strength, higher binds tighter. Implication and biconditional
    /// share the lowest level; negation binds tightest of the connectives.
    pub fn precedence(&self) -> u8 {
        match self {
            Operator::Implies | Operator::Iff => 1,
            Operator::Or => 2,
            Operator::And => 3,
            Operator::Not => 4,
        }
    }

    /// Whether this operator takes two operands
    pub fn is_binary(&self) -> bool {
        !matches!(self, Operator::Not)
    }

    /// Implication and biconditional associate to the right; conjunction and
    /// disjunction to the left.
    pub fn is_right_associative(&self) -> bool {
        matches!(self, Operator::Implies | Operator::Iff)
    }

    /// The canonical glyph for this operator
    pub fn glyph(&self) -> char {
        match self {
            Operator::Not => '¬',
            Operator::And => '∧',
            Operator::Or => '∨',
            Operator::Implies => '→',
            Operator::Iff => '↔',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// A single symbol in a formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    /// A propositional variable (a single letter)
    Variable(char),
    /// A connective
    Op(Operator),
    LeftParen,
    RightParen,
}

impl Symbol {
    /// Interpret a canonical character as a symbol. Returns `None` for
    /// characters outside the alphabet.
    pub fn from_char(c: char) -> Option<Symbol> {
        match c {
            '(' => Some(Symbol::LeftParen),
            ')' => Some(Symbol::RightParen),
            '¬' => Some(Symbol::Op(Operator::Not)),
            '∧' => Some(Symbol::Op(Operator::And)),
            '∨' => Some(Symbol::Op(Operator::Or)),
            '→' => Some(Symbol::Op(Operator::Implies)),
            '↔' => Some(Symbol::Op(Operator::Iff)),
            c if c.is_ascii_alphabetic() => Some(Symbol::Variable(c)),
            _ => None,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Variable(c) => write!(f, "{}", c),
            Symbol::Op(op) => write!(f, "{}", op),
            Symbol::LeftParen => write!(f, "("),
            Symbol::RightParen => write!(f, ")"),
        }
    }
}
