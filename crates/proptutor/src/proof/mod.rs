//! Multi-line proofs and their validation

pub mod validator;

pub use validator::validate;

use crate::inference::{ReplacementRule, Rule};
use crate::prop::Formula;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a proof line was obtained.
///
/// Referenced line numbers must be in lexical scope at the point of use;
/// the validator enforces this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Justification {
    /// A given of the problem; only legal at the top level
    Premise,
    /// Opens a sub-proof one level deeper
    Assumption,
    /// An inference rule applied to previously proven lines
    Inference { rule: Rule, lines: Vec<usize> },
    /// An equivalence-preserving rewrite of one previously proven line
    Replacement { rule: ReplacementRule, line: usize },
    /// Closes the sub-proof `start..=end`, concluding assumption → last line
    ImplicationIntroduction { start: usize, end: usize },
    /// Closes the sub-proof `start..=end`, concluding the negation of its
    /// assumption from the contradiction derived on `contradiction`
    ReductioAdAbsurdum {
        start: usize,
        end: usize,
        contradiction: usize,
    },
    /// Repeats an in-scope line verbatim
    Reiteration { line: usize },
}

impl fmt::Display for Justification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Justification::Premise => write!(f, "Premise"),
            Justification::Assumption => write!(f, "Assumption"),
            Justification::Inference { rule, lines } => {
                write!(f, "{}", rule)?;
                for (i, line) in lines.iter().enumerate() {
                    write!(f, "{}{}", if i == 0 { " " } else { ", " }, line)?;
                }
                Ok(())
            }
            Justification::Replacement { rule, line } => write!(f, "{} {}", rule, line),
            Justification::ImplicationIntroduction { start, end } => {
                write!(f, "Implication Introduction {}-{}", start, end)
            }
            Justification::ReductioAdAbsurdum { start, end, .. } => {
                write!(f, "Reductio Ad Absurdum {}-{}", start, end)
            }
            Justification::Reiteration { line } => write!(f, "Reiteration {}", line),
        }
    }
}

/// One line of a proof
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofLine {
    pub number: usize,
    pub formula: Formula,
    pub justification: Justification,
    /// Sub-proof nesting depth; top level is 0
    pub depth: usize,
}

impl ProofLine {
    pub fn new(number: usize, formula: Formula, justification: Justification, depth: usize) -> Self {
        ProofLine {
            number,
            formula,
            justification,
            depth,
        }
    }
}

/// An ordered sequence of proof lines.
///
/// Lines are numbered 1..=n. Depth increases by at most one per line and
/// decreases only through a closing justification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proof {
    pub lines: Vec<ProofLine>,
}

impl Proof {
    pub fn new() -> Self {
        Proof { lines: Vec::new() }
    }

    /// Append a line, numbering it automatically
    pub fn add(&mut self, formula: Formula, justification: Justification, depth: usize) -> usize {
        let number = self.lines.len() + 1;
        self.lines.push(ProofLine::new(number, formula, justification, depth));
        number
    }
}

impl fmt::Display for Proof {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(
                f,
                "{:>3}. {}{}  [{}]",
                line.number,
                "  ".repeat(line.depth),
                line.formula,
                line.justification
            )?;
        }
        Ok(())
    }
}

/// Outcome of validating a proof. Validation failures are localized: the
/// first offending line and a human-readable reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub error_message: Option<String>,
    pub error_line: Option<usize>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        ValidationResult {
            is_valid: true,
            error_message: None,
            error_line: None,
        }
    }

    pub fn error(line: usize, message: impl Into<String>) -> Self {
        ValidationResult {
            is_valid: false,
            error_message: Some(message.into()),
            error_line: Some(line),
        }
    }
}
