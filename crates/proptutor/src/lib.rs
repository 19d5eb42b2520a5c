//! proptutor: the symbolic-logic core of a propositional-logic proof tutor
//!
//! This library represents well-formed formulas, parses and canonicalizes
//! them, derives consequences under a fixed set of nine inference rules,
//! validates multi-line proofs (including nested sub-proofs), and
//! procedurally generates guaranteed-solvable proof problems at a requested
//! difficulty.

pub mod generator;
pub mod import;
pub mod inference;
pub mod parser;
pub mod proof;
pub mod prop;

// Re-export commonly used types from the formula model
pub use prop::{Formula, Operator, Symbol, SyntaxTree};

// Re-export parser entry points
pub use parser::{is_wff, normalize, parse, tokenize};

// Re-export the rule engine
pub use inference::{
    is_valid_inference, is_valid_replacement, possible_conclusions, premise_candidates, rewrites,
    Application, ReplacementRule, Rule,
};

// Re-export proof types and the validator
pub use proof::{validate, Justification, Proof, ProofLine, ValidationResult};

// Re-export the generator
pub use generator::{generate, Generator, GeneratorConfig, Problem};

// Re-export the problem importer
pub use import::{parse_problem_file, ProblemGroup};
