//! Inference rule engine
//!
//! Each of the nine inference rules lives in its own module with two pure
//! functions: `conclusions` (forward mode: what follows from these
//! premises) and `premise_candidates` (backward mode: which premise sets
//! would derive a target). The dispatchers here fan out over the closed
//! rule set.

pub mod absorption;
pub mod addition;
pub mod common;
pub mod conjunction;
pub mod constructive_dilemma;
pub mod disjunctive_syllogism;
pub mod hypothetical_syllogism;
pub mod modus_ponens;
pub mod modus_tollens;
pub mod replacement;
pub mod simplification;

pub use common::Application;
pub use replacement::{is_valid_replacement, rewrites, ReplacementRule};

use crate::prop::SyntaxTree;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of inference rules, plus the synthetic `Assumption` tag
/// the generator uses to mark leaf formulas of a derivation tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rule {
    ModusPonens,
    ModusTollens,
    HypotheticalSyllogism,
    DisjunctiveSyllogism,
    ConstructiveDilemma,
    Absorption,
    Simplification,
    Conjunction,
    Addition,
    /// Not a proof rule: marks a derivation-tree leaf (a premise)
    Assumption,
}

impl Rule {
    /// The nine proper inference rules, excluding the `Assumption` tag
    pub const INFERENCE_RULES: [Rule; 9] = [
        Rule::ModusPonens,
        Rule::ModusTollens,
        Rule::HypotheticalSyllogism,
        Rule::DisjunctiveSyllogism,
        Rule::ConstructiveDilemma,
        Rule::Absorption,
        Rule::Simplification,
        Rule::Conjunction,
        Rule::Addition,
    ];

    /// Number of premises the rule consumes
    pub fn premise_count(&self) -> usize {
        match self {
            Rule::ModusPonens
            | Rule::ModusTollens
            | Rule::HypotheticalSyllogism
            | Rule::DisjunctiveSyllogism
            | Rule::ConstructiveDilemma
            | Rule::Conjunction => 2,
            Rule::Absorption | Rule::Simplification | Rule::Addition => 1,
            Rule::Assumption => 0,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Rule::ModusPonens => "Modus Ponens",
            Rule::ModusTollens => "Modus Tollens",
            Rule::HypotheticalSyllogism => "Hypothetical Syllogism",
            Rule::DisjunctiveSyllogism => "Disjunctive Syllogism",
            Rule::ConstructiveDilemma => "Constructive Dilemma",
            Rule::Absorption => "Absorption",
            Rule::Simplification => "Simplification",
            Rule::Conjunction => "Conjunction",
            Rule::Addition => "Addition",
            Rule::Assumption => "Assumption",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Forward mode: every conclusion derivable from `premises` by `rule`.
///
/// Matching is by structural equality of subtrees, so operand order and
/// surface parenthesization never block a match. `extras` supplies the
/// candidate novel disjuncts consumed only by Addition (whose conclusion
/// introduces a formula not present in any premise); all other rules ignore
/// it.
pub fn possible_conclusions(
    rule: Rule,
    premises: &[SyntaxTree],
    extras: &[SyntaxTree],
) -> Vec<Application> {
    match rule {
        Rule::ModusPonens => modus_ponens::conclusions(premises),
        Rule::ModusTollens => modus_tollens::conclusions(premises),
        Rule::HypotheticalSyllogism => hypothetical_syllogism::conclusions(premises),
        Rule::DisjunctiveSyllogism => disjunctive_syllogism::conclusions(premises),
        Rule::ConstructiveDilemma => constructive_dilemma::conclusions(premises),
        Rule::Absorption => absorption::conclusions(premises),
        Rule::Simplification => simplification::conclusions(premises),
        Rule::Conjunction => conjunction::conclusions(premises),
        Rule::Addition => addition::conclusions(premises, extras),
        Rule::Assumption => Vec::new(),
    }
}

/// Backward mode: premise sets that would forward-derive exactly
/// `conclusion` by `rule`. `pool` supplies candidate formulas for premise
/// positions the conclusion does not determine. Used only by the problem
/// generator's top-down solver.
pub fn premise_candidates(
    rule: Rule,
    conclusion: &SyntaxTree,
    pool: &[SyntaxTree],
) -> Vec<Vec<SyntaxTree>> {
    match rule {
        Rule::ModusPonens => modus_ponens::premise_candidates(conclusion, pool),
        Rule::ModusTollens => modus_tollens::premise_candidates(conclusion, pool),
        Rule::HypotheticalSyllogism => hypothetical_syllogism::premise_candidates(conclusion, pool),
        Rule::DisjunctiveSyllogism => disjunctive_syllogism::premise_candidates(conclusion, pool),
        Rule::ConstructiveDilemma => constructive_dilemma::premise_candidates(conclusion, pool),
        Rule::Absorption => absorption::premise_candidates(conclusion),
        Rule::Simplification => simplification::premise_candidates(conclusion, pool),
        Rule::Conjunction => conjunction::premise_candidates(conclusion),
        Rule::Addition => addition::premise_candidates(conclusion),
        Rule::Assumption => Vec::new(),
    }
}

/// Check a claimed inference: the conclusion must be among the rule's
/// possible conclusions from the given premises.
pub fn is_valid_inference(rule: Rule, premises: &[SyntaxTree], conclusion: &SyntaxTree) -> bool {
    // For Addition the novel disjunct can only come from the conclusion
    // itself, so its immediate subtrees are the candidate pool.
    let extras: Vec<SyntaxTree> = conclusion.subtrees().into_iter().cloned().collect();
    possible_conclusions(rule, premises, &extras)
        .iter()
        .any(|app| app.conclusion == *conclusion)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prop::SyntaxTree as T;

    #[test]
    fn test_rule_soundness() {
        // Every forward-derived conclusion validates against its own premises.
        let p = T::var('p');
        let q = T::var('q');
        let r = T::var('r');
        let premises = vec![
            T::implies(p.clone(), q.clone()),
            p.clone(),
            T::not(q.clone()),
            T::or(p.clone(), r.clone()),
            T::not(p.clone()),
            T::and(p.clone(), q.clone()),
            T::implies(q.clone(), r.clone()),
        ];
        let extras = vec![r.clone()];
        for rule in Rule::INFERENCE_RULES {
            for app in possible_conclusions(rule, &premises, &extras) {
                assert!(
                    is_valid_inference(rule, &app.premises, &app.conclusion),
                    "{} derived {} from {:?} but rejects it",
                    rule,
                    app.conclusion,
                    app.premises
                );
            }
        }
    }

    #[test]
    fn test_backward_forward_agreement() {
        // Every backward premise candidate forward-derives exactly the target.
        let pool = vec![T::var('x'), T::not(T::var('y'))];
        let targets = vec![
            T::var('p'),
            T::not(T::var('p')),
            T::implies(T::var('p'), T::var('q')),
            T::and(T::var('p'), T::var('q')),
            T::or(T::var('p'), T::var('q')),
        ];
        for rule in Rule::INFERENCE_RULES {
            for target in &targets {
                for premises in premise_candidates(rule, target, &pool) {
                    assert!(
                        is_valid_inference(rule, &premises, target),
                        "{} premise candidate {:?} does not derive {}",
                        rule,
                        premises,
                        target
                    );
                }
            }
        }
    }

    #[test]
    fn test_assumption_is_not_a_proof_rule() {
        assert!(possible_conclusions(Rule::Assumption, &[T::var('p')], &[]).is_empty());
        assert!(!is_valid_inference(Rule::Assumption, &[], &T::var('p')));
    }
}
