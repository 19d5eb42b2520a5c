//! Absorption: from (P→Q), conclude P→(P∧Q)

use super::common::{as_conjunction, as_implication, push_unique, Application};
use super::Rule;
use crate::prop::SyntaxTree;

pub fn conclusions(premises: &[SyntaxTree]) -> Vec<Application> {
    let mut results = Vec::new();
    for premise in premises {
        if let Some((p, q)) = as_implication(premise) {
            push_unique(
                &mut results,
                Application::new(
                    Rule::Absorption,
                    vec![premise.clone()],
                    SyntaxTree::implies(p.clone(), SyntaxTree::and(p.clone(), q.clone())),
                ),
            );
        }
    }
    results
}

/// Backward mode: the target must have the exact shape P→(P∧Q); the single
/// premise (P→Q) is then fully determined.
pub fn premise_candidates(conclusion: &SyntaxTree) -> Vec<Vec<SyntaxTree>> {
    if let Some((p, consequent)) = as_implication(conclusion) {
        if let Some((p2, q)) = as_conjunction(consequent) {
            if p == p2 {
                return vec![vec![SyntaxTree::implies(p.clone(), q.clone())]];
            }
        }
    }
    Vec::new()
}
