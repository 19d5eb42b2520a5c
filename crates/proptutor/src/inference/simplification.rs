//! Simplification: from (P∧Q), conclude P and conclude Q

use super::common::{as_conjunction, push_unique, Application};
use super::Rule;
use crate::prop::SyntaxTree;

pub fn conclusions(premises: &[SyntaxTree]) -> Vec<Application> {
    let mut results = Vec::new();
    for premise in premises {
        if let Some((left, right)) = as_conjunction(premise) {
            push_unique(
                &mut results,
                Application::new(Rule::Simplification, vec![premise.clone()], left.clone()),
            );
            push_unique(
                &mut results,
                Application::new(Rule::Simplification, vec![premise.clone()], right.clone()),
            );
        }
    }
    results
}

/// Backward mode: the target can be either conjunct; any pool formula X
/// fills the other side.
pub fn premise_candidates(conclusion: &SyntaxTree, pool: &[SyntaxTree]) -> Vec<Vec<SyntaxTree>> {
    let mut candidates = Vec::new();
    for x in pool {
        candidates.push(vec![SyntaxTree::and(conclusion.clone(), x.clone())]);
        candidates.push(vec![SyntaxTree::and(x.clone(), conclusion.clone())]);
    }
    candidates
}
