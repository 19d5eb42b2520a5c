//! Addition: from P, conclude (P∨Q) for any Q
//!
//! The only rule whose conclusion contains a formula not present in any
//! premise. Forward mode therefore takes an explicit pool of candidate
//! disjuncts: the validator passes the claimed conclusion's own subtrees,
//! the generator passes atoms drawn from its variable pool.

use super::common::{as_disjunction, push_unique, Application};
use super::Rule;
use crate::prop::SyntaxTree;

pub fn conclusions(premises: &[SyntaxTree], extras: &[SyntaxTree]) -> Vec<Application> {
    let mut results = Vec::new();
    for premise in premises {
        for extra in extras {
            push_unique(
                &mut results,
                Application::new(
                    Rule::Addition,
                    vec![premise.clone()],
                    SyntaxTree::or(premise.clone(), extra.clone()),
                ),
            );
            push_unique(
                &mut results,
                Application::new(
                    Rule::Addition,
                    vec![premise.clone()],
                    SyntaxTree::or(extra.clone(), premise.clone()),
                ),
            );
        }
    }
    results
}

/// Backward mode: either disjunct of the target alone is a sufficient
/// premise.
pub fn premise_candidates(conclusion: &SyntaxTree) -> Vec<Vec<SyntaxTree>> {
    match as_disjunction(conclusion) {
        Some((p, q)) => {
            let mut candidates = vec![vec![p.clone()]];
            if p != q {
                candidates.push(vec![q.clone()]);
            }
            candidates
        }
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prop::SyntaxTree as T;

    #[test]
    fn test_addition_both_sides() {
        let results = conclusions(&[T::var('p')], &[T::var('q')]);
        assert_eq!(results.len(), 2);
        assert!(results
            .iter()
            .any(|a| a.conclusion == T::or(T::var('p'), T::var('q'))));
        assert!(results
            .iter()
            .any(|a| a.conclusion == T::or(T::var('q'), T::var('p'))));
    }

    #[test]
    fn test_validator_style_extras() {
        // Checking p ⊢ p∨q with the conclusion's subtrees as the pool
        let conclusion = T::or(T::var('p'), T::var('q'));
        let extras: Vec<_> = conclusion.subtrees().into_iter().cloned().collect();
        assert!(conclusions(&[T::var('p')], &extras)
            .iter()
            .any(|a| a.conclusion == conclusion));
    }

    #[test]
    fn test_backward_dedups_equal_disjuncts() {
        assert_eq!(
            premise_candidates(&T::or(T::var('p'), T::var('p'))),
            vec![vec![T::var('p')]]
        );
    }
}
