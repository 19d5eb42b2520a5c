//! Conjunction: from P and Q, conclude (P∧Q) and (Q∧P)

use super::common::{as_conjunction, ordered_pairs, push_unique, Application};
use super::Rule;
use crate::prop::SyntaxTree;

pub fn conclusions(premises: &[SyntaxTree]) -> Vec<Application> {
    let mut results = Vec::new();
    // Ordered pairs cover both (P∧Q) and (Q∧P)
    for (i, j) in ordered_pairs(premises.len()) {
        push_unique(
            &mut results,
            Application::new(
                Rule::Conjunction,
                vec![premises[i].clone(), premises[j].clone()],
                SyntaxTree::and(premises[i].clone(), premises[j].clone()),
            ),
        );
    }
    results
}

/// Backward mode: the target must be a conjunction; its two conjuncts are
/// the premises.
pub fn premise_candidates(conclusion: &SyntaxTree) -> Vec<Vec<SyntaxTree>> {
    match as_conjunction(conclusion) {
        Some((p, q)) => vec![vec![p.clone(), q.clone()]],
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prop::SyntaxTree as T;

    #[test]
    fn test_both_orders() {
        let premises = vec![T::var('p'), T::var('q')];
        let results = conclusions(&premises);
        assert_eq!(results.len(), 2);
        assert!(results
            .iter()
            .any(|a| a.conclusion == T::and(T::var('p'), T::var('q'))));
        assert!(results
            .iter()
            .any(|a| a.conclusion == T::and(T::var('q'), T::var('p'))));
    }

    #[test]
    fn test_backward() {
        let target = T::and(T::var('p'), T::or(T::var('q'), T::var('r')));
        assert_eq!(
            premise_candidates(&target),
            vec![vec![T::var('p'), T::or(T::var('q'), T::var('r'))]]
        );
    }
}
