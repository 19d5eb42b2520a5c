//! Modus Tollens: from (P→Q) and ¬Q, conclude ¬P

use super::common::{as_implication, as_negation, ordered_pairs, push_unique, Application};
use super::Rule;
use crate::prop::SyntaxTree;

pub fn conclusions(premises: &[SyntaxTree]) -> Vec<Application> {
    let mut results = Vec::new();
    for (i, j) in ordered_pairs(premises.len()) {
        if let Some((antecedent, consequent)) = as_implication(&premises[i]) {
            if let Some(negated) = as_negation(&premises[j]) {
                if negated == consequent {
                    push_unique(
                        &mut results,
                        Application::new(
                            Rule::ModusTollens,
                            vec![premises[i].clone(), premises[j].clone()],
                            SyntaxTree::not(antecedent.clone()),
                        ),
                    );
                }
            }
        }
    }
    results
}

/// Backward mode: the target must be a negation ¬P; any pool formula X
/// yields the premise pair (P→X), ¬X.
pub fn premise_candidates(conclusion: &SyntaxTree, pool: &[SyntaxTree]) -> Vec<Vec<SyntaxTree>> {
    match as_negation(conclusion) {
        Some(antecedent) => pool
            .iter()
            .map(|x| {
                vec![
                    SyntaxTree::implies(antecedent.clone(), x.clone()),
                    SyntaxTree::not(x.clone()),
                ]
            })
            .collect(),
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prop::SyntaxTree as T;

    #[test]
    fn test_modus_tollens() {
        let premises = vec![
            T::implies(T::var('p'), T::var('q')),
            T::not(T::var('q')),
        ];
        let results = conclusions(&premises);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].conclusion, T::not(T::var('p')));
    }

    #[test]
    fn test_negation_must_match_consequent() {
        let premises = vec![
            T::implies(T::var('p'), T::var('q')),
            T::not(T::var('p')),
        ];
        assert!(conclusions(&premises).is_empty());
    }

    #[test]
    fn test_backward_requires_negated_target() {
        assert!(premise_candidates(&T::var('p'), &[T::var('x')]).is_empty());
        let candidates = premise_candidates(&T::not(T::var('p')), &[T::var('x')]);
        assert_eq!(
            candidates,
            vec![vec![
                T::implies(T::var('p'), T::var('x')),
                T::not(T::var('x'))
            ]]
        );
    }
}
