//! Modus Ponens: from (P→Q) and P, conclude Q

use super::common::{as_implication, ordered_pairs, push_unique, Application};
use super::Rule;
use crate::prop::SyntaxTree;

/// Forward mode: match every (implication, antecedent) pair in the premises.
pub fn conclusions(premises: &[SyntaxTree]) -> Vec<Application> {
    let mut results = Vec::new();
    for (i, j) in ordered_pairs(premises.len()) {
        if let Some((antecedent, consequent)) = as_implication(&premises[i]) {
            if premises[j] == *antecedent {
                push_unique(
                    &mut results,
                    Application::new(
                        Rule::ModusPonens,
                        vec![premises[i].clone(), premises[j].clone()],
                        consequent.clone(),
                    ),
                );
            }
        }
    }
    results
}

/// Backward mode: any pool formula X yields the premise pair (X→C), X.
pub fn premise_candidates(conclusion: &SyntaxTree, pool: &[SyntaxTree]) -> Vec<Vec<SyntaxTree>> {
    pool.iter()
        .map(|x| {
            vec![
                SyntaxTree::implies(x.clone(), conclusion.clone()),
                x.clone(),
            ]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prop::SyntaxTree as T;

    #[test]
    fn test_modus_ponens() {
        let premises = vec![T::implies(T::var('p'), T::var('q')), T::var('p')];
        let results = conclusions(&premises);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].conclusion, T::var('q'));
    }

    #[test]
    fn test_requires_structural_antecedent_match() {
        // (p∧q)→r fires only on the exact tree p∧q
        let premises = vec![
            T::implies(T::and(T::var('p'), T::var('q')), T::var('r')),
            T::and(T::var('p'), T::var('q')),
        ];
        assert_eq!(conclusions(&premises).len(), 1);

        let premises = vec![
            T::implies(T::and(T::var('p'), T::var('q')), T::var('r')),
            T::and(T::var('q'), T::var('p')),
        ];
        assert!(conclusions(&premises).is_empty());
    }
}
