//! Disjunctive Syllogism: from (P∨Q) and ¬P conclude Q; from (P∨Q) and ¬Q
//! conclude P

use super::common::{as_disjunction, as_negation, ordered_pairs, push_unique, Application};
use super::Rule;
use crate::prop::SyntaxTree;

pub fn conclusions(premises: &[SyntaxTree]) -> Vec<Application> {
    let mut results = Vec::new();
    for (i, j) in ordered_pairs(premises.len()) {
        if let (Some((left, right)), Some(negated)) =
            (as_disjunction(&premises[i]), as_negation(&premises[j]))
        {
            let used = vec![premises[i].clone(), premises[j].clone()];
            if negated == left {
                push_unique(
                    &mut results,
                    Application::new(Rule::DisjunctiveSyllogism, used.clone(), right.clone()),
                );
            }
            if negated == right {
                push_unique(
                    &mut results,
                    Application::new(Rule::DisjunctiveSyllogism, used, left.clone()),
                );
            }
        }
    }
    results
}

/// Backward mode: any pool formula X can be the eliminated disjunct, on
/// either side of the disjunction.
pub fn premise_candidates(conclusion: &SyntaxTree, pool: &[SyntaxTree]) -> Vec<Vec<SyntaxTree>> {
    let mut candidates = Vec::new();
    for x in pool {
        candidates.push(vec![
            SyntaxTree::or(x.clone(), conclusion.clone()),
            SyntaxTree::not(x.clone()),
        ]);
        candidates.push(vec![
            SyntaxTree::or(conclusion.clone(), x.clone()),
            SyntaxTree::not(x.clone()),
        ]);
    }
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prop::SyntaxTree as T;

    #[test]
    fn test_eliminates_either_side() {
        let premises = vec![
            T::or(T::var('p'), T::var('q')),
            T::not(T::var('p')),
        ];
        let results = conclusions(&premises);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].conclusion, T::var('q'));

        let premises = vec![
            T::or(T::var('p'), T::var('q')),
            T::not(T::var('q')),
        ];
        let results = conclusions(&premises);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].conclusion, T::var('p'));
    }

    #[test]
    fn test_both_sides_negated() {
        // p∨p with ¬p eliminates both sides to the same conclusion, once
        let premises = vec![T::or(T::var('p'), T::var('p')), T::not(T::var('p'))];
        assert_eq!(conclusions(&premises).len(), 1);
    }
}
