//! Constructive Dilemma: from (P→Q)∧(R→S) and (P∨R), conclude (Q∨S)

use super::common::{
    as_conjunction, as_disjunction, as_implication, ordered_pairs, push_unique, Application,
};
use super::Rule;
use crate::prop::SyntaxTree;

pub fn conclusions(premises: &[SyntaxTree]) -> Vec<Application> {
    let mut results = Vec::new();
    for (i, j) in ordered_pairs(premises.len()) {
        let pair = as_conjunction(&premises[i])
            .and_then(|(l, r)| Some((as_implication(l)?, as_implication(r)?)));
        if let (Some(((p, q), (r, s))), Some((a, b))) = (pair, as_disjunction(&premises[j])) {
            if a == p && b == r {
                push_unique(
                    &mut results,
                    Application::new(
                        Rule::ConstructiveDilemma,
                        vec![premises[i].clone(), premises[j].clone()],
                        SyntaxTree::or(q.clone(), s.clone()),
                    ),
                );
            }
        }
    }
    results
}

/// Backward mode: the target must be a disjunction (Q∨S); every ordered pool
/// pair (X, Y) gives the antecedents of the dilemma.
pub fn premise_candidates(conclusion: &SyntaxTree, pool: &[SyntaxTree]) -> Vec<Vec<SyntaxTree>> {
    let (q, s) = match as_disjunction(conclusion) {
        Some(parts) => parts,
        None => return Vec::new(),
    };
    let mut candidates = Vec::new();
    for x in pool {
        for y in pool {
            candidates.push(vec![
                SyntaxTree::and(
                    SyntaxTree::implies(x.clone(), q.clone()),
                    SyntaxTree::implies(y.clone(), s.clone()),
                ),
                SyntaxTree::or(x.clone(), y.clone()),
            ]);
        }
    }
    candidates
}
