//! Hypothetical Syllogism: from (P→Q) and (Q→R), conclude (P→R)

use super::common::{as_implication, ordered_pairs, push_unique, Application};
use super::Rule;
use crate::prop::SyntaxTree;

pub fn conclusions(premises: &[SyntaxTree]) -> Vec<Application> {
    let mut results = Vec::new();
    for (i, j) in ordered_pairs(premises.len()) {
        if let (Some((p, q1)), Some((q2, r))) =
            (as_implication(&premises[i]), as_implication(&premises[j]))
        {
            if q1 == q2 {
                push_unique(
                    &mut results,
                    Application::new(
                        Rule::HypotheticalSyllogism,
                        vec![premises[i].clone(), premises[j].clone()],
                        SyntaxTree::implies(p.clone(), r.clone()),
                    ),
                );
            }
        }
    }
    results
}

/// Backward mode: the target must be an implication (P→R); any pool formula
/// X is a candidate middle term, giving (P→X), (X→R).
pub fn premise_candidates(conclusion: &SyntaxTree, pool: &[SyntaxTree]) -> Vec<Vec<SyntaxTree>> {
    match as_implication(conclusion) {
        Some((p, r)) => pool
            .iter()
            .map(|x| {
                vec![
                    SyntaxTree::implies(p.clone(), x.clone()),
                    SyntaxTree::implies(x.clone(), r.clone()),
                ]
            })
            .collect(),
        None => Vec::new(),
    }
}
