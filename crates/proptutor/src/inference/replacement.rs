//! Replacement rules
//!
//! The ten classical equivalence-preserving rewrites. Unlike the inference
//! rules, a replacement takes a single premise line and may be applied in
//! either direction at any subformula position.

use crate::prop::SyntaxTree;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of replacement rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReplacementRule {
    DoubleNegation,
    Commutation,
    Association,
    DeMorgan,
    Distribution,
    Transposition,
    MaterialImplication,
    MaterialEquivalence,
    Exportation,
    Tautology,
}

impl ReplacementRule {
    pub const ALL: [ReplacementRule; 10] = [
        ReplacementRule::DoubleNegation,
        ReplacementRule::Commutation,
        ReplacementRule::Association,
        ReplacementRule::DeMorgan,
        ReplacementRule::Distribution,
        ReplacementRule::Transposition,
        ReplacementRule::MaterialImplication,
        ReplacementRule::MaterialEquivalence,
        ReplacementRule::Exportation,
        ReplacementRule::Tautology,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ReplacementRule::DoubleNegation => "Double Negation",
            ReplacementRule::Commutation => "Commutation",
            ReplacementRule::Association => "Association",
            ReplacementRule::DeMorgan => "De Morgan",
            ReplacementRule::Distribution => "Distribution",
            ReplacementRule::Transposition => "Transposition",
            ReplacementRule::MaterialImplication => "Material Implication",
            ReplacementRule::MaterialEquivalence => "Material Equivalence",
            ReplacementRule::Exportation => "Exportation",
            ReplacementRule::Tautology => "Tautology",
        }
    }
}

impl fmt::Display for ReplacementRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Every tree obtainable from `tree` by applying `rule` once, in either
/// direction, at any single subformula position.
pub fn rewrites(rule: ReplacementRule, tree: &SyntaxTree) -> Vec<SyntaxTree> {
    let mut results = local_rewrites(rule, tree);
    match tree {
        SyntaxTree::Variable(_) => {}
        SyntaxTree::Unary(op, child) => {
            for rewritten in rewrites(rule, child) {
                results.push(SyntaxTree::Unary(*op, Box::new(rewritten)));
            }
        }
        SyntaxTree::Binary(op, left, right) => {
            for rewritten in rewrites(rule, left) {
                results.push(SyntaxTree::Binary(
                    *op,
                    Box::new(rewritten),
                    right.clone(),
                ));
            }
            for rewritten in rewrites(rule, right) {
                results.push(SyntaxTree::Binary(*op, left.clone(), Box::new(rewritten)));
            }
        }
    }
    results.dedup();
    results
}

/// Check a claimed replacement step
pub fn is_valid_replacement(rule: ReplacementRule, from: &SyntaxTree, to: &SyntaxTree) -> bool {
    rewrites(rule, from).contains(to)
}

/// Rewrites of the top node only
fn local_rewrites(rule: ReplacementRule, tree: &SyntaxTree) -> Vec<SyntaxTree> {
    use SyntaxTree as T;
    let mut out = Vec::new();
    match rule {
        ReplacementRule::DoubleNegation => {
            out.push(T::not(T::not(tree.clone())));
            if let T::Unary(_, child) = tree {
                if let T::Unary(_, inner) = &**child {
                    out.push((**inner).clone());
                }
            }
        }
        ReplacementRule::Commutation => {
            if let T::Binary(op @ (crate::prop::Operator::And | crate::prop::Operator::Or), l, r) =
                tree
            {
                out.push(T::Binary(*op, r.clone(), l.clone()));
            }
        }
        ReplacementRule::Association => {
            if let T::Binary(op @ (crate::prop::Operator::And | crate::prop::Operator::Or), l, r) =
                tree
            {
                // p ∘ (q ∘ r)  ⇒  (p ∘ q) ∘ r
                if let T::Binary(inner, q, rr) = &**r {
                    if inner == op {
                        out.push(T::Binary(
                            *op,
                            Box::new(T::Binary(*op, l.clone(), q.clone())),
                            rr.clone(),
                        ));
                    }
                }
                // (p ∘ q) ∘ r  ⇒  p ∘ (q ∘ r)
                if let T::Binary(inner, p, q) = &**l {
                    if inner == op {
                        out.push(T::Binary(
                            *op,
                            p.clone(),
                            Box::new(T::Binary(*op, q.clone(), r.clone())),
                        ));
                    }
                }
            }
        }
        ReplacementRule::DeMorgan => {
            use crate::prop::Operator::{And, Or};
            // ¬(p∧q) ⇒ ¬p∨¬q and ¬(p∨q) ⇒ ¬p∧¬q
            if let T::Unary(_, child) = tree {
                if let T::Binary(op @ (And | Or), p, q) = &**child {
                    let dual = if *op == And { Or } else { And };
                    out.push(T::Binary(
                        dual,
                        Box::new(T::not((**p).clone())),
                        Box::new(T::not((**q).clone())),
                    ));
                }
            }
            // ¬p∨¬q ⇒ ¬(p∧q) and ¬p∧¬q ⇒ ¬(p∨q)
            if let T::Binary(op @ (And | Or), l, r) = tree {
                if let (T::Unary(_, p), T::Unary(_, q)) = (&**l, &**r) {
                    let dual = if *op == And { Or } else { And };
                    out.push(T::not(T::Binary(dual, p.clone(), q.clone())));
                }
            }
        }
        ReplacementRule::Distribution => {
            use crate::prop::Operator::{And, Or};
            if let T::Binary(outer @ (And | Or), l, r) = tree {
                let inner = if *outer == And { Or } else { And };
                // p ∘ (q ∙ r)  ⇒  (p ∘ q) ∙ (p ∘ r)
                if let T::Binary(op, q, rr) = &**r {
                    if *op == inner {
                        out.push(T::Binary(
                            inner,
                            Box::new(T::Binary(*outer, l.clone(), q.clone())),
                            Box::new(T::Binary(*outer, l.clone(), rr.clone())),
                        ));
                    }
                }
                // (p ∙ q) ∘ (p ∙ r)  ⇒  p ∙ (q ∘ r)
                if let (T::Binary(op1, p1, q), T::Binary(op2, p2, rr)) = (&**l, &**r) {
                    if *op1 == inner && *op2 == inner && p1 == p2 {
                        out.push(T::Binary(
                            inner,
                            p1.clone(),
                            Box::new(T::Binary(*outer, q.clone(), rr.clone())),
                        ));
                    }
                }
            }
        }
        ReplacementRule::Transposition => {
            if let T::Binary(crate::prop::Operator::Implies, l, r) = tree {
                // (p→q) ⇒ (¬q→¬p)
                out.push(T::implies(T::not((**r).clone()), T::not((**l).clone())));
                // (¬q→¬p) ⇒ (p→q)
                if let (T::Unary(_, q), T::Unary(_, p)) = (&**l, &**r) {
                    out.push(T::implies((**p).clone(), (**q).clone()));
                }
            }
        }
        ReplacementRule::MaterialImplication => {
            if let T::Binary(crate::prop::Operator::Implies, l, r) = tree {
                out.push(T::or(T::not((**l).clone()), (**r).clone()));
            }
            if let T::Binary(crate::prop::Operator::Or, l, r) = tree {
                if let T::Unary(_, p) = &**l {
                    out.push(T::implies((**p).clone(), (**r).clone()));
                }
            }
        }
        ReplacementRule::MaterialEquivalence => {
            if let T::Binary(crate::prop::Operator::Iff, l, r) = tree {
                let (p, q) = ((**l).clone(), (**r).clone());
                out.push(T::and(
                    T::implies(p.clone(), q.clone()),
                    T::implies(q.clone(), p.clone()),
                ));
                out.push(T::or(
                    T::and(p.clone(), q.clone()),
                    T::and(T::not(p), T::not(q)),
                ));
            }
            // (p→q)∧(q→p) ⇒ p↔q
            if let T::Binary(crate::prop::Operator::And, l, r) = tree {
                if let (
                    T::Binary(crate::prop::Operator::Implies, p1, q1),
                    T::Binary(crate::prop::Operator::Implies, q2, p2),
                ) = (&**l, &**r)
                {
                    if p1 == p2 && q1 == q2 {
                        out.push(T::iff((**p1).clone(), (**q1).clone()));
                    }
                }
            }
            // (p∧q)∨(¬p∧¬q) ⇒ p↔q
            if let T::Binary(crate::prop::Operator::Or, l, r) = tree {
                if let (
                    T::Binary(crate::prop::Operator::And, p1, q1),
                    T::Binary(crate::prop::Operator::And, np, nq),
                ) = (&**l, &**r)
                {
                    if let (T::Unary(_, p2), T::Unary(_, q2)) = (&**np, &**nq) {
                        if p1 == p2 && q1 == q2 {
                            out.push(T::iff((**p1).clone(), (**q1).clone()));
                        }
                    }
                }
            }
        }
        ReplacementRule::Exportation => {
            if let T::Binary(crate::prop::Operator::Implies, l, r) = tree {
                // ((p∧q)→r) ⇒ (p→(q→r))
                if let T::Binary(crate::prop::Operator::And, p, q) = &**l {
                    out.push(T::implies(
                        (**p).clone(),
                        T::implies((**q).clone(), (**r).clone()),
                    ));
                }
                // (p→(q→r)) ⇒ ((p∧q)→r)
                if let T::Binary(crate::prop::Operator::Implies, q, rr) = &**r {
                    out.push(T::implies(
                        T::and((**l).clone(), (**q).clone()),
                        (**rr).clone(),
                    ));
                }
            }
        }
        ReplacementRule::Tautology => {
            out.push(T::and(tree.clone(), tree.clone()));
            out.push(T::or(tree.clone(), tree.clone()));
            if let T::Binary(crate::prop::Operator::And | crate::prop::Operator::Or, l, r) = tree {
                if l == r {
                    out.push((**l).clone());
                }
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prop::SyntaxTree as T;

    #[test]
    fn test_double_negation_both_directions() {
        let p = T::var('p');
        let nnp = T::not(T::not(T::var('p')));
        assert!(is_valid_replacement(ReplacementRule::DoubleNegation, &p, &nnp));
        assert!(is_valid_replacement(ReplacementRule::DoubleNegation, &nnp, &p));
    }

    #[test]
    fn test_de_morgan() {
        let from = T::not(T::and(T::var('p'), T::var('q')));
        let to = T::or(T::not(T::var('p')), T::not(T::var('q')));
        assert!(is_valid_replacement(ReplacementRule::DeMorgan, &from, &to));
        assert!(is_valid_replacement(ReplacementRule::DeMorgan, &to, &from));
    }

    #[test]
    fn test_rewrite_at_inner_position() {
        // Commutation applied inside the antecedent of an implication
        let from = T::implies(T::and(T::var('p'), T::var('q')), T::var('r'));
        let to = T::implies(T::and(T::var('q'), T::var('p')), T::var('r'));
        assert!(is_valid_replacement(ReplacementRule::Commutation, &from, &to));
    }

    #[test]
    fn test_material_implication() {
        let from = T::implies(T::var('p'), T::var('q'));
        let to = T::or(T::not(T::var('p')), T::var('q'));
        assert!(is_valid_replacement(
            ReplacementRule::MaterialImplication,
            &from,
            &to
        ));
        assert!(is_valid_replacement(
            ReplacementRule::MaterialImplication,
            &to,
            &from
        ));
    }

    #[test]
    fn test_wrong_rule_rejected() {
        let from = T::implies(T::var('p'), T::var('q'));
        let to = T::or(T::not(T::var('p')), T::var('q'));
        assert!(!is_valid_replacement(ReplacementRule::DeMorgan, &from, &to));
    }

    #[test]
    fn test_exportation() {
        let from = T::implies(T::and(T::var('p'), T::var('q')), T::var('r'));
        let to = T::implies(T::var('p'), T::implies(T::var('q'), T::var('r')));
        assert!(is_valid_replacement(ReplacementRule::Exportation, &from, &to));
        assert!(is_valid_replacement(ReplacementRule::Exportation, &to, &from));
    }

    #[test]
    fn test_round_trip_pairs() {
        use crate::parser::parse;
        use ReplacementRule::*;
        let cases = [
            (Commutation, "p∧q", "q∧p"),
            (Commutation, "p∨q", "q∨p"),
            (Association, "p∧(q∧r)", "(p∧q)∧r"),
            (Association, "p∨(q∨r)", "(p∨q)∨r"),
            (DeMorgan, "¬(p∨q)", "¬p∧¬q"),
            (Distribution, "p∧(q∨r)", "(p∧q)∨(p∧r)"),
            (Distribution, "p∨(q∧r)", "(p∨q)∧(p∨r)"),
            (Transposition, "p→q", "¬q→¬p"),
            (MaterialEquivalence, "p↔q", "(p→q)∧(q→p)"),
            (MaterialEquivalence, "p↔q", "(p∧q)∨(¬p∧¬q)"),
            (Exportation, "(p∧q)→r", "p→(q→r)"),
            (Tautology, "p∧p", "p"),
            (Tautology, "p∨p", "p"),
        ];
        for (rule, from, to) in cases {
            let from = parse(&from.parse().unwrap()).unwrap();
            let to = parse(&to.parse().unwrap()).unwrap();
            assert!(
                is_valid_replacement(rule, &from, &to),
                "{}: {} should rewrite to {}",
                rule,
                from,
                to
            );
            assert!(
                is_valid_replacement(rule, &to, &from),
                "{}: {} should rewrite back to {}",
                rule,
                to,
                from
            );
        }
    }
}
