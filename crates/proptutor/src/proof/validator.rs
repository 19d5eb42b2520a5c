//! Proof validation
//!
//! Replays a submitted proof line by line, tracking sub-proof scope with a
//! stack of open frames. Closing a sub-proof discards its frame, so lines
//! inside a closed sub-proof are out of scope for every later reference even
//! when their nesting depth is numerically admissible.

use super::{Justification, Proof, ValidationResult};
use crate::inference::{is_valid_inference, is_valid_replacement, Rule};
use crate::parser::parse;
use crate::prop::{Operator, SyntaxTree};
use indexmap::IndexMap;

/// One open scope: the line that opened it (None for the top level) and the
/// lines proven directly at its depth.
struct Frame {
    assumption: Option<usize>,
    lines: Vec<usize>,
}

/// Validate an entire proof.
///
/// Returns on the first failure with the offending line number; validation
/// errors are recoverable by edit-and-resubmit, never fatal.
pub fn validate(proof: &Proof) -> ValidationResult {
    let mut proven: IndexMap<usize, SyntaxTree> = IndexMap::new();
    let mut frames: Vec<Frame> = vec![Frame {
        assumption: None,
        lines: Vec::new(),
    }];

    for (index, line) in proof.lines.iter().enumerate() {
        let n = line.number;
        if n != index + 1 {
            return ValidationResult::error(n, "proof lines must be numbered consecutively from 1");
        }

        let tree = match parse(&line.formula) {
            Some(tree) => tree,
            None => {
                return ValidationResult::error(
                    n,
                    format!("'{}' is not a well-formed formula", line.formula),
                )
            }
        };

        let prev_depth = frames.len() - 1;

        match &line.justification {
            Justification::Assumption => {
                if line.depth != prev_depth + 1 {
                    return ValidationResult::error(
                        n,
                        "an assumption must open a new sub-proof one level deeper",
                    );
                }
                frames.push(Frame {
                    assumption: Some(n),
                    lines: Vec::new(),
                });
            }

            Justification::ImplicationIntroduction { start, end }
            | Justification::ReductioAdAbsurdum { start, end, .. } => {
                if prev_depth == 0 {
                    return ValidationResult::error(n, "there is no open sub-proof to close");
                }
                if line.depth != prev_depth - 1 {
                    return ValidationResult::error(
                        n,
                        "a closing line must sit exactly one level outside its sub-proof",
                    );
                }
                let closed = frames.pop().expect("depth checked above");
                if closed.assumption != Some(*start) {
                    return ValidationResult::error(
                        n,
                        format!("line {} is not the assumption of the sub-proof being closed", start),
                    );
                }
                if closed.lines.last() != Some(end) {
                    return ValidationResult::error(
                        n,
                        format!("line {} is not the last line of the sub-proof being closed", end),
                    );
                }
                let assumption_tree = &proven[start];
                let end_tree = &proven[end];

                match &line.justification {
                    Justification::ImplicationIntroduction { .. } => {
                        let expected =
                            SyntaxTree::implies(assumption_tree.clone(), end_tree.clone());
                        if tree != expected {
                            return ValidationResult::error(
                                n,
                                format!(
                                    "closing a sub-proof from {} must conclude {}",
                                    start, expected
                                ),
                            );
                        }
                    }
                    Justification::ReductioAdAbsurdum { contradiction, .. } => {
                        if !closed.lines.contains(contradiction) {
                            return ValidationResult::error(
                                n,
                                format!("line {} is not inside the closed sub-proof", contradiction),
                            );
                        }
                        if !is_contradiction(&proven[contradiction]) {
                            return ValidationResult::error(
                                n,
                                format!(
                                    "line {} is not a contradiction of the form X∧¬X",
                                    contradiction
                                ),
                            );
                        }
                        let expected = SyntaxTree::not(assumption_tree.clone());
                        if tree != expected {
                            return ValidationResult::error(
                                n,
                                format!("reductio must conclude {}", expected),
                            );
                        }
                    }
                    _ => unreachable!(),
                }
            }

            other => {
                if line.depth != prev_depth {
                    return ValidationResult::error(
                        n,
                        "only an assumption may deepen, and only a closing line may leave, a sub-proof",
                    );
                }
                match other {
                    Justification::Premise => {
                        if prev_depth != 0 {
                            return ValidationResult::error(
                                n,
                                "premises are only allowed at the top level",
                            );
                        }
                    }
                    Justification::Inference { rule, lines } => {
                        if *rule == Rule::Assumption {
                            return ValidationResult::error(n, "Assumption is not an inference rule");
                        }
                        for target in lines {
                            if !in_scope(&frames, *target) {
                                return ValidationResult::error(
                                    n,
                                    format!("line {} is not in scope", target),
                                );
                            }
                        }
                        let cited: Vec<SyntaxTree> =
                            lines.iter().map(|target| proven[target].clone()).collect();
                        if !is_valid_inference(*rule, &cited, &tree) {
                            return ValidationResult::error(
                                n,
                                format!("'{}' does not follow from the cited lines by {}", line.formula, rule),
                            );
                        }
                    }
                    Justification::Replacement { rule, line: target } => {
                        if !in_scope(&frames, *target) {
                            return ValidationResult::error(
                                n,
                                format!("line {} is not in scope", target),
                            );
                        }
                        if !is_valid_replacement(*rule, &proven[target], &tree) {
                            return ValidationResult::error(
                                n,
                                format!("'{}' is not a {} rewrite of line {}", line.formula, rule, target),
                            );
                        }
                    }
                    Justification::Reiteration { line: target } => {
                        if !in_scope(&frames, *target) {
                            return ValidationResult::error(
                                n,
                                format!("line {} is not in scope", target),
                            );
                        }
                        if proven[target] != tree {
                            return ValidationResult::error(
                                n,
                                format!("reiteration must repeat line {} exactly", target),
                            );
                        }
                    }
                    _ => unreachable!("handled in the outer match"),
                }
            }
        }

        frames
            .last_mut()
            .expect("the top-level frame is never popped")
            .lines
            .push(n);
        proven.insert(n, tree);
    }

    ValidationResult::valid()
}

/// A line is in scope iff every sub-proof containing it is still open
fn in_scope(frames: &[Frame], target: usize) -> bool {
    frames.iter().any(|frame| frame.lines.contains(&target))
}

/// X∧¬X, by structural equality of the conjuncts
fn is_contradiction(tree: &SyntaxTree) -> bool {
    if let SyntaxTree::Binary(Operator::And, left, right) = tree {
        if let SyntaxTree::Unary(Operator::Not, negated) = &**right {
            return negated == left;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proof::Justification as J;

    fn line(proof: &mut Proof, formula: &str, justification: J, depth: usize) -> usize {
        proof.add(formula.parse().unwrap(), justification, depth)
    }

    #[test]
    fn test_modus_ponens_proof() {
        let mut proof = Proof::new();
        line(&mut proof, "p→q", J::Premise, 0);
        line(&mut proof, "p", J::Premise, 0);
        line(
            &mut proof,
            "q",
            J::Inference {
                rule: Rule::ModusPonens,
                lines: vec![1, 2],
            },
            0,
        );
        assert!(validate(&proof).is_valid);
    }

    #[test]
    fn test_bad_simplification_rejected() {
        let mut proof = Proof::new();
        line(&mut proof, "p∧q", J::Premise, 0);
        line(
            &mut proof,
            "r",
            J::Inference {
                rule: Rule::Simplification,
                lines: vec![1],
            },
            0,
        );
        let result = validate(&proof);
        assert!(!result.is_valid);
        assert_eq!(result.error_line, Some(2));
    }

    #[test]
    fn test_implication_introduction() {
        // ⊢ p→(q→p)
        let mut proof = Proof::new();
        line(&mut proof, "p", J::Assumption, 1);
        line(&mut proof, "q", J::Assumption, 2);
        line(&mut proof, "p", J::Reiteration { line: 1 }, 2);
        line(
            &mut proof,
            "q→p",
            J::ImplicationIntroduction { start: 2, end: 3 },
            1,
        );
        line(
            &mut proof,
            "p→(q→p)",
            J::ImplicationIntroduction { start: 1, end: 4 },
            0,
        );
        let result = validate(&proof);
        assert!(result.is_valid, "{:?}", result);
    }

    #[test]
    fn test_reductio() {
        // p→q, ¬q ⊢ ¬p
        let mut proof = Proof::new();
        line(&mut proof, "p→q", J::Premise, 0);
        line(&mut proof, "¬q", J::Premise, 0);
        line(&mut proof, "p", J::Assumption, 1);
        line(
            &mut proof,
            "q",
            J::Inference {
                rule: Rule::ModusPonens,
                lines: vec![1, 3],
            },
            1,
        );
        line(
            &mut proof,
            "q∧¬q",
            J::Inference {
                rule: Rule::Conjunction,
                lines: vec![4, 2],
            },
            1,
        );
        line(
            &mut proof,
            "¬p",
            J::ReductioAdAbsurdum {
                start: 3,
                end: 5,
                contradiction: 5,
            },
            0,
        );
        let result = validate(&proof);
        assert!(result.is_valid, "{:?}", result);
    }

    #[test]
    fn test_closed_subproof_out_of_scope() {
        let mut proof = Proof::new();
        line(&mut proof, "p", J::Premise, 0);
        line(&mut proof, "q", J::Assumption, 1);
        line(&mut proof, "p", J::Reiteration { line: 1 }, 1);
        line(
            &mut proof,
            "q→p",
            J::ImplicationIntroduction { start: 2, end: 3 },
            0,
        );
        // Line 3 lives inside the closed sub-proof
        line(&mut proof, "p", J::Reiteration { line: 3 }, 0);
        let result = validate(&proof);
        assert!(!result.is_valid);
        assert_eq!(result.error_line, Some(5));
    }

    #[test]
    fn test_enclosing_scope_reference_succeeds() {
        let mut proof = Proof::new();
        line(&mut proof, "p→q", J::Premise, 0);
        line(&mut proof, "p", J::Assumption, 1);
        // Citing the enclosing top level from inside the sub-proof is fine
        line(
            &mut proof,
            "q",
            J::Inference {
                rule: Rule::ModusPonens,
                lines: vec![1, 2],
            },
            1,
        );
        line(
            &mut proof,
            "p→q",
            J::ImplicationIntroduction { start: 2, end: 3 },
            0,
        );
        assert!(validate(&proof).is_valid);
    }

    #[test]
    fn test_premise_inside_subproof_rejected() {
        let mut proof = Proof::new();
        line(&mut proof, "p", J::Assumption, 1);
        line(&mut proof, "q", J::Premise, 1);
        let result = validate(&proof);
        assert!(!result.is_valid);
        assert_eq!(result.error_line, Some(2));
    }

    #[test]
    fn test_depth_jump_rejected() {
        let mut proof = Proof::new();
        line(&mut proof, "p", J::Premise, 0);
        line(&mut proof, "q", J::Assumption, 2);
        assert!(!validate(&proof).is_valid);
    }

    #[test]
    fn test_malformed_formula_rejected() {
        let mut proof = Proof::new();
        line(&mut proof, "p∧", J::Premise, 0);
        let result = validate(&proof);
        assert!(!result.is_valid);
        assert!(result.error_message.unwrap().contains("well-formed"));
    }

    #[test]
    fn test_replacement_line() {
        let mut proof = Proof::new();
        line(&mut proof, "¬(p∧q)", J::Premise, 0);
        line(
            &mut proof,
            "¬p∨¬q",
            J::Replacement {
                rule: crate::inference::ReplacementRule::DeMorgan,
                line: 1,
            },
            0,
        );
        assert!(validate(&proof).is_valid);
    }
}
