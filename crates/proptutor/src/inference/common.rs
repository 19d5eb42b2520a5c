//! Common types and utilities for inference rules

use super::Rule;
use crate::prop::{Operator, SyntaxTree};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The result of firing a rule: the conclusion, the rule used, and the
/// premises consumed. The generator additionally links in the child
/// applications that produced those premises, forming a derivation tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    pub rule: Rule,
    pub premises: Vec<SyntaxTree>,
    pub conclusion: SyntaxTree,
    /// Child applications producing the premises (generator use only)
    pub children: Vec<Application>,
}

impl Application {
    /// Create an application with no derivation children
    pub fn new(rule: Rule, premises: Vec<SyntaxTree>, conclusion: SyntaxTree) -> Self {
        Application {
            rule,
            premises,
            conclusion,
            children: Vec::new(),
        }
    }

    /// Create an Assumption leaf (a premise of the eventual problem)
    pub fn assumption(conclusion: SyntaxTree) -> Self {
        Application::new(Rule::Assumption, Vec::new(), conclusion)
    }

    pub fn is_assumption(&self) -> bool {
        self.rule == Rule::Assumption
    }

    /// The distinct assumption leaves of this derivation tree, in discovery
    /// order. These are the premises of the problem the tree derives.
    pub fn premise_leaves(&self) -> Vec<&Application> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a Application>) {
        if self.is_assumption() {
            if !out.iter().any(|leaf| leaf.conclusion == self.conclusion) {
                out.push(self);
            }
        } else {
            for child in &self.children {
                child.collect_leaves(out);
            }
        }
    }

    /// Re-run the forward engine over the stored derivation: every internal
    /// node's premises must be its children's conclusions, and every
    /// inference must check out.
    pub fn replay(&self) -> bool {
        if self.is_assumption() {
            return self.children.is_empty();
        }
        self.premises
            .iter()
            .all(|p| self.children.iter().any(|c| c.conclusion == *p))
            && self.children.iter().all(Application::replay)
            && super::is_valid_inference(self.rule, &self.premises, &self.conclusion)
    }
}

impl fmt::Display for Application {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}", self.conclusion, self.rule)?;
        for (i, premise) in self.premises.iter().enumerate() {
            write!(f, "{} {}", if i == 0 { ":" } else { "," }, premise)?;
        }
        write!(f, "]")
    }
}

/// Destructure an implication
pub fn as_implication(tree: &SyntaxTree) -> Option<(&SyntaxTree, &SyntaxTree)> {
    match tree {
        SyntaxTree::Binary(Operator::Implies, left, right) => Some((left, right)),
        _ => None,
    }
}

/// Destructure a conjunction
pub fn as_conjunction(tree: &SyntaxTree) -> Option<(&SyntaxTree, &SyntaxTree)> {
    match tree {
        SyntaxTree::Binary(Operator::And, left, right) => Some((left, right)),
        _ => None,
    }
}

/// Destructure a disjunction
pub fn as_disjunction(tree: &SyntaxTree) -> Option<(&SyntaxTree, &SyntaxTree)> {
    match tree {
        SyntaxTree::Binary(Operator::Or, left, right) => Some((left, right)),
        _ => None,
    }
}

/// Destructure a negation
pub fn as_negation(tree: &SyntaxTree) -> Option<&SyntaxTree> {
    match tree {
        SyntaxTree::Unary(Operator::Not, child) => Some(child),
        _ => None,
    }
}

/// All ordered pairs of distinct indices below `n`
pub fn ordered_pairs(n: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..n).flat_map(move |i| (0..n).filter(move |&j| j != i).map(move |j| (i, j)))
}

/// Append an application unless an identical one is already present.
/// Conclusion sets are small, so a linear scan is fine.
pub fn push_unique(out: &mut Vec<Application>, app: Application) {
    if !out.contains(&app) {
        out.push(app);
    }
}
