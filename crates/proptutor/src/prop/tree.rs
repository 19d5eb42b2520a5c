//! Formula syntax trees
//!
//! Trees compare structurally (deep value equality), which is the basis for
//! every "is this the same formula" check in the engine. Parenthesization is
//! a property of the rendered symbol sequence, never of the tree.

use super::formula::Formula;
use super::symbol::{Operator, Symbol};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A parsed formula
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SyntaxTree {
    Variable(char),
    Unary(Operator, Box<SyntaxTree>),
    Binary(Operator, Box<SyntaxTree>, Box<SyntaxTree>),
}

impl SyntaxTree {
    pub fn var(name: char) -> SyntaxTree {
        SyntaxTree::Variable(name)
    }

    pub fn not(child: SyntaxTree) -> SyntaxTree {
        SyntaxTree::Unary(Operator::Not, Box::new(child))
    }

    pub fn and(left: SyntaxTree, right: SyntaxTree) -> SyntaxTree {
        SyntaxTree::Binary(Operator::And, Box::new(left), Box::new(right))
    }

    pub fn or(left: SyntaxTree, right: SyntaxTree) -> SyntaxTree {
        SyntaxTree::Binary(Operator::Or, Box::new(left), Box::new(right))
    }

    pub fn implies(left: SyntaxTree, right: SyntaxTree) -> SyntaxTree {
        SyntaxTree::Binary(Operator::Implies, Box::new(left), Box::new(right))
    }

    pub fn iff(left: SyntaxTree, right: SyntaxTree) -> SyntaxTree {
        SyntaxTree::Binary(Operator::Iff, Box::new(left), Box::new(right))
    }

    /// Binding strength of the tree's top node. Atoms bind tighter than any
    /// connective.
    pub fn precedence(&self) -> u8 {
        match self {
            SyntaxTree::Variable(_) => 5,
            SyntaxTree::Unary(op, _) => op.precedence(),
            SyntaxTree::Binary(op, _, _) => op.precedence(),
        }
    }

    /// All variable names in this tree, in order of first appearance
    pub fn variables(&self) -> Vec<char> {
        let mut vars = Vec::new();
        self.collect_variables(&mut vars);
        vars
    }

    fn collect_variables(&self, vars: &mut Vec<char>) {
        match self {
            SyntaxTree::Variable(c) => {
                if !vars.contains(c) {
                    vars.push(*c);
                }
            }
            SyntaxTree::Unary(_, child) => child.collect_variables(vars),
            SyntaxTree::Binary(_, left, right) => {
                left.collect_variables(vars);
                right.collect_variables(vars);
            }
        }
    }

    /// The atomic assertions of this tree: every bare-variable occurrence and
    /// every directly negated variable, with the polarity it appears under.
    /// Negations of compound subtrees contribute the assertions of their
    /// children, not a negated assertion.
    pub fn atomic_assertions(&self) -> Vec<SyntaxTree> {
        let mut out = Vec::new();
        self.collect_atomic_assertions(&mut out);
        out
    }

    fn collect_atomic_assertions(&self, out: &mut Vec<SyntaxTree>) {
        match self {
            SyntaxTree::Variable(_) => {
                if !out.contains(self) {
                    out.push(self.clone());
                }
            }
            SyntaxTree::Unary(Operator::Not, child) => {
                if matches!(**child, SyntaxTree::Variable(_)) {
                    if !out.contains(self) {
                        out.push(self.clone());
                    }
                } else {
                    child.collect_atomic_assertions(out);
                }
            }
            SyntaxTree::Unary(_, child) => child.collect_atomic_assertions(out),
            SyntaxTree::Binary(_, left, right) => {
                left.collect_atomic_assertions(out);
                right.collect_atomic_assertions(out);
            }
        }
    }

    /// The immediate subtrees of the top node
    pub fn subtrees(&self) -> Vec<&SyntaxTree> {
        match self {
            SyntaxTree::Variable(_) => vec![],
            SyntaxTree::Unary(_, child) => vec![child.as_ref()],
            SyntaxTree::Binary(_, left, right) => vec![left.as_ref(), right.as_ref()],
        }
    }

    /// Render this tree as a formula with minimal parenthesization.
    ///
    /// Re-parsing the result yields a structurally equal tree.
    pub fn render(&self) -> Formula {
        let mut symbols = Vec::new();
        self.render_into(&mut symbols);
        Formula::new(symbols)
    }

    fn render_into(&self, out: &mut Vec<Symbol>) {
        match self {
            SyntaxTree::Variable(c) => out.push(Symbol::Variable(*c)),
            SyntaxTree::Unary(op, child) => {
                out.push(Symbol::Op(*op));
                // A binary child re-parses against the negation without parens
                self.render_child(child, child.precedence() < op.precedence(), out);
            }
            SyntaxTree::Binary(op, left, right) => {
                let p = op.precedence();
                // The operand on the non-associating side must be grouped when
                // it sits at the same precedence level.
                let group_left =
                    left.precedence() < p || (left.precedence() == p && op.is_right_associative());
                let group_right = right.precedence() < p
                    || (right.precedence() == p && !op.is_right_associative());
                self.render_child(left, group_left, out);
                out.push(Symbol::Op(*op));
                self.render_child(right, group_right, out);
            }
        }
    }

    fn render_child(&self, child: &SyntaxTree, grouped: bool, out: &mut Vec<Symbol>) {
        if grouped {
            out.push(Symbol::LeftParen);
            child.render_into(out);
            out.push(Symbol::RightParen);
        } else {
            child.render_into(out);
        }
    }
}

impl fmt::Display for SyntaxTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}
