//! Phase 2: top-down constrained solve
//!
//! Resolves a plan from the goal node downward into concrete, mutually
//! consistent formulas. All mutable state lives in [`VarLists`], which is
//! copy-on-branch, commit-on-success: every speculative attempt works on a
//! private clone and only a successful node writes its clone back, so failed
//! branches never leak partial variable commitments.

use super::plan::{Plan, Shape};
use super::{GeneratorConfig, Lcg};
use crate::inference::{possible_conclusions, Application, Rule};
use crate::prop::{Operator, SyntaxTree};
use indexmap::IndexSet;

/// The variable pool of one generation attempt: a partition of the alphabet
/// into `available` letters and `used` atomic assertions (a variable or its
/// direct negation). A variable leaves `available` the moment any assertion
/// over it commits, and from then on only the identical assertion may be
/// reused; the complementary one is a contradiction and is rejected.
#[derive(Debug, Clone)]
pub struct VarLists {
    available: IndexSet<char>,
    used: Vec<SyntaxTree>,
}

impl VarLists {
    pub fn new(alphabet: impl IntoIterator<Item = char>) -> Self {
        VarLists {
            available: alphabet.into_iter().collect(),
            used: Vec::new(),
        }
    }

    pub fn used(&self) -> &[SyntaxTree] {
        &self.used
    }

    /// The variable under an atomic assertion
    fn variable_of(assertion: &SyntaxTree) -> Option<char> {
        match assertion {
            SyntaxTree::Variable(c) => Some(*c),
            SyntaxTree::Unary(Operator::Not, child) => match **child {
                SyntaxTree::Variable(c) => Some(c),
                _ => None,
            },
            _ => None,
        }
    }

    /// Commit one atomic assertion. Reuse of an identical assertion succeeds;
    /// an assertion over a used variable with the opposite polarity fails.
    pub fn claim(&mut self, assertion: &SyntaxTree) -> bool {
        let var = match Self::variable_of(assertion) {
            Some(var) => var,
            None => return false,
        };
        if self.used.contains(assertion) {
            return true;
        }
        if self.used.iter().any(|u| Self::variable_of(u) == Some(var)) {
            return false;
        }
        if !self.available.shift_remove(&var) {
            return false;
        }
        self.used.push(assertion.clone());
        true
    }

    /// Commit every atomic assertion of a formula. May leave a partial
    /// commitment behind on failure; callers work on a clone and discard it
    /// (copy-on-branch).
    pub fn claim_all(&mut self, tree: &SyntaxTree) -> bool {
        tree.atomic_assertions()
            .iter()
            .all(|assertion| self.claim(assertion))
    }

    /// Draw a random atom: any reusable used assertion, or a fresh variable
    /// with random polarity. `avoid` excludes variables (for drawing the two
    /// distinct atoms of a binary leaf).
    pub fn random_atom(&self, rng: &mut Lcg, avoid: &[char]) -> Option<SyntaxTree> {
        let mut candidates: Vec<SyntaxTree> = self
            .used
            .iter()
            .filter(|u| Self::variable_of(u).map_or(false, |v| !avoid.contains(&v)))
            .cloned()
            .collect();
        for &var in &self.available {
            if !avoid.contains(&var) {
                candidates.push(SyntaxTree::var(var));
                candidates.push(SyntaxTree::not(SyntaxTree::var(var)));
            }
        }
        if candidates.is_empty() {
            None
        } else {
            Some(candidates[rng.next_below(candidates.len())].clone())
        }
    }

    /// Draw a random bare variable (used positively or still available)
    fn random_bare(&self, rng: &mut Lcg) -> Option<SyntaxTree> {
        let mut candidates: Vec<SyntaxTree> = self
            .used
            .iter()
            .filter(|u| matches!(u, SyntaxTree::Variable(_)))
            .cloned()
            .collect();
        candidates.extend(self.available.iter().map(|&var| SyntaxTree::var(var)));
        if candidates.is_empty() {
            None
        } else {
            Some(candidates[rng.next_below(candidates.len())].clone())
        }
    }
}

/// Solve a plan against a fresh variable pool. Returns the root application
/// of the concrete derivation tree, or `None` when the plan cannot be filled
/// within its retry budgets (the caller then replans from scratch).
pub fn solve(
    plan: &Plan,
    config: &GeneratorConfig,
    rng: &mut Lcg,
    vars: &mut VarLists,
) -> Option<Application> {
    solve_node(plan, Plan::ROOT, config, rng, vars)
}

fn solve_node(
    plan: &Plan,
    idx: usize,
    config: &GeneratorConfig,
    rng: &mut Lcg,
    vars: &mut VarLists,
) -> Option<Application> {
    let node = &plan.nodes[idx];
    match node.rule {
        None => solve_leaf(node.shape, config, rng, vars),
        Some(rule) => {
            for _ in 0..config.node_retries {
                let mut speculative = vars.clone();
                if let Some(app) = try_rule(plan, idx, rule, config, rng, &mut speculative) {
                    *vars = speculative;
                    return Some(app);
                }
            }
            None
        }
    }
}

/// One attempt at an internal node: solve the children, feed their
/// conclusions through the forward engine, and keep a conclusion matching
/// the node's shape constraint.
fn try_rule(
    plan: &Plan,
    idx: usize,
    rule: Rule,
    config: &GeneratorConfig,
    rng: &mut Lcg,
    vars: &mut VarLists,
) -> Option<Application> {
    let node = &plan.nodes[idx];
    let mut children = Vec::with_capacity(node.children.len());
    for &child_idx in &node.children {
        children.push(solve_node(plan, child_idx, config, rng, vars)?);
    }
    let premises: Vec<SyntaxTree> = children.iter().map(|c| c.conclusion.clone()).collect();

    // Addition's novel disjunct is drawn from the pool
    let extras = match rule {
        Rule::Addition => vec![vars.random_atom(rng, &[])?],
        _ => Vec::new(),
    };

    let viable: Vec<Application> = possible_conclusions(rule, &premises, &extras)
        .into_iter()
        .filter(|app| node.shape.admits(&app.conclusion))
        .collect();
    if viable.is_empty() {
        return None;
    }
    let mut app = viable[rng.next_below(viable.len())].clone();
    // Only Addition introduces material absent from the premises; its novel
    // disjunct must be committed to the pool.
    if rule == Rule::Addition && !vars.claim_all(&app.conclusion) {
        return None;
    }

    // Attach the children that actually produced the premises; children whose
    // conclusion the chosen application does not consume are dead leaves and
    // are dropped here.
    let attached: Option<Vec<Application>> = app
        .premises
        .iter()
        .map(|premise| {
            children
                .iter()
                .find(|child| child.conclusion == *premise)
                .cloned()
        })
        .collect();
    app.children = attached?;
    Some(app)
}

/// Enumerate candidate concrete formulas for a leaf until one is consistent
/// with everything already committed.
fn solve_leaf(
    shape: Shape,
    config: &GeneratorConfig,
    rng: &mut Lcg,
    vars: &mut VarLists,
) -> Option<Application> {
    for _ in 0..config.leaf_candidates {
        let candidate = match random_formula(shape, rng, vars) {
            Some(candidate) => candidate,
            None => continue,
        };
        let mut speculative = vars.clone();
        if speculative.claim_all(&candidate) {
            *vars = speculative;
            return Some(Application::assumption(candidate));
        }
    }
    None
}

/// A random concrete formula of the requested shape, built from pool atoms
fn random_formula(shape: Shape, rng: &mut Lcg, vars: &VarLists) -> Option<SyntaxTree> {
    match shape {
        Shape::Atomic => vars.random_bare(rng),
        Shape::Negation => Some(SyntaxTree::not(vars.random_atom(rng, &[])?)),
        Shape::Implication | Shape::Conjunction | Shape::Disjunction => {
            let left = vars.random_atom(rng, &[])?;
            let avoid = [VarLists::variable_of(&left)?];
            let right = vars.random_atom(rng, &avoid)?;
            Some(match shape {
                Shape::Implication => SyntaxTree::implies(left, right),
                Shape::Conjunction => SyntaxTree::and(left, right),
                _ => SyntaxTree::or(left, right),
            })
        }
        Shape::Any => match rng.next_below(6) {
            0 | 1 => vars.random_bare(rng),
            2 => Some(SyntaxTree::not(vars.random_atom(rng, &[])?)),
            3 => random_formula(Shape::Implication, rng, vars),
            4 => random_formula(Shape::Conjunction, rng, vars),
            _ => random_formula(Shape::Disjunction, rng, vars),
        },
    }
}
