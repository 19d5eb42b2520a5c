//! Planned problem generator
//!
//! Two-phase algorithm: build an abstract proof shape ([`plan`]), then fill
//! it with concrete, mutually consistent formulas ([`solve`]). An attempt
//! whose plan cannot be filled is abandoned wholesale and replanned: plan
//! shape and variable draws are entangled, so a shape that cannot be filled
//! consistently must be replanned, not patched.

pub mod plan;
pub mod solve;

pub use plan::{build_plan, Plan, PlanNode, Shape};
pub use solve::{solve, VarLists};

use crate::inference::Application;
use crate::proof::{Justification, Proof};
use crate::prop::{Formula, SyntaxTree};
use serde::{Deserialize, Serialize};

/// Configuration for the generator's budgets
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Full plan-and-solve attempts before reporting failure
    pub max_attempts: usize,
    /// Solve retries per internal plan node
    pub node_retries: usize,
    /// Candidate formulas tried per leaf
    pub leaf_candidates: usize,
    /// Probability of expanding all of a node's children (bushy proofs)
    /// rather than a single one (deep chains)
    pub branch_probability: f64,
    /// Seed for the random stream; generation is reproducible per seed
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            max_attempts: 50,
            node_retries: 10,
            leaf_candidates: 8,
            branch_probability: 0.3,
            seed: 12345,
        }
    }
}

/// Linear-congruential random stream
#[derive(Debug, Clone)]
pub struct Lcg {
    state: u64,
}

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Lcg { state: seed }
    }

    /// Random float in [0, 1)
    pub fn next_random(&mut self) -> f64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1);
        (self.state >> 33) as f64 / (1u64 << 31) as f64
    }

    /// Random index below `n` (n must be nonzero)
    pub fn next_below(&mut self, n: usize) -> usize {
        debug_assert!(n > 0);
        ((self.next_random() * n as f64) as usize).min(n - 1)
    }

    /// Bernoulli draw
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_random() < p
    }
}

/// A generated (or imported) proof problem
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    pub id: String,
    pub name: String,
    pub premises: Vec<Formula>,
    pub goal: Formula,
    pub difficulty: u32,
    /// The generator's derivation tree, kept for pruning and explanation.
    /// Imported problems carry `None`.
    pub derivation: Option<Application>,
}

impl Problem {
    /// Mechanically replay the stored derivation tree as a justified proof:
    /// premises first, then one inference line per internal node in
    /// dependency order. Returns `None` when no derivation is stored.
    pub fn as_proof(&self) -> Option<Proof> {
        let root = self.derivation.as_ref()?;
        let mut proof = Proof::new();
        let mut emitted: Vec<(SyntaxTree, usize)> = Vec::new();
        for leaf in root.premise_leaves() {
            let number = proof.add(leaf.conclusion.render(), Justification::Premise, 0);
            emitted.push((leaf.conclusion.clone(), number));
        }
        emit_lines(root, &mut proof, &mut emitted);
        Some(proof)
    }
}

/// Emit the inference line for an application, emitting its children first.
/// A conclusion already on some line is cited instead of re-derived.
fn emit_lines(app: &Application, proof: &mut Proof, emitted: &mut Vec<(SyntaxTree, usize)>) -> usize {
    if let Some((_, number)) = emitted.iter().find(|(tree, _)| *tree == app.conclusion) {
        return *number;
    }
    let lines: Vec<usize> = app
        .children
        .iter()
        .map(|child| emit_lines(child, proof, emitted))
        .collect();
    let number = proof.add(
        app.conclusion.render(),
        Justification::Inference {
            rule: app.rule,
            lines,
        },
        0,
    );
    emitted.push((app.conclusion.clone(), number));
    number
}

/// The problem generator. Successive calls draw from one random stream, so
/// a single generator yields a variety of problems; the seed makes the whole
/// sequence reproducible.
#[derive(Debug)]
pub struct Generator {
    config: GeneratorConfig,
    rng: Lcg,
    produced: usize,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        let rng = Lcg::new(config.seed);
        Generator {
            config,
            rng,
            produced: 0,
        }
    }

    /// Generate a problem at the requested difficulty.
    ///
    /// Difficulty monotonically increases the step budget of the plan; it is
    /// a budget, not a hard guarantee. Returns `None` once the attempt
    /// budget is exhausted, an expected outcome the caller handles, e.g. by
    /// asking for a lower difficulty.
    pub fn generate(&mut self, difficulty: u32) -> Option<Problem> {
        let difficulty = difficulty.clamp(1, 10);
        for _ in 0..self.config.max_attempts {
            let plan = build_plan(difficulty, &self.config, &mut self.rng);
            let mut vars = VarLists::new(alphabet(difficulty));
            let root = match solve(&plan, &self.config, &mut self.rng, &mut vars) {
                Some(root) => root,
                None => continue,
            };
            if let Some(problem) = self.accept(root, difficulty) {
                return Some(problem);
            }
        }
        None
    }

    /// Global acceptance filters over a solved derivation
    fn accept(&mut self, root: Application, difficulty: u32) -> Option<Problem> {
        let leaves = root.premise_leaves();
        if leaves.is_empty() {
            return None;
        }
        // No premise may repeat the goal: that problem would be trivial
        if leaves.iter().any(|leaf| leaf.conclusion == root.conclusion) {
            return None;
        }
        // No atomic assertion may appear both positive and negated across
        // the premise set. VarLists enforces this during the solve; this is
        // the final whole-problem check.
        let mut assertions: Vec<SyntaxTree> = Vec::new();
        for leaf in &leaves {
            for assertion in leaf.conclusion.atomic_assertions() {
                if assertions.iter().any(|prior| mutually_negating(prior, &assertion)) {
                    return None;
                }
                assertions.push(assertion);
            }
        }
        // The stored tree must re-derive its own conclusion
        if !root.replay() {
            return None;
        }

        let premises: Vec<Formula> = leaves.iter().map(|leaf| leaf.conclusion.render()).collect();
        let goal = root.conclusion.render();
        self.produced += 1;
        Some(Problem {
            id: format!("generated-{}", self.produced),
            name: format!("Practice problem {}", self.produced),
            premises,
            goal,
            difficulty,
            derivation: Some(root),
        })
    }
}

/// Variable window for a difficulty: a few letters more than the proof is
/// deep, so draws collide often enough to chain but rarely enough to avoid
/// constant contradictions.
fn alphabet(difficulty: u32) -> impl Iterator<Item = char> {
    ('a'..='z').take((3 + difficulty as usize).min(26))
}

fn mutually_negating(a: &SyntaxTree, b: &SyntaxTree) -> bool {
    *a == SyntaxTree::not(b.clone()) || *b == SyntaxTree::not(a.clone())
}

/// Generate a problem with the default configuration.
pub fn generate(difficulty: u32) -> Option<Problem> {
    Generator::new(GeneratorConfig::default()).generate(difficulty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prop::SyntaxTree as T;

    #[test]
    fn test_lcg_is_deterministic_and_in_range() {
        let mut a = Lcg::new(42);
        let mut b = Lcg::new(42);
        for _ in 0..100 {
            let x = a.next_random();
            assert_eq!(x, b.next_random());
            assert!((0.0..1.0).contains(&x));
        }
        for n in [1usize, 2, 7] {
            for _ in 0..50 {
                assert!(a.next_below(n) < n);
            }
        }
    }

    #[test]
    fn test_mutually_negating() {
        assert!(mutually_negating(&T::var('p'), &T::not(T::var('p'))));
        assert!(mutually_negating(&T::not(T::var('p')), &T::var('p')));
        assert!(!mutually_negating(&T::var('p'), &T::var('p')));
        assert!(!mutually_negating(&T::var('p'), &T::var('q')));
    }

    #[test]
    fn test_trivial_problem_rejected() {
        // A derivation whose goal equals a premise is filtered out
        let leaf = Application::assumption(T::var('p'));
        let mut generator = Generator::new(GeneratorConfig::default());
        assert!(generator.accept(leaf, 1).is_none());
    }

    #[test]
    fn test_alphabet_scales_and_caps() {
        assert_eq!(alphabet(1).count(), 4);
        assert_eq!(alphabet(10).count(), 13);
        assert!(alphabet(10).all(|c| c.is_ascii_lowercase()));
    }
}
