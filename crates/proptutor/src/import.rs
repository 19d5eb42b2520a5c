//! Plain-text problem importer
//!
//! Line-oriented format with case-insensitive directives:
//!
//! ```text
//! Problem Group: Conditional proofs
//! Problem: 1a
//! Premises:
//! p -> q
//! p
//! Goal:
//! q
//! ```
//!
//! Formula lines use the ASCII aliases (`~ & | -> <->`); the tokenizer
//! translates them to canonical symbols before parsing.

use crate::generator::Problem;
use crate::parser::parse;
use crate::prop::Formula;
use nom::{bytes::complete::tag_no_case, combinator::rest, sequence::preceded, IResult};

/// A titled set of imported problems
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemGroup {
    pub title: String,
    pub problems: Vec<Problem>,
}

/// Match a case-insensitive directive line, returning its trimmed payload
fn directive<'a>(name: &str, line: &'a str) -> Option<&'a str> {
    let result: IResult<&str, &str> = preceded(tag_no_case(name), rest)(line);
    result.ok().map(|(_, value)| value.trim())
}

#[derive(PartialEq)]
enum Section {
    None,
    Premises,
    Goal,
}

struct PendingProblem {
    id: String,
    premises: Vec<Formula>,
    goal: Option<Formula>,
}

impl PendingProblem {
    fn finish(self) -> Result<Problem, String> {
        let goal = self
            .goal
            .ok_or_else(|| format!("problem '{}' has no goal", self.id))?;
        Ok(Problem {
            name: self.id.clone(),
            id: self.id,
            premises: self.premises,
            goal,
            difficulty: 0,
            derivation: None,
        })
    }
}

/// Parse a problem file into a group of problems.
///
/// Errors carry the offending line number and reason.
pub fn parse_problem_file(input: &str) -> Result<ProblemGroup, String> {
    let mut title = String::from("Custom problems");
    let mut problems = Vec::new();
    let mut pending: Option<PendingProblem> = None;
    let mut section = Section::None;

    for (index, raw) in input.lines().enumerate() {
        let number = index + 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(value) = directive("problem group:", line) {
            title = value.to_string();
        } else if let Some(value) = directive("problem:", line) {
            if value.is_empty() {
                return Err(format!("line {}: problem directive without an id", number));
            }
            if let Some(done) = pending.take() {
                problems.push(done.finish()?);
            }
            pending = Some(PendingProblem {
                id: value.to_string(),
                premises: Vec::new(),
                goal: None,
            });
            section = Section::None;
        } else if let Some(value) = directive("premises:", line) {
            if !value.is_empty() {
                return Err(format!("line {}: unexpected text after 'Premises:'", number));
            }
            section = Section::Premises;
        } else if let Some(value) = directive("goal:", line) {
            if !value.is_empty() {
                return Err(format!("line {}: unexpected text after 'Goal:'", number));
            }
            section = Section::Goal;
        } else {
            let formula: Formula = line
                .parse()
                .map_err(|e: String| format!("line {}: {}", number, e))?;
            if parse(&formula).is_none() {
                return Err(format!(
                    "line {}: '{}' is not a well-formed formula",
                    number, line
                ));
            }
            let current = pending
                .as_mut()
                .ok_or_else(|| format!("line {}: formula before any 'Problem:' directive", number))?;
            match section {
                Section::Premises => current.premises.push(formula),
                Section::Goal => {
                    if current.goal.is_some() {
                        return Err(format!(
                            "line {}: problem '{}' already has a goal",
                            number, current.id
                        ));
                    }
                    current.goal = Some(formula);
                }
                Section::None => {
                    return Err(format!(
                        "line {}: formula outside 'Premises:' or 'Goal:'",
                        number
                    ))
                }
            }
        }
    }

    if let Some(done) = pending.take() {
        problems.push(done.finish()?);
    }

    Ok(ProblemGroup { title, problems })
}
