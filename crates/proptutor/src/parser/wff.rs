//! Precedence-climbing parser and well-formedness checker
//!
//! The grammar, lowest to highest binding:
//!
//! ```text
//! implication ::= disjunction (('→' | '↔') implication)?    right-associative
//! disjunction ::= conjunction ('∨' conjunction)*            left-associative
//! conjunction ::= unary ('∧' unary)*                        left-associative
//! unary       ::= '¬' unary | variable | '(' implication ')'
//! ```

use crate::prop::{Formula, Operator, Symbol, SyntaxTree};

/// Parse a formula into a syntax tree.
///
/// Returns `None` on empty input, unmatched parentheses, trailing symbols,
/// or an operator missing an operand.
pub fn parse(formula: &Formula) -> Option<SyntaxTree> {
    let (rest, tree) = implication(&formula.symbols)?;
    if rest.is_empty() {
        Some(tree)
    } else {
        None
    }
}

/// Re-render a formula with minimal parenthesization.
///
/// Structurally identical formulas normalize to the same symbol sequence
/// regardless of surface parenthesization. Returns `None` iff the input does
/// not parse. Idempotent: normalizing a normalized formula is a no-op.
pub fn normalize(formula: &Formula) -> Option<Formula> {
    parse(formula).map(|tree| tree.render())
}

fn implication(input: &[Symbol]) -> Option<(&[Symbol], SyntaxTree)> {
    let (input, left) = disjunction(input)?;
    match input.first() {
        Some(Symbol::Op(op @ (Operator::Implies | Operator::Iff))) => {
            let (input, right) = implication(&input[1..])?;
            Some((input, SyntaxTree::Binary(*op, Box::new(left), Box::new(right))))
        }
        _ => Some((input, left)),
    }
}

fn disjunction(input: &[Symbol]) -> Option<(&[Symbol], SyntaxTree)> {
    let (mut input, mut tree) = conjunction(input)?;
    while let Some(Symbol::Op(Operator::Or)) = input.first() {
        let (rest, right) = conjunction(&input[1..])?;
        tree = SyntaxTree::or(tree, right);
        input = rest;
    }
    Some((input, tree))
}

fn conjunction(input: &[Symbol]) -> Option<(&[Symbol], SyntaxTree)> {
    let (mut input, mut tree) = unary(input)?;
    while let Some(Symbol::Op(Operator::And)) = input.first() {
        let (rest, right) = unary(&input[1..])?;
        tree = SyntaxTree::and(tree, right);
        input = rest;
    }
    Some((input, tree))
}

fn unary(input: &[Symbol]) -> Option<(&[Symbol], SyntaxTree)> {
    match input.first()? {
        Symbol::Op(Operator::Not) => {
            let (input, child) = unary(&input[1..])?;
            Some((input, SyntaxTree::not(child)))
        }
        Symbol::Variable(c) => Some((&input[1..], SyntaxTree::var(*c))),
        Symbol::LeftParen => {
            let (input, tree) = implication(&input[1..])?;
            match input.first()? {
                Symbol::RightParen => Some((&input[1..], tree)),
                _ => None,
            }
        }
        _ => None,
    }
}

/// Grammar-only acceptor: decides well-formedness without building a tree.
///
/// Accepts exactly the formulas [`parse`] accepts; used as a cheap pre-filter
/// before full parsing.
pub fn is_wff(formula: &Formula) -> bool {
    matches!(accept_implication(&formula.symbols), Some(rest) if rest.is_empty())
}

fn accept_implication(input: &[Symbol]) -> Option<&[Symbol]> {
    let input = accept_disjunction(input)?;
    match input.first() {
        Some(Symbol::Op(Operator::Implies | Operator::Iff)) => accept_implication(&input[1..]),
        _ => Some(input),
    }
}

fn accept_disjunction(input: &[Symbol]) -> Option<&[Symbol]> {
    let mut input = accept_conjunction(input)?;
    while let Some(Symbol::Op(Operator::Or)) = input.first() {
        input = accept_conjunction(&input[1..])?;
    }
    Some(input)
}

fn accept_conjunction(input: &[Symbol]) -> Option<&[Symbol]> {
    let mut input = accept_unary(input)?;
    while let Some(Symbol::Op(Operator::And)) = input.first() {
        input = accept_unary(&input[1..])?;
    }
    Some(input)
}

fn accept_unary(input: &[Symbol]) -> Option<&[Symbol]> {
    match input.first()? {
        Symbol::Op(Operator::Not) => accept_unary(&input[1..]),
        Symbol::Variable(_) => Some(&input[1..]),
        Symbol::LeftParen => {
            let input = accept_implication(&input[1..])?;
            match input.first()? {
                Symbol::RightParen => Some(&input[1..]),
                _ => None,
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prop::SyntaxTree as T;

    fn parse_str(s: &str) -> Option<SyntaxTree> {
        parse(&s.parse().unwrap())
    }

    #[test]
    fn test_precedence() {
        // ¬ binds tighter than ∧ than ∨ than →
        let tree = parse_str("¬p∧q∨r→s").unwrap();
        assert_eq!(
            tree,
            T::implies(
                T::or(T::and(T::not(T::var('p')), T::var('q')), T::var('r')),
                T::var('s')
            )
        );
    }

    #[test]
    fn test_associativity() {
        assert_eq!(
            parse_str("p→q→r").unwrap(),
            T::implies(T::var('p'), T::implies(T::var('q'), T::var('r')))
        );
        assert_eq!(
            parse_str("p∧q∧r").unwrap(),
            T::and(T::and(T::var('p'), T::var('q')), T::var('r'))
        );
    }

    #[test]
    fn test_parens_override() {
        assert_eq!(
            parse_str("(p∨q)∧r").unwrap(),
            T::and(T::or(T::var('p'), T::var('q')), T::var('r'))
        );
        // Redundant parens parse to the same tree
        assert_eq!(parse_str("((p))∧(q)").unwrap(), parse_str("p∧q").unwrap());
    }

    #[test]
    fn test_parse_failures() {
        for bad in ["", "p q", "p∧", "∧p", "(p∧q", "p∧q)", "p¬q", "()"] {
            assert_eq!(parse_str(bad), None, "expected {:?} to fail", bad);
        }
    }

    #[test]
    fn test_acceptor_agrees_with_parser() {
        for text in [
            "p", "¬¬p", "p→(q→p)", "(p∧q", "p∧", "", "((p))", "p↔q↔r", "¬(p∨q)∧r",
        ] {
            let formula: Formula = text.parse().unwrap();
            assert_eq!(
                is_wff(&formula),
                parse(&formula).is_some(),
                "acceptor disagrees on {:?}",
                text
            );
        }
    }

    #[test]
    fn test_normalize_strips_redundant_parens() {
        let formula: Formula = "((p→q))∧((r))".parse().unwrap();
        assert_eq!(normalize(&formula).unwrap().to_string(), "(p→q)∧r");
    }

    #[test]
    fn test_normalize_idempotent() {
        let formula: Formula = "(p→(q∨(r∧¬s)))".parse().unwrap();
        let once = normalize(&formula).unwrap();
        let twice = normalize(&once).unwrap();
        assert_eq!(once, twice);
    }
}
