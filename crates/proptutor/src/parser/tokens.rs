//! Tokenizer for formula text
//!
//! Accepts both the canonical connective glyphs (`¬ ∧ ∨ → ↔`) and the ASCII
//! aliases used by the plain-text problem format (`~ & | -> <->`).

use crate::prop::{Formula, Operator, Symbol};
use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{char, multispace0, satisfy},
    combinator::{map, value},
    multi::many0,
    sequence::preceded,
    IResult,
};
use std::str::FromStr;

/// Parse one symbol, skipping leading whitespace. Multi-character aliases are
/// tried before their single-character prefixes.
fn symbol(input: &str) -> IResult<&str, Symbol> {
    preceded(
        multispace0,
        alt((
            value(Symbol::Op(Operator::Iff), alt((tag("<->"), tag("↔")))),
            value(Symbol::Op(Operator::Implies), alt((tag("->"), tag("→")))),
            value(Symbol::Op(Operator::Not), alt((tag("~"), tag("¬")))),
            value(Symbol::Op(Operator::And), alt((tag("&"), tag("∧")))),
            value(Symbol::Op(Operator::Or), alt((tag("|"), tag("∨")))),
            value(Symbol::LeftParen, char('(')),
            value(Symbol::RightParen, char(')')),
            map(satisfy(|c: char| c.is_ascii_alphabetic()), Symbol::Variable),
        )),
    )(input)
}

/// Tokenize formula text into a symbol sequence.
///
/// Fails if anything other than whitespace is left unconsumed. An empty
/// input tokenizes to an empty (and therefore ill-formed) formula; rejecting
/// it is the parser's job.
pub fn tokenize(input: &str) -> Result<Vec<Symbol>, String> {
    let (rest, symbols) =
        many0(symbol)(input).map_err(|e| format!("failed to tokenize formula: {:?}", e))?;
    let rest = rest.trim();
    if !rest.is_empty() {
        return Err(format!("unrecognized symbol at '{}'", rest));
    }
    Ok(symbols)
}

impl FromStr for Formula {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        tokenize(s).map(Formula::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_glyphs() {
        let f: Formula = "¬(p∧q)→r↔s∨t".parse().unwrap();
        assert_eq!(f.to_string(), "¬(p∧q)→r↔s∨t");
    }

    #[test]
    fn test_ascii_aliases() {
        let f: Formula = "~(p & q) -> r <-> s | t".parse().unwrap();
        assert_eq!(f.to_string(), "¬(p∧q)→r↔s∨t");
    }

    #[test]
    fn test_alias_longest_match() {
        // "<->" must not tokenize as "<" (error) or as "-" ">"
        let f: Formula = "p<->q".parse().unwrap();
        assert_eq!(f.symbols[1], Symbol::Op(Operator::Iff));
        // "->" inside "<->" only when preceded by "<"
        let f: Formula = "p->q".parse().unwrap();
        assert_eq!(f.symbols[1], Symbol::Op(Operator::Implies));
    }

    #[test]
    fn test_rejects_garbage() {
        assert!("p + q".parse::<Formula>().is_err());
        assert!("p → 2".parse::<Formula>().is_err());
    }

    #[test]
    fn test_whitespace_only_is_empty() {
        let f: Formula = "   ".parse().unwrap();
        assert!(f.is_empty());
    }
}
