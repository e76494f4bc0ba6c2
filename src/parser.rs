//! Recursive-descent parser.
//!
//! Every binary application is fully parenthesized, so one character of
//! lookahead decides each production:
//!
//! - `(` opens either a binary group or a wrapped proposition `(p)`,
//! - `¬` negates a proposition or a binary group,
//! - anything else must be a complete proposition name.
//!
//! # Example
//!
//! ```
//! use truth_table::formula::Formula;
//! use truth_table::parser::parse;
//!
//! let f = parse("(p ^ ¬q)").unwrap();
//! assert_eq!(f, Formula::and(Formula::prop("p"), Formula::not(Formula::prop("q"))));
//! assert_eq!(f.to_string(), "(p ^ ¬q)");
//! ```

use std::str::FromStr;

use log::debug;

use crate::error::{SyntaxError, SyntaxErrorKind};
use crate::formula::{Connective, Formula};
use crate::grammar::{self, CLOSE, NEGATION, OPEN};

/// Parses a formula.
pub fn parse(text: &str) -> Result<Formula, SyntaxError> {
    debug!("parse({:?})", text);
    if text.is_empty() {
        return Err(SyntaxError::at(SyntaxErrorKind::EmptyInput, 0));
    }
    let mut parser = Parser::new(text);
    let formula = parser.expr()?;
    parser.finish()?;
    Ok(formula)
}

impl FromStr for Formula {
    type Err = SyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

struct Parser<'a> {
    text: &'a str,
    /// Byte position of the next unread character.
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Character offset of the cursor, for error reporting.
    fn offset(&self) -> usize {
        self.text[..self.pos].chars().count()
    }

    fn error(&self, kind: SyntaxErrorKind) -> SyntaxError {
        SyntaxError::at(kind, self.offset())
    }

    fn unexpected(&self) -> SyntaxError {
        match self.peek() {
            Some(c) => self.error(SyntaxErrorKind::UnexpectedChar(c)),
            None => self.error(SyntaxErrorKind::UnexpectedEnd),
        }
    }

    fn bump(&mut self, c: char) {
        self.pos += c.len_utf8();
    }

    fn expect(&mut self, expected: char) -> Result<(), SyntaxError> {
        match self.peek() {
            Some(c) if c == expected => {
                self.bump(c);
                Ok(())
            }
            _ => Err(self.unexpected()),
        }
    }

    fn finish(&self) -> Result<(), SyntaxError> {
        if self.rest().is_empty() {
            Ok(())
        } else if self.rest().starts_with(CLOSE) {
            Err(self.error(SyntaxErrorKind::UnbalancedParentheses))
        } else {
            Err(self.error(SyntaxErrorKind::TrailingInput(self.rest().to_string())))
        }
    }

    /// `<expr> ::= <prop> | <neg> | <op>`
    fn expr(&mut self) -> Result<Formula, SyntaxError> {
        match self.peek() {
            Some(OPEN) => self.group(),
            Some(NEGATION) => self.negation(),
            Some(_) => self.proposition(),
            None => Err(self.error(SyntaxErrorKind::UnexpectedEnd)),
        }
    }

    /// `<neg> ::= "¬" <prop> | "¬" <op>`
    fn negation(&mut self) -> Result<Formula, SyntaxError> {
        self.expect(NEGATION)?;
        let operand = match self.peek() {
            Some(OPEN) => self.group()?,
            Some(NEGATION) => return Err(self.error(SyntaxErrorKind::DoubleNegation)),
            Some(_) => self.proposition()?,
            None => return Err(self.error(SyntaxErrorKind::UnexpectedEnd)),
        };
        Ok(Formula::not(operand))
    }

    /// `<op> ::= "(" <expr> <sym> <expr> ")"`, or a proposition wrapped in
    /// one redundant pair of parentheses.
    fn group(&mut self) -> Result<Formula, SyntaxError> {
        let start = self.pos;
        self.expect(OPEN)?;
        if let Some(name) = self.wrapped_name() {
            self.pos += name.len();
            self.expect(CLOSE)?;
            return self.named(name, start + OPEN.len_utf8());
        }
        let lhs = self.expr()?;
        let connective = self.connective()?;
        let rhs = self.expr()?;
        match self.peek() {
            Some(CLOSE) => self.bump(CLOSE),
            None => return Err(self.error(SyntaxErrorKind::UnbalancedParentheses)),
            Some(_) => return Err(self.unexpected()),
        }
        Ok(Formula::binary(connective, lhs, rhs))
    }

    /// Looks ahead for `name)` right after an opening parenthesis.
    fn wrapped_name(&self) -> Option<&'a str> {
        let rest = self.rest();
        let end = rest.find(|c: char| !grammar::is_name_char(c)).unwrap_or(rest.len());
        if end > 0 && rest[end..].starts_with(CLOSE) {
            Some(&rest[..end])
        } else {
            None
        }
    }

    fn connective(&mut self) -> Result<Connective, SyntaxError> {
        let rest = self.rest();
        match Connective::ALL.iter().find(|c| rest.starts_with(c.spaced())) {
            Some(&c) => {
                self.pos += c.spaced().len();
                Ok(c)
            }
            None if rest.is_empty() => Err(self.error(SyntaxErrorKind::UnexpectedEnd)),
            None => Err(self.error(SyntaxErrorKind::ExpectedConnective)),
        }
    }

    /// `<prop>`: the longest run of name characters, checked as a whole.
    fn proposition(&mut self) -> Result<Formula, SyntaxError> {
        let start = self.pos;
        let rest = self.rest();
        let end = rest.find(|c: char| !grammar::is_name_char(c)).unwrap_or(rest.len());
        if end == 0 {
            return Err(self.unexpected());
        }
        self.pos += end;
        self.named(&rest[..end], start)
    }

    fn named(&self, name: &str, start: usize) -> Result<Formula, SyntaxError> {
        grammar::check_name(name)
            .map(|_| Formula::Proposition(name.to_string()))
            .map_err(|kind| SyntaxError::at(kind, self.text[..start].chars().count()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    fn p() -> Formula {
        Formula::prop("p")
    }

    fn q() -> Formula {
        Formula::prop("q")
    }

    fn kind(text: &str) -> SyntaxErrorKind {
        parse(text).unwrap_err().kind().clone()
    }

    #[test]
    fn test_parse_proposition() {
        assert_eq!(parse("p"), Ok(p()));
        assert_eq!(parse("Rain_2"), Ok(Formula::prop("Rain_2")));
        assert_eq!(parse("Vp"), Ok(Formula::prop("Vp")));
        assert_eq!(parse("(p)"), Ok(p()));
        // No spaces: a single name, not a disjunction.
        assert_eq!(parse("(pvq)"), Ok(Formula::prop("pvq")));
    }

    #[test]
    fn test_parse_negation() {
        assert_eq!(parse("¬p"), Ok(Formula::not(p())));
        assert_eq!(parse("¬(p)"), Ok(Formula::not(p())));
        assert_eq!(parse("¬(p -> q)"), Ok(Formula::not(Formula::implies(p(), q()))));
    }

    #[test]
    fn test_parse_binary() {
        assert_eq!(parse("(p v q)"), Ok(Formula::or(p(), q())));
        assert_eq!(parse("(p ^ ¬q)"), Ok(Formula::and(p(), Formula::not(q()))));
        assert_eq!(parse("(¬p <-> q)"), Ok(Formula::iff(Formula::not(p()), q())));
        assert_eq!(parse("((p) -> (q))"), Ok(Formula::implies(p(), q())));
    }

    #[test]
    fn test_parse_nested() {
        let expected = Formula::or(
            Formula::and(p(), q()),
            Formula::not(Formula::implies(q(), Formula::iff(p(), Formula::not(q())))),
        );
        assert_eq!(parse("((p ^ q) v ¬(q -> (p <-> ¬q)))"), Ok(expected));
    }

    #[test]
    fn test_from_str() {
        let f: Formula = "(p v q)".parse().unwrap();
        assert_eq!(f, Formula::or(p(), q()));
    }

    #[test]
    fn test_reject_empty() {
        assert_eq!(kind(""), SyntaxErrorKind::EmptyInput);
        assert_eq!(kind("()"), SyntaxErrorKind::UnexpectedChar(')'));
        assert_eq!(kind("(p v )"), SyntaxErrorKind::UnexpectedChar(')'));
        assert_eq!(kind("¬"), SyntaxErrorKind::UnexpectedEnd);
    }

    #[test]
    fn test_reject_names() {
        assert_eq!(kind("v"), SyntaxErrorKind::InvalidProposition("v".to_string()));
        assert_eq!(kind("(p v var)"), SyntaxErrorKind::InvalidProposition("var".to_string()));
        assert_eq!(kind("tmp"), SyntaxErrorKind::ReservedName("tmp".to_string()));
        assert_eq!(kind("(tmp)"), SyntaxErrorKind::ReservedName("tmp".to_string()));
        assert_eq!(kind("2p"), SyntaxErrorKind::InvalidProposition("2p".to_string()));
    }

    #[test]
    fn test_reject_spacing() {
        assert_eq!(kind("(p vq)"), SyntaxErrorKind::ExpectedConnective);
        assert_eq!(kind("(p  v q)"), SyntaxErrorKind::ExpectedConnective);
        assert_eq!(kind("(p v  q)"), SyntaxErrorKind::UnexpectedChar(' '));
        assert_eq!(kind("(p & q)"), SyntaxErrorKind::ExpectedConnective);
        assert_eq!(kind("¬ p"), SyntaxErrorKind::UnexpectedChar(' '));
        assert_eq!(kind(" p"), SyntaxErrorKind::UnexpectedChar(' '));
    }

    #[test]
    fn test_reject_structure() {
        assert_eq!(kind("p v q"), SyntaxErrorKind::TrailingInput(" v q".to_string()));
        assert_eq!(kind("(p v q v r)"), SyntaxErrorKind::UnexpectedChar(' '));
        assert_eq!(kind("(p v q"), SyntaxErrorKind::UnbalancedParentheses);
        assert_eq!(kind("(p v q))"), SyntaxErrorKind::UnbalancedParentheses);
        assert_eq!(kind("((p))"), SyntaxErrorKind::ExpectedConnective);
        assert_eq!(kind("(¬p)"), SyntaxErrorKind::ExpectedConnective);
        assert_eq!(kind("¬¬p"), SyntaxErrorKind::DoubleNegation);
    }

    #[test]
    fn test_error_offset() {
        let e = parse("(p v ¬var)").unwrap_err();
        assert_eq!(e.offset(), Some(6));
        let e = parse("(p ^ q) x").unwrap_err();
        assert_eq!(e.offset(), Some(7));
    }
}
