//! Innermost-first reduction parser.
//!
//! An alternative to the [recursive-descent parser][crate::parser] that works
//! on the formula text directly, using the classifiers in [`grammar`]:
//!
//! 1. Take the group bounded by the first `)` and the nearest `(` before it.
//!    It is innermost, so its content is a bare fragment.
//! 2. Parse the content into a subtree, with the [placeholder][PLACEHOLDER]
//!    token standing for groups reduced earlier.
//! 3. Replace the group's text by the placeholder and push the subtree.
//! 4. Once no parentheses are left, parse the remaining text as a single
//!    operand and substitute the last placeholders.
//!
//! Groups are reduced at the first `)`, so every placeholder created so far
//! lies to the left of the next group or inside it. The placeholders inside a
//! group are therefore the topmost stack entries, in left-to-right order.
//!
//! Both parsers accept the same language and build the same trees:
//!
//! ```
//! use truth_table::parser::parse;
//! use truth_table::reduce::parse_innermost;
//!
//! let text = "(¬(p v q) -> (r ^ (p)))";
//! assert_eq!(parse_innermost(text), parse(text));
//! ```

use log::debug;

use crate::error::{SyntaxError, SyntaxErrorKind};
use crate::formula::Formula;
use crate::grammar::{self, CLOSE, NEGATION, OPEN, PLACEHOLDER};

/// Parses a formula by repeatedly reducing its innermost parenthesized group.
pub fn parse_innermost(text: &str) -> Result<Formula, SyntaxError> {
    debug!("parse_innermost({:?})", text);
    if text.is_empty() {
        return Err(SyntaxError::at(SyntaxErrorKind::EmptyInput, 0));
    }
    if text.split(|c: char| !grammar::is_name_char(c)).any(grammar::is_placeholder) {
        return Err(SyntaxErrorKind::ReservedName(PLACEHOLDER.to_string()).into());
    }

    let mut working = text.to_string();
    let mut stack: Vec<Formula> = Vec::new();

    while let Some(close) = working.find(CLOSE) {
        let open = working[..close]
            .rfind(OPEN)
            .ok_or(SyntaxErrorKind::UnbalancedParentheses)?;
        check_delimited(&working, open, close)?;
        let group = reduce_group(&working[open + OPEN.len_utf8()..close], &mut stack)?;
        debug!("reduce {:?} -> {}", &working[open..=close], group);
        working.replace_range(open..=close, PLACEHOLDER);
        stack.push(group);
    }
    if working.contains(OPEN) {
        return Err(SyntaxErrorKind::UnbalancedParentheses.into());
    }

    if let Some((connective, left, _)) = grammar::find_top_connective(&working) {
        let rest = &working[left.len()..];
        debug!("unparenthesized {} at top level", connective);
        return Err(SyntaxErrorKind::TrailingInput(rest.to_string()).into());
    }
    let formula = resolve(operand(&working)?, &mut stack)?;
    if !stack.is_empty() {
        return Err(SyntaxErrorKind::UnresolvedPlaceholder.into());
    }
    Ok(formula)
}

/// A reduced group must stand where an operand may stand: after the start,
/// `(`, `¬` or a space, and before the end, `)` or a space.
fn check_delimited(working: &str, open: usize, close: usize) -> Result<(), SyntaxError> {
    match working[..open].chars().next_back() {
        None | Some(OPEN) | Some(NEGATION) | Some(' ') => {}
        Some(c) => return Err(SyntaxErrorKind::UnexpectedChar(c).into()),
    }
    match working[close + CLOSE.len_utf8()..].chars().next() {
        None | Some(CLOSE) | Some(' ') => Ok(()),
        Some(c) => Err(SyntaxErrorKind::UnexpectedChar(c).into()),
    }
}

/// Parses the bare content of a group: `<operand> <sym> <operand>`, or a
/// single proposition wrapped in redundant parentheses.
fn reduce_group(content: &str, stack: &mut Vec<Formula>) -> Result<Formula, SyntaxError> {
    match grammar::find_top_connective(content) {
        Some((connective, left, right)) => {
            let shape = Formula::binary(connective, operand(left)?, operand(right)?);
            resolve(shape, stack)
        }
        None => match grammar::is_proposition(content) {
            Some(name) => Ok(Formula::Proposition(name.to_string())),
            None if content.is_empty() => Err(SyntaxErrorKind::UnexpectedChar(CLOSE).into()),
            None if content.chars().all(grammar::is_name_char) && !grammar::is_placeholder(content) => {
                Err(SyntaxErrorKind::InvalidProposition(content.to_string()).into())
            }
            None => Err(SyntaxErrorKind::ExpectedConnective.into()),
        },
    }
}

/// Parses a bare operand: a placeholder, a proposition, or the negation of
/// either.
fn operand(text: &str) -> Result<Formula, SyntaxError> {
    if grammar::is_placeholder(text) {
        return Ok(Formula::Proposition(PLACEHOLDER.to_string()));
    }
    if let Some(inner) = grammar::is_negation(text) {
        if grammar::is_negation(inner).is_some() {
            return Err(SyntaxErrorKind::DoubleNegation.into());
        }
        return operand(inner).map(Formula::not);
    }
    if text.is_empty() {
        return Err(SyntaxErrorKind::UnexpectedEnd.into());
    }
    grammar::check_name(text)?;
    Ok(Formula::Proposition(text.to_string()))
}

/// Replaces the placeholders of `shape`, left to right, by the topmost
/// subtrees on the stack.
fn resolve(shape: Formula, stack: &mut Vec<Formula>) -> Result<Formula, SyntaxError> {
    let count = count_placeholders(&shape);
    if count > stack.len() {
        return Err(SyntaxErrorKind::UnresolvedPlaceholder.into());
    }
    let mut subtrees = stack.split_off(stack.len() - count).into_iter();
    let formula = substitute(shape, &mut subtrees);
    if formula.contains_placeholder() {
        return Err(SyntaxErrorKind::UnresolvedPlaceholder.into());
    }
    Ok(formula)
}

fn count_placeholders(formula: &Formula) -> usize {
    match formula {
        Formula::Proposition(name) => grammar::is_placeholder(name) as usize,
        Formula::Negation(e) => count_placeholders(e),
        Formula::Conjunction(l, r)
        | Formula::Disjunction(l, r)
        | Formula::Conditional(l, r)
        | Formula::Biconditional(l, r) => count_placeholders(l) + count_placeholders(r),
    }
}

fn substitute<I>(formula: Formula, subtrees: &mut I) -> Formula
where
    I: Iterator<Item = Formula>,
{
    match formula {
        Formula::Proposition(name) => {
            if grammar::is_placeholder(&name) {
                if let Some(subtree) = subtrees.next() {
                    return subtree;
                }
            }
            Formula::Proposition(name)
        }
        Formula::Negation(e) => Formula::not(substitute(*e, subtrees)),
        Formula::Conjunction(l, r) => Formula::and(substitute(*l, subtrees), substitute(*r, subtrees)),
        Formula::Disjunction(l, r) => Formula::or(substitute(*l, subtrees), substitute(*r, subtrees)),
        Formula::Conditional(l, r) => Formula::implies(substitute(*l, subtrees), substitute(*r, subtrees)),
        Formula::Biconditional(l, r) => Formula::iff(substitute(*l, subtrees), substitute(*r, subtrees)),
    }
}
