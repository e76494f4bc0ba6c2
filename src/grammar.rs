//! Grammar constants and fragment classifiers.
//!
//! ```text
//! <expr> ::= <prop> | <neg> | <op>
//! <prop> ::= letter {letter | digit | '_'}*      (not "tmp", not starting with 'v')
//!          | "(" <prop> ")"
//! <neg>  ::= "¬" <prop> | "¬" <op>
//! <op>   ::= "(" <expr> <sym> <expr> ")"
//! <sym>  ::= " v " | " ^ " | " -> " | " <-> "
//! ```
//!
//! The classifiers below work on *bare* fragments: text that contains no
//! parentheses, apart from the single optional pair wrapping a proposition.

use crate::error::SyntaxErrorKind;
use crate::formula::Connective;

/// Token the reduction parser writes in place of an already-reduced group.
pub const PLACEHOLDER: &str = "tmp";
/// Prefix operator for negation.
pub const NEGATION: char = '¬';
/// Lowercase `v` is the disjunction symbol, so no name may start with it.
pub const RESERVED_LEADING: char = 'v';
pub const OPEN: char = '(';
pub const CLOSE: char = ')';

pub fn is_name_start(c: char) -> bool {
    c.is_ascii_alphabetic()
}

pub fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Checks a complete proposition name against the naming rules.
pub fn check_name(name: &str) -> Result<(), SyntaxErrorKind> {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if is_name_start(c) && c != RESERVED_LEADING => {}
        _ => return Err(SyntaxErrorKind::InvalidProposition(name.to_string())),
    }
    if !chars.all(is_name_char) {
        return Err(SyntaxErrorKind::InvalidProposition(name.to_string()));
    }
    if name == PLACEHOLDER {
        return Err(SyntaxErrorKind::ReservedName(name.to_string()));
    }
    Ok(())
}

/// Returns the name if `text` is a proposition, optionally wrapped in one
/// redundant pair of parentheses.
pub fn is_proposition(text: &str) -> Option<&str> {
    let name = text
        .strip_prefix(OPEN)
        .and_then(|inner| inner.strip_suffix(CLOSE))
        .unwrap_or(text);
    check_name(name).ok().map(|_| name)
}

/// Returns the operand text if `text` starts with the negation symbol.
///
/// The operand is not classified here; it may be a proposition, a
/// placeholder, or (inside a larger formula) an already-parsed group.
pub fn is_negation(text: &str) -> Option<&str> {
    text.strip_prefix(NEGATION)
}

/// Splits `text` at the leftmost spaced connective symbol.
///
/// A bare fragment holds at most one connective; if there are more, the
/// right fragment still contains one and fails to classify as an operand.
pub fn find_top_connective(text: &str) -> Option<(Connective, &str, &str)> {
    Connective::ALL
        .iter()
        .filter_map(|&c| text.find(c.spaced()).map(|i| (i, c)))
        .min_by_key(|&(i, _)| i)
        .map(|(i, c)| (c, &text[..i], &text[i + c.spaced().len()..]))
}

pub fn is_placeholder(text: &str) -> bool {
    text == PLACEHOLDER
}
