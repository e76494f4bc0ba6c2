//! Error types.
//!
//! Each stage reports its own error type, so callers (and tests) can tell a
//! malformed formula from an unbound proposition or a bad fixed value.
//! [`Error`] joins them for callers that run the whole pipeline.

use std::fmt;

/// The reason a formula failed to parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    /// The formula text is empty.
    EmptyInput,
    /// The text ended where an operand, connective or `)` was expected.
    UnexpectedEnd,
    /// A character that cannot start or continue the expected element.
    UnexpectedChar(char),
    /// A binary group without one of ` v `, ` ^ `, ` -> `, ` <-> `.
    ExpectedConnective,
    /// A proposition name that breaks the naming rules.
    InvalidProposition(String),
    /// The parser-internal placeholder token used as a name.
    ReservedName(String),
    /// `¬` applied directly to another `¬`.
    DoubleNegation,
    /// A `(` without `)` or the other way round.
    UnbalancedParentheses,
    /// Text left over after a complete formula.
    TrailingInput(String),
    /// A placeholder the reduction parser could not pair with a subtree.
    UnresolvedPlaceholder,
}

impl fmt::Display for SyntaxErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyntaxErrorKind::EmptyInput => write!(f, "empty formula"),
            SyntaxErrorKind::UnexpectedEnd => write!(f, "unexpected end of formula"),
            SyntaxErrorKind::UnexpectedChar(c) => write!(f, "unexpected character '{}'", c),
            SyntaxErrorKind::ExpectedConnective => {
                write!(f, "expected one of ' v ', ' ^ ', ' -> ', ' <-> '")
            }
            SyntaxErrorKind::InvalidProposition(name) => write!(f, "invalid proposition name '{}'", name),
            SyntaxErrorKind::ReservedName(name) => write!(f, "'{}' is a reserved name", name),
            SyntaxErrorKind::DoubleNegation => write!(f, "negation cannot directly follow negation"),
            SyntaxErrorKind::UnbalancedParentheses => write!(f, "unbalanced parentheses"),
            SyntaxErrorKind::TrailingInput(rest) => write!(f, "unexpected trailing input '{}'", rest),
            SyntaxErrorKind::UnresolvedPlaceholder => write!(f, "unresolved subexpression"),
        }
    }
}

/// A formula that does not conform to the grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    kind: SyntaxErrorKind,
    /// Character offset into the formula text, when known.
    offset: Option<usize>,
}

impl SyntaxError {
    pub fn new(kind: SyntaxErrorKind) -> Self {
        Self { kind, offset: None }
    }

    pub fn at(kind: SyntaxErrorKind, offset: usize) -> Self {
        Self {
            kind,
            offset: Some(offset),
        }
    }

    pub fn kind(&self) -> &SyntaxErrorKind {
        &self.kind
    }

    pub fn offset(&self) -> Option<usize> {
        self.offset
    }
}

impl From<SyntaxErrorKind> for SyntaxError {
    fn from(kind: SyntaxErrorKind) -> Self {
        SyntaxError::new(kind)
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.offset {
            Some(offset) => write!(f, "Syntax error at {}: {}", offset, self.kind),
            None => write!(f, "Syntax error: {}", self.kind),
        }
    }
}

impl std::error::Error for SyntaxError {}

/// A proposition referenced by a formula but missing from the assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnboundProposition(pub String);

impl fmt::Display for UnboundProposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Proposition '{}' has no value", self.0)
    }
}

impl std::error::Error for UnboundProposition {}

/// Error type for truth table generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// A fixed value names a proposition that does not occur in the formula.
    UnknownProposition(String),
    /// Evaluation hit a proposition without a value.
    Unbound(UnboundProposition),
}

impl From<UnboundProposition> for TableError {
    fn from(e: UnboundProposition) -> Self {
        TableError::Unbound(e)
    }
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::UnknownProposition(name) => {
                write!(f, "Proposition '{}' not in expression", name)
            }
            TableError::Unbound(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for TableError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TableError::Unbound(e) => Some(e),
            _ => None,
        }
    }
}

/// Error type for splitting an input line into formula and fixed values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Nothing before the first comma.
    MissingFormula,
    /// A fixed-value part that is not `<name>=<value>`.
    MalformedPair(String),
    /// A value other than `True` or `False`.
    InvalidValue { name: String, value: String },
    /// The same name fixed twice.
    DuplicateName(String),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::MissingFormula => write!(f, "Input error: missing formula"),
            InputError::MalformedPair(part) => write!(f, "Input error: expected <name>=<value>, got '{}'", part),
            InputError::InvalidValue { name, value } => {
                write!(f, "Input error: invalid value '{}' for '{}'", value, name)
            }
            InputError::DuplicateName(name) => write!(f, "Input error: '{}' is fixed more than once", name),
        }
    }
}

impl std::error::Error for InputError {}

/// Any failure along the input -> parse -> table pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Input(InputError),
    Syntax(SyntaxError),
    Table(TableError),
}

impl From<InputError> for Error {
    fn from(e: InputError) -> Self {
        Error::Input(e)
    }
}

impl From<SyntaxError> for Error {
    fn from(e: SyntaxError) -> Self {
        Error::Syntax(e)
    }
}

impl From<TableError> for Error {
    fn from(e: TableError) -> Self {
        Error::Table(e)
    }
}

impl From<UnboundProposition> for Error {
    fn from(e: UnboundProposition) -> Self {
        Error::Table(TableError::Unbound(e))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Input(e) => write!(f, "{}", e),
            Error::Syntax(e) => write!(f, "{}", e),
            Error::Table(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Input(e) => Some(e),
            Error::Syntax(e) => Some(e),
            Error::Table(e) => Some(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_error_display() {
        let e = SyntaxError::at(SyntaxErrorKind::UnexpectedChar('&'), 3);
        assert_eq!(e.to_string(), "Syntax error at 3: unexpected character '&'");
        let e = SyntaxError::new(SyntaxErrorKind::UnbalancedParentheses);
        assert_eq!(e.to_string(), "Syntax error: unbalanced parentheses");
    }

    #[test]
    fn test_error_conversions() {
        let e: Error = UnboundProposition("p".to_string()).into();
        assert_eq!(e, Error::Table(TableError::Unbound(UnboundProposition("p".to_string()))));
        assert_eq!(e.to_string(), "Proposition 'p' has no value");

        let e: Error = TableError::UnknownProposition("z".to_string()).into();
        assert_eq!(e.to_string(), "Proposition 'z' not in expression");
    }
}
