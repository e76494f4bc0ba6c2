//! Splitting of input lines of the form `<formula>[, <name>=<True|False>]*`.

use crate::error::InputError;
use crate::eval::Assignment;

/// A formula with the propositions the caller wants to hold fixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub formula: String,
    pub fixed: Assignment,
}

/// Splits an input line into formula text and fixed values.
///
/// The formula is everything before the first comma, with surrounding
/// whitespace removed. Each following part must be `<name>=<value>`, where
/// the value is `True` or `False` (or the lowercase spelling).
///
/// ```
/// use truth_table::input::parse_line;
///
/// let query = parse_line("(¬p <-> q), p=True, q=False").unwrap();
/// assert_eq!(query.formula, "(¬p <-> q)");
/// assert_eq!(query.fixed.get("p"), Some(&true));
/// assert_eq!(query.fixed.get("q"), Some(&false));
/// ```
pub fn parse_line(line: &str) -> Result<Query, InputError> {
    let mut parts = line.split(',');
    let formula = parts.next().unwrap_or("").trim();
    if formula.is_empty() {
        return Err(InputError::MissingFormula);
    }

    let mut fixed = Assignment::new();
    for part in parts {
        let (name, value) = part
            .split_once('=')
            .ok_or_else(|| InputError::MalformedPair(part.trim().to_string()))?;
        let (name, value) = (name.trim(), value.trim());
        if name.is_empty() {
            return Err(InputError::MalformedPair(part.trim().to_string()));
        }
        let value = parse_value(value).ok_or_else(|| InputError::InvalidValue {
            name: name.to_string(),
            value: value.to_string(),
        })?;
        if fixed.insert(name.to_string(), value).is_some() {
            return Err(InputError::DuplicateName(name.to_string()));
        }
    }

    Ok(Query {
        formula: formula.to_string(),
        fixed,
    })
}

fn parse_value(value: &str) -> Option<bool> {
    match value {
        "True" | "true" => Some(true),
        "False" | "false" => Some(false),
        _ => None,
    }
}
