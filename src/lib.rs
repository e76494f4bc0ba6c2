//! # truth-table: truth tables for propositional formulas
//!
//! **`truth-table`** parses propositional formulas written in a small,
//! fully-parenthesized surface syntax, evaluates them under truth assignments,
//! and enumerates their truth tables, optionally with some propositions held
//! at fixed values.
//!
//! ## Syntax
//!
//! | Element | Written as |
//! |---|---|
//! | proposition | a letter, then letters, digits or `_` (not `tmp`, not starting with `v`) |
//! | negation | `¬p`, `¬(p v q)` |
//! | conjunction | `(p ^ q)` |
//! | disjunction | `(p v q)` |
//! | conditional | `(p -> q)` |
//! | biconditional | `(p <-> q)` |
//!
//! Every binary operation must be wrapped in its own parentheses, with exactly
//! one space on each side of the symbol: `(p v q v r)` must be written as
//! `((p v q) v r)` or `(p v (q v r))`.
//!
//! ## Basic Usage
//!
//! ```rust
//! use truth_table::eval::Assignment;
//! use truth_table::parser::parse;
//! use truth_table::table::generate_table;
//!
//! let f = parse("(p ^ ¬q)").unwrap();
//!
//! // Hold p at true, enumerate q.
//! let fixed = Assignment::from([("p".to_string(), true)]);
//! let table = generate_table(&f, &fixed).unwrap();
//!
//! assert_eq!(table.header().collect::<Vec<_>>(), ["q", "p"]);
//! let values: Vec<bool> = table.rows().iter().map(|row| row.value()).collect();
//! assert_eq!(values, [true, false]);
//! ```
//!
//! The whole input line, fixed values included, can be handled in one call:
//!
//! ```rust
//! let table = truth_table::truth_table("(¬p <-> q), p=True").unwrap();
//! assert_eq!(table.len(), 2);
//! print!("{}", table);
//! ```
//!
//! ## Core Components
//!
//! - **[`formula`]**: the [`Formula`][crate::formula::Formula] AST and its canonical rendering.
//! - **[`grammar`]**: grammar constants and fragment classifiers.
//! - **[`parser`]**: recursive-descent parser.
//! - **[`reduce`]**: innermost-first reduction parser, equivalent to [`parser`].
//! - **[`eval`]**: evaluation under an assignment.
//! - **[`table`]**: truth table generation.
//! - **[`render`]**: text output of tables.
//! - **[`input`]**: splitting of `<formula>, <name>=<value>, ...` lines.

pub mod error;
pub mod eval;
pub mod formula;
pub mod grammar;
pub mod input;
pub mod parser;
pub mod reduce;
pub mod render;
pub mod table;

use crate::error::Error;
use crate::table::TruthTable;

/// Parses an input line `<formula>[, <name>=<True|False>]*` and generates the
/// truth table of the formula with the given propositions held fixed.
pub fn truth_table(line: &str) -> Result<TruthTable, Error> {
    let query = input::parse_line(line)?;
    let formula = parser::parse(&query.formula)?;
    let table = table::generate_table(&formula, &query.fixed)?;
    Ok(table)
}
