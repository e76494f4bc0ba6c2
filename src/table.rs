//! Truth table generation.
//!
//! The columns of a table are the *free* propositions of a formula followed
//! by the *fixed* ones, both in first-occurrence order (see
//! [`Formula::propositions`]). Rows enumerate every combination of the free
//! propositions as a binary counter, `false` before `true`, with the first
//! free proposition varying slowest:
//!
//! ```text
//! p     q     (p v q)
//! False False False
//! False True  True
//! True  False True
//! True  True  True
//! ```

use std::collections::HashSet;

use log::debug;
use num_bigint::BigUint;

use crate::error::TableError;
use crate::eval::{Assignment, Valuation};
use crate::formula::Formula;

/// One row of a truth table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    assignment: Assignment,
    value: bool,
}

impl Row {
    /// Values of all propositions (free and fixed) in this row.
    pub fn assignment(&self) -> &Assignment {
        &self.assignment
    }

    /// Value of the formula under this row's assignment.
    pub fn value(&self) -> bool {
        self.value
    }

    /// Value of a single proposition in this row.
    pub fn get(&self, name: &str) -> Option<bool> {
        self.assignment.value(name)
    }
}

/// A complete truth table for a formula.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTable {
    formula: Formula,
    free: Vec<String>,
    fixed: Vec<String>,
    rows: Vec<Row>,
}

impl TruthTable {
    pub fn formula(&self) -> &Formula {
        &self.formula
    }

    /// Propositions enumerated over all combinations.
    pub fn free(&self) -> &[String] {
        &self.free
    }

    /// Propositions pinned by the caller.
    pub fn fixed(&self) -> &[String] {
        &self.fixed
    }

    /// Column names: free propositions, then fixed ones.
    pub fn header(&self) -> impl Iterator<Item = &str> {
        self.free.iter().chain(self.fixed.iter()).map(String::as_str)
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows where the formula is true.
    pub fn models(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter().filter(|row| row.value)
    }

    /// True in every row.
    pub fn is_tautology(&self) -> bool {
        self.rows.iter().all(|row| row.value)
    }

    /// False in every row.
    pub fn is_contradiction(&self) -> bool {
        !self.is_satisfiable()
    }

    /// True in at least one row.
    pub fn is_satisfiable(&self) -> bool {
        self.rows.iter().any(|row| row.value)
    }
}

/// Number of rows in a table over `num_free` free propositions, `2^num_free`.
pub fn row_count(num_free: usize) -> BigUint {
    BigUint::from(1u8) << num_free
}

/// Generates the truth table of `formula`, holding the propositions in
/// `fixed` at the given values.
///
/// Fails with [`TableError::UnknownProposition`] if `fixed` names a
/// proposition that does not occur in `formula`; no rows are produced in that
/// case. When several names are unknown, the lexicographically smallest one
/// is reported.
pub fn generate_table(formula: &Formula, fixed: &Assignment) -> Result<TruthTable, TableError> {
    debug!("generate_table(formula = {}, fixed = {:?})", formula, fixed);

    let names = formula.propositions();
    let known: HashSet<&str> = names.iter().copied().collect();
    if let Some(unknown) = fixed.keys().filter(|name| !known.contains(name.as_str())).min() {
        return Err(TableError::UnknownProposition(unknown.clone()));
    }

    let (fixed_names, free_names): (Vec<&str>, Vec<&str>) =
        names.iter().partition(|name| fixed.contains_key(**name));
    debug!("free = {:?}, fixed = {:?}, rows = {}", free_names, fixed_names, row_count(free_names.len()));

    let mut rows = Vec::new();
    for values in Assignments::new(free_names.len()) {
        let mut assignment: Assignment = free_names
            .iter()
            .zip(values)
            .map(|(name, value)| (name.to_string(), value))
            .collect();
        assignment.extend(fixed.iter().map(|(name, &value)| (name.clone(), value)));
        let value = formula.eval(&assignment)?;
        rows.push(Row { assignment, value });
    }

    Ok(TruthTable {
        formula: formula.clone(),
        free: free_names.into_iter().map(String::from).collect(),
        fixed: fixed_names.into_iter().map(String::from).collect(),
        rows,
    })
}

/// Iterator over all `2^n` boolean vectors of length `n`, in binary counter
/// order with the first position most significant.
#[derive(Debug, Clone)]
pub struct Assignments {
    next: Option<Vec<bool>>,
}

impl Assignments {
    pub fn new(n: usize) -> Self {
        Self {
            next: Some(vec![false; n]),
        }
    }
}

impl Iterator for Assignments {
    type Item = Vec<bool>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        let mut successor = current.clone();
        // Increment: clear trailing `true`s, set the last `false`.
        // If there is none, `current` was all `true` and the iteration ends.
        if let Some(i) = successor.iter().rposition(|&b| !b) {
            successor[i] = true;
            for b in &mut successor[i + 1..] {
                *b = false;
            }
            self.next = Some(successor);
        }
        Some(current)
    }
}
