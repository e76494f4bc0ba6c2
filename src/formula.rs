//! Formula AST.
//!
//! A [`Formula`] is an immutable tree over named propositions, negation and
//! four binary connectives. Its [`Display`][fmt::Display] impl renders the
//! canonical surface syntax accepted by the [parser][crate::parser], so
//! `parse(f.to_string())` reproduces `f` for every parsed formula.

use std::collections::HashSet;
use std::fmt;

use crate::grammar;

/// A binary logical connective.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Connective {
    /// AND, written `^`.
    Conjunction,
    /// OR, written `v`.
    Disjunction,
    /// Material implication, written `->`.
    Conditional,
    /// Equivalence, written `<->`.
    Biconditional,
}

impl Connective {
    pub const ALL: [Connective; 4] = [
        Connective::Disjunction,
        Connective::Conjunction,
        Connective::Conditional,
        Connective::Biconditional,
    ];

    /// The bare symbol, without the mandatory surrounding spaces.
    pub const fn symbol(self) -> &'static str {
        match self {
            Connective::Conjunction => "^",
            Connective::Disjunction => "v",
            Connective::Conditional => "->",
            Connective::Biconditional => "<->",
        }
    }

    /// The symbol as it appears in formula text: ` v `, ` ^ `, ` -> `, ` <-> `.
    pub const fn spaced(self) -> &'static str {
        match self {
            Connective::Conjunction => " ^ ",
            Connective::Disjunction => " v ",
            Connective::Conditional => " -> ",
            Connective::Biconditional => " <-> ",
        }
    }

    /// Truth function of the connective.
    pub const fn apply(self, left: bool, right: bool) -> bool {
        match self {
            Connective::Conjunction => left & right,
            Connective::Disjunction => left | right,
            Connective::Conditional => !left | right,
            Connective::Biconditional => left == right,
        }
    }
}

impl fmt::Display for Connective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A propositional formula.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Formula {
    Proposition(String),
    Negation(Box<Formula>),
    Conjunction(Box<Formula>, Box<Formula>),
    Disjunction(Box<Formula>, Box<Formula>),
    Conditional(Box<Formula>, Box<Formula>),
    Biconditional(Box<Formula>, Box<Formula>),
}

impl Formula {
    /// Creates a proposition.
    ///
    /// # Panics
    ///
    /// Panics if `name` is not a valid proposition name: it must be an ASCII
    /// letter followed by letters, digits or `_`, must not start with a
    /// lowercase `v`, and must not be the reserved placeholder token.
    pub fn prop(name: impl Into<String>) -> Self {
        let name = name.into();
        if let Err(kind) = grammar::check_name(&name) {
            panic!("Invalid proposition name '{}': {}", name, kind);
        }
        Formula::Proposition(name)
    }

    pub fn not(operand: Self) -> Self {
        Formula::Negation(Box::new(operand))
    }

    pub fn and(lhs: Self, rhs: Self) -> Self {
        Formula::Conjunction(Box::new(lhs), Box::new(rhs))
    }

    pub fn or(lhs: Self, rhs: Self) -> Self {
        Formula::Disjunction(Box::new(lhs), Box::new(rhs))
    }

    pub fn implies(lhs: Self, rhs: Self) -> Self {
        Formula::Conditional(Box::new(lhs), Box::new(rhs))
    }

    pub fn iff(lhs: Self, rhs: Self) -> Self {
        Formula::Biconditional(Box::new(lhs), Box::new(rhs))
    }

    pub fn binary(connective: Connective, lhs: Self, rhs: Self) -> Self {
        match connective {
            Connective::Conjunction => Formula::and(lhs, rhs),
            Connective::Disjunction => Formula::or(lhs, rhs),
            Connective::Conditional => Formula::implies(lhs, rhs),
            Connective::Biconditional => Formula::iff(lhs, rhs),
        }
    }

    /// The connective of a binary node, `None` for propositions and negations.
    pub fn connective(&self) -> Option<Connective> {
        match self {
            Formula::Proposition(_) | Formula::Negation(_) => None,
            Formula::Conjunction(..) => Some(Connective::Conjunction),
            Formula::Disjunction(..) => Some(Connective::Disjunction),
            Formula::Conditional(..) => Some(Connective::Conditional),
            Formula::Biconditional(..) => Some(Connective::Biconditional),
        }
    }

    /// Both operands of a binary node.
    pub fn operands(&self) -> Option<(&Formula, &Formula)> {
        match self {
            Formula::Proposition(_) | Formula::Negation(_) => None,
            Formula::Conjunction(l, r)
            | Formula::Disjunction(l, r)
            | Formula::Conditional(l, r)
            | Formula::Biconditional(l, r) => Some((l, r)),
        }
    }

    /// Depth of the tree (0 for a proposition).
    pub fn depth(&self) -> usize {
        match self {
            Formula::Proposition(_) => 0,
            Formula::Negation(e) => 1 + e.depth(),
            Formula::Conjunction(l, r)
            | Formula::Disjunction(l, r)
            | Formula::Conditional(l, r)
            | Formula::Biconditional(l, r) => 1 + l.depth().max(r.depth()),
        }
    }

    /// Number of nodes in the tree.
    pub fn size(&self) -> usize {
        match self {
            Formula::Proposition(_) => 1,
            Formula::Negation(e) => 1 + e.size(),
            Formula::Conjunction(l, r)
            | Formula::Disjunction(l, r)
            | Formula::Conditional(l, r)
            | Formula::Biconditional(l, r) => 1 + l.size() + r.size(),
        }
    }

    /// Distinct proposition names, in order of first occurrence in a
    /// left-to-right depth-first traversal.
    pub fn propositions(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut names = Vec::new();
        self.visit_propositions(&mut |name| {
            if seen.insert(name) {
                names.push(name);
            }
        });
        names
    }

    fn visit_propositions<'a, F>(&'a self, visit: &mut F)
    where
        F: FnMut(&'a str),
    {
        match self {
            Formula::Proposition(name) => visit(name),
            Formula::Negation(e) => e.visit_propositions(visit),
            Formula::Conjunction(l, r)
            | Formula::Disjunction(l, r)
            | Formula::Conditional(l, r)
            | Formula::Biconditional(l, r) => {
                l.visit_propositions(visit);
                r.visit_propositions(visit);
            }
        }
    }

    /// Whether the placeholder token survives anywhere in the tree.
    pub(crate) fn contains_placeholder(&self) -> bool {
        let mut found = false;
        self.visit_propositions(&mut |name| found |= grammar::is_placeholder(name));
        found
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Formula::Proposition(name) => f.write_str(name),
            Formula::Negation(e) => write!(f, "{}{}", grammar::NEGATION, e),
            Formula::Conjunction(l, r) => write!(f, "({}{}{})", l, Connective::Conjunction.spaced(), r),
            Formula::Disjunction(l, r) => write!(f, "({}{}{})", l, Connective::Disjunction.spaced(), r),
            Formula::Conditional(l, r) => write!(f, "({}{}{})", l, Connective::Conditional.spaced(), r),
            Formula::Biconditional(l, r) => write!(f, "({}{}{})", l, Connective::Biconditional.spaced(), r),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p() -> Formula {
        Formula::prop("p")
    }

    fn q() -> Formula {
        Formula::prop("q")
    }

    #[test]
    fn test_display() {
        assert_eq!(p().to_string(), "p");
        assert_eq!(Formula::not(p()).to_string(), "¬p");
        assert_eq!(Formula::or(p(), q()).to_string(), "(p v q)");
        assert_eq!(Formula::and(p(), Formula::not(q())).to_string(), "(p ^ ¬q)");
        assert_eq!(Formula::implies(p(), q()).to_string(), "(p -> q)");
        assert_eq!(Formula::iff(Formula::not(p()), q()).to_string(), "(¬p <-> q)");
        assert_eq!(
            Formula::not(Formula::implies(p(), Formula::or(q(), p()))).to_string(),
            "¬(p -> (q v p))"
        );
    }

    #[test]
    fn test_binary_matches_constructors() {
        for connective in Connective::ALL {
            let f = Formula::binary(connective, p(), q());
            assert_eq!(f.connective(), Some(connective));
            assert_eq!(f.operands(), Some((&p(), &q())));
        }
        assert_eq!(p().connective(), None);
        assert_eq!(Formula::not(p()).operands(), None);
    }

    #[test]
    fn test_connective_truth_functions() {
        let table = |c: Connective| {
            [(false, false), (false, true), (true, false), (true, true)].map(|(l, r)| c.apply(l, r))
        };
        assert_eq!(table(Connective::Conjunction), [false, false, false, true]);
        assert_eq!(table(Connective::Disjunction), [false, true, true, true]);
        assert_eq!(table(Connective::Conditional), [true, true, false, true]);
        assert_eq!(table(Connective::Biconditional), [true, false, false, true]);
    }

    #[test]
    fn test_propositions_first_occurrence() {
        // ((r ^ p) -> (¬p v q))
        let f = Formula::implies(
            Formula::and(Formula::prop("r"), p()),
            Formula::or(Formula::not(p()), q()),
        );
        assert_eq!(f.propositions(), vec!["r", "p", "q"]);
    }

    #[test]
    fn test_depth_and_size() {
        let f = Formula::not(Formula::or(p(), Formula::and(q(), p())));
        assert_eq!(f.depth(), 3);
        assert_eq!(f.size(), 6);
        assert_eq!(p().depth(), 0);
        assert_eq!(p().size(), 1);
    }

    #[test]
    fn test_prop_accepts_uppercase_v() {
        assert_eq!(Formula::prop("Vx_1").to_string(), "Vx_1");
    }

    #[test]
    #[should_panic(expected = "Invalid proposition name")]
    fn test_prop_rejects_lowercase_v() {
        Formula::prop("valid");
    }

    #[test]
    #[should_panic(expected = "Invalid proposition name")]
    fn test_prop_rejects_placeholder() {
        Formula::prop("tmp");
    }
}
