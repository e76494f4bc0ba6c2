use std::collections::{BTreeMap, HashMap};

use crate::error::UnboundProposition;
use crate::formula::Formula;

/// A mapping from proposition name to truth value.
pub type Assignment = HashMap<String, bool>;

/// Source of truth values for propositions.
pub trait Valuation {
    fn value(&self, name: &str) -> Option<bool>;
}

impl Valuation for HashMap<String, bool> {
    fn value(&self, name: &str) -> Option<bool> {
        self.get(name).copied()
    }
}

impl Valuation for BTreeMap<String, bool> {
    fn value(&self, name: &str) -> Option<bool> {
        self.get(name).copied()
    }
}

impl Valuation for [(&str, bool)] {
    fn value(&self, name: &str) -> Option<bool> {
        self.iter().find(|(n, _)| *n == name).map(|&(_, v)| v)
    }
}

impl<const N: usize> Valuation for [(&str, bool); N] {
    fn value(&self, name: &str) -> Option<bool> {
        self.as_slice().value(name)
    }
}

impl<V: Valuation + ?Sized> Valuation for &V {
    fn value(&self, name: &str) -> Option<bool> {
        (**self).value(name)
    }
}

impl Formula {
    /// Evaluates the formula under `valuation`.
    ///
    /// Both operands of a binary node are always evaluated, so a missing
    /// proposition is reported even where the other operand decides the
    /// result.
    pub fn eval<V>(&self, valuation: &V) -> Result<bool, UnboundProposition>
    where
        V: Valuation + ?Sized,
    {
        Ok(match self {
            Formula::Proposition(name) => valuation
                .value(name)
                .ok_or_else(|| UnboundProposition(name.clone()))?,
            Formula::Negation(e) => !e.eval(valuation)?,
            Formula::Conjunction(l, r) => {
                let (l, r) = (l.eval(valuation)?, r.eval(valuation)?);
                l && r
            }
            Formula::Disjunction(l, r) => {
                let (l, r) = (l.eval(valuation)?, r.eval(valuation)?);
                l || r
            }
            Formula::Conditional(l, r) => {
                let (l, r) = (l.eval(valuation)?, r.eval(valuation)?);
                !(l && !r)
            }
            Formula::Biconditional(l, r) => {
                let (l, r) = (l.eval(valuation)?, r.eval(valuation)?);
                l == r
            }
        })
    }
}

/// Evaluates `formula` under `assignment`.
pub fn eval<V>(formula: &Formula, assignment: &V) -> Result<bool, UnboundProposition>
where
    V: Valuation + ?Sized,
{
    formula.eval(assignment)
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    use crate::parser::parse;

    const BOOLS: [bool; 2] = [false, true];

    fn env(p: bool, q: bool) -> Assignment {
        Assignment::from([("p".to_string(), p), ("q".to_string(), q)])
    }

    #[test]
    fn test_eval_proposition() {
        let f = parse("p").unwrap();
        assert_eq!(f.eval(&env(true, false)), Ok(true));
        assert_eq!(f.eval(&env(false, false)), Ok(false));
    }

    #[test]
    fn test_eval_not() {
        let f = parse("¬p").unwrap();
        assert_eq!(f.eval(&env(true, false)), Ok(false));
        assert_eq!(f.eval(&env(false, false)), Ok(true));
    }

    #[test]
    fn test_eval_binary() {
        let and = parse("(p ^ q)").unwrap();
        let or = parse("(p v q)").unwrap();
        let cond = parse("(p -> q)").unwrap();
        let bicond = parse("(p <-> q)").unwrap();
        for p in BOOLS {
            for q in BOOLS {
                let a = env(p, q);
                assert_eq!(and.eval(&a), Ok(p && q));
                assert_eq!(or.eval(&a), Ok(p || q));
                assert_eq!(cond.eval(&a), Ok(!p || q));
                assert_eq!(bicond.eval(&a), Ok(p == q));
            }
        }
    }

    #[test]
    fn test_eval_conditional_only_false_case() {
        let f = parse("(p -> q)").unwrap();
        let falsifying: Vec<_> = BOOLS
            .iter()
            .flat_map(|&p| BOOLS.iter().map(move |&q| (p, q)))
            .filter(|&(p, q)| !f.eval(&env(p, q)).unwrap())
            .collect();
        assert_eq!(falsifying, vec![(true, false)]);
    }

    #[test]
    fn test_eval_unbound() {
        let f = parse("(p v r)").unwrap();
        assert_eq!(f.eval(&env(true, true)), Err(UnboundProposition("r".to_string())));
        // Still reported although `p` alone decides the disjunction.
        let f = parse("(r ^ p)").unwrap();
        assert_eq!(f.eval(&env(false, false)), Err(UnboundProposition("r".to_string())));
    }

    #[test]
    fn test_eval_other_valuations() {
        let f = parse("(¬p <-> q)").unwrap();
        assert_eq!(f.eval(&[("p", true), ("q", false)]), Ok(true));
        let pairs: &[(&str, bool)] = &[("p", true), ("q", true)];
        assert_eq!(eval(&f, pairs), Ok(false));
        let tree = BTreeMap::from([("p".to_string(), false), ("q".to_string(), true)]);
        assert_eq!(eval(&f, &tree), Ok(true));
    }
}
