//! Binary resolution on one chosen literal

use crate::logic::{Clause, Literal};

/// Outcome of resolving two clauses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolvent {
    /// The remainder contains a complementary pair: universally true,
    /// carries no information and must not be stored
    Tautology,
    /// The remainder is empty: the inputs resolve to False
    Contradiction,
    /// A genuine new clause, pending the redundancy filter
    Derived(Clause),
}

/// Resolve `c0` and `c1` on `on`
///
/// Preconditions: `on` occurs in `c0` and its complement in `c1`. The
/// remainder is the union of both clauses minus the resolved pair.
///
/// The tautology check runs over the full unioned remainder, not the two
/// inputs: each input can be tautology-free while their union is not
/// (a second complementary pair split across the inputs).
pub fn resolve(on: Literal, c0: &Clause, c1: &Clause) -> Resolvent {
    debug_assert!(c0.contains(on), "resolved literal missing from c0");
    debug_assert!(
        c1.contains(on.complement()),
        "complement of resolved literal missing from c1"
    );

    let rest: Clause = c0
        .iter()
        .filter(|&&lit| lit != on)
        .chain(c1.iter().filter(|&&lit| lit != on.complement()))
        .copied()
        .collect();

    if rest.is_tautology() {
        Resolvent::Tautology
    } else if rest.is_empty() {
        Resolvent::Contradiction
    } else {
        Resolvent::Derived(rest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::Interner;

    struct TestContext {
        interner: Interner,
    }

    impl TestContext {
        fn new() -> Self {
            TestContext {
                interner: Interner::new(),
            }
        }

        fn lit(&mut self, name: &str) -> Literal {
            if let Some(stripped) = name.strip_prefix('~') {
                Literal::negative(self.interner.intern(stripped))
            } else {
                Literal::positive(self.interner.intern(name))
            }
        }

        fn clause(&mut self, names: &[&str]) -> Clause {
            names.iter().map(|n| self.lit(n)).collect()
        }
    }

    #[test]
    fn test_derived() {
        let mut ctx = TestContext::new();
        let c0 = ctx.clause(&["A", "B"]);
        let c1 = ctx.clause(&["~A", "C"]);
        let a = ctx.lit("A");

        let expected = ctx.clause(&["B", "C"]);
        assert_eq!(resolve(a, &c0, &c1), Resolvent::Derived(expected));
    }

    #[test]
    fn test_contradiction() {
        let mut ctx = TestContext::new();
        let c0 = ctx.clause(&["A"]);
        let c1 = ctx.clause(&["~A"]);
        let a = ctx.lit("A");

        assert_eq!(resolve(a, &c0, &c1), Resolvent::Contradiction);
    }

    #[test]
    fn test_tautological_union() {
        let mut ctx = TestContext::new();
        // Both inputs are tautology-free; the union {B, ~B} is not
        let c0 = ctx.clause(&["A", "B"]);
        let c1 = ctx.clause(&["~A", "~B"]);
        let a = ctx.lit("A");

        assert_eq!(resolve(a, &c0, &c1), Resolvent::Tautology);
    }

    #[test]
    fn test_shared_side_literal_collapses() {
        let mut ctx = TestContext::new();
        let c0 = ctx.clause(&["A", "C"]);
        let c1 = ctx.clause(&["~A", "C"]);
        let a = ctx.lit("A");

        let expected = ctx.clause(&["C"]);
        assert_eq!(resolve(a, &c0, &c1), Resolvent::Derived(expected));
    }

    #[test]
    fn test_resolving_on_negative_literal() {
        let mut ctx = TestContext::new();
        let c0 = ctx.clause(&["~P", "Q"]);
        let c1 = ctx.clause(&["P"]);
        let not_p = ctx.lit("~P");

        let expected = ctx.clause(&["Q"]);
        assert_eq!(resolve(not_p, &c0, &c1), Resolvent::Derived(expected));
    }
}
