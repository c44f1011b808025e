//! Redundancy elimination by subsumption
//!
//! A candidate clause is redundant when some known clause is a subset of
//! it: the known clause is the stronger constraint, so keeping the
//! candidate would only widen future rounds without changing provability.
//! This check is what keeps the tainted set small in practice; termination
//! itself rests on the finite clause space, not on this filter.

use crate::logic::Clause;

/// True iff some known clause subsumes the candidate
pub fn is_redundant<'a, I>(candidate: &Clause, known: I) -> bool
where
    I: IntoIterator<Item = &'a Clause>,
{
    known.into_iter().any(|c| c.is_subset_of(candidate))
}
