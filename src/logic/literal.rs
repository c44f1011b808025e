//! Propositional literals
//!
//! A literal is a proposition with a polarity, packed into a single u32
//! code: `id * 2` for the positive literal, `id * 2 + 1` for the negative.
//! Packing buys three things the engine leans on:
//! - negation is one bit flip and its own inverse
//! - complementary literals have adjacent codes, so a sorted clause can
//!   detect tautologies with a windowed scan
//! - `Ord` on the code gives every clause one canonical literal order

use super::interner::{Interner, PropositionId};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A literal (positive or negative proposition), packed as `id * 2 + sign`
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Literal {
    code: u32,
}

impl Literal {
    /// Create a literal from a proposition and a polarity flag
    pub fn new(proposition: PropositionId, negative: bool) -> Self {
        Literal {
            code: proposition.0 * 2 + negative as u32,
        }
    }

    /// Create a new positive literal
    pub fn positive(proposition: PropositionId) -> Self {
        Literal::new(proposition, false)
    }

    /// Create a new negative literal
    pub fn negative(proposition: PropositionId) -> Self {
        Literal::new(proposition, true)
    }

    /// Get the complement of this literal
    ///
    /// An involution: `l.complement().complement() == l` holds for every
    /// literal without consulting any interner.
    pub fn complement(self) -> Literal {
        Literal {
            code: self.code ^ 1,
        }
    }

    /// The proposition this literal talks about, polarity stripped
    pub fn proposition(self) -> PropositionId {
        PropositionId(self.code / 2)
    }

    pub fn is_positive(self) -> bool {
        self.code & 1 == 0
    }

    pub fn is_negative(self) -> bool {
        self.code & 1 != 0
    }

    /// Get the name of this literal's proposition from the interner
    pub fn name(self, interner: &Interner) -> &str {
        interner.resolve(self.proposition())
    }

    /// Format this literal with an interner for name resolution
    pub fn display(self, interner: &Interner) -> LiteralDisplay<'_> {
        LiteralDisplay {
            literal: self,
            interner,
        }
    }
}

/// Display wrapper for Literal that includes an interner for name resolution
pub struct LiteralDisplay<'a> {
    literal: Literal,
    interner: &'a Interner,
}

impl<'a> fmt::Display for LiteralDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.literal.is_negative() {
            write!(f, "~")?;
        }
        write!(f, "{}", self.literal.name(self.interner))
    }
}

// Display implementation that shows codes (for debugging without interner)

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "~")?;
        }
        write!(f, "{}", self.proposition())
    }
}

// === Serde implementations ===
// Literals serialize as their bare code

impl Serialize for Literal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.code.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Literal {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        u32::deserialize(deserializer).map(|code| Literal { code })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(interner: &mut Interner, name: &str) -> Literal {
        Literal::positive(interner.intern(name))
    }

    #[test]
    fn test_complement_is_involution() {
        let mut interner = Interner::new();
        let a = lit(&mut interner, "A");

        assert_ne!(a, a.complement());
        assert_eq!(a, a.complement().complement());
        assert_eq!(a.proposition(), a.complement().proposition());
    }

    #[test]
    fn test_polarity() {
        let mut interner = Interner::new();
        let p = interner.intern("P1_1");

        let pos = Literal::positive(p);
        let neg = Literal::negative(p);

        assert!(pos.is_positive());
        assert!(!pos.is_negative());
        assert!(neg.is_negative());
        assert_eq!(pos.complement(), neg);
        assert_eq!(Literal::new(p, true), neg);
    }

    #[test]
    fn test_complement_codes_are_adjacent() {
        let mut interner = Interner::new();
        let a = lit(&mut interner, "A");
        let b = lit(&mut interner, "B");

        // Sorting puts a literal directly before its complement
        let mut v = vec![b.complement(), a.complement(), b, a];
        v.sort();
        assert_eq!(v, vec![a, a.complement(), b, b.complement()]);
    }

    #[test]
    fn test_display() {
        let mut interner = Interner::new();
        let b = interner.intern("B2_1");

        assert_eq!(Literal::positive(b).display(&interner).to_string(), "B2_1");
        assert_eq!(Literal::negative(b).display(&interner).to_string(), "~B2_1");
    }
}
