//! Proposition interning for efficient comparison
//!
//! Replaces string-based proposition names with interned IDs:
//! - O(1) comparison and hashing (u32 vs String)
//! - Copy semantics (no heap allocation on clone)
//! - the ID space doubles as the literal code space (see `literal`)
//!
//! The interner is a bijection between names and IDs for the lifetime of
//! one knowledge base; every component that compares literals relies on it.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// ID for an interned proposition name
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PropositionId(pub(crate) u32);

impl PropositionId {
    /// Get the raw ID value (for debugging/serialization)
    pub fn as_u32(self) -> u32 {
        self.0
    }
}

/// Interner for proposition names
///
/// Stores every distinct atomic proposition seen by the parser. Passed
/// through explicitly rather than held in global state, so independent
/// knowledge bases never share an ID space.
#[derive(Debug, Clone, Default)]
pub struct Interner {
    /// Interned names, indexed by ID
    names: Vec<String>,
    /// Lookup table from name to ID
    lookup: HashMap<String, u32>,
}

impl Interner {
    /// Create a new empty interner
    pub fn new() -> Self {
        Interner {
            names: Vec::new(),
            lookup: HashMap::new(),
        }
    }

    /// Intern a proposition name, returning its ID (get-or-create)
    pub fn intern(&mut self, name: &str) -> PropositionId {
        if let Some(&id) = self.lookup.get(name) {
            return PropositionId(id);
        }
        let id = self.names.len() as u32;
        self.names.push(name.to_string());
        self.lookup.insert(name.to_string(), id);
        PropositionId(id)
    }

    /// Resolve an ID to its name
    pub fn resolve(&self, id: PropositionId) -> &str {
        &self.names[id.0 as usize]
    }

    /// Check if a name is already interned
    pub fn contains(&self, name: &str) -> bool {
        self.lookup.contains_key(name)
    }

    /// Get the ID for an already-interned name (returns None if not found)
    pub fn get(&self, name: &str) -> Option<PropositionId> {
        self.lookup.get(name).copied().map(PropositionId)
    }

    /// Number of interned propositions
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True if no proposition has been interned yet
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl fmt::Display for PropositionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "p{}", self.0)
    }
}

// === Serde implementations ===
// IDs serialize as bare u32; name resolution stays in the interner

impl Serialize for PropositionId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PropositionId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        u32::deserialize(deserializer).map(PropositionId)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interning_is_idempotent() {
        let mut interner = Interner::new();

        let a1 = interner.intern("B1_1");
        let a2 = interner.intern("B1_1");
        let b = interner.intern("P2_1");

        // Same name should return same ID
        assert_eq!(a1, a2);

        // Different names should return different IDs
        assert_ne!(a1, b);

        // Resolution should work
        assert_eq!(interner.resolve(a1), "B1_1");
        assert_eq!(interner.resolve(b), "P2_1");

        assert_eq!(interner.len(), 2);
    }

    #[test]
    fn test_contains_and_get() {
        let mut interner = Interner::new();

        assert!(!interner.contains("Q"));
        assert!(interner.get("Q").is_none());

        let q = interner.intern("Q");

        assert!(interner.contains("Q"));
        assert_eq!(interner.get("Q"), Some(q));
        assert!(!interner.contains("R"));
    }

    #[test]
    fn test_id_copy_and_hash() {
        use std::collections::HashSet;

        let mut interner = Interner::new();
        let a = interner.intern("A");
        let b = interner.intern("B");

        let a_copy = a;
        assert_eq!(a, a_copy);

        let mut set = HashSet::new();
        set.insert(a);
        set.insert(b);
        set.insert(a); // duplicate
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_id_ordering() {
        let mut interner = Interner::new();
        let a = interner.intern("A");
        let b = interner.intern("B");

        // First interned should have lower ID
        assert!(a < b);
    }

    #[test]
    fn test_clone_interner() {
        let mut interner = Interner::new();
        let a = interner.intern("A");

        let interner2 = interner.clone();
        assert_eq!(interner2.resolve(a), "A");
        assert_eq!(interner2.len(), 1);
    }
}
