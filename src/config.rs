//! Engine configuration types.

use serde::{Deserialize, Serialize};

/// Configuration for the refutation loop
///
/// Termination is guaranteed without any limit (clauses over a finite
/// alphabet form a finite space), so the defaults impose none. The limits
/// exist to turn runaway growth on large alphabets into a distinguishable
/// error instead of a long wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Maximum number of saturation rounds before giving up
    pub max_rounds: usize,
    /// Maximum number of retained tainted clauses before giving up
    pub max_clauses: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            max_rounds: 0,  // 0 means no limit
            max_clauses: 0, // 0 means no limit
        }
    }
}
