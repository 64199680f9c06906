//! Evaluation strategy shared by all lattice engines.

use lt_core::Error;
use std::fmt;
use std::str::FromStr;

/// How a lattice engine walks the tree.
///
/// Both strategies implement the same recurrence and must agree to within
/// rounding; neither delegates to the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    /// Explicit nested loops, one node at a time.
    Loop,
    /// Whole-level array operations, one step at a time.
    #[default]
    Vectorized,
}

impl Strategy {
    /// Both strategies, in a fixed order.
    pub const ALL: [Strategy; 2] = [Strategy::Loop, Strategy::Vectorized];
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Loop => write!(f, "loop"),
            Strategy::Vectorized => write!(f, "vectorized"),
        }
    }
}

impl FromStr for Strategy {
    type Err = Error;

    /// Accepts `loop` / `slow` and `vectorized` / `fast`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "loop" | "slow" => Ok(Strategy::Loop),
            "vectorized" | "vectorised" | "fast" => Ok(Strategy::Vectorized),
            other => Err(Error::Unsupported(format!("strategy '{other}'"))),
        }
    }
}
