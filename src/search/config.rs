//! Search configuration parameters.

use serde::{Deserialize, Serialize};

/// Minimax configuration.
///
/// The default searches the full game tree.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Maximum search depth in plies below the root (0 = unlimited).
    ///
    /// Non-terminal positions at the limit score as a draw, so any non-zero
    /// depth gives up optimal play: a win or loss beyond the horizon is not
    /// seen.
    pub max_depth: u32,
}

impl SearchConfig {
    /// Create a new config with custom max depth.
    ///
    /// A non-zero depth makes the search heuristic rather than exact.
    #[must_use]
    pub fn with_max_depth(mut self, depth: u32) -> Self {
        self.max_depth = depth;
        self
    }

    /// Check whether `depth` is at or past the configured horizon.
    #[must_use]
    pub fn at_horizon(&self, depth: u32) -> bool {
        self.max_depth > 0 && depth >= self.max_depth
    }
}
