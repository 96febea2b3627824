//! Search configuration parameters.

use serde::{Deserialize, Serialize};

/// Minimax search configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Maximum plies to look ahead (`None` = search to terminal positions).
    /// Positions cut off by the limit score as draws.
    pub depth_limit: Option<u32>,

    /// Enable alpha-beta pruning.
    /// Changes the amount of work, never the result.
    pub use_pruning: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth_limit: None,
            use_pruning: true,
        }
    }
}

impl SearchConfig {
    /// Create a new config with a depth limit.
    pub fn with_depth_limit(mut self, depth: u32) -> Self {
        self.depth_limit = Some(depth);
        self
    }

    /// Create a new config with pruning on or off.
    pub fn with_pruning(mut self, use_pruning: bool) -> Self {
        self.use_pruning = use_pruning;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.depth_limit, None);
        assert!(config.use_pruning);
    }

    #[test]
    fn test_builder_pattern() {
        let config = SearchConfig::default()
            .with_depth_limit(6)
            .with_pruning(false);

        assert_eq!(config.depth_limit, Some(6));
        assert!(!config.use_pruning);
    }

    #[test]
    fn test_serialization() {
        let config = SearchConfig::default().with_depth_limit(4);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
