//! Conversion configuration.
//!
//! Subset construction can create up to 2^n DFA states for an n-state NFA.
//! `ConversionConfig` lets callers bound that growth and choose whether the
//! NFA is pruned before conversion.
//!
//! # Example
//!
//! ```rust
//! use fsmkit::config::ConversionConfigBuilder;
//!
//! let config = ConversionConfigBuilder::new()
//!     .max_states(1024)
//!     .prune_unreachable(true)
//!     .build();
//!
//! assert_eq!(config.max_states(), Some(1024));
//! assert!(config.prune_unreachable());
//! ```

/// Options for subset construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConversionConfig {
    max_states: Option<usize>,
    prune_unreachable: bool,
}

impl ConversionConfig {
    /// Unbounded conversion without pruning.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_states(&self) -> Option<usize> {
        self.max_states
    }

    pub fn prune_unreachable(&self) -> bool {
        self.prune_unreachable
    }
}

/// Builder for creating conversion configuration
#[derive(Debug, Default)]
pub struct ConversionConfigBuilder {
    max_states: Option<usize>,
    prune_unreachable: bool,
}

impl ConversionConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail conversion once more than `n` DFA states would exist
    pub fn max_states(mut self, n: usize) -> Self {
        self.max_states = Some(n);
        self
    }

    /// Drop unreachable NFA states before converting
    pub fn prune_unreachable(mut self, prune: bool) -> Self {
        self.prune_unreachable = prune;
        self
    }

    pub fn build(self) -> ConversionConfig {
        ConversionConfig {
            max_states: self.max_states,
            prune_unreachable: self.prune_unreachable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unbounded_without_pruning() {
        let config = ConversionConfig::new();
        assert_eq!(config.max_states(), None);
        assert!(!config.prune_unreachable());
        assert_eq!(ConversionConfigBuilder::new().build(), config);
    }

    #[test]
    fn builder_sets_every_option() {
        let config = ConversionConfigBuilder::new()
            .max_states(3)
            .prune_unreachable(true)
            .build();
        assert_eq!(config.max_states(), Some(3));
        assert!(config.prune_unreachable());
    }
}
