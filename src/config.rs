//! Generation configuration.
//!
//! A [`GenerateConfig`] is built up front, validated once, and shared
//! read-only by every generation call in a run. It is `Send + Sync`; each
//! generator owns its own random-stream cursor, so independent configs can
//! be used from parallel test workers without coordination.

use crate::error::GenerateError;
use crate::value::Value;
use rand::RngCore;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A per-type override: produces a value for a named type, drawing from the
/// caller-supplied stream so seeded runs stay reproducible.
pub type OverrideFn = dyn Fn(&mut dyn RngCore) -> Value + Send + Sync;

/// Configuration for a generation run.
#[derive(Clone)]
pub struct GenerateConfig {
    /// Seed for the random stream. `None` means non-deterministic.
    pub seed: Option<u64>,
    /// Maximum composite nesting depth before generation fails.
    pub max_depth: usize,
    /// Inclusive element-count range for lists and maps.
    pub collection_sizes: (usize, usize),
    /// Probability that a nullable produces null.
    pub null_probability: f64,
    overrides: HashMap<String, Arc<OverrideFn>>,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            seed: None,
            max_depth: 8,
            collection_sizes: (1, 5),
            null_probability: 0.5,
            overrides: HashMap::new(),
        }
    }
}

impl GenerateConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn collection_sizes(mut self, min: usize, max: usize) -> Self {
        self.collection_sizes = (min, max);
        self
    }

    pub fn null_probability(mut self, probability: f64) -> Self {
        self.null_probability = probability;
        self
    }

    /// Register an override for a named type. Overrides take precedence
    /// over every built-in strategy and are checked before kind dispatch.
    pub fn override_type<F>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&mut dyn RngCore) -> Value + Send + Sync + 'static,
    {
        self.overrides.insert(name.into(), Arc::new(f));
        self
    }

    pub fn override_for(&self, name: &str) -> Option<&Arc<OverrideFn>> {
        self.overrides.get(name)
    }

    pub(crate) fn validate(&self) -> Result<(), GenerateError> {
        let (min, max) = self.collection_sizes;
        if min > max {
            return Err(GenerateError::InvalidConfig(format!(
                "collection size range {}..={} is empty",
                min, max
            )));
        }
        if !(0.0..=1.0).contains(&self.null_probability) {
            return Err(GenerateError::InvalidConfig(format!(
                "null probability {} is outside [0, 1]",
                self.null_probability
            )));
        }
        if self.max_depth == 0 {
            return Err(GenerateError::InvalidConfig(
                "max depth must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl fmt::Debug for GenerateConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.overrides.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("GenerateConfig")
            .field("seed", &self.seed)
            .field("max_depth", &self.max_depth)
            .field("collection_sizes", &self.collection_sizes)
            .field("null_probability", &self.null_probability)
            .field("overrides", &names)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = GenerateConfig::new();
        assert_eq!(config.seed, None);
        assert_eq!(config.max_depth, 8);
        assert_eq!(config.collection_sizes, (1, 5));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_size_range() {
        let config = GenerateConfig::new().collection_sizes(5, 2);
        assert!(matches!(
            config.validate(),
            Err(GenerateError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_invalid_null_probability() {
        let config = GenerateConfig::new().null_probability(1.5);
        assert!(matches!(
            config.validate(),
            Err(GenerateError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_invalid_depth() {
        let config = GenerateConfig::new().max_depth(0);
        assert!(matches!(
            config.validate(),
            Err(GenerateError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_override_lookup() {
        let config = GenerateConfig::new().override_type("Calculator", |_| Value::Int(4));
        assert!(config.override_for("Calculator").is_some());
        assert!(config.override_for("Other").is_none());
    }
}
