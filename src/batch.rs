//! Batch production for parameterized-test adapters.
//!
//! A [`Batch`] produces N independent cases (or argument rows) from one
//! advancing stream. A test-runner adapter calls this once per test method;
//! the batch is all-or-nothing, since test inputs must be fully formed or
//! not produced at all.

use crate::config::GenerateConfig;
use crate::descriptor::TypeDescriptor;
use crate::error::GenerateError;
use crate::generator::Generator;
use crate::registry::Registry;
use crate::value::Value;
use std::fmt;
use std::sync::Arc;

type ConfigureFn = dyn Fn(GenerateConfig) -> GenerateConfig + Send + Sync;

/// Batch specification: case count, optional seed, and a configuration
/// callback applied before each production run.
#[derive(Clone)]
pub struct Batch {
    count: usize,
    seed: Option<u64>,
    configure: Option<Arc<ConfigureFn>>,
}

impl Batch {
    /// A batch of `count` cases. Zero is rejected as `InvalidConfig`.
    pub fn new(count: usize) -> Result<Self, GenerateError> {
        if count == 0 {
            return Err(GenerateError::InvalidConfig(
                "case count must be positive".to_string(),
            ));
        }
        Ok(Self {
            count,
            seed: None,
            configure: None,
        })
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Customize the generation config before each run, e.g. to register
    /// per-type overrides or widen collection sizes.
    pub fn configure<F>(mut self, f: F) -> Self
    where
        F: Fn(GenerateConfig) -> GenerateConfig + Send + Sync + 'static,
    {
        self.configure = Some(Arc::new(f));
        self
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Whether the produced case set can be enumerated at test-discovery
    /// time. True only when this batch carries a seed: seeded generation is
    /// purely structural (no I/O, no side effects), so running it during
    /// discovery yields the same rows the execution run will see.
    pub fn supports_discovery_enumeration(&self) -> bool {
        self.seed.is_some()
    }

    /// Produce `count` independent cases for one descriptor.
    ///
    /// Any single-case failure fails the whole batch; no partial result
    /// sets are returned.
    pub fn produce(
        &self,
        ty: &TypeDescriptor,
        registry: &Registry,
    ) -> Result<Vec<Value>, GenerateError> {
        let config = self.build_config();
        let mut generator = Generator::new(&config, registry)?;
        let mut cases = Vec::with_capacity(self.count);
        for _ in 0..self.count {
            cases.push(generator.generate(ty)?);
        }
        Ok(cases)
    }

    /// Produce `count` argument rows, one value per parameter descriptor
    /// per row. This is the narrow seam a test-runner adapter builds on.
    pub fn produce_rows(
        &self,
        parameters: &[&TypeDescriptor],
        registry: &Registry,
    ) -> Result<Vec<Vec<Value>>, GenerateError> {
        let config = self.build_config();
        let mut generator = Generator::new(&config, registry)?;
        let mut rows = Vec::with_capacity(self.count);
        for _ in 0..self.count {
            let mut row = Vec::with_capacity(parameters.len());
            for ty in parameters {
                row.push(generator.generate(ty)?);
            }
            rows.push(row);
        }
        Ok(rows)
    }

    fn build_config(&self) -> GenerateConfig {
        let mut config = GenerateConfig::new();
        if let Some(seed) = self.seed {
            config = config.seed(seed);
        }
        if let Some(configure) = &self.configure {
            config = configure(config);
        }
        config
    }
}

impl fmt::Debug for Batch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Batch")
            .field("count", &self.count)
            .field("seed", &self.seed)
            .field("configured", &self.configure.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::Composite;

    #[test]
    fn test_zero_count_rejected() {
        assert!(matches!(
            Batch::new(0),
            Err(GenerateError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_discovery_enumeration_requires_seed() {
        assert!(!Batch::new(3).unwrap().supports_discovery_enumeration());
        assert!(Batch::new(3).unwrap().seed(42).supports_discovery_enumeration());
    }

    #[test]
    fn test_seeded_batches_repeat() {
        let registry = Registry::new();
        let ty: TypeDescriptor = Composite::new("Point")
            .field("x", TypeDescriptor::int(0, 100))
            .field("y", TypeDescriptor::int(0, 100))
            .into();

        let a = Batch::new(5).unwrap().seed(42).produce(&ty, &registry).unwrap();
        let b = Batch::new(5).unwrap().seed(42).produce(&ty, &registry).unwrap();

        assert_eq!(a.len(), 5);
        assert_eq!(a, b);
    }

    #[test]
    fn test_cases_within_a_batch_differ() {
        let registry = Registry::new();
        let ty = TypeDescriptor::list(TypeDescriptor::int(0, 1_000_000));

        let cases = Batch::new(4).unwrap().seed(42).produce(&ty, &registry).unwrap();
        assert!(cases.windows(2).any(|w| w[0] != w[1]));
    }

    #[test]
    fn test_configure_applies_overrides() {
        let registry = Registry::new();
        let ty = TypeDescriptor::abstract_type("Calculator");

        let batch = Batch::new(2).unwrap().seed(1).configure(|config| {
            config.override_type("Calculator", |_| Value::Str("stub".to_string()))
        });

        let cases = batch.produce(&ty, &registry).unwrap();
        assert_eq!(cases, vec![Value::Str("stub".to_string()); 2]);
    }
}
