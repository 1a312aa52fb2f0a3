//! Error taxonomy for generation failures.

use thiserror::Error;

/// Errors surfaced by the generator and the batch layer.
///
/// A failure is always surfaced to the caller with the offending type's
/// identity; partial or garbage values are never returned.
#[derive(Error, Debug)]
pub enum GenerateError {
    /// No resolvable generation strategy for a type: an abstract type with
    /// no override, an unregistered reference, or an enum with no variants.
    #[error("no generation strategy for type '{type_name}'")]
    UnsupportedType { type_name: String },

    /// Composite nesting exceeded the configured maximum depth, which is
    /// how self-referential graphs terminate.
    #[error("recursion limit {limit} exceeded while generating '{type_name}'")]
    RecursionLimitExceeded { type_name: String, limit: usize },

    /// Rejected configuration (zero case count, empty size range, ...).
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A nested failure wrapped with the member it occurred under.
    #[error("failed to generate '{type_name}'")]
    Generation {
        type_name: String,
        #[source]
        source: Box<GenerateError>,
    },
}

impl GenerateError {
    pub(crate) fn unsupported(type_name: impl Into<String>) -> Self {
        GenerateError::UnsupportedType {
            type_name: type_name.into(),
        }
    }

    pub(crate) fn wrap(self, type_name: impl Into<String>) -> Self {
        GenerateError::Generation {
            type_name: type_name.into(),
            source: Box::new(self),
        }
    }

    /// The innermost cause, unwrapping any `Generation` layers.
    pub fn root_cause(&self) -> &GenerateError {
        match self {
            GenerateError::Generation { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapping_preserves_cause() {
        let err = GenerateError::unsupported("Calculator")
            .wrap("Order.calculator")
            .wrap("Order");

        assert!(matches!(
            err.root_cause(),
            GenerateError::UnsupportedType { type_name } if type_name == "Calculator"
        ));
        assert_eq!(err.to_string(), "failed to generate 'Order'");
    }
}
