//! Seeded structural test-data generator.
//!
//! Given an explicit type descriptor and a configuration (optional seed,
//! per-type overrides, recursion limit, collection size range), produces a
//! fully-populated value graph with plausible fake data: nested composites,
//! collections, maps, enums, and nullable members. Seeded runs are
//! reproducible value-for-value; unseeded runs are not. A batch layer
//! produces N cases or argument rows for parameterized-test adapters.
//!
//! # Example
//!
//! ```rust
//! use autofake::{Composite, GenerateConfig, Generator, Registry, TypeDescriptor};
//!
//! let registry = Registry::new();
//! let user: TypeDescriptor = Composite::new("User")
//!     .field("id", TypeDescriptor::int(1, 9999))
//!     .field("name", TypeDescriptor::full_name())
//!     .field("tags", TypeDescriptor::list(TypeDescriptor::word()))
//!     .into();
//!
//! let config = GenerateConfig::new().seed(42);
//! let mut generator = Generator::new(&config, &registry).unwrap();
//!
//! let value = generator.generate(&user).unwrap();
//! assert!(value.field("id").is_some());
//! ```

pub mod batch;
pub mod catalog;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod fake;
pub mod generator;
pub mod registry;
pub mod value;

pub use batch::Batch;
pub use config::{GenerateConfig, OverrideFn};
pub use descriptor::{Composite, Field, Primitive, StringStyle, TypeDescriptor};
pub use error::GenerateError;
pub use generator::Generator;
pub use registry::Registry;
pub use value::{write_json, Value};
