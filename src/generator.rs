//! The structural value generator.
//!
//! Generation is a pure recursive descent over a [`TypeDescriptor`],
//! parameterized by a single ChaCha8 stream whose position advances
//! monotonically across the whole object graph: sibling members consume
//! distinct draws in declaration order, so a seeded run is reproducible
//! value-for-value. Generation performs no I/O and never blocks, which is
//! what makes seeded batches safe to enumerate at test-discovery time.

use crate::config::GenerateConfig;
use crate::descriptor::{Composite, Primitive, TypeDescriptor};
use crate::error::GenerateError;
use crate::fake;
use crate::registry::Registry;
use crate::value::Value;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Retries per map entry before giving up on reaching the target count.
const MAP_KEY_RETRIES: usize = 16;

/// Structural value generator owning one random-stream cursor.
///
/// The configuration and registry are borrowed read-only; concurrent
/// generators over the same config do not interfere.
pub struct Generator<'a> {
    rng: ChaCha8Rng,
    config: &'a GenerateConfig,
    registry: &'a Registry,
}

impl<'a> Generator<'a> {
    /// Validates the configuration and seeds the stream: from the
    /// configured seed when present, otherwise from process entropy.
    pub fn new(
        config: &'a GenerateConfig,
        registry: &'a Registry,
    ) -> Result<Self, GenerateError> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(rand::random);
        Ok(Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            config,
            registry,
        })
    }

    /// Generate one fully-populated value for the descriptor.
    ///
    /// Fails with [`GenerateError::UnsupportedType`] when a type has no
    /// resolvable strategy and [`GenerateError::RecursionLimitExceeded`]
    /// when composite nesting passes the configured maximum. On failure no
    /// partial value is returned.
    pub fn generate(&mut self, ty: &TypeDescriptor) -> Result<Value, GenerateError> {
        self.generate_at(ty, 0)
    }

    fn generate_at(&mut self, ty: &TypeDescriptor, depth: usize) -> Result<Value, GenerateError> {
        // Overrides win over every built-in strategy.
        if let Some(name) = ty.name() {
            if let Some(f) = self.config.override_for(name) {
                let f = f.clone();
                return Ok(f(&mut self.rng));
            }
        }

        match ty {
            TypeDescriptor::Primitive(p) => Ok(self.primitive(p)),
            TypeDescriptor::Enum { name, variants } => {
                if variants.is_empty() {
                    return Err(GenerateError::unsupported(name.clone()));
                }
                let idx = self.rng.random_range(0..variants.len());
                Ok(Value::Enum {
                    decl: name.clone(),
                    variant: variants[idx].clone(),
                })
            }
            TypeDescriptor::Nullable(inner) => {
                if self.rng.random_bool(self.config.null_probability) {
                    Ok(Value::Null)
                } else {
                    self.generate_at(inner, depth)
                }
            }
            TypeDescriptor::List(element) => {
                let count = self.collection_count();
                let mut items = Vec::with_capacity(count);
                for _ in 0..count {
                    items.push(self.generate_at(element, depth)?);
                }
                Ok(Value::List(items))
            }
            TypeDescriptor::Map { key, value } => self.generate_map(key, value, depth),
            TypeDescriptor::Composite(c) => self.generate_composite(c, depth),
            TypeDescriptor::Abstract { name } => Err(GenerateError::unsupported(name.clone())),
            TypeDescriptor::Ref(name) => {
                // Named references are where registered graphs can cycle,
                // including through lists, maps, and nullables; depth is
                // accounted here as well as on composite entry.
                if depth >= self.config.max_depth {
                    return Err(GenerateError::RecursionLimitExceeded {
                        type_name: name.clone(),
                        limit: self.config.max_depth,
                    });
                }
                let resolved = self
                    .registry
                    .get(name)
                    .ok_or_else(|| GenerateError::unsupported(name.clone()))?;
                self.generate_at(resolved, depth + 1)
            }
        }
    }

    fn primitive(&mut self, p: &Primitive) -> Value {
        match p {
            Primitive::Bool => Value::Bool(self.rng.random()),
            Primitive::Int { min, max } => Value::Int(fake::int(&mut self.rng, *min, *max)),
            Primitive::Float { min, max } => Value::Float(fake::float(&mut self.rng, *min, *max)),
            Primitive::Str(style) => Value::Str(fake::string(&mut self.rng, style)),
            Primitive::DateTime => Value::DateTime(fake::datetime(&mut self.rng)),
            Primitive::Date => Value::Date(fake::date(&mut self.rng)),
            Primitive::Time => Value::Time(fake::time(&mut self.rng)),
        }
    }

    fn generate_map(
        &mut self,
        key: &TypeDescriptor,
        value: &TypeDescriptor,
        depth: usize,
    ) -> Result<Value, GenerateError> {
        let count = self.collection_count();
        let mut entries: Vec<(Value, Value)> = Vec::with_capacity(count);

        'entries: for _ in 0..count {
            // Regenerate colliding keys; over a tiny key domain the target
            // count may shrink, but keys stay pairwise distinct.
            let mut attempts = 0;
            let k = loop {
                let candidate = self.generate_at(key, depth)?;
                if !entries.iter().any(|(existing, _)| *existing == candidate) {
                    break candidate;
                }
                attempts += 1;
                if attempts >= MAP_KEY_RETRIES {
                    break 'entries;
                }
            };
            let v = self.generate_at(value, depth)?;
            entries.push((k, v));
        }

        Ok(Value::Map(entries))
    }

    fn generate_composite(
        &mut self,
        c: &Composite,
        depth: usize,
    ) -> Result<Value, GenerateError> {
        if depth >= self.config.max_depth {
            return Err(GenerateError::RecursionLimitExceeded {
                type_name: c.name.clone(),
                limit: self.config.max_depth,
            });
        }

        let mut fields = Vec::with_capacity(c.fields.len());
        for field in &c.fields {
            let value = if field.derived {
                // Read-only members are left at their default and consume
                // no randomness, so they cannot perturb the seeded stream.
                default_value(&field.ty)
            } else {
                self.generate_at(&field.ty, depth + 1)
                    .map_err(|e| e.wrap(format!("{}.{}", c.name, field.name)))?
            };
            fields.push((field.name.clone(), value));
        }

        Ok(Value::Struct {
            name: c.name.clone(),
            fields,
        })
    }

    fn collection_count(&mut self) -> usize {
        let (min, max) = self.config.collection_sizes;
        self.rng.random_range(min..=max)
    }
}

/// The zero/default value for a descriptor, used for derived members.
pub(crate) fn default_value(ty: &TypeDescriptor) -> Value {
    match ty {
        TypeDescriptor::Primitive(p) => match p {
            Primitive::Bool => Value::Bool(false),
            Primitive::Int { .. } => Value::Int(0),
            Primitive::Float { .. } => Value::Float(0.0),
            Primitive::Str(_) => Value::Str(String::new()),
            Primitive::DateTime => {
                Value::DateTime(chrono::DateTime::<chrono::Utc>::UNIX_EPOCH.naive_utc())
            }
            Primitive::Date => {
                Value::Date(chrono::DateTime::<chrono::Utc>::UNIX_EPOCH.naive_utc().date())
            }
            Primitive::Time => Value::Time(chrono::NaiveTime::MIN),
        },
        TypeDescriptor::Enum { name, variants } => variants
            .first()
            .map(|v| Value::Enum {
                decl: name.clone(),
                variant: v.clone(),
            })
            .unwrap_or(Value::Null),
        TypeDescriptor::List(_) => Value::List(Vec::new()),
        TypeDescriptor::Map { .. } => Value::Map(Vec::new()),
        TypeDescriptor::Nullable(_)
        | TypeDescriptor::Composite(_)
        | TypeDescriptor::Abstract { .. }
        | TypeDescriptor::Ref(_) => Value::Null,
    }
}
