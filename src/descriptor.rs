//! Type descriptors: the explicit shape model the generator walks.
//!
//! A [`TypeDescriptor`] plays the role reflection plays in runtimes that have
//! it: it names the kind of a type (primitive, enum, nullable, list, map,
//! composite, abstract) and, for composites, the ordered member shapes.
//! Descriptors for named types are registered once in a
//! [`Registry`](crate::Registry) and referenced by name via
//! [`TypeDescriptor::Ref`], which is also how self-referential graphs are
//! expressed.

use std::fmt;

/// How string values should be synthesized.
#[derive(Debug, Clone, PartialEq)]
pub enum StringStyle {
    /// Random-length string (1..=max_len) drawn from a printable charset.
    Plain { max_len: usize },
    /// A single lowercase word.
    Word,
    /// A short lorem sentence.
    Sentence,
    /// First and last name.
    FullName,
    /// A safe email address.
    Email,
    /// A company name.
    Company,
    /// A version-4 UUID string.
    Uuid,
}

/// Primitive kinds with their value bounds.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Bool,
    Int { min: i64, max: i64 },
    Float { min: f64, max: f64 },
    Str(StringStyle),
    DateTime,
    Date,
    Time,
}

/// A composite member.
#[derive(Debug, Clone)]
pub struct Field {
    pub name: String,
    pub ty: TypeDescriptor,
    /// Read-only derived member: left at its default, consumes no randomness.
    pub derived: bool,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: TypeDescriptor) -> Self {
        Self {
            name: name.into(),
            ty,
            derived: false,
        }
    }

    pub fn derived(mut self) -> Self {
        self.derived = true;
        self
    }
}

/// A named composite shape with fields in declaration order.
#[derive(Debug, Clone)]
pub struct Composite {
    pub name: String,
    pub fields: Vec<Field>,
}

impl Composite {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, name: impl Into<String>, ty: TypeDescriptor) -> Self {
        self.fields.push(Field::new(name, ty));
        self
    }

    /// Add a read-only derived member.
    pub fn derived_field(mut self, name: impl Into<String>, ty: TypeDescriptor) -> Self {
        self.fields.push(Field::new(name, ty).derived());
        self
    }
}

/// The abstract shape of a generation target.
#[derive(Debug, Clone)]
pub enum TypeDescriptor {
    Primitive(Primitive),
    /// Declared enum: uniform selection among `variants`.
    Enum { name: String, variants: Vec<String> },
    /// Optional value: null with the configured probability, else the inner type.
    Nullable(Box<TypeDescriptor>),
    /// Homogeneous collection with a configured size range.
    List(Box<TypeDescriptor>),
    /// Key/value map; generated keys are kept pairwise distinct.
    Map {
        key: Box<TypeDescriptor>,
        value: Box<TypeDescriptor>,
    },
    Composite(Composite),
    /// Interface-like type with no concrete shape; requires an override.
    Abstract { name: String },
    /// Reference to a registered descriptor, resolved at generation time.
    Ref(String),
}

impl TypeDescriptor {
    pub fn bool() -> Self {
        TypeDescriptor::Primitive(Primitive::Bool)
    }

    pub fn int(min: i64, max: i64) -> Self {
        TypeDescriptor::Primitive(Primitive::Int { min, max })
    }

    pub fn float(min: f64, max: f64) -> Self {
        TypeDescriptor::Primitive(Primitive::Float { min, max })
    }

    /// Printable-charset string with the default length bound.
    pub fn string() -> Self {
        TypeDescriptor::Primitive(Primitive::Str(StringStyle::Plain { max_len: 24 }))
    }

    pub fn styled_string(style: StringStyle) -> Self {
        TypeDescriptor::Primitive(Primitive::Str(style))
    }

    pub fn word() -> Self {
        Self::styled_string(StringStyle::Word)
    }

    pub fn sentence() -> Self {
        Self::styled_string(StringStyle::Sentence)
    }

    pub fn full_name() -> Self {
        Self::styled_string(StringStyle::FullName)
    }

    pub fn email() -> Self {
        Self::styled_string(StringStyle::Email)
    }

    pub fn company() -> Self {
        Self::styled_string(StringStyle::Company)
    }

    pub fn uuid() -> Self {
        Self::styled_string(StringStyle::Uuid)
    }

    pub fn datetime() -> Self {
        TypeDescriptor::Primitive(Primitive::DateTime)
    }

    pub fn date() -> Self {
        TypeDescriptor::Primitive(Primitive::Date)
    }

    pub fn time() -> Self {
        TypeDescriptor::Primitive(Primitive::Time)
    }

    pub fn nullable(inner: TypeDescriptor) -> Self {
        TypeDescriptor::Nullable(Box::new(inner))
    }

    pub fn list(element: TypeDescriptor) -> Self {
        TypeDescriptor::List(Box::new(element))
    }

    pub fn map(key: TypeDescriptor, value: TypeDescriptor) -> Self {
        TypeDescriptor::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    pub fn enumeration(
        name: impl Into<String>,
        variants: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        TypeDescriptor::Enum {
            name: name.into(),
            variants: variants.into_iter().map(Into::into).collect(),
        }
    }

    pub fn abstract_type(name: impl Into<String>) -> Self {
        TypeDescriptor::Abstract { name: name.into() }
    }

    pub fn reference(name: impl Into<String>) -> Self {
        TypeDescriptor::Ref(name.into())
    }

    /// The name of a named type, if this descriptor has one.
    ///
    /// Per-type overrides are keyed by this name and checked before kind
    /// dispatch, so only named types (composite, enum, abstract, ref) can
    /// carry an override.
    pub fn name(&self) -> Option<&str> {
        match self {
            TypeDescriptor::Enum { name, .. }
            | TypeDescriptor::Abstract { name }
            | TypeDescriptor::Ref(name) => Some(name),
            TypeDescriptor::Composite(c) => Some(&c.name),
            _ => None,
        }
    }
}

impl From<Composite> for TypeDescriptor {
    fn from(c: Composite) -> Self {
        TypeDescriptor::Composite(c)
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeDescriptor::Primitive(p) => match p {
                Primitive::Bool => write!(f, "bool"),
                Primitive::Int { .. } => write!(f, "int"),
                Primitive::Float { .. } => write!(f, "float"),
                Primitive::Str(_) => write!(f, "string"),
                Primitive::DateTime => write!(f, "datetime"),
                Primitive::Date => write!(f, "date"),
                Primitive::Time => write!(f, "time"),
            },
            TypeDescriptor::Enum { name, .. } => write!(f, "{}", name),
            TypeDescriptor::Nullable(inner) => write!(f, "{}?", inner),
            TypeDescriptor::List(elem) => write!(f, "list<{}>", elem),
            TypeDescriptor::Map { key, value } => write!(f, "map<{}, {}>", key, value),
            TypeDescriptor::Composite(c) => write!(f, "{}", c.name),
            TypeDescriptor::Abstract { name } => write!(f, "{}", name),
            TypeDescriptor::Ref(name) => write!(f, "{}", name),
        }
    }
}
