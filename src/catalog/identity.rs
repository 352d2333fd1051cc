use serde::Serialize;
use std::fmt;

/// Marker the runtime appends to generic type definitions (``Vector128`1``).
pub const GENERIC_ARITY_MARKER: char = '`';

/// Declared type as the runtime spells it, plus its generic arguments.
///
/// Generic definitions keep their arity suffix in `name`; the suffix is only
/// dropped when the type is rendered into a [`Descriptor`].
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct TypeRef {
    pub name: String,
    pub arguments: Vec<TypeRef>,
}

impl TypeRef {
    /// A non-generic type such as `Int32`.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: Vec::new(),
        }
    }

    /// A constructed generic type such as ``Vector128`1[Int32]``.
    pub fn generic(name: impl Into<String>, arguments: impl IntoIterator<Item = TypeRef>) -> Self {
        Self {
            name: name.into(),
            arguments: arguments.into_iter().collect(),
        }
    }

    pub fn is_generic(&self) -> bool {
        !self.arguments.is_empty()
    }

    /// Name with the arity marker and everything after it removed.
    pub fn base_name(&self) -> &str {
        match self.name.find(GENERIC_ARITY_MARKER) {
            Some(idx) => &self.name[..idx],
            None => &self.name,
        }
    }
}

/// Simplified, display-only rendering of a parameter or return type.
///
/// Generic arguments expand exactly one level: `Vector128<Vector128>` rather
/// than `Vector128<Vector128<Int32>>`.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize)]
#[serde(transparent)]
pub struct Descriptor(pub String);

impl Descriptor {
    pub fn render(ty: &TypeRef) -> Self {
        let base = ty.base_name();
        if !ty.is_generic() {
            return Descriptor(base.to_string());
        }
        let arguments = ty
            .arguments
            .iter()
            .map(TypeRef::base_name)
            .collect::<Vec<_>>()
            .join(", ");
        Descriptor(format!("{base}<{arguments}>"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&TypeRef> for Descriptor {
    fn from(ty: &TypeRef) -> Self {
        Descriptor::render(ty)
    }
}

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
