//! Declarative stand-ins for loaded code modules and their types.
//!
//! A [`Module`] is what the scanner walks instead of a runtime's reflection
//! API: every type lists its methods up front and, when it represents a
//! capability group, a statically bound support probe. Method lists include
//! members the scanner must filter out (instance methods, accessors) so the
//! table describes the type as the runtime would, not the report.

use crate::catalog::identity::TypeRef;
use crate::error::ProbeFault;
use std::fmt;

/// Host check answering "can this process execute the instruction family".
pub type ProbeFn = fn() -> Result<bool, ProbeFault>;

/// Statically bound support flag of a capability type.
#[derive(Clone, Copy)]
pub struct SupportProbe {
    probe: ProbeFn,
}

impl SupportProbe {
    pub const fn new(probe: ProbeFn) -> Self {
        Self { probe }
    }

    /// A probe that always reports the given value.
    pub fn fixed(supported: bool) -> Self {
        if supported {
            Self::new(|| Ok(true))
        } else {
            Self::new(|| Ok(false))
        }
    }

    pub fn evaluate(&self) -> Result<bool, ProbeFault> {
        (self.probe)()
    }
}

impl fmt::Debug for SupportProbe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SupportProbe(..)")
    }
}

/// One loaded code unit and the types it declares, in declaration order.
#[derive(Clone, Debug)]
pub struct Module {
    pub name: String,
    pub types: Vec<TypeDecl>,
}

impl Module {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            types: Vec::new(),
        }
    }

    pub fn with_type(mut self, decl: TypeDecl) -> Self {
        self.types.push(decl);
        self
    }
}

/// A declared type. `support` is `None` for namespace/container types.
#[derive(Clone, Debug)]
pub struct TypeDecl {
    pub full_name: String,
    pub support: Option<SupportProbe>,
    pub methods: Vec<MethodDecl>,
}

impl TypeDecl {
    pub fn new(full_name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            support: None,
            methods: Vec::new(),
        }
    }

    pub fn supported_by(mut self, probe: SupportProbe) -> Self {
        self.support = Some(probe);
        self
    }

    pub fn with_method(mut self, method: MethodDecl) -> Self {
        self.methods.push(method);
        self
    }

    pub fn with_methods(mut self, methods: impl IntoIterator<Item = MethodDecl>) -> Self {
        self.methods.extend(methods);
        self
    }
}

/// Whether a method needs an instance to be invoked.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Binding {
    Static,
    Instance,
}

/// Ordinary named methods versus compiler-synthesized members.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MethodKind {
    Ordinary,
    Accessor,
    Operator,
    Constructor,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MethodDecl {
    pub name: String,
    pub binding: Binding,
    pub kind: MethodKind,
    pub parameters: Vec<TypeRef>,
    pub returns: TypeRef,
}

impl MethodDecl {
    /// Ordinary static method: the only shape that becomes an operation.
    pub fn function(
        name: impl Into<String>,
        parameters: impl IntoIterator<Item = TypeRef>,
        returns: TypeRef,
    ) -> Self {
        Self {
            name: name.into(),
            binding: Binding::Static,
            kind: MethodKind::Ordinary,
            parameters: parameters.into_iter().collect(),
            returns,
        }
    }

    pub fn instance(
        name: impl Into<String>,
        parameters: impl IntoIterator<Item = TypeRef>,
        returns: TypeRef,
    ) -> Self {
        Self {
            binding: Binding::Instance,
            ..Self::function(name, parameters, returns)
        }
    }

    /// Static property getter, e.g. `get_IsSupported`.
    pub fn static_getter(property: &str, returns: TypeRef) -> Self {
        Self {
            kind: MethodKind::Accessor,
            ..Self::function(format!("get_{property}"), [], returns)
        }
    }

    pub fn with_kind(mut self, kind: MethodKind) -> Self {
        self.kind = kind;
        self
    }

    /// True when the method is callable without an instance and is not a
    /// synthesized accessor, operator, or constructor.
    pub fn is_operation(&self) -> bool {
        self.binding == Binding::Static && self.kind == MethodKind::Ordinary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_ordinary_static_methods_are_operations() {
        let int = TypeRef::named("Int32");
        assert!(MethodDecl::function("Add", [int.clone()], int.clone()).is_operation());
        assert!(!MethodDecl::instance("Multiply", [int.clone()], int.clone()).is_operation());
        assert!(!MethodDecl::static_getter("Count", int.clone()).is_operation());
        assert!(
            !MethodDecl::function("op_Addition", [int.clone(), int.clone()], int)
                .with_kind(MethodKind::Operator)
                .is_operation()
        );
    }

    #[test]
    fn fixed_probe_reports_its_value() {
        assert!(SupportProbe::fixed(true).evaluate().unwrap());
        assert!(!SupportProbe::fixed(false).evaluate().unwrap());
    }

    #[test]
    fn builders_preserve_declaration_order() {
        let decl = TypeDecl::new("Ns.Type")
            .with_method(MethodDecl::function("B", [], TypeRef::named("Void")))
            .with_method(MethodDecl::function("A", [], TypeRef::named("Void")));
        let names: Vec<_> = decl.methods.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["B", "A"]);
        assert!(decl.support.is_none());
    }
}
