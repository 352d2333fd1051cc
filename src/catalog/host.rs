//! Built-in module table for the current build.
//!
//! Mirrors how the runtime lays out its intrinsics: capability classes live in
//! `System.Private.CoreLib` next to container types that share the namespace
//! but expose no support flag, while `System.Runtime.Intrinsics` is a facade
//! that declares nothing itself.

use crate::catalog::model::{MethodDecl, Module, SupportProbe, TypeDecl};
use crate::catalog::{TypeRef, arm, x86};

pub const CORELIB_MODULE: &str = "System.Private.CoreLib";
pub const INTRINSICS_FACADE_MODULE: &str = "System.Runtime.Intrinsics";
pub const NUMERICS_MODULE: &str = "System.Numerics.Vectors";

/// Modules visible to the process, in load order.
pub fn host_modules() -> Vec<Module> {
    let mut corelib = Module::new(CORELIB_MODULE);
    corelib.types.extend(container_types());
    corelib.types.extend(x86::capability_types());
    corelib.types.extend(arm::capability_types());

    let numerics = Module::new(NUMERICS_MODULE).with_type(
        TypeDecl::new("System.Numerics.Vector")
            .with_method(MethodDecl::static_getter("IsHardwareAccelerated", prim("Boolean")))
            .with_method(MethodDecl::function(
                "Add",
                [vector("Single"), vector("Single")],
                vector("Single"),
            )),
    );

    vec![corelib, Module::new(INTRINSICS_FACADE_MODULE), numerics]
}

/// Types under the intrinsics namespace that are not capability groups.
fn container_types() -> Vec<TypeDecl> {
    let helpers = [
        ("System.Runtime.Intrinsics.Vector64", 64),
        ("System.Runtime.Intrinsics.Vector128", 128),
        ("System.Runtime.Intrinsics.Vector256", 256),
        ("System.Runtime.Intrinsics.Vector512", 512),
    ];
    let mut types: Vec<TypeDecl> = helpers
        .into_iter()
        .map(|(name, bits)| {
            let lanes = |elem: &str| TypeRef::generic(format!("Vector{bits}`1"), [prim(elem)]);
            TypeDecl::new(name)
                .with_method(MethodDecl::static_getter("IsHardwareAccelerated", prim("Boolean")))
                .with_method(MethodDecl::function("Create", [prim("Int32")], lanes("Int32")))
                .with_method(MethodDecl::function(
                    "Add",
                    [lanes("Single"), lanes("Single")],
                    lanes("Single"),
                ))
        })
        .collect();

    types.push(TypeDecl::new("System.Runtime.Intrinsics.Vector128`1").with_methods(object_members()));
    types.push(TypeDecl::new("System.Runtime.Intrinsics.X86.FloatComparisonMode"));
    types
}

/// A capability class as the runtime declares it: the `IsSupported` getter,
/// its own intrinsics, then the instance members inherited from the root
/// object type.
pub(crate) fn capability_type(
    full_name: &str,
    probe: SupportProbe,
    operations: impl IntoIterator<Item = MethodDecl>,
) -> TypeDecl {
    TypeDecl::new(full_name)
        .supported_by(probe)
        .with_method(MethodDecl::static_getter("IsSupported", prim("Boolean")))
        .with_methods(operations)
        .with_methods(object_members())
}

fn object_members() -> Vec<MethodDecl> {
    vec![
        MethodDecl::instance("GetType", [], prim("Type")),
        MethodDecl::instance("ToString", [], prim("String")),
        MethodDecl::instance("Equals", [prim("Object")], prim("Boolean")),
        MethodDecl::instance("GetHashCode", [], prim("Int32")),
    ]
}

pub(crate) fn op<const N: usize>(name: &str, parameters: [TypeRef; N], returns: TypeRef) -> MethodDecl {
    MethodDecl::function(name, parameters, returns)
}

pub(crate) fn prim(name: &str) -> TypeRef {
    TypeRef::named(name)
}

pub(crate) fn ptr(elem: &str) -> TypeRef {
    TypeRef::named(format!("{elem}*"))
}

pub(crate) fn v64(elem: &str) -> TypeRef {
    TypeRef::generic("Vector64`1", [prim(elem)])
}

pub(crate) fn v128(elem: &str) -> TypeRef {
    TypeRef::generic("Vector128`1", [prim(elem)])
}

pub(crate) fn v256(elem: &str) -> TypeRef {
    TypeRef::generic("Vector256`1", [prim(elem)])
}

pub(crate) fn v512(elem: &str) -> TypeRef {
    TypeRef::generic("Vector512`1", [prim(elem)])
}

fn vector(elem: &str) -> TypeRef {
    TypeRef::generic("Vector`1", [prim(elem)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::{DEFAULT_CAPABILITY_PREFIX, scan};
    use std::collections::BTreeSet;

    #[test]
    fn host_scan_does_not_fault() {
        let groups = scan(&host_modules()).expect("host probes should evaluate");
        assert!(!groups.is_empty());
        assert!(
            groups
                .iter()
                .all(|g| g.name.starts_with(DEFAULT_CAPABILITY_PREFIX))
        );
    }

    #[test]
    fn type_names_are_unique() {
        let modules = host_modules();
        let mut seen = BTreeSet::new();
        for decl in modules.iter().flat_map(|m| &m.types) {
            assert!(seen.insert(decl.full_name.clone()), "duplicate type {}", decl.full_name);
        }
    }

    #[test]
    fn container_types_are_not_reported() {
        let groups = scan(&host_modules()).unwrap();
        for excluded in [
            "System.Runtime.Intrinsics.Vector128",
            "System.Runtime.Intrinsics.Vector128`1",
            "System.Runtime.Intrinsics.X86.FloatComparisonMode",
            "System.Numerics.Vector",
        ] {
            assert!(
                groups.iter().all(|g| g.name != excluded),
                "{excluded} should not be a capability group"
            );
        }
    }

    #[test]
    fn capability_groups_expose_only_static_intrinsics() {
        let groups = scan(&host_modules()).unwrap();
        let aes = groups
            .iter()
            .find(|g| g.name == "System.Runtime.Intrinsics.X86.Aes")
            .expect("Aes group present");
        let names: Vec<_> = aes.operations.iter().map(|op| op.name.as_str()).collect();
        assert!(names.contains(&"Encrypt"));
        assert!(!names.contains(&"get_IsSupported"));
        assert!(!names.contains(&"ToString"));
    }

    #[test]
    fn facade_module_declares_no_types() {
        let modules = host_modules();
        let facade = modules
            .iter()
            .find(|m| m.name == INTRINSICS_FACADE_MODULE)
            .expect("facade module present");
        assert!(facade.types.is_empty());
    }

    #[cfg(target_arch = "x86_64")]
    #[test]
    fn x86_64_baseline_groups_are_supported() {
        let groups = scan(&host_modules()).unwrap();
        for baseline in [
            "System.Runtime.Intrinsics.X86.X86Base",
            "System.Runtime.Intrinsics.X86.Sse",
            "System.Runtime.Intrinsics.X86.Sse2",
            "System.Runtime.Intrinsics.X86.Sse2+X64",
        ] {
            let group = groups.iter().find(|g| g.name == baseline).unwrap();
            assert!(group.is_supported, "{baseline} is part of the x86_64 baseline");
        }
        let arm = groups
            .iter()
            .find(|g| g.name == "System.Runtime.Intrinsics.Arm.AdvSimd")
            .unwrap();
        assert!(!arm.is_supported);
    }

    #[cfg(target_arch = "aarch64")]
    #[test]
    fn aarch64_baseline_groups_are_supported() {
        let groups = scan(&host_modules()).unwrap();
        for baseline in [
            "System.Runtime.Intrinsics.Arm.ArmBase",
            "System.Runtime.Intrinsics.Arm.AdvSimd",
            "System.Runtime.Intrinsics.Arm.AdvSimd+Arm64",
        ] {
            let group = groups.iter().find(|g| g.name == baseline).unwrap();
            assert!(group.is_supported, "{baseline} is part of the aarch64 baseline");
        }
        let sse = groups
            .iter()
            .find(|g| g.name == "System.Runtime.Intrinsics.X86.Sse")
            .unwrap();
        assert!(!sse.is_supported);
    }
}
