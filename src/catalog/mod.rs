//! Capability catalog wiring.
//!
//! The catalog replaces runtime type introspection with a table bound at
//! compile time: modules declare their types, types optionally carry a
//! support probe backed by `std::arch` feature detection, and methods carry
//! the type references the scanner renders into descriptors. Callers hand
//! [`host_modules`] (or their own modules) to the scanner.

pub mod host;
pub mod identity;
pub mod model;

mod arm;
mod x86;

pub use host::host_modules;
pub use identity::{Descriptor, GENERIC_ARITY_MARKER, TypeRef};
pub use model::{Binding, MethodDecl, MethodKind, Module, ProbeFn, SupportProbe, TypeDecl};
