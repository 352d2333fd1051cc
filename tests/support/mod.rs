use assert_cmd::Command;
use intrinsics::{MethodDecl, Module, SupportProbe, TypeDecl, TypeRef};
use jsonschema::JSONSchema;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;

const ENV_OVERRIDES: &[&str] = &[
    "INTRINSICS_FORMAT",
    "INTRINSICS_PREFIX",
    "INTRINSICS_LOG",
    "INTRINSICS_LOG_FORMAT",
    "RUST_LOG",
];

pub fn repo_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// The report binary with any inherited configuration stripped.
pub fn intrinsics_cmd() -> Command {
    let mut cmd = Command::cargo_bin("intrinsics").expect("intrinsics binary is built");
    for name in ENV_OVERRIDES {
        cmd.env_remove(name);
    }
    cmd
}

pub fn report_schema() -> JSONSchema {
    let path = repo_root().join("schema/capability_report.schema.json");
    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("unable to read {}: {err}", path.display()));
    let schema: Value = serde_json::from_str(&raw).expect("report schema is valid JSON");
    JSONSchema::compile(&schema).expect("report schema compiles")
}

pub fn stdout_json(output: &[u8]) -> Value {
    serde_json::from_slice(output).expect("stdout should be a JSON document")
}

pub fn vector_of(arg: &str) -> TypeRef {
    TypeRef::generic("Vector`1", [TypeRef::named(arg)])
}

/// A namespace-only type, one real capability, and a type outside the prefix.
pub fn synthetic_modules() -> Vec<Module> {
    vec![
        Module::new("Synthetic.Core")
            .with_type(TypeDecl::new("Ns.Intrinsics"))
            .with_type(
                TypeDecl::new("Ns.Intrinsics.Example")
                    .supported_by(SupportProbe::fixed(true))
                    .with_method(MethodDecl::static_getter("IsSupported", TypeRef::named("Boolean")))
                    .with_method(MethodDecl::function(
                        "Op",
                        [vector_of("Int32")],
                        vector_of("Int32"),
                    ))
                    .with_method(MethodDecl::instance(
                        "ToString",
                        Vec::new(),
                        TypeRef::named("String"),
                    )),
            ),
        Module::new("Synthetic.Other")
            .with_type(TypeDecl::new("Other.Thing").supported_by(SupportProbe::fixed(true))),
    ]
}
