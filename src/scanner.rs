//! Capability discovery over a caller-supplied module list.
//!
//! The scanner is a pure function of its input apart from evaluating support
//! probes, which read host CPU features. Modules, types, and methods are
//! visited in the order given; [`GroupOrder::ByName`] opts into a sorted
//! result for reproducible fixtures.

use crate::catalog::{Descriptor, Module, TypeDecl};
use crate::error::ScanError;
use serde::Serialize;
use tracing::{debug, trace};

/// Namespace every capability group lives under.
pub const DEFAULT_CAPABILITY_PREFIX: &str = "System.Runtime.Intrinsics";

/// One instruction-set family, its host support, and its static operations.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct CapabilityGroup {
    pub name: String,
    pub is_supported: bool,
    pub operations: Vec<Operation>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Operation {
    pub name: String,
    pub parameters: Vec<Descriptor>,
    pub return_descriptor: Descriptor,
}

impl Operation {
    /// `Name(P1, P2) -> R`
    pub fn signature(&self) -> String {
        let parameters = self
            .parameters
            .iter()
            .map(Descriptor::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        format!("{}({}) -> {}", self.name, parameters, self.return_descriptor)
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum GroupOrder {
    /// Module order, then type declaration order.
    #[default]
    Declared,
    /// Lexicographic by group name (stable for equal names).
    ByName,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ScanOptions {
    pub prefix: String,
    pub order: GroupOrder,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_CAPABILITY_PREFIX.to_string(),
            order: GroupOrder::Declared,
        }
    }
}

/// Scan with the default prefix, preserving declaration order.
pub fn scan(modules: &[Module]) -> Result<Vec<CapabilityGroup>, ScanError> {
    scan_with(modules, &ScanOptions::default())
}

pub fn scan_with(
    modules: &[Module],
    options: &ScanOptions,
) -> Result<Vec<CapabilityGroup>, ScanError> {
    let mut groups = Vec::new();
    for module in modules {
        for decl in &module.types {
            if let Some(group) = inspect_type(decl, &options.prefix)? {
                debug!(
                    module = %module.name,
                    group = %group.name,
                    supported = group.is_supported,
                    operations = group.operations.len(),
                    "capability group found"
                );
                groups.push(group);
            }
        }
    }

    if options.order == GroupOrder::ByName {
        groups.sort_by(|a, b| a.name.cmp(&b.name));
    }
    Ok(groups)
}

/// Returns `None` for types outside the prefix or without a support flag.
fn inspect_type(decl: &TypeDecl, prefix: &str) -> Result<Option<CapabilityGroup>, ScanError> {
    if !decl.full_name.starts_with(prefix) {
        return Ok(None);
    }
    let Some(probe) = decl.support else {
        trace!(type_name = %decl.full_name, "no support flag; treating as container type");
        return Ok(None);
    };

    let is_supported = probe
        .evaluate()
        .map_err(|source| ScanError::SupportProbe {
            group: decl.full_name.clone(),
            source,
        })?;

    let operations = decl
        .methods
        .iter()
        .filter(|method| method.is_operation())
        .map(|method| Operation {
            name: method.name.clone(),
            parameters: method.parameters.iter().map(Descriptor::render).collect(),
            return_descriptor: Descriptor::render(&method.returns),
        })
        .collect();

    Ok(Some(CapabilityGroup {
        name: decl.full_name.clone(),
        is_supported,
        operations,
    }))
}
