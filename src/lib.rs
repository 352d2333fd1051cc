//! Shared library for the intrinsics capability report.
//!
//! The crate exposes the module/type model that stands in for runtime
//! reflection, the built-in host catalog, the scanner that turns modules into
//! capability groups, and the renderers used by the `intrinsics` binary.
//! Library callers can build their own [`Module`] lists and scan them with the
//! same rules the binary applies to [`host_modules`].

pub mod catalog;
pub mod error;
pub mod logging;
pub mod report;
pub mod scanner;

pub use catalog::{
    Binding, Descriptor, MethodDecl, MethodKind, Module, SupportProbe, TypeDecl, TypeRef,
    host_modules,
};
pub use error::{ProbeFault, ReportError, ScanError};
pub use logging::{LogConfig, LogFormat, LogLevel, init_logging};
pub use report::{RenderOptions, ReportFormat, render_report, support_label};
pub use scanner::{
    CapabilityGroup, DEFAULT_CAPABILITY_PREFIX, GroupOrder, Operation, ScanOptions, scan,
    scan_with,
};

