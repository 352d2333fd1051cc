//! Arm capability classes. Only a 64-bit Arm process reports support; nested
//! `+Arm64` classes share their parent's feature requirement.

use crate::catalog::host::{capability_type, op, prim, ptr, v64, v128};
use crate::catalog::model::{SupportProbe, TypeDecl};
use crate::error::ProbeFault;

const NS: &str = "System.Runtime.Intrinsics.Arm";

macro_rules! arm64_probe {
    ($($feature:tt),*) => {{
        fn detect() -> Result<bool, ProbeFault> {
            #[cfg(target_arch = "aarch64")]
            {
                Ok(true $(&& std::arch::is_aarch64_feature_detected!($feature))*)
            }
            #[cfg(not(target_arch = "aarch64"))]
            {
                Ok(false)
            }
        }
        SupportProbe::new(detect)
    }};
}

fn class(name: &str) -> String {
    format!("{NS}.{name}")
}

pub(crate) fn capability_types() -> Vec<TypeDecl> {
    vec![
        capability_type(
            &class("ArmBase"),
            arm64_probe!(),
            [
                op("LeadingZeroCount", [prim("Int32")], prim("Int32")),
                op("ReverseElementBits", [prim("UInt32")], prim("UInt32")),
                op("Yield", [], prim("Void")),
            ],
        ),
        capability_type(
            &class("ArmBase+Arm64"),
            arm64_probe!(),
            [
                op("LeadingSignCount", [prim("Int64")], prim("Int32")),
                op("MultiplyHigh", [prim("Int64"), prim("Int64")], prim("Int64")),
            ],
        ),
        capability_type(
            &class("AdvSimd"),
            arm64_probe!("neon"),
            [
                op("Add", [v64("Byte"), v64("Byte")], v64("Byte")),
                op("Add", [v128("Single"), v128("Single")], v128("Single")),
                op("Abs", [v128("Int16")], v128("UInt16")),
                op("LoadVector128", [ptr("Byte")], v128("Byte")),
                op(
                    "FusedMultiplyAdd",
                    [v128("Single"), v128("Single"), v128("Single")],
                    v128("Single"),
                ),
            ],
        ),
        capability_type(
            &class("AdvSimd+Arm64"),
            arm64_probe!("neon"),
            [
                op("AddAcross", [v128("Int32")], v64("Int32")),
                op("MaxAcross", [v128("Byte")], v64("Byte")),
                op("Sqrt", [v128("Double")], v128("Double")),
            ],
        ),
        capability_type(
            &class("Aes"),
            arm64_probe!("aes"),
            [
                op("Encrypt", [v128("Byte"), v128("Byte")], v128("Byte")),
                op("MixColumns", [v128("Byte")], v128("Byte")),
                op(
                    "PolynomialMultiplyWideningLower",
                    [v64("Int64"), v64("Int64")],
                    v128("Int64"),
                ),
            ],
        ),
        capability_type(
            &class("Crc32"),
            arm64_probe!("crc"),
            [
                op("ComputeCrc32", [prim("UInt32"), prim("Byte")], prim("UInt32")),
                op("ComputeCrc32C", [prim("UInt32"), prim("UInt32")], prim("UInt32")),
            ],
        ),
        capability_type(
            &class("Crc32+Arm64"),
            arm64_probe!("crc"),
            [op("ComputeCrc32", [prim("UInt32"), prim("UInt64")], prim("UInt32"))],
        ),
        capability_type(
            &class("Dp"),
            arm64_probe!("dotprod"),
            [
                op(
                    "DotProduct",
                    [v64("Int32"), v64("SByte"), v64("SByte")],
                    v64("Int32"),
                ),
                op(
                    "DotProduct",
                    [v128("UInt32"), v128("Byte"), v128("Byte")],
                    v128("UInt32"),
                ),
            ],
        ),
        capability_type(
            &class("Rdm"),
            arm64_probe!("rdm"),
            [op(
                "MultiplyRoundedDoublingAndAddSaturateHigh",
                [v64("Int16"), v64("Int16"), v64("Int16")],
                v64("Int16"),
            )],
        ),
        // FEAT_SHA1 and FEAT_SHA256 are reported together as `sha2`.
        capability_type(
            &class("Sha1"),
            arm64_probe!("sha2"),
            [
                op(
                    "HashUpdateChoose",
                    [v128("UInt32"), v64("UInt32"), v128("UInt32")],
                    v128("UInt32"),
                ),
                op("FixedRotate", [v64("UInt32")], v64("UInt32")),
            ],
        ),
        capability_type(
            &class("Sha256"),
            arm64_probe!("sha2"),
            [
                op(
                    "HashUpdate1",
                    [v128("UInt32"), v128("UInt32"), v128("UInt32")],
                    v128("UInt32"),
                ),
                op(
                    "ScheduleUpdate0",
                    [v128("UInt32"), v128("UInt32")],
                    v128("UInt32"),
                ),
            ],
        ),
    ]
}
