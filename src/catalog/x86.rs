//! x86/x64 capability classes.
//!
//! Support probes defer to `std::arch::is_x86_feature_detected!`, which also
//! checks that the OS saves the extended register state. Nested `+X64` classes
//! additionally require a 64-bit process. On other architectures every probe
//! reports `false`.

use crate::catalog::TypeRef;
use crate::catalog::host::{capability_type, op, prim, ptr, v128, v256, v512};
use crate::catalog::model::{SupportProbe, TypeDecl};
use crate::error::ProbeFault;

const NS: &str = "System.Runtime.Intrinsics.X86";

macro_rules! x86_probe {
    ($($feature:tt),*) => {{
        fn detect() -> Result<bool, ProbeFault> {
            #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
            {
                Ok(true $(&& std::arch::is_x86_feature_detected!($feature))*)
            }
            #[cfg(not(any(target_arch = "x86", target_arch = "x86_64")))]
            {
                Ok(false)
            }
        }
        SupportProbe::new(detect)
    }};
}

macro_rules! x64_probe {
    ($($feature:tt),*) => {{
        fn detect() -> Result<bool, ProbeFault> {
            #[cfg(target_arch = "x86_64")]
            {
                Ok(true $(&& std::arch::is_x86_feature_detected!($feature))*)
            }
            #[cfg(not(target_arch = "x86_64"))]
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
            &class("X86Base"),
            x86_probe!(),
            [
                op(
                    "CpuId",
                    [prim("Int32"), prim("Int32")],
                    TypeRef::generic(
                        "ValueTuple`4",
                        [prim("Int32"), prim("Int32"), prim("Int32"), prim("Int32")],
                    ),
                ),
                op("Pause", [], prim("Void")),
            ],
        ),
        capability_type(&class("X86Base+X64"), x64_probe!(), []),
        capability_type(
            &class("Sse"),
            x86_probe!("sse"),
            [
                op("Add", [v128("Single"), v128("Single")], v128("Single")),
                op("Multiply", [v128("Single"), v128("Single")], v128("Single")),
                op("Sqrt", [v128("Single")], v128("Single")),
                op("LoadVector128", [ptr("Single")], v128("Single")),
                op("Store", [ptr("Single"), v128("Single")], prim("Void")),
                op("MoveMask", [v128("Single")], prim("Int32")),
                op(
                    "Shuffle",
                    [v128("Single"), v128("Single"), prim("Byte")],
                    v128("Single"),
                ),
            ],
        ),
        capability_type(
            &class("Sse+X64"),
            x64_probe!("sse"),
            [
                op("ConvertToInt64", [v128("Single")], prim("Int64")),
                op(
                    "ConvertScalarToVector128Single",
                    [v128("Single"), prim("Int64")],
                    v128("Single"),
                ),
            ],
        ),
        capability_type(
            &class("Sse2"),
            x86_probe!("sse2"),
            [
                op("Add", [v128("Int32"), v128("Int32")], v128("Int32")),
                op("Add", [v128("Double"), v128("Double")], v128("Double")),
                op("AddSaturate", [v128("Byte"), v128("Byte")], v128("Byte")),
                op("CompareEqual", [v128("Int32"), v128("Int32")], v128("Int32")),
                op("LoadVector128", [ptr("Int32")], v128("Int32")),
                op("ShiftLeftLogical", [v128("Int32"), prim("Byte")], v128("Int32")),
                op("Xor", [v128("Byte"), v128("Byte")], v128("Byte")),
            ],
        ),
        capability_type(
            &class("Sse2+X64"),
            x64_probe!("sse2"),
            [
                op("ConvertToInt64", [v128("Double")], prim("Int64")),
                op("ConvertToUInt64", [v128("UInt64")], prim("UInt64")),
            ],
        ),
        capability_type(
            &class("Sse3"),
            x86_probe!("sse3"),
            [
                op("AddSubtract", [v128("Single"), v128("Single")], v128("Single")),
                op("HorizontalAdd", [v128("Double"), v128("Double")], v128("Double")),
                op("MoveAndDuplicate", [v128("Double")], v128("Double")),
            ],
        ),
        capability_type(
            &class("Ssse3"),
            x86_probe!("ssse3"),
            [
                op("Abs", [v128("SByte")], v128("Byte")),
                op("Shuffle", [v128("Byte"), v128("Byte")], v128("Byte")),
                op(
                    "MultiplyHighRoundScale",
                    [v128("Int16"), v128("Int16")],
                    v128("Int16"),
                ),
            ],
        ),
        capability_type(
            &class("Sse41"),
            x86_probe!("sse4.1"),
            [
                op(
                    "BlendVariable",
                    [v128("Single"), v128("Single"), v128("Single")],
                    v128("Single"),
                ),
                op("Floor", [v128("Double")], v128("Double")),
                op("Min", [v128("Int32"), v128("Int32")], v128("Int32")),
                op("TestZ", [v128("Int32"), v128("Int32")], prim("Boolean")),
                op("Extract", [v128("Int32"), prim("Byte")], prim("Int32")),
            ],
        ),
        capability_type(
            &class("Sse41+X64"),
            x64_probe!("sse4.1"),
            [
                op("Extract", [v128("Int64"), prim("Byte")], prim("Int64")),
                op(
                    "Insert",
                    [v128("Int64"), prim("Int64"), prim("Byte")],
                    v128("Int64"),
                ),
            ],
        ),
        capability_type(
            &class("Sse42"),
            x86_probe!("sse4.2"),
            [
                op(
                    "CompareGreaterThan",
                    [v128("Int64"), v128("Int64")],
                    v128("Int64"),
                ),
                op("Crc32", [prim("UInt32"), prim("Byte")], prim("UInt32")),
                op("Crc32", [prim("UInt32"), prim("UInt32")], prim("UInt32")),
            ],
        ),
        capability_type(
            &class("Sse42+X64"),
            x64_probe!("sse4.2"),
            [op("Crc32", [prim("UInt64"), prim("UInt64")], prim("UInt64"))],
        ),
        capability_type(
            &class("Avx"),
            x86_probe!("avx"),
            [
                op("Add", [v256("Single"), v256("Single")], v256("Single")),
                op("Multiply", [v256("Double"), v256("Double")], v256("Double")),
                op("BroadcastScalarToVector256", [ptr("Single")], v256("Single")),
                op("ExtractVector128", [v256("Single"), prim("Byte")], v128("Single")),
                op("Permute", [v128("Single"), prim("Byte")], v128("Single")),
                op("LoadVector256", [ptr("Single")], v256("Single")),
            ],
        ),
        capability_type(
            &class("Avx2"),
            x86_probe!("avx2"),
            [
                op("Add", [v256("Int32"), v256("Int32")], v256("Int32")),
                op("And", [v256("Byte"), v256("Byte")], v256("Byte")),
                op(
                    "GatherVector256",
                    [ptr("Int32"), v256("Int32"), prim("Byte")],
                    v256("Int32"),
                ),
                op("PermuteVar8x32", [v256("Int32"), v256("Int32")], v256("Int32")),
                op(
                    "ShiftLeftLogicalVariable",
                    [v256("UInt32"), v256("UInt32")],
                    v256("UInt32"),
                ),
            ],
        ),
        capability_type(
            &class("Fma"),
            x86_probe!("fma"),
            [
                op(
                    "MultiplyAdd",
                    [v128("Single"), v128("Single"), v128("Single")],
                    v128("Single"),
                ),
                op(
                    "MultiplyAdd",
                    [v256("Double"), v256("Double"), v256("Double")],
                    v256("Double"),
                ),
                op(
                    "MultiplySubtract",
                    [v256("Single"), v256("Single"), v256("Single")],
                    v256("Single"),
                ),
            ],
        ),
        capability_type(
            &class("Bmi1"),
            x86_probe!("bmi1"),
            [
                op("AndNot", [prim("UInt32"), prim("UInt32")], prim("UInt32")),
                op(
                    "BitFieldExtract",
                    [prim("UInt32"), prim("Byte"), prim("Byte")],
                    prim("UInt32"),
                ),
                op("ResetLowestSetBit", [prim("UInt32")], prim("UInt32")),
                op("TrailingZeroCount", [prim("UInt32")], prim("UInt32")),
            ],
        ),
        capability_type(
            &class("Bmi1+X64"),
            x64_probe!("bmi1"),
            [op("TrailingZeroCount", [prim("UInt64")], prim("UInt64"))],
        ),
        capability_type(
            &class("Bmi2"),
            x86_probe!("bmi2"),
            [
                op(
                    "ParallelBitDeposit",
                    [prim("UInt32"), prim("UInt32")],
                    prim("UInt32"),
                ),
                op(
                    "ParallelBitExtract",
                    [prim("UInt32"), prim("UInt32")],
                    prim("UInt32"),
                ),
                op("ZeroHighBits", [prim("UInt32"), prim("UInt32")], prim("UInt32")),
                op(
                    "MultiplyNoFlags",
                    [prim("UInt32"), prim("UInt32")],
                    prim("UInt32"),
                ),
            ],
        ),
        capability_type(
            &class("Bmi2+X64"),
            x64_probe!("bmi2"),
            [op(
                "ParallelBitDeposit",
                [prim("UInt64"), prim("UInt64")],
                prim("UInt64"),
            )],
        ),
        capability_type(
            &class("Lzcnt"),
            x86_probe!("lzcnt"),
            [op("LeadingZeroCount", [prim("UInt32")], prim("UInt32"))],
        ),
        capability_type(
            &class("Lzcnt+X64"),
            x64_probe!("lzcnt"),
            [op("LeadingZeroCount", [prim("UInt64")], prim("UInt64"))],
        ),
        capability_type(
            &class("Popcnt"),
            x86_probe!("popcnt"),
            [op("PopCount", [prim("UInt32")], prim("UInt32"))],
        ),
        capability_type(
            &class("Popcnt+X64"),
            x64_probe!("popcnt"),
            [op("PopCount", [prim("UInt64")], prim("UInt64"))],
        ),
        capability_type(
            &class("Aes"),
            x86_probe!("aes"),
            [
                op("Encrypt", [v128("Byte"), v128("Byte")], v128("Byte")),
                op("EncryptLast", [v128("Byte"), v128("Byte")], v128("Byte")),
                op("Decrypt", [v128("Byte"), v128("Byte")], v128("Byte")),
                op("DecryptLast", [v128("Byte"), v128("Byte")], v128("Byte")),
                op("InverseMixColumns", [v128("Byte")], v128("Byte")),
                op("KeygenAssist", [v128("Byte"), prim("Byte")], v128("Byte")),
            ],
        ),
        capability_type(
            &class("Pclmulqdq"),
            x86_probe!("pclmulqdq"),
            [
                op(
                    "CarrylessMultiply",
                    [v128("Int64"), v128("Int64"), prim("Byte")],
                    v128("Int64"),
                ),
                op(
                    "CarrylessMultiply",
                    [v128("UInt64"), v128("UInt64"), prim("Byte")],
                    v128("UInt64"),
                ),
            ],
        ),
        capability_type(
            &class("Avx512F"),
            x86_probe!("avx512f"),
            [
                op("Add", [v512("Single"), v512("Single")], v512("Single")),
                op("Abs", [v512("Int32")], v512("UInt32")),
                op(
                    "TernaryLogic",
                    [v512("Int32"), v512("Int32"), v512("Int32"), prim("Byte")],
                    v512("Int32"),
                ),
                op("LoadVector512", [ptr("Single")], v512("Single")),
            ],
        ),
        capability_type(
            &class("Avx512F+VL"),
            x86_probe!("avx512f", "avx512vl"),
            [
                op("Abs", [v128("Int64")], v128("UInt64")),
                op("Max", [v256("Int64"), v256("Int64")], v256("Int64")),
            ],
        ),
        capability_type(
            &class("Avx512BW"),
            x86_probe!("avx512bw"),
            [
                op("Add", [v512("Byte"), v512("Byte")], v512("Byte")),
                op(
                    "PackSignedSaturate",
                    [v512("Int16"), v512("Int16")],
                    v512("SByte"),
                ),
            ],
        ),
        capability_type(
            &class("Avx512CD"),
            x86_probe!("avx512cd"),
            [
                op("DetectConflicts", [v512("Int32")], v512("Int32")),
                op("LeadingZeroCount", [v512("UInt32")], v512("UInt32")),
            ],
        ),
        capability_type(
            &class("Avx512DQ"),
            x86_probe!("avx512dq"),
            [
                op("MultiplyLow", [v512("Int64"), v512("Int64")], v512("Int64")),
                op("ConvertToVector512Double", [v512("Int64")], v512("Double")),
            ],
        ),
    ]
}
