//! Per-architecture exception trigger sequences.
//!
//! Each backend exposes the same five free functions, one per exception
//! category, each executing a single hardware floating-point instruction with
//! operands chosen to provoke that category. The backend is selected at
//! compile time; targets without a supported FPU get the no-op fallback, so
//! the raise routine degrades silently rather than failing.
//!
//! Backends are plain `cfg`-gated modules rather than a trait seam: the set
//! of categories and their provoking operations is fixed by IEEE 754, and
//! nothing ever dispatches over backends at runtime.

#[cfg(target_arch = "x86_64")]
mod x86_64;
#[cfg(target_arch = "x86_64")]
pub use self::x86_64::*;

#[cfg(target_arch = "aarch64")]
mod aarch64;
#[cfg(target_arch = "aarch64")]
pub use self::aarch64::*;

#[cfg(all(target_arch = "riscv64", target_feature = "d"))]
mod riscv64;
#[cfg(all(target_arch = "riscv64", target_feature = "d"))]
pub use self::riscv64::*;

#[cfg(not(any(
    target_arch = "x86_64",
    target_arch = "aarch64",
    all(target_arch = "riscv64", target_feature = "d"),
)))]
mod fallback;
#[cfg(not(any(
    target_arch = "x86_64",
    target_arch = "aarch64",
    all(target_arch = "riscv64", target_feature = "d"),
)))]
pub use self::fallback::*;

/// True when the selected backend actually reaches an FPU.
pub const HAVE_FPU: bool = cfg!(any(
    target_arch = "x86_64",
    target_arch = "aarch64",
    all(target_arch = "riscv64", target_feature = "d"),
));
