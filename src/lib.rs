//! Soft-float runtime support for hardware floating-point exceptions.
//!
//! Software floating-point routines compute IEEE 754 results (and the
//! exception conditions those results imply) entirely in integer code, so the
//! host FPU never sees the operation. This crate closes that gap: given a
//! bitmask of exception categories, it executes minimal hardware
//! floating-point operations whose operands are chosen to provoke exactly
//! those exceptions, so the FPU's accrued flag state — and any traps enabled
//! on it — behave as if the emulated operation had run natively.
//!
//! The crate is organized as:
//! 1. **Flags:** The [`FexFlags`] bitmask over the five IEEE 754 exception
//!    categories (invalid, divide-by-zero, overflow, underflow, inexact).
//! 2. **Raise:** The ordered trigger routine [`raise()`], which fires one
//!    hardware operation per requested category.
//! 3. **Arch:** Per-architecture instruction sequences, selected at compile
//!    time; unsupported targets degrade to a silent no-op.
//! 4. **FFI:** The `__sfp_handle_exceptions` C ABI symbol consumed by the
//!    surrounding soft-float routines.

/// Exception category bitmask and raw-bit decoding.
pub mod flags;

/// C ABI entry point for the soft-float runtime.
pub mod ffi;

mod arch;
mod raise;

pub use crate::flags::{FexFlags, UnknownFlagBits};
pub use crate::raise::raise;
