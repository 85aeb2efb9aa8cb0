//! `aarch64` trigger sequences.
//!
//! Scalar `fdiv`/`fmul` on SIMD&FP registers; each sets the matching
//! cumulative flag in `FPSR` and takes the corresponding trap if enabled in
//! `FPCR`. The double-precision group uses `d` registers, the always-available
//! pair `s` registers.

use core::arch::asm;

/// 1.0 / 3.0: a repeating binary fraction, forcing a rounded (inexact) result.
#[cfg(feature = "double-precision")]
pub fn raise_inexact() {
    let mut d: f64 = 1.0;
    let x: f64 = 3.0;
    // SAFETY: register-only scalar division; touches no memory or stack.
    unsafe {
        asm!("fdiv {d:d}, {d:d}, {x:d}", d = inout(vreg) d, x = in(vreg) x, options(nomem, nostack));
    }
}

/// Smallest positive normal double / 10: result below the normal range.
#[cfg(feature = "double-precision")]
pub fn raise_underflow() {
    let mut d: f64 = f64::MIN_POSITIVE;
    let x: f64 = 10.0;
    // SAFETY: register-only scalar division; touches no memory or stack.
    unsafe {
        asm!("fdiv {d:d}, {d:d}, {x:d}", d = inout(vreg) d, x = in(vreg) x, options(nomem, nostack));
    }
}

/// Largest finite double squared: result above the finite range.
#[cfg(feature = "double-precision")]
pub fn raise_overflow() {
    let mut d: f64 = f64::MAX;
    // SAFETY: register-only scalar multiply; touches no memory or stack.
    unsafe {
        asm!("fmul {d:d}, {d:d}, {d:d}", d = inout(vreg) d, options(nomem, nostack));
    }
}

/// Nonzero finite / 0.
pub fn raise_div_by_zero() {
    let mut d: f32 = 1.0;
    let x: f32 = 0.0;
    // SAFETY: register-only scalar division; touches no memory or stack.
    unsafe {
        asm!("fdiv {d:s}, {d:s}, {x:s}", d = inout(vreg) d, x = in(vreg) x, options(nomem, nostack));
    }
}

/// Infinity × 0: the canonical invalid operation.
pub fn raise_invalid() {
    let mut d: f32 = f32::INFINITY;
    let x: f32 = 0.0;
    // SAFETY: register-only scalar multiply; touches no memory or stack.
    unsafe {
        asm!("fmul {d:s}, {d:s}, {x:s}", d = inout(vreg) d, x = in(vreg) x, options(nomem, nostack));
    }
}
