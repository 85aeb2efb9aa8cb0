//! `x86_64` trigger sequences.
//!
//! Scalar SSE2 instructions; each sets the matching status bit in `MXCSR`
//! and takes the corresponding trap if unmasked there. Register-only
//! operands keep the sequences opaque to the optimizer: `asm!` without
//! `pure` is a side effect the compiler must emit in program order.

use core::arch::asm;

/// 1.0 / 3.0: a repeating binary fraction, forcing a rounded (inexact) result.
#[cfg(feature = "double-precision")]
pub fn raise_inexact() {
    let mut d: f64 = 1.0;
    let x: f64 = 3.0;
    // SAFETY: register-only SSE2 division; touches no memory or stack.
    unsafe {
        asm!("divsd {d}, {x}", d = inout(xmm_reg) d, x = in(xmm_reg) x, options(nomem, nostack));
    }
}

/// Smallest positive normal double / 10: result below the normal range.
#[cfg(feature = "double-precision")]
pub fn raise_underflow() {
    let mut d: f64 = f64::MIN_POSITIVE;
    let x: f64 = 10.0;
    // SAFETY: register-only SSE2 division; touches no memory or stack.
    unsafe {
        asm!("divsd {d}, {x}", d = inout(xmm_reg) d, x = in(xmm_reg) x, options(nomem, nostack));
    }
}

/// Largest finite double squared: result above the finite range.
#[cfg(feature = "double-precision")]
pub fn raise_overflow() {
    let mut d: f64 = f64::MAX;
    // SAFETY: register-only SSE2 multiply; touches no memory or stack.
    unsafe {
        asm!("mulsd {d}, {d}", d = inout(xmm_reg) d, options(nomem, nostack));
    }
}

/// Nonzero finite / 0.
pub fn raise_div_by_zero() {
    let mut d: f32 = 1.0;
    let x: f32 = 0.0;
    // SAFETY: register-only SSE2 division; touches no memory or stack.
    unsafe {
        asm!("divss {d}, {x}", d = inout(xmm_reg) d, x = in(xmm_reg) x, options(nomem, nostack));
    }
}

/// Infinity × 0: the canonical invalid operation.
pub fn raise_invalid() {
    let mut d: f32 = f32::INFINITY;
    let x: f32 = 0.0;
    // SAFETY: register-only SSE2 multiply; touches no memory or stack.
    unsafe {
        asm!("mulss {d}, {x}", d = inout(xmm_reg) d, x = in(xmm_reg) x, options(nomem, nostack));
    }
}
