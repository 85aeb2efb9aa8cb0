//! RISC-V 64 trigger sequences (requires the D extension).
//!
//! Scalar `fdiv`/`fmul`; each accrues the matching bit in `fcsr.fflags`
//! (spec §11.2). RISC-V floating-point exceptions never trap, so the accrued
//! flags are the entire observable effect here.

use core::arch::asm;

/// 1.0 / 3.0: a repeating binary fraction, forcing a rounded (inexact) result.
#[cfg(feature = "double-precision")]
pub fn raise_inexact() {
    let mut d: f64 = 1.0;
    let x: f64 = 3.0;
    // SAFETY: register-only scalar division; touches no memory or stack.
    unsafe {
        asm!("fdiv.d {d}, {d}, {x}", d = inout(freg) d, x = in(freg) x, options(nomem, nostack));
    }
}

/// Smallest positive normal double / 10: result below the normal range.
#[cfg(feature = "double-precision")]
pub fn raise_underflow() {
    let mut d: f64 = f64::MIN_POSITIVE;
    let x: f64 = 10.0;
    // SAFETY: register-only scalar division; touches no memory or stack.
    unsafe {
        asm!("fdiv.d {d}, {d}, {x}", d = inout(freg) d, x = in(freg) x, options(nomem, nostack));
    }
}

/// Largest finite double squared: result above the finite range.
#[cfg(feature = "double-precision")]
pub fn raise_overflow() {
    let mut d: f64 = f64::MAX;
    // SAFETY: register-only scalar multiply; touches no memory or stack.
    unsafe {
        asm!("fmul.d {d}, {d}, {d}", d = inout(freg) d, options(nomem, nostack));
    }
}

/// Nonzero finite / 0.
pub fn raise_div_by_zero() {
    let mut d: f32 = 1.0;
    let x: f32 = 0.0;
    // SAFETY: register-only scalar division; touches no memory or stack.
    unsafe {
        asm!("fdiv.s {d}, {d}, {x}", d = inout(freg) d, x = in(freg) x, options(nomem, nostack));
    }
}

/// Infinity × 0: the canonical invalid operation.
pub fn raise_invalid() {
    let mut d: f32 = f32::INFINITY;
    let x: f32 = 0.0;
    // SAFETY: register-only scalar multiply; touches no memory or stack.
    unsafe {
        asm!("fmul.s {d}, {d}, {x}", d = inout(freg) d, x = in(freg) x, options(nomem, nostack));
    }
}
