//! No-FPU fallback: every trigger is a silent no-op.
//!
//! On targets without a supported FPU there is no exception flag state to
//! update, so the whole routine degrades to doing nothing, matching the
//! C runtime convention for soft-float-only configurations.

#[cfg(feature = "double-precision")]
pub fn raise_inexact() {}

#[cfg(feature = "double-precision")]
pub fn raise_underflow() {}

#[cfg(feature = "double-precision")]
pub fn raise_overflow() {}

pub fn raise_div_by_zero() {}

pub fn raise_invalid() {}
