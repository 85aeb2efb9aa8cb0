//! Floating-point exception category flags.
//!
//! IEEE 754 defines five exception categories, carried here in the
//! accrued-flags bit layout:
//!
//! | Bit | Flag | Description         |
//! |-----|------|---------------------|
//! |  4  | NV   | Invalid Operation   |
//! |  3  | DZ   | Divide by Zero      |
//! |  2  | OF   | Overflow            |
//! |  1  | UF   | Underflow           |
//! |  0  | NX   | Inexact             |
//!
//! This layout is the crate's canonical encoding; the C ABI entry point in
//! [`crate::ffi`] accepts raw bits in it. Host `<fenv.h>` bit values differ
//! per platform and are deliberately not used here.

use std::ops::BitOr;

use thiserror::Error;

/// The raw value carried bits outside the five defined exception categories.
///
/// Returned by [`FexFlags::try_from_bits`] when strict decoding is wanted;
/// the C ABI path uses [`FexFlags::from_bits_truncate`] instead and silently
/// ignores such bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("unknown exception flag bits: {0:#x}")]
pub struct UnknownFlagBits(pub u32);

/// Floating-point exception category flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FexFlags(u8);

impl FexFlags {
    /// No exception categories requested.
    pub const NONE: Self = Self(0);
    /// Invalid Operation.
    pub const NV: Self = Self(1 << 4);
    /// Divide by Zero.
    pub const DZ: Self = Self(1 << 3);
    /// Overflow.
    pub const OF: Self = Self(1 << 2);
    /// Underflow.
    pub const UF: Self = Self(1 << 1);
    /// Inexact.
    pub const NX: Self = Self(1 << 0);
    /// All five exception categories.
    pub const ALL: Self = Self(0b11111);

    /// Returns the raw 5-bit flag value.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Returns true if no flags are set.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns true if every flag in `other` is set in `self`.
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Decodes raw bits, discarding any outside the five categories.
    ///
    /// This matches the C runtime convention for the `_fex` parameter:
    /// callers may pass a full exception-state word and only the defined
    /// category bits are honored.
    pub const fn from_bits_truncate(bits: u32) -> Self {
        Self((bits as u8) & Self::ALL.0)
    }

    /// Decodes raw bits, rejecting any outside the five categories.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownFlagBits`] carrying the offending bits if `bits` has
    /// any set outside the low five.
    pub const fn try_from_bits(bits: u32) -> Result<Self, UnknownFlagBits> {
        let unknown = bits & !(Self::ALL.0 as u32);
        if unknown != 0 {
            return Err(UnknownFlagBits(unknown));
        }
        Ok(Self(bits as u8))
    }
}

impl BitOr for FexFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}
