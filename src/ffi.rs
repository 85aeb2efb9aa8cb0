//! C ABI entry point for the soft-float runtime.
//!
//! Compiled soft-float routines call `__sfp_handle_exceptions` with the
//! exception word their emulation accumulated. The symbol name and the
//! ignore-unknown-bits behavior are part of the runtime ABI.

use libc::c_int;

use crate::flags::FexFlags;
use crate::raise::raise;

/// Raises the hardware exceptions requested in the raw exception word `fex`.
///
/// Bits outside the five exception categories are ignored, matching the C
/// runtime convention. See [`raise()`] for ordering and degradation behavior.
#[unsafe(no_mangle)]
pub extern "C" fn __sfp_handle_exceptions(fex: c_int) {
    raise(FexFlags::from_bits_truncate(fex as u32));
}
