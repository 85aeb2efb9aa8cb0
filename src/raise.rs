//! The ordered exception trigger routine.

use tracing::trace;

use crate::arch;
use crate::flags::FexFlags;

/// Raises the hardware floating-point exceptions requested in `fex`.
///
/// Each requested category fires its own hardware operation, one at a time,
/// in a fixed total order: inexact, underflow, overflow, divide-by-zero,
/// invalid. The order is a behavioral contract, not an accident: when the
/// overflow/underflow/inexact group is requested together with
/// divide-by-zero or invalid, the latter must be the last operation executed
/// on the FPU's shared status state, so it is the one a trap handler sees as
/// most recent.
///
/// On FPUs without double precision (the `double-precision` feature
/// disabled), the inexact/underflow/overflow group is silently skipped; on
/// targets without a supported FPU at all, the whole call is a no-op. There
/// is no failure mode: the effect is entirely the hardware flag/trap side
/// channel, and caller-visible storage is never touched.
///
/// # Examples
///
/// ```
/// use sfp_exceptions::FexFlags;
///
/// // A software division by zero was just emulated; make the hardware agree.
/// sfp_exceptions::raise(FexFlags::DZ);
///
/// // Nothing requested, nothing raised.
/// sfp_exceptions::raise(FexFlags::NONE);
/// ```
pub fn raise(fex: FexFlags) {
    if fex.is_empty() {
        return;
    }
    trace!(fex = ?fex, fpu = arch::HAVE_FPU, "raising hardware exception categories");

    // The double-precision group must execute before divide-by-zero and
    // invalid so that one of those two is the operation left most recent on
    // the FPU status state when several categories are requested together.
    #[cfg(feature = "double-precision")]
    {
        if fex.contains(FexFlags::NX) {
            arch::raise_inexact();
        }
        if fex.contains(FexFlags::UF) {
            arch::raise_underflow();
        }
        if fex.contains(FexFlags::OF) {
            arch::raise_overflow();
        }
    }

    if fex.contains(FexFlags::DZ) {
        arch::raise_div_by_zero();
    }
    if fex.contains(FexFlags::NV) {
        arch::raise_invalid();
    }
}
