//! Runs the constant-time comparisons with the hardware DIT feature enabled when possible.
//!
//! On aarch64, FEAT_DIT puts the processor in data independent timing mode: the execution time
//! of the arithmetic and logic instructions the comparison loops use no longer depends on their
//! operands. With the "std" feature, FEAT_DIT and FEAT_SB are detected at runtime; without it,
//! only at compilation time.

use core::arch::asm;

/// Checks whether FEAT_DIT is available.
#[cfg(feature = "std")]
#[inline(always)]
fn is_feat_dit_implemented() -> bool {
    std::arch::is_aarch64_feature_detected!("dit")
}

/// Checks whether FEAT_SB is available.
#[cfg(feature = "std")]
#[inline(always)]
fn is_feat_sb_implemented() -> bool {
    std::arch::is_aarch64_feature_detected!("sb")
}

/// Checks whether FEAT_DIT is available.
#[cfg(not(feature = "std"))]
#[inline(always)]
fn is_feat_dit_implemented() -> bool {
    cfg!(target_feature = "dit")
}

/// Checks whether FEAT_SB is available.
#[cfg(not(feature = "std"))]
#[inline(always)]
fn is_feat_sb_implemented() -> bool {
    cfg!(target_feature = "sb")
}

/// Reads the DIT register.
///
/// # Safety
///
/// Must be called only when FEAT_DIT is implemented.
#[inline]
#[target_feature(enable = "dit")]
unsafe fn read_dit() -> u64 {
    let mut value;
    // SAFETY: called only when FEAT_DIT is implemented
    unsafe {
        asm!("mrs {}, dit", lateout(reg) value, options(nomem, preserves_flags, nostack));
    }
    value
}

/// Writes the DIT register.
///
/// # Safety
///
/// Must be called only when FEAT_DIT is implemented.
#[inline]
#[target_feature(enable = "dit")]
unsafe fn write_dit(value: u64) {
    // SAFETY: called only when FEAT_DIT is implemented
    unsafe {
        // The compiler must not cache values or flags across this instruction.
        asm!("msr dit, {}", in(reg) value, options(nostack));
    }
}

/// Speculation barrier, `sb`.
///
/// # Safety
///
/// Must be called only when FEAT_SB is implemented.
#[inline]
#[target_feature(enable = "sb")]
unsafe fn speculation_barrier() {
    // SAFETY: called only when FEAT_SB is implemented
    unsafe {
        asm!("sb", options(nostack));
    }
}

/// Heavier barrier for cores without FEAT_SB.
#[inline]
fn synchronization_barrier() {
    // SAFETY: these instructions are always available, and have no effects
    // other than being a data barrier and flushing the pipeline
    unsafe {
        asm!("dsb nsh", "isb sy", options(nostack));
    }
}

/// Sets DIT while alive, and puts back the previous value when dropped.
struct DitGuard {
    saved: u64,
}

impl DitGuard {
    /// # Safety
    ///
    /// FEAT_DIT must have been detected.
    #[inline]
    #[target_feature(enable = "dit")]
    unsafe fn enable() -> Self {
        // SAFETY: called only when FEAT_DIT is implemented
        let saved = unsafe { read_dit() };
        // SAFETY: called only when FEAT_DIT is implemented
        unsafe {
            asm!("msr dit, #{}", const 1, options(nostack));
        }
        DitGuard { saved }
    }
}

impl Drop for DitGuard {
    #[inline]
    fn drop(&mut self) {
        // SAFETY: a guard only exists after FEAT_DIT was detected
        unsafe { write_dit(self.saved) };
    }
}

/// Runs `f` with the hardware DIT feature enabled when possible.
#[inline]
pub(crate) fn with_dit<T, F>(f: F) -> T
where
    F: FnOnce() -> T,
{
    if !is_feat_dit_implemented() {
        return f();
    }

    // SAFETY: FEAT_DIT was detected
    let _guard = unsafe { DitGuard::enable() };

    if is_feat_sb_implemented() {
        // SAFETY: FEAT_SB was detected
        unsafe { speculation_barrier() };
    } else {
        synchronization_barrier();
    }

    f()
}

#[cfg(test)]
mod tests {
    use super::{is_feat_dit_implemented, read_dit, with_dit};

    #[test]
    fn dit_is_restored_after_with_dit() {
        if is_feat_dit_implemented() {
            // SAFETY: FEAT_DIT was detected
            unsafe {
                let saved = read_dit();
                with_dit(|| assert_ne!(read_dit(), 0));
                assert_eq!(read_dit(), saved);
            }
        }
    }

    #[test]
    fn with_dit_returns_closure_value() {
        assert_eq!(with_dit(|| 42u8), 42);
    }
}
