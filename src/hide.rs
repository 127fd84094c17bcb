//! Optimizer barrier for the constant-time accumulators.
//!
//! Passing the accumulator through `optimizer_hide` on every iteration means the compiler cannot
//! know its value, so it cannot end the loop early once the accumulator reaches a fixed point
//! (zero for the XOR accumulator, "not equal" for the AND accumulator).

/// Hides a value from the optimizer.
#[cfg(all(
    not(miri),
    any(
        target_arch = "x86",
        target_arch = "x86_64",
        target_arch = "arm",
        target_arch = "aarch64",
        target_arch = "arm64ec",
        target_arch = "riscv32",
        target_arch = "riscv64",
        target_arch = "loongarch64",
        target_arch = "s390x",
    )
))]
#[must_use]
#[inline(always)]
pub(crate) fn optimizer_hide(value: u8) -> u8 {
    // Widen to a full register so the same operand class works on every listed architecture.
    let mut wide = value as usize;
    // SAFETY: the input value is passed unchanged to the output, the inline assembly does nothing.
    unsafe {
        core::arch::asm!("/* {0} */", inlateout(reg) wide, options(pure, nomem, preserves_flags, nostack));
    }
    wide as u8
}

/// Attempts to hide a value from the optimizer.
#[cfg(any(
    miri,
    not(any(
        target_arch = "x86",
        target_arch = "x86_64",
        target_arch = "arm",
        target_arch = "aarch64",
        target_arch = "arm64ec",
        target_arch = "riscv32",
        target_arch = "riscv64",
        target_arch = "loongarch64",
        target_arch = "s390x",
    ))
))]
#[must_use]
#[inline(never)]
pub(crate) fn optimizer_hide(value: u8) -> u8 {
    // black_box is a weaker barrier than inline asm on some codegen backends;
    // #[inline(never)] makes it harder to look inside this function.
    core::hint::black_box(value)
}
