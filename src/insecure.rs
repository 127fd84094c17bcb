//! Variable-time comparison, kept as the baseline the constant-time versions are measured against.
//!
//! This is the textbook `memcmp`-style loop: it returns as soon as it sees a differing byte, so
//! its running time reveals the length of the matching prefix. An attacker who can time repeated
//! guesses recovers a secret one byte at a time. Do not use it for secrets.

use crate::probe::Probe;

#[must_use]
#[inline(always)]
pub(crate) fn insecure_compare_impl<P: Probe>(
    a: &[u8],
    b: &[u8],
    length: usize,
    probe: &mut P,
) -> bool {
    let a = &a[..length];
    let b = &b[..length];

    for i in 0..length {
        probe.step();
        if a[i] != b[i] {
            return false;
        }
    }
    true
}

/// Compares the first `length` bytes of two byte strings, stopping at the first difference.
///
/// The result is the same as for the constant-time functions; only the timing differs.
///
/// # Examples
///
/// ```
/// use ct_compare::insecure_compare;
///
/// assert!(insecure_compare(b"ABCD", b"ABCD", 4));
/// assert!(!insecure_compare(b"ABCD", b"ABXD", 4));
/// assert!(insecure_compare(b"ABCD", b"ABXD", 2));
/// ```
///
/// # Panics
///
/// Panics if `length` is larger than either slice.
// Not inlined, so the early-exit loop is not merged into the caller.
#[must_use]
#[inline(never)]
pub fn insecure_compare(a: &[u8], b: &[u8], length: usize) -> bool {
    insecure_compare_impl(a, b, length, &mut ())
}

/// Compares two fixed-size byte strings, stopping at the first difference.
///
/// # Examples
///
/// ```
/// use ct_compare::insecure_compare_n;
///
/// assert!(insecure_compare_n(&[3; 20], &[3; 20]));
/// assert!(!insecure_compare_n(&[3; 20], &[7; 20]));
/// ```
#[must_use]
pub fn insecure_compare_n<const N: usize>(a: &[u8; N], b: &[u8; N]) -> bool {
    insecure_compare(a, b, N)
}
