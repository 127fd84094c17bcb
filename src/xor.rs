//! Constant-time comparison by OR-ing together the XOR of each pair of bytes.

use crate::hide::optimizer_hide;
use crate::probe::Probe;
use crate::with_dit;

#[must_use]
#[inline(always)]
pub(crate) fn constant_time_compare_xor_impl<P: Probe>(
    a: &[u8],
    b: &[u8],
    length: usize,
    probe: &mut P,
) -> bool {
    let a = &a[..length];
    let b = &b[..length];

    // The optimizer is not allowed to assume anything about the value of acc after each
    // iteration, so it cannot stop once a difference has made it non-zero.
    let mut acc: u8 = 0;
    for i in 0..length {
        probe.step();
        acc = optimizer_hide(acc | (a[i] ^ b[i]));
    }

    // The compare with 0 happens once, after the loop.
    acc == 0
}

/// Compares the first `length` bytes of two byte strings in constant time, by accumulating the
/// XOR of every pair of bytes.
///
/// # Examples
///
/// ```
/// use ct_compare::constant_time_compare_xor;
///
/// assert!(constant_time_compare_xor(b"foo", b"foo", 3));
/// assert!(!constant_time_compare_xor(b"foo", b"bar", 3));
/// assert!(!constant_time_compare_xor(b"bar", b"baz", 3));
/// # assert!(constant_time_compare_xor(b"", b"", 0));
///
/// // Only the first `length` bytes take part.
/// assert!(constant_time_compare_xor(b"bar", b"baz", 2));
/// ```
///
/// # Panics
///
/// Panics if `length` is larger than either slice. The check depends only on the lengths.
#[must_use]
pub fn constant_time_compare_xor(a: &[u8], b: &[u8], length: usize) -> bool {
    with_dit(|| constant_time_compare_xor_impl(a, b, length, &mut ()))
}

/// Compares two fixed-size byte strings in constant time, by accumulating the XOR of every pair
/// of bytes.
///
/// # Examples
///
/// ```
/// use ct_compare::constant_time_compare_xor_n;
///
/// assert!(constant_time_compare_xor_n(&[3; 16], &[3; 16]));
/// assert!(!constant_time_compare_xor_n(&[3; 16], &[7; 16]));
/// ```
#[must_use]
pub fn constant_time_compare_xor_n<const N: usize>(a: &[u8; N], b: &[u8; N]) -> bool {
    constant_time_compare_xor(a, b, N)
}
