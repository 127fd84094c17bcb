//! Constant-time comparison by AND-ing per-byte equality flags.
//!
//! The accumulator starts at 1 ("equal so far") and is AND-ed with a 0/1 flag for every byte.
//! Everything is done on integers with bitwise operators: a `bool` accumulator with `&&` would
//! short-circuit, and even `&` on `bool` invites the optimizer to branch out of the loop once the
//! accumulator is false.

use crate::hide::optimizer_hide;
use crate::probe::Probe;
use crate::with_dit;

/// Returns 1 if `x == y` and 0 otherwise, without branching.
#[must_use]
#[inline(always)]
fn byte_eq(x: u8, y: u8) -> u8 {
    let diff = u32::from(optimizer_hide(x ^ y));
    // diff - 1 only borrows past the low 8 bits when diff is zero.
    (diff.wrapping_sub(1) >> 8) as u8 & 1
}

#[must_use]
#[inline(always)]
pub(crate) fn constant_time_compare_accumulate_impl<P: Probe>(
    a: &[u8],
    b: &[u8],
    length: usize,
    probe: &mut P,
) -> bool {
    let a = &a[..length];
    let b = &b[..length];

    let mut acc: u8 = 1;
    for i in 0..length {
        probe.step();
        acc = optimizer_hide(acc & byte_eq(a[i], b[i]));
    }
    acc != 0
}

/// Compares the first `length` bytes of two byte strings in constant time, by AND-ing the
/// equality of each pair of bytes into an accumulator.
///
/// Every byte is visited, whatever the contents.
///
/// # Examples
///
/// ```
/// use ct_compare::constant_time_compare_accumulate;
///
/// assert!(constant_time_compare_accumulate(b"foo", b"foo", 3));
/// assert!(!constant_time_compare_accumulate(b"foo", b"bar", 3));
/// assert!(!constant_time_compare_accumulate(b"bar", b"baz", 3));
/// # assert!(constant_time_compare_accumulate(b"", b"", 0));
///
/// // Only the first `length` bytes take part.
/// assert!(constant_time_compare_accumulate(b"bar", b"baz", 2));
/// ```
///
/// # Panics
///
/// Panics if `length` is larger than either slice. The check depends only on the lengths.
#[must_use]
pub fn constant_time_compare_accumulate(a: &[u8], b: &[u8], length: usize) -> bool {
    with_dit(|| constant_time_compare_accumulate_impl(a, b, length, &mut ()))
}

/// Compares two fixed-size byte strings in constant time, by AND-ing per-byte equality.
///
/// # Examples
///
/// ```
/// use ct_compare::constant_time_compare_accumulate_n;
///
/// assert!(constant_time_compare_accumulate_n(&[3; 32], &[3; 32]));
/// assert!(!constant_time_compare_accumulate_n(&[3; 32], &[7; 32]));
/// ```
#[must_use]
pub fn constant_time_compare_accumulate_n<const N: usize>(a: &[u8; N], b: &[u8; N]) -> bool {
    constant_time_compare_accumulate(a, b, N)
}
