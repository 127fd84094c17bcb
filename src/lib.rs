//! Compares equal-length byte strings three ways: one that leaks timing, and two that do not.
//!
//! [`insecure_compare`] is the ordinary loop that returns at the first differing byte. Its
//! running time grows with the length of the matching prefix, which is exactly what a timing
//! attack measures. [`constant_time_compare_accumulate`] and [`constant_time_compare_xor`] give
//! the same answers, but always look at every byte and never branch on the data.
//!
//! All functions compare the first `length` bytes of two slices and panic if either slice is
//! shorter than that. The `_n` variants compare whole fixed-size arrays.
//!
//! The constant-time loops hide their accumulator from the optimizer on every iteration, and on
//! aarch64 they run with the processor's data independent timing (DIT) mode enabled when it is
//! available. What the hardware does with memory accesses and caches is outside their control.
//!
//! [`count_iterations`] runs any [`Strategy`] with an [`IterationCounter`] attached, which shows
//! the difference in work done without measuring time:
//!
//! ```
//! use ct_compare::{Strategy, count_iterations};
//!
//! let token = *b"30467-132630";
//! let guess = *b"30467-999999";
//!
//! assert_eq!(count_iterations(Strategy::Insecure, &token, &guess, 12), (false, 7));
//! assert_eq!(count_iterations(Strategy::Xor, &token, &guess, 12), (false, 12));
//! ```

#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod accumulate;
mod hide;
mod insecure;
mod probe;
mod strategy;
mod xor;

#[cfg(all(target_arch = "aarch64", not(miri)))]
mod dit;

#[cfg(all(target_arch = "aarch64", not(miri)))]
use dit::with_dit;

#[cfg(not(all(target_arch = "aarch64", not(miri))))]
#[inline(always)]
fn with_dit<T, F>(f: F) -> T
where
    F: FnOnce() -> T,
{
    f()
}

pub use accumulate::{constant_time_compare_accumulate, constant_time_compare_accumulate_n};
pub use insecure::{insecure_compare, insecure_compare_n};
pub use probe::{IterationCounter, Probe, count_iterations};
pub use strategy::Strategy;
pub use xor::{constant_time_compare_xor, constant_time_compare_xor_n};
