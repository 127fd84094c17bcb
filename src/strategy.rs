use core::fmt;

use crate::accumulate::{constant_time_compare_accumulate, constant_time_compare_accumulate_impl};
use crate::insecure::{insecure_compare, insecure_compare_impl};
use crate::probe::Probe;
use crate::xor::{constant_time_compare_xor, constant_time_compare_xor_impl};

/// One of the three ways this crate compares byte strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// [`insecure_compare`]: stops at the first difference.
    Insecure,
    /// [`constant_time_compare_accumulate`]: ANDs per-byte equality flags.
    Accumulate,
    /// [`constant_time_compare_xor`]: ORs the XOR of each pair of bytes.
    Xor,
}

impl Strategy {
    /// Every strategy, the insecure baseline first.
    pub const ALL: [Strategy; 3] = [Strategy::Insecure, Strategy::Accumulate, Strategy::Xor];

    /// Compares the first `length` bytes of `a` and `b` with this strategy.
    ///
    /// # Examples
    ///
    /// ```
    /// use ct_compare::Strategy;
    ///
    /// for strategy in Strategy::ALL {
    ///     assert!(strategy.compare(b"ABCD", b"ABCD", 4));
    ///     assert!(!strategy.compare(b"ABCD", b"ABXD", 4));
    /// }
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `length` is larger than either slice.
    #[must_use]
    pub fn compare(self, a: &[u8], b: &[u8], length: usize) -> bool {
        match self {
            Strategy::Insecure => insecure_compare(a, b, length),
            Strategy::Accumulate => constant_time_compare_accumulate(a, b, length),
            Strategy::Xor => constant_time_compare_xor(a, b, length),
        }
    }

    /// Like [`compare`](Self::compare), calling `probe` once per loop iteration.
    ///
    /// The instrumented loop does not run under DIT, and the probe itself adds work to every
    /// iteration, so use this to study the loops, not to compare secrets.
    ///
    /// Counting only covers the instrumented loops. The uninstrumented path behind
    /// [`compare`](Self::compare) is checked by `tests/instructions.rs`, which counts retired
    /// instructions (run with `--features count_instructions_test`).
    ///
    /// # Panics
    ///
    /// Panics if `length` is larger than either slice.
    #[must_use]
    pub fn compare_with_probe<P: Probe>(
        self,
        a: &[u8],
        b: &[u8],
        length: usize,
        probe: &mut P,
    ) -> bool {
        match self {
            Strategy::Insecure => insecure_compare_impl(a, b, length, probe),
            Strategy::Accumulate => constant_time_compare_accumulate_impl(a, b, length, probe),
            Strategy::Xor => constant_time_compare_xor_impl(a, b, length, probe),
        }
    }

    /// Whether the running time of this strategy depends only on `length`.
    #[must_use]
    pub const fn is_constant_time(self) -> bool {
        !matches!(self, Strategy::Insecure)
    }

    /// Name of the function implementing this strategy.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Strategy::Insecure => "insecure_compare",
            Strategy::Accumulate => "constant_time_compare_accumulate",
            Strategy::Xor => "constant_time_compare_xor",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
