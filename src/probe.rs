//! Per-iteration instrumentation of the comparison loops.
//!
//! Each comparison loop calls [`Probe::step`] once per byte it looks at. The public comparison
//! functions use the no-op probe `()`, which compiles away; [`IterationCounter`] counts the steps,
//! which shows how much work each strategy did without resorting to wall-clock timing.

use crate::Strategy;

/// Observer called once per iteration of a comparison loop.
pub trait Probe {
    /// Called at the start of every loop iteration.
    fn step(&mut self);
}

impl Probe for () {
    #[inline(always)]
    fn step(&mut self) {}
}

/// Counts loop iterations.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IterationCounter {
    count: usize,
}

impl IterationCounter {
    /// Creates a counter starting at zero.
    #[must_use]
    pub const fn new() -> Self {
        IterationCounter { count: 0 }
    }

    /// Number of iterations seen so far.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }
}

impl Probe for IterationCounter {
    #[inline]
    fn step(&mut self) {
        self.count += 1;
    }
}

/// Runs `strategy` and returns its result together with the number of loop iterations it ran.
///
/// The constant-time strategies always run `length` iterations. The insecure strategy stops right
/// after the first differing byte.
///
/// # Examples
///
/// ```
/// use ct_compare::{Strategy, count_iterations};
///
/// let secret = [0x41, 0x42, 0x43, 0x44];
/// let guess = [0x41, 0x58, 0x43, 0x44];
///
/// assert_eq!(count_iterations(Strategy::Insecure, &secret, &guess, 4), (false, 2));
/// assert_eq!(count_iterations(Strategy::Xor, &secret, &guess, 4), (false, 4));
/// assert_eq!(count_iterations(Strategy::Accumulate, &secret, &guess, 4), (false, 4));
/// ```
///
/// # Panics
///
/// Panics if `length` is larger than either slice.
#[must_use]
pub fn count_iterations(strategy: Strategy, a: &[u8], b: &[u8], length: usize) -> (bool, usize) {
    let mut counter = IterationCounter::new();
    let equal = strategy.compare_with_probe(a, b, length, &mut counter);
    (equal, counter.count())
}

#[cfg(test)]
mod tests {
    use super::{IterationCounter, Probe, count_iterations};
    use crate::Strategy;

    #[test]
    fn counter_counts_steps() {
        let mut counter = IterationCounter::new();
        assert_eq!(counter.count(), 0);
        counter.step();
        counter.step();
        assert_eq!(counter.count(), 2);
    }

    #[test]
    fn constant_time_strategies_always_run_full_length() {
        let a = [0x5a; 32];
        for strategy in Strategy::ALL.into_iter().filter(|s| s.is_constant_time()) {
            assert_eq!(count_iterations(strategy, &a, &a, 32), (true, 32));
            for index in 0..32 {
                let mut b = a;
                b[index] ^= 0x80;
                assert_eq!(
                    count_iterations(strategy, &a, &b, 32),
                    (false, 32),
                    "{strategy} mismatch at {index}"
                );
            }
        }
    }

    #[test]
    fn insecure_stops_after_first_mismatch() {
        let a = [0x5a; 32];
        assert_eq!(count_iterations(Strategy::Insecure, &a, &a, 32), (true, 32));
        for index in 0..32 {
            let mut b = a;
            b[index] ^= 0x01;
            // A second difference further along must not matter.
            if index + 1 < 32 {
                b[31] ^= 0x02;
            }
            assert_eq!(count_iterations(Strategy::Insecure, &a, &b, 32), (false, index + 1));
        }
    }

    #[test]
    fn zero_length_runs_no_iterations() {
        for strategy in Strategy::ALL {
            assert_eq!(count_iterations(strategy, &[1], &[2], 0), (true, 0));
        }
    }
}
