//! Pull-based bubble sort step generator
//!
//! [`BubbleSort`] is an explicit state machine over a private working copy of
//! the input. Each call to [`BubbleSort::advance`] does just enough work to
//! produce the next [`Step`] and then stops; nothing runs between calls.
//!
//! # Emission order
//!
//! For every pass, for `i` in `0..len-1`:
//!
//! 1. a comparison step for `(i, i + 1)` showing the array untouched;
//! 2. if `working[i] > working[i + 1]`, a swap step for the same pair
//!    showing the array after the swap.
//!
//! Passes repeat until one completes without a swap. Every pass rescans from
//! index 0. After the last pass a terminal step is returned, and keeps being
//! returned by any further call.
//!
//! The swap decision for pair `i` is made on the call *after* its comparison
//! step has been handed out, so no step is ever computed ahead of time.

use crate::sequence::Sequence;
use crate::snapshot::{Progress, Step};
use tracing::debug;

/// Counters describing the work done so far
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortStats {
    pub comparisons: usize,
    pub swaps: usize,
    /// Passes that ran to the end of the array
    pub passes: usize,
}

/// Where the generator resumes on the next `advance`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Emit the comparison step for `(i, i + 1)`
    Compare(usize),
    /// The comparison for `(i, i + 1)` was emitted; decide whether to swap
    Decide(usize),
    /// Pair `i` is fully handled; move to the next pair or pass
    Next(usize),
    /// Sorting is complete
    Finished,
}

/// Step generator for one input sequence
#[derive(Debug, Clone)]
pub struct BubbleSort {
    working: Vec<u8>,
    phase: Phase,
    pass_dirty: bool,
    stats: SortStats,
    /// Set once the iterator has yielded the terminal step
    fused: bool,
}

impl BubbleSort {
    /// Create a generator over a copy of `sequence`
    pub fn new(sequence: &Sequence) -> Self {
        let working = sequence.values().to_vec();
        let phase = if working.len() < 2 {
            Phase::Finished
        } else {
            Phase::Compare(0)
        };

        BubbleSort {
            working,
            phase,
            pass_dirty: false,
            stats: SortStats::default(),
            fused: false,
        }
    }

    /// Produce the next step.
    ///
    /// Returns [`Progress::Terminal`] once sorting is complete, and again on
    /// every later call.
    pub fn advance(&mut self) -> Progress {
        loop {
            match self.phase {
                Phase::Compare(i) => {
                    self.stats.comparisons += 1;
                    self.phase = Phase::Decide(i);
                    return Progress::Step(Step::comparison(self.working.clone(), i));
                }
                Phase::Decide(i) => {
                    self.phase = Phase::Next(i);
                    if self.working[i] > self.working[i + 1] {
                        self.working.swap(i, i + 1);
                        self.pass_dirty = true;
                        self.stats.swaps += 1;
                        return Progress::Step(Step::swap(self.working.clone(), i));
                    }
                }
                Phase::Next(i) => {
                    self.phase = self.after_pair(i);
                }
                Phase::Finished => {
                    return Progress::Terminal(Step::terminal(self.working.clone()));
                }
            }
        }
    }

    /// Phase that follows a fully handled pair `i`
    fn after_pair(&mut self, i: usize) -> Phase {
        if i + 2 < self.working.len() {
            return Phase::Compare(i + 1);
        }

        self.stats.passes += 1;
        if self.pass_dirty {
            self.pass_dirty = false;
            Phase::Compare(0)
        } else {
            debug!(
                comparisons = self.stats.comparisons,
                swaps = self.stats.swaps,
                passes = self.stats.passes,
                "bubble sort finished"
            );
            Phase::Finished
        }
    }

    pub fn stats(&self) -> SortStats {
        self.stats
    }

    /// Whether the next `advance` will return the terminal step
    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }
}

/// Yields every step including the terminal one, then `None`
impl Iterator for BubbleSort {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        if self.fused {
            return None;
        }
        let progress = self.advance();
        self.fused = progress.is_terminal();
        Some(progress.into_step())
    }
}

impl std::iter::FusedIterator for BubbleSort {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::parse_user_input;

    #[test]
    fn test_decision_waits_for_next_advance() {
        let seq = parse_user_input("2,1").unwrap();
        let mut sorter = BubbleSort::new(&seq);

        sorter.advance();
        // The comparison has been handed out but nothing has moved yet
        assert_eq!(sorter.working, vec![2, 1]);
        assert_eq!(sorter.stats().swaps, 0);

        sorter.advance();
        assert_eq!(sorter.working, vec![1, 2]);
        assert_eq!(sorter.stats().swaps, 1);
    }

    #[test]
    fn test_single_element_terminates_immediately() {
        let seq = Sequence::from_checked(vec![7]);
        let mut sorter = BubbleSort::new(&seq);
        assert!(sorter.is_finished());
        assert_eq!(sorter.advance(), Progress::Terminal(Step::terminal(vec![7])));
        assert_eq!(sorter.stats(), SortStats::default());
    }
}
