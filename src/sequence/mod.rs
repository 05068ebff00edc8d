//! Input sequences for the visualizer
//!
//! A [`Sequence`] is the list of integers being sorted. Values are bounded to
//! [`MIN_VALUE`]..=[`MAX_VALUE`] so the renderer can scale every element
//! against a fixed maximum.
//!
//! Sequences are only produced by the provider functions in this module:
//!
//! - [`generate_random`] / [`generate_random_with`]: uniform random values
//! - [`parse_user_input`]: comma separated text typed by the user
//!
//! There is no public constructor that skips validation, so any `Sequence`
//! handed to [`crate::sorter::BubbleSort`] already satisfies the value bounds.

pub mod errors;
pub mod provider;

pub use errors::ValidationError;
pub use provider::{generate_random, generate_random_with, parse_user_input};

/// Smallest value an element may take
pub const MIN_VALUE: u8 = 1;

/// Largest value an element may take
pub const MAX_VALUE: u8 = 50;

/// Fewest elements accepted from user input
pub const MIN_INPUT_LEN: usize = 2;

/// Most elements accepted from user input
pub const MAX_INPUT_LEN: usize = 30;

/// Length of randomly generated sequences when none is configured
pub const RANDOM_SEQUENCE_LEN: usize = 20;

/// An ordered list of bounded integers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    values: Vec<u8>,
}

impl Sequence {
    /// Callers must have checked every value against the bounds already.
    pub(crate) fn from_checked(values: Vec<u8>) -> Self {
        debug_assert!(values.iter().all(|v| (MIN_VALUE..=MAX_VALUE).contains(v)));
        Sequence { values }
    }

    /// The elements in order
    pub fn values(&self) -> &[u8] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl std::fmt::Display for Sequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self.values.iter().map(|v| v.to_string()).collect();
        write!(f, "{}", parts.join(","))
    }
}
