//! Validation errors for user-supplied sequences
//!
//! Both variants are recoverable: the UI shows the message and keeps the
//! sequence that was active before the submission.

use super::{MAX_INPUT_LEN, MAX_VALUE, MIN_INPUT_LEN, MIN_VALUE};
use thiserror::Error;

/// Reasons a piece of user text was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A token was not an integer, or was outside the value bounds
    #[error("Numbers must be between {} and {}", MIN_VALUE, MAX_VALUE)]
    OutOfRangeValue { token: String },

    /// Too few or too many numbers were given
    #[error("Please enter between {} and {} numbers", MIN_INPUT_LEN, MAX_INPUT_LEN)]
    InvalidLength { count: usize },
}

impl ValidationError {
    /// Short detail line for logs; the `Display` text is what users see
    pub fn detail(&self) -> String {
        match self {
            ValidationError::OutOfRangeValue { token } => {
                format!("rejected token {:?}", token)
            }
            ValidationError::InvalidLength { count } => {
                format!("got {} numbers", count)
            }
        }
    }
}
