//! Producing sequences: random generation and user text parsing

use super::{
    Sequence, ValidationError, MAX_INPUT_LEN, MAX_VALUE, MIN_INPUT_LEN, MIN_VALUE,
};
use rand::Rng;

/// Generate `size` values drawn uniformly from the value bounds
pub fn generate_random(size: usize) -> Sequence {
    generate_random_with(&mut rand::rng(), size)
}

/// Same as [`generate_random`], drawing from a caller-supplied RNG
///
/// Passing a seeded `StdRng` makes the output reproducible.
pub fn generate_random_with<R: Rng + ?Sized>(rng: &mut R, size: usize) -> Sequence {
    let values = (0..size)
        .map(|_| rng.random_range(MIN_VALUE..=MAX_VALUE))
        .collect();
    Sequence::from_checked(values)
}

/// Parse comma separated text into a sequence.
///
/// Tokens are trimmed and checked in order, so a bad value is reported
/// before a bad count.
pub fn parse_user_input(text: &str) -> Result<Sequence, ValidationError> {
    let mut values = Vec::new();

    for token in text.split(',') {
        let token = token.trim();
        let value = token
            .parse::<i64>()
            .ok()
            .filter(|n| (i64::from(MIN_VALUE)..=i64::from(MAX_VALUE)).contains(n))
            .ok_or_else(|| ValidationError::OutOfRangeValue {
                token: token.to_string(),
            })?;
        // Bounds were checked above, so the narrowing cannot truncate
        values.push(value as u8);
    }

    if !(MIN_INPUT_LEN..=MAX_INPUT_LEN).contains(&values.len()) {
        return Err(ValidationError::InvalidLength {
            count: values.len(),
        });
    }

    Ok(Sequence::from_checked(values))
}
