//! Runtime configuration for the visualizer
//!
//! The binary builds a [`Config`] from its command line arguments; tests
//! build one directly with [`Config::default`] and struct update syntax.

use crate::sequence::RANDOM_SEQUENCE_LEN;
use clap::ValueEnum;
use std::time::Duration;

/// Default delay between two animation steps
pub const DEFAULT_SPEED_MS: u64 = 100;

/// Fastest allowed animation delay
pub const MIN_SPEED_MS: u64 = 10;

/// Slowest allowed animation delay
pub const MAX_SPEED_MS: u64 = 2000;

/// How elements are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum VisualStyle {
    #[default]
    Bars,
    Circles,
    Squares,
}

impl VisualStyle {
    /// Cycle bars -> circles -> squares -> bars
    pub fn next(self) -> Self {
        match self {
            VisualStyle::Bars => VisualStyle::Circles,
            VisualStyle::Circles => VisualStyle::Squares,
            VisualStyle::Squares => VisualStyle::Bars,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            VisualStyle::Bars => "bars",
            VisualStyle::Circles => "circles",
            VisualStyle::Squares => "squares",
        }
    }
}

/// Visualizer settings
#[derive(Debug, Clone)]
pub struct Config {
    /// Delay between animation steps
    pub speed: Duration,
    /// Length of randomly generated sequences
    pub random_size: usize,
    pub style: VisualStyle,
    /// Seed for random sequences; `None` uses OS entropy
    pub seed: Option<u64>,
    /// Whether audio cues are played
    pub sound: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            speed: Duration::from_millis(DEFAULT_SPEED_MS),
            random_size: RANDOM_SEQUENCE_LEN,
            style: VisualStyle::default(),
            seed: None,
            sound: true,
        }
    }
}

/// Clamp an animation delay into the supported range
pub fn clamp_speed(speed: Duration) -> Duration {
    speed.clamp(
        Duration::from_millis(MIN_SPEED_MS),
        Duration::from_millis(MAX_SPEED_MS),
    )
}
