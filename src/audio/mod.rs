//! Audio cues for sorting progress
//!
//! The visualizer plays a cue for every step it shows. Which cue belongs to a
//! step is decided by [`Cue::for_progress`]; how (or whether) it is heard is
//! up to the [`CuePlayer`] the app was built with.

use crate::snapshot::Progress;
use std::io::{self, Write};
use tracing::warn;

/// Sound events emitted while sorting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Compare,
    Swap,
    Complete,
}

impl Cue {
    pub fn for_progress(progress: &Progress) -> Self {
        match progress {
            Progress::Terminal(_) => Cue::Complete,
            Progress::Step(step) if step.swapped => Cue::Swap,
            Progress::Step(_) => Cue::Compare,
        }
    }
}

/// Something that can make cues audible
pub trait CuePlayer {
    fn play(&mut self, cue: Cue);
}

/// Ignores every cue
#[derive(Debug, Default)]
pub struct Silent;

impl CuePlayer for Silent {
    fn play(&mut self, _cue: Cue) {}
}

/// Rings the terminal bell on swaps and on completion.
///
/// Comparisons stay quiet: at animation speed one bell per comparison blurs
/// into a continuous tone.
pub struct TerminalBell<W: Write> {
    out: W,
    failed: bool,
}

impl TerminalBell<io::Stdout> {
    pub fn stdout() -> Self {
        TerminalBell::new(io::stdout())
    }
}

impl<W: Write> TerminalBell<W> {
    pub fn new(out: W) -> Self {
        TerminalBell { out, failed: false }
    }

    fn ring(&mut self) -> io::Result<()> {
        self.out.write_all(b"\x07")?;
        self.out.flush()
    }
}

impl<W: Write> CuePlayer for TerminalBell<W> {
    fn play(&mut self, cue: Cue) {
        if self.failed || cue == Cue::Compare {
            return;
        }
        if let Err(e) = self.ring() {
            // Stop trying after the first failure rather than log every step
            warn!(error = %e, "terminal bell unavailable, muting cues");
            self.failed = true;
        }
    }
}
