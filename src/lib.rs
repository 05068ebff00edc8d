//! # Introduction
//!
//! bubbletty animates bubble sort in the terminal. A sequence of small
//! integers is either generated at random or typed in by the user, then
//! sorted one comparison at a time while a terminal UI built with
//! [ratatui](https://docs.rs/ratatui) highlights the pair being compared or
//! swapped.
//!
//! ## Pipeline
//!
//! ```text
//! Random / user text → Sequence → BubbleSort → Steps → TUI
//! ```
//!
//! 1. [`sequence`]: bounded [`sequence::Sequence`] values and the providers
//!    that produce them, with [`sequence::ValidationError`] for bad input.
//! 2. [`sorter`]: [`sorter::BubbleSort`], a pull-based generator handing out
//!    one [`snapshot::Step`] per call to `advance`.
//! 3. [`snapshot`]: the step types and per-element highlight state.
//! 4. [`audio`]: cues derived from each step and the players that sound them.
//! 5. [`config`] and [`logging`]: runtime settings and file-only tracing.
//! 6. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Example
//!
//! ```
//! use bubbletty::sequence::parse_user_input;
//! use bubbletty::sorter::BubbleSort;
//!
//! let seq = parse_user_input("2,1").unwrap();
//! let steps: Vec<_> = BubbleSort::new(&seq).collect();
//! assert_eq!(steps.last().unwrap().sequence, vec![1, 2]);
//! ```

pub mod audio;
pub mod config;
pub mod logging;
pub mod sequence;
pub mod snapshot;
pub mod sorter;
pub mod ui;
