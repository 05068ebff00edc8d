//! Main TUI application state and logic

use crate::audio::{Cue, CuePlayer};
use crate::config::{clamp_speed, Config, VisualStyle};
use crate::sequence::{generate_random_with, parse_user_input, Sequence};
use crate::snapshot::{Progress, Step};
use crate::sorter::{BubbleSort, SortStats};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rand::{rngs::StdRng, SeedableRng};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Longest input line accepted by the editor
const MAX_INPUT_CHARS: usize = 256;

/// Upper bound on how long the event loop waits for a key
const MAX_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// High level state shown in the status bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    /// Nothing sorted yet for the current sequence
    Ready,
    Playing,
    /// A sort is in progress but not advancing
    Paused,
    /// The last sort reached its terminal step
    Sorted,
    /// Editing the sequence text
    Input,
}

impl AppState {
    pub fn label(self) -> &'static str {
        match self {
            AppState::Ready => "READY",
            AppState::Playing => "▶ PLAYING",
            AppState::Paused => "PAUSED",
            AppState::Sorted => "SORTED",
            AppState::Input => "⌨ INPUT",
        }
    }
}

/// The main application state
pub struct App {
    /// The active sequence; sorting always starts from here
    pub sequence: Sequence,

    /// In-flight generator, if a sort has been started and not finished
    pub sorter: Option<BubbleSort>,

    /// Last step produced, shown instead of `sequence` when present
    pub current_step: Option<Step>,

    /// Counters from the most recent sort
    pub stats: SortStats,

    pub visual_style: VisualStyle,
    pub show_info: bool,

    /// Whether keys go to the sequence editor
    pub input_mode: bool,
    pub input_buffer: String,

    /// Message from the last rejected submission
    pub error_message: Option<String>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether the animation is advancing on its own
    pub is_running: bool,

    /// Delay between animation steps
    pub speed: Duration,

    pub sound_enabled: bool,

    /// Last time a step was taken while running
    pub last_play_time: Instant,

    random_size: usize,
    rng: StdRng,
    player: Box<dyn CuePlayer>,
}

impl App {
    /// Create the app. Without an initial sequence a random one is generated.
    pub fn new(config: &Config, initial: Option<Sequence>, player: Box<dyn CuePlayer>) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        let sequence =
            initial.unwrap_or_else(|| generate_random_with(&mut rng, config.random_size));

        info!(len = sequence.len(), %sequence, "initial sequence");

        App {
            sequence,
            sorter: None,
            current_step: None,
            stats: SortStats::default(),
            visual_style: config.style,
            show_info: false,
            input_mode: false,
            input_buffer: String::new(),
            error_message: None,
            should_quit: false,
            status_message: String::from("Ready!"),
            is_running: false,
            speed: clamp_speed(config.speed),
            sound_enabled: config.sound,
            last_play_time: Instant::now(),
            random_size: config.random_size,
            rng,
            player,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.tick(Instant::now());

            // Use poll with timeout so the animation keeps moving without input
            if event::poll(self.speed.min(MAX_POLL_INTERVAL))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// The values currently on screen
    pub fn displayed_values(&self) -> &[u8] {
        match &self.current_step {
            Some(step) => &step.sequence,
            None => self.sequence.values(),
        }
    }

    pub fn state(&self) -> AppState {
        if self.input_mode {
            AppState::Input
        } else if self.is_running {
            AppState::Playing
        } else if self.sorter.is_some() {
            AppState::Paused
        } else if self.current_step.as_ref().is_some_and(Step::is_terminal) {
            AppState::Sorted
        } else {
            AppState::Ready
        }
    }

    /// Advance once if running and the step delay has elapsed
    pub fn tick(&mut self, now: Instant) {
        if self.is_running && now.saturating_duration_since(self.last_play_time) >= self.speed {
            self.step_once();
            self.last_play_time = now;
        }
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let mut constraints = vec![
            Constraint::Min(6),
            Constraint::Length(super::panes::input_pane_height(self.error_message.is_some())),
        ];
        if self.show_info {
            constraints.push(Constraint::Length(super::panes::INFO_PANE_HEIGHT));
        }
        constraints.push(Constraint::Length(1));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(size);

        super::panes::render_visualizer_pane(
            frame,
            chunks[0],
            super::panes::VisualizerRenderData {
                values: self.displayed_values(),
                step: self.current_step.as_ref(),
                style: self.visual_style,
            },
        );

        super::panes::render_input_pane(
            frame,
            chunks[1],
            super::panes::InputRenderData {
                buffer: &self.input_buffer,
                is_editing: self.input_mode,
                error: self.error_message.as_deref(),
            },
        );

        if self.show_info {
            super::panes::render_info_pane(frame, chunks[2], self.stats, self.sequence.len());
        }

        super::panes::render_status_bar(
            frame,
            chunks[chunks.len() - 1],
            super::panes::StatusRenderData {
                state: self.state(),
                message: &self.status_message,
                speed: self.speed,
                sound: self.sound_enabled,
            },
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if self.input_mode {
            self.handle_input_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char(' ') => {
                if self.is_running {
                    self.pause();
                } else {
                    self.start();
                }
            }
            KeyCode::Right => {
                self.is_running = false;
                self.step_once();
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.reset();
            }
            KeyCode::Char('i') | KeyCode::Char('I') => {
                if self.is_running {
                    self.status_message = "Pause before editing the sequence".to_string();
                } else {
                    self.input_mode = true;
                    self.input_buffer = self.sequence.to_string();
                    self.status_message = "Editing sequence".to_string();
                }
            }
            KeyCode::Char('b') => self.set_style(VisualStyle::Bars),
            KeyCode::Char('c') => self.set_style(VisualStyle::Circles),
            KeyCode::Char('s') => self.set_style(VisualStyle::Squares),
            KeyCode::Char('v') | KeyCode::Tab => self.set_style(self.visual_style.next()),
            KeyCode::Char('?') | KeyCode::Char('h') => {
                self.show_info = !self.show_info;
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.speed = clamp_speed(self.speed / 2);
                self.status_message = format!("Step delay {}ms", self.speed.as_millis());
            }
            KeyCode::Char('-') | KeyCode::Char('_') => {
                self.speed = clamp_speed(self.speed * 2);
                self.status_message = format!("Step delay {}ms", self.speed.as_millis());
            }
            KeyCode::Char('m') | KeyCode::Char('M') => {
                self.sound_enabled = !self.sound_enabled;
                self.status_message = if self.sound_enabled {
                    "Sound on".to_string()
                } else {
                    "Sound off".to_string()
                };
            }
            _ => {}
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit_input(),
            KeyCode::Esc => {
                self.input_mode = false;
                self.input_buffer.clear();
                self.error_message = None;
                self.status_message = "Edit cancelled".to_string();
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
                self.error_message = None;
            }
            KeyCode::Char(c) => {
                if self.input_buffer.len() < MAX_INPUT_CHARS {
                    self.input_buffer.push(c);
                }
                self.error_message = None;
            }
            _ => {}
        }
    }

    /// Validate the editor text and make it the active sequence.
    ///
    /// On failure only the error message changes.
    fn submit_input(&mut self) {
        match parse_user_input(&self.input_buffer) {
            Ok(sequence) => {
                info!(len = sequence.len(), %sequence, "sequence set from input");
                self.sequence = sequence;
                self.discard_sort();
                self.input_mode = false;
                self.input_buffer.clear();
                self.error_message = None;
                self.status_message = format!("Sequence set ({} numbers)", self.sequence.len());
            }
            Err(e) => {
                warn!(detail = %e.detail(), "rejected sequence input");
                self.error_message = Some(e.to_string());
            }
        }
    }

    fn start(&mut self) {
        if self.sorter.is_none() {
            // Replay from the active sequence after a finished run
            self.current_step = None;
        }
        self.is_running = true;
        // Take the first step on the next tick
        self.last_play_time = Instant::now()
            .checked_sub(self.speed)
            .unwrap_or_else(Instant::now);
        self.status_message = "Sorting...".to_string();
    }

    fn pause(&mut self) {
        self.is_running = false;
        self.status_message = "Paused".to_string();
    }

    /// Drop any in-flight sort and load a fresh random sequence
    fn reset(&mut self) {
        self.is_running = false;
        self.discard_sort();
        self.error_message = None;
        self.sequence = generate_random_with(&mut self.rng, self.random_size);
        info!(len = self.sequence.len(), sequence = %self.sequence, "reset to random sequence");
        self.status_message = "New random sequence".to_string();
    }

    fn discard_sort(&mut self) {
        self.sorter = None;
        self.current_step = None;
        self.stats = SortStats::default();
    }

    fn set_style(&mut self, style: VisualStyle) {
        self.visual_style = style;
        self.status_message = format!("View: {}", style.label());
    }

    /// Pull the next step from the generator, creating it if needed
    fn step_once(&mut self) {
        let sorter = self.sorter.get_or_insert_with(|| {
            debug!(len = self.sequence.len(), "starting bubble sort");
            BubbleSort::new(&self.sequence)
        });
        let progress = sorter.advance();
        self.stats = sorter.stats();

        if self.sound_enabled {
            self.player.play(Cue::for_progress(&progress));
        }

        match progress {
            Progress::Step(step) => {
                self.status_message = step_message(&step);
                self.current_step = Some(step);
            }
            Progress::Terminal(step) => {
                self.is_running = false;
                self.sorter = None;
                info!(
                    comparisons = self.stats.comparisons,
                    swaps = self.stats.swaps,
                    passes = self.stats.passes,
                    "sort complete"
                );
                self.status_message = format!(
                    "Sorted in {} comparisons and {} swaps",
                    self.stats.comparisons, self.stats.swaps
                );
                self.current_step = Some(step);
            }
        }
    }
}

fn step_message(step: &Step) -> String {
    match step.comparing {
        Some(pair) => {
            let (l, r) = pair.as_tuple();
            let left = step.sequence.get(l).copied().unwrap_or_default();
            let right = step.sequence.get(r).copied().unwrap_or_default();
            if step.swapped {
                // Values have already moved; report them in their old order
                format!("Swapped {} and {}", right, left)
            } else {
                format!("Comparing {} and {}", left, right)
            }
        }
        None => "Sorted".to_string(),
    }
}
