// bubbletty: Bubble Sort Visualizer for the terminal

use std::io::{self, Write};
use std::time::Duration;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::{rngs::StdRng, SeedableRng};
use ratatui::{backend::CrosstermBackend, Terminal};

use bubbletty::audio::TerminalBell;
use bubbletty::config::{Config, VisualStyle, DEFAULT_SPEED_MS, MAX_SPEED_MS, MIN_SPEED_MS};
use bubbletty::logging;
use bubbletty::sequence::{
    generate_random, generate_random_with, parse_user_input, Sequence, ValidationError,
    MAX_INPUT_LEN, MIN_INPUT_LEN, RANDOM_SEQUENCE_LEN,
};
use bubbletty::sorter::BubbleSort;
use bubbletty::ui::App;

/// Step-by-step bubble sort visualizer
#[derive(Debug, Parser)]
#[command(name = "bubbletty")]
#[command(about = "Watch bubble sort compare and swap, one step at a time", version)]
struct Args {
    /// Delay between animation steps in milliseconds
    #[arg(
        long,
        default_value_t = DEFAULT_SPEED_MS,
        value_parser = clap::value_parser!(u64).range(MIN_SPEED_MS..=MAX_SPEED_MS)
    )]
    speed: u64,

    /// Length of randomly generated sequences
    #[arg(
        long,
        default_value_t = RANDOM_SEQUENCE_LEN as u64,
        value_parser = clap::value_parser!(u64).range(MIN_INPUT_LEN as u64..=MAX_INPUT_LEN as u64)
    )]
    size: u64,

    /// How elements are drawn
    #[arg(long, value_enum, default_value_t = VisualStyle::Bars)]
    style: VisualStyle,

    /// Initial sequence as comma separated numbers, e.g. "5,2,8,1"
    #[arg(long)]
    input: Option<String>,

    /// Seed for random sequences
    #[arg(long)]
    seed: Option<u64>,

    /// Disable audio cues
    #[arg(long)]
    mute: bool,

    /// Print every step to stdout instead of starting the TUI
    #[arg(long)]
    plain: bool,
}

impl Args {
    fn config(&self) -> Config {
        Config {
            speed: Duration::from_millis(self.speed),
            random_size: self.size as usize,
            style: self.style,
            seed: self.seed,
            sound: !self.mute,
        }
    }

    /// The validated `--input` sequence, if one was given
    fn initial_sequence(&self) -> Result<Option<Sequence>, ValidationError> {
        self.input.as_deref().map(parse_user_input).transpose()
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = args.config();

    // Logs go to a file so they never draw over the TUI
    let (log_dir, log_guard) = logging::init_file_only_logging("bubbletty")?;
    eprintln!("bubbletty logs: {}", log_dir.display());

    let initial = match args.initial_sequence() {
        Ok(initial) => initial,
        Err(e) => {
            tracing::error!(detail = %e.detail(), "invalid --input");
            eprintln!("Error: {}", e);
            // exit skips destructors; flush buffered log lines first
            drop(log_guard);
            std::process::exit(1);
        }
    };

    if args.plain {
        let sequence = initial.unwrap_or_else(|| match config.seed {
            Some(seed) => {
                generate_random_with(&mut StdRng::seed_from_u64(seed), config.random_size)
            }
            None => generate_random(config.random_size),
        });
        return print_steps(&sequence).map_err(Into::into);
    }

    // Muting is a runtime toggle on the app, so the bell is always wired up
    let mut app = App::new(&config, initial, Box::new(TerminalBell::stdout()));

    tracing::info!(style = ?config.style, speed_ms = args.speed, "starting TUI");

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "TUI exited with an error");
        eprintln!("Error: {:?}", err);
    } else {
        tracing::info!("TUI exited normally");
    }

    Ok(())
}

/// Print every step of sorting `sequence`, then the totals
fn print_steps(sequence: &Sequence) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "input: [{}]", sequence)?;

    let mut sorter = BubbleSort::new(sequence);
    for (n, step) in sorter.by_ref().enumerate() {
        writeln!(out, "{:>4}: {}", n + 1, step)?;
    }

    let stats = sorter.stats();
    writeln!(
        out,
        "{} comparisons, {} swaps, {} passes",
        stats.comparisons, stats.swaps, stats.passes
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("bubbletty").chain(args.iter().copied()))
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]).unwrap();
        let config = args.config();
        assert_eq!(config.speed, Duration::from_millis(DEFAULT_SPEED_MS));
        assert_eq!(config.random_size, RANDOM_SEQUENCE_LEN);
        assert_eq!(config.style, VisualStyle::Bars);
        assert_eq!(config.seed, None);
        assert!(config.sound);
        assert!(!args.plain);
        assert_eq!(args.initial_sequence(), Ok(None));
    }

    #[test]
    fn test_boundary_values_accepted() {
        for speed in ["10", "2000"] {
            assert!(parse(&["--speed", speed]).is_ok(), "--speed {} rejected", speed);
        }
        for size in ["2", "30"] {
            assert!(parse(&["--size", size]).is_ok(), "--size {} rejected", size);
        }
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        assert!(parse(&["--speed", "9"]).is_err());
        assert!(parse(&["--speed", "2001"]).is_err());
        assert!(parse(&["--size", "1"]).is_err());
        assert!(parse(&["--size", "31"]).is_err());
        assert!(parse(&["--style", "triangles"]).is_err());
    }

    #[test]
    fn test_config_from_flags() {
        let args = parse(&[
            "--speed", "250", "--size", "8", "--style", "circles", "--seed", "5", "--mute",
        ])
        .unwrap();
        let config = args.config();
        assert_eq!(config.speed, Duration::from_millis(250));
        assert_eq!(config.random_size, 8);
        assert_eq!(config.style, VisualStyle::Circles);
        assert_eq!(config.seed, Some(5));
        assert!(!config.sound);
    }

    #[test]
    fn test_input_is_validated() {
        let args = parse(&["--input", "3,1,2"]).unwrap();
        let seq = args.initial_sequence().unwrap().unwrap();
        assert_eq!(seq.values(), &[3, 1, 2]);

        let args = parse(&["--input", "1"]).unwrap();
        assert_eq!(
            args.initial_sequence(),
            Err(ValidationError::InvalidLength { count: 1 })
        );

        let args = parse(&["--input", "51,2,3"]).unwrap();
        assert!(matches!(
            args.initial_sequence(),
            Err(ValidationError::OutOfRangeValue { .. })
        ));
    }
}
