//! `gptab` command line
//!
//! Global flags pick the file and the selection, the subcommand picks the
//! edit. Without `--input` the running editor's clipboard file is edited in
//! place.

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::collections::BTreeSet;
use std::path::PathBuf;
use std::process::ExitCode;

use gptab_tools::config::ToolConfig;
use gptab_tools::gateway::{JsonGateway, SystemProcesses, DEFAULT_PROCESS};
use gptab_tools::selection::{parse_range, SelectionSpec};
use gptab_tools::session;
use gptab_tools::transform::stroke::validate_stroke_value;
use gptab_tools::transform::{Direction, DurationOp, NoteEffectKind, Operation, RemoveTarget};

#[derive(Parser, Debug)]
#[command(name = "gptab", version, about = "Edit selected beats of Guitar Pro tablature")]
struct Cli {
    /// File to edit, the editor clipboard by default
    #[arg(short, long, value_name = "PATH", global = true)]
    input: Option<PathBuf>,

    /// Save the edited file here, in place by default
    #[arg(short, long, value_name = "PATH", global = true)]
    output: Option<PathBuf>,

    /// Tracks to edit, e.g. '1-4,6-7'; taken from the clipboard by default
    #[arg(short, long, value_name = "RANGE", value_parser = parse_range, global = true)]
    tracks: Option<BTreeSet<u32>>,

    /// Measures to edit; taken from the clipboard by default
    #[arg(short, long, value_name = "RANGE", value_parser = parse_range, global = true)]
    measures: Option<BTreeSet<u32>>,

    /// Beats to edit, counted within each voice; taken from the clipboard by default
    #[arg(short, long, value_name = "RANGE", value_parser = parse_range, global = true)]
    beats: Option<BTreeSet<u32>>,

    /// Editor process whose clipboard is edited
    #[arg(long, value_name = "NAME", env = "GPTAB_PROCESS", default_value = DEFAULT_PROCESS)]
    process: String,

    /// More logging (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Shift notes to a higher or lower string, keeping their pitch
    Shift {
        direction: DirectionArg,
        /// Number of strings to move
        amount: u32,
    },
    /// Multiply or divide beat durations
    Duration { op: DurationArg, factor: u32 },
    /// Set a brush stroke
    #[command(alias = "brush")]
    Stroke {
        direction: DirectionArg,
        /// Stroke length as a note value: 4, 8, 16, 32, 64 or 128
        #[arg(value_parser = parse_stroke_value)]
        duration: u8,
    },
    /// Set a pick stroke
    PickStroke { direction: DirectionArg },
    /// Remove brush strokes, pick strokes or text
    Remove { target: RemoveArg },
    /// Replace selected beats with rests
    Rest,
    /// Make selected notes dead or natural harmonics
    Set { effect: EffectArg },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum DirectionArg {
    Up,
    Down,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum DurationArg {
    Mul,
    Div,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum RemoveArg {
    Brush,
    Text,
    #[value(alias = "pickStroke")]
    PickStroke,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum EffectArg {
    Dead,
    Harmonic,
}

fn parse_stroke_value(raw: &str) -> Result<u8, String> {
    let value: u32 = raw.parse().map_err(|_| format!("'{raw}' is not a number"))?;
    validate_stroke_value(value).map_err(|err| err.to_string())
}

impl From<DirectionArg> for Direction {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Up => Direction::Up,
            DirectionArg::Down => Direction::Down,
        }
    }
}

impl Command {
    fn operation(&self) -> Operation {
        match *self {
            Command::Shift { direction, amount } => Operation::Shift {
                direction: direction.into(),
                amount,
            },
            Command::Duration { op, factor } => Operation::Duration {
                op: match op {
                    DurationArg::Mul => DurationOp::Multiply,
                    DurationArg::Div => DurationOp::Divide,
                },
                factor,
            },
            Command::Stroke { direction, duration } => Operation::Brush {
                direction: direction.into(),
                value: duration,
            },
            Command::PickStroke { direction } => Operation::PickStroke {
                direction: direction.into(),
            },
            Command::Remove { target } => Operation::Remove(match target {
                RemoveArg::Brush => RemoveTarget::Brush,
                RemoveArg::Text => RemoveTarget::Text,
                RemoveArg::PickStroke => RemoveTarget::PickStroke,
            }),
            Command::Rest => Operation::Rest,
            Command::Set { effect } => Operation::SetEffect(match effect {
                EffectArg::Dead => NoteEffectKind::Dead,
                EffectArg::Harmonic => NoteEffectKind::NaturalHarmonic,
            }),
        }
    }
}

impl Cli {
    fn config(&self) -> ToolConfig {
        ToolConfig {
            input: self.input.clone(),
            output: self.output.clone(),
            process: self.process.clone(),
            selection: SelectionSpec {
                tracks: self.tracks.clone(),
                measures: self.measures.clone(),
                beats: self.beats.clone(),
            },
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let operation = cli.command.operation();
    match session::run(&cli.config(), &[operation], &JsonGateway::new(), &SystemProcesses) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
