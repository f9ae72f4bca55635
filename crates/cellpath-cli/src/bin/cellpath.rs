use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use cellpath_cli::{
    CliError, DEFAULT_MAX_WEIGHT, OutputFormat, RunConfig, ValidationPolicy, run, write_path,
};
use cellpath_core::Weight;
use cellpath_paths::Selection;
use clap::{Parser, ValueEnum};

/// Find the cheapest 4-connected path through a weighted grid.
///
/// Input: `<width> <height>`, then `height` lines of `width` weights, then
/// `<start row> <start col> <end row> <end col>`. The path is printed one
/// `<row> <col>` per line, followed by a line holding `.`.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Read input from this file instead of stdin
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Largest accepted cell weight
    #[arg(long, env = "CELLPATH_MAX_WEIGHT", default_value_t = DEFAULT_MAX_WEIGHT)]
    max_weight: Weight,

    /// How the next node to process is picked
    #[arg(long, value_enum, default_value_t = SelectionArg::Linear)]
    selection: SelectionArg,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Also print the total path cost
    #[arg(long)]
    show_cost: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SelectionArg {
    /// Scan every node for the cheapest one
    Linear,
    /// Min-heap frontier
    Heap,
}

impl From<SelectionArg> for Selection {
    fn from(arg: SelectionArg) -> Self {
        match arg {
            SelectionArg::Linear => Selection::LinearScan,
            SelectionArg::Heap => Selection::BinaryHeap,
        }
    }
}

fn log_level(verbose: u8) -> log::LevelFilter {
    match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}

fn init_logging(verbose: u8) {
    env_logger::Builder::new()
        .filter_level(log_level(verbose))
        .parse_default_env()
        .init();
}

fn read_input(path: Option<&PathBuf>) -> io::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn execute(args: &Args) -> Result<(), CliError> {
    let config = RunConfig {
        policy: ValidationPolicy {
            max_weight: args.max_weight,
        },
        selection: args.selection.into(),
        format: args.format,
        show_cost: args.show_cost,
    };
    log::debug!("{config:?}");

    let text = read_input(args.input.as_ref())?;
    let path = run(&config, &text)?;
    write_path(&mut io::stdout().lock(), &path, config.format, config.show_cost)?;
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match execute(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("cellpath: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}
