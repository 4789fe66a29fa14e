//! Word Ladder CLI
//!
//! Prints every shortest ladder between two words, either for a pair given
//! on the command line or interactively.

use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::{fmt, EnvFilter};
use word_ladder::word::normalize_pair;
use word_ladder::{Dictionary, LadderError, LadderReport, LadderSolver};

#[derive(Parser, Debug)]
#[command(name = "word-ladder")]
#[command(version, about = "Find every shortest word ladder between two words")]
struct Cli {
    /// Start word. Omit both words for interactive mode.
    #[arg(requires = "end")]
    start: Option<String>,

    /// Destination word
    end: Option<String>,

    /// Word list with one word per line (defaults to the bundled list)
    #[arg(short, long, env = "WORD_LADDER_DICTIONARY")]
    dictionary: Option<PathBuf>,

    /// Expand each layer on a single thread
    #[arg(long)]
    sequential: bool,

    /// Print search statistics after the ladders
    #[arg(long)]
    stats: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn load(path: Option<&PathBuf>) -> word_ladder::Result<Dictionary> {
    match path {
        Some(path) => Dictionary::from_file(path),
        None => Ok(Dictionary::embedded()),
    }
}

fn print_report(out: &mut impl Write, report: &LadderReport, stats: bool) -> io::Result<()> {
    if report.is_found() {
        write!(out, "Found ladder: ")?;
        for ladder in &report.ladders {
            writeln!(out, "{}", ladder)?;
        }
    } else {
        writeln!(out, "No ladder found.")?;
    }

    if stats {
        writeln!(out, "  Steps: {}", report.layers)?;
        writeln!(out, "  Ladders: {}", report.ladders.len())?;
        writeln!(out, "  Edges recorded: {}", report.edges)?;
        writeln!(out, "  Words visited: {}", report.visited)?;
        writeln!(out, "  Time elapsed: {:.2?}", report.elapsed)?;
    }
    Ok(())
}

fn write_pair(
    out: &mut impl Write,
    solver: &LadderSolver<Dictionary>,
    start: &str,
    end: &str,
    stats: bool,
) -> word_ladder::Result<()> {
    match normalize_pair(start, end) {
        Ok((start, end)) => {
            let report = solver.solve(&start, &end);
            print_report(out, &report, stats)?;
            if stats {
                let candidates = solver.lexicon().words_of_length(start.len()).len();
                writeln!(out, "  Dictionary words of length {}: {}", start.len(), candidates)?;
            }
        }
        Err(err @ LadderError::LengthMismatch { .. }) => {
            warn!("{}", err);
            writeln!(out, "No ladder found.")?;
        }
        Err(err) => return Err(err),
    }
    Ok(())
}

fn solve_pair(
    solver: &LadderSolver<Dictionary>,
    start: &str,
    end: &str,
    stats: bool,
) -> word_ladder::Result<()> {
    write_pair(&mut io::stdout().lock(), solver, start, end, stats)
}

fn prompt(stdin: &mut impl BufRead, message: &str) -> io::Result<Option<String>> {
    print!("{}", message);
    io::stdout().flush()?;

    let mut line = String::new();
    if stdin.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn run_interactive(solver: &LadderSolver<Dictionary>, stats: bool) -> word_ladder::Result<()> {
    let stdin = io::stdin();
    let mut stdin = stdin.lock();

    loop {
        let start = match prompt(&mut stdin, "Enter start word (RETURN to quit): ")? {
            Some(word) if !word.is_empty() => word,
            _ => break,
        };
        let Some(end) = prompt(&mut stdin, "Enter destination word: ")? else {
            break;
        };

        if let Err(err) = solve_pair(solver, &start, &end, stats) {
            match err {
                LadderError::InvalidWord(_) => println!("{}", err),
                other => return Err(other),
            }
        }
        println!();
    }
    Ok(())
}

fn run(cli: Cli) -> word_ladder::Result<()> {
    let dictionary = load(cli.dictionary.as_ref())?;
    let mut solver = LadderSolver::new(dictionary);
    solver.set_parallel(!cli.sequential);

    match (cli.start, cli.end) {
        (Some(start), Some(end)) => solve_pair(&solver, &start, &end, cli.stats),
        _ => run_interactive(&solver, cli.stats),
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}
