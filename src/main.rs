mod cli;

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use advent::{logging, AdventError, PuzzleInput, Registry, SolverKey};
use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let registry = Registry::with_all_solvers()?;
    if cli.list {
        for key in registry
            .keys()
            .filter(|key| cli.year.as_ref().map_or(true, |year| &key.year == year))
        {
            println!("{key}");
        }
        return Ok(());
    }

    let year = cli.year.as_deref().context("a year is required")?;
    match cli.puzzle.as_deref() {
        Some(puzzle) => {
            let variations = match cli.variation.as_deref() {
                Some(variation) => vec![variation.to_string()],
                None => registry.variations(year, puzzle),
            };
            let first = variations.first().map_or("a", String::as_str);
            if variations.is_empty() || registry.get(year, puzzle, first).is_none() {
                return Err(not_implemented(year, puzzle, first).into());
            }
            let input = PuzzleInput::load(&cli.data_dir, year, puzzle, cli.example)?;
            execute_puzzle(&registry, year, puzzle, &variations, &input)?;
        }
        None => {
            let total = execute_year(&registry, &cli, year)?;
            println!("Total processing time: {}", format_duration(total));
        }
    }
    Ok(())
}

fn not_implemented(year: &str, puzzle: &str, variation: &str) -> AdventError {
    AdventError::NotImplemented {
        year: year.to_string(),
        puzzle: puzzle.to_string(),
        variation: variation.to_string(),
    }
}

fn format_duration(dur: Duration) -> String {
    if dur.as_millis() != 0 {
        format!("{} ms", dur.as_millis())
    } else {
        format!("{} us", dur.as_micros())
    }
}

fn execute_year(registry: &Registry, cli: &Cli, year: &str) -> Result<Duration> {
    let puzzles = registry.puzzles(year);
    if puzzles.is_empty() {
        return Err(not_implemented(year, "*", "*").into());
    }

    let mut total = Duration::default();
    for puzzle in puzzles {
        let input = match PuzzleInput::load(&cli.data_dir, year, &puzzle, cli.example) {
            Ok(input) => input,
            Err(err @ AdventError::Input { .. }) => {
                warn!("skipping puzzle {puzzle}: {err}");
                continue;
            }
            Err(err) => return Err(err.into()),
        };
        let variations = registry.variations(year, &puzzle);
        total += execute_puzzle(registry, year, &puzzle, &variations, &input)?;
    }
    Ok(total)
}

fn execute_puzzle(
    registry: &Registry,
    year: &str,
    puzzle: &str,
    variations: &[String],
    input: &PuzzleInput,
) -> Result<Duration> {
    println!("Puzzle {year}/{puzzle}:");
    let mut elapsed = Duration::default();
    for variation in variations {
        let key = SolverKey::new(year, puzzle, variation.as_str());
        info!("running {key} (example: {})", input.is_example());

        let start = Instant::now();
        let answer = registry.solve(&key, input)?;
        elapsed += start.elapsed();

        println!("  Variation {variation}: {answer}");
    }
    println!("  Finished in {}", format_duration(elapsed));
    println!("---------------------");
    Ok(elapsed)
}
