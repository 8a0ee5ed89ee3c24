use std::path::PathBuf;

use clap::{ArgAction, Parser};

#[derive(Parser, Debug)]
#[command(name = "advent", version, about = "Advent of Code puzzle solver")]
pub struct Cli {
    #[arg(
        short,
        long,
        required_unless_present = "list",
        help = "Puzzle year, or a named collection such as vierkant"
    )]
    pub year: Option<String>,

    #[arg(short, long, help = "Puzzle key within the year; all puzzles when omitted")]
    pub puzzle: Option<String>,

    #[arg(
        short,
        long,
        requires = "puzzle",
        help = "Variation of the puzzle (a or b); all variations when omitted"
    )]
    pub variation: Option<String>,

    #[arg(short, long, help = "Use the example input instead of the real one")]
    pub example: bool,

    #[arg(
        long,
        env = "ADVENT_DATA_DIR",
        default_value = "data",
        help = "Directory holding <year>/input<puzzle>[_example].txt files"
    )]
    pub data_dir: PathBuf,

    #[arg(long, help = "List the registered solvers and exit")]
    pub list: bool,

    #[arg(
        long,
        action = ArgAction::Count,
        help = "Log progress to stderr, repeat for debug output"
    )]
    pub verbose: u8,
}
