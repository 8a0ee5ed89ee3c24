use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdventError {
    #[error("no solver registered for year {year}, puzzle {puzzle}, variation {variation}")]
    NotImplemented {
        year: String,
        puzzle: String,
        variation: String,
    },

    #[error(
        "duplicate solver registration for year {year}, puzzle {puzzle}, variation {variation}"
    )]
    DuplicateSolver {
        year: String,
        puzzle: String,
        variation: String,
    },

    #[error("cannot read puzzle input {}: {source}", path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("coordinates ({x}, {y}) are outside of a {width}x{height} grid")]
    OutOfBounds {
        x: isize,
        y: isize,
        width: usize,
        height: usize,
    },
}
