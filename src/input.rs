use std::path::{Path, PathBuf};

use anyhow::{bail, Result};

use crate::error::AdventError;

/// The content of one puzzle input file, plus whether it is the small example from the puzzle
/// text. Several puzzles use different constants (grid sizes, step counts) for the example.
#[derive(Debug, Clone)]
pub struct PuzzleInput {
    text: String,
    example: bool,
}

impl PuzzleInput {
    pub fn new(text: impl Into<String>, example: bool) -> Self {
        Self {
            text: text.into(),
            example,
        }
    }

    pub fn example(text: impl Into<String>) -> Self {
        Self::new(text, true)
    }

    pub fn real(text: impl Into<String>) -> Self {
        Self::new(text, false)
    }

    pub fn load(
        data_dir: &Path,
        year: &str,
        puzzle: &str,
        example: bool,
    ) -> Result<Self, AdventError> {
        let path = input_path(data_dir, year, puzzle, example);
        match std::fs::read_to_string(&path) {
            Ok(text) => Ok(Self::new(text, example)),
            Err(source) => Err(AdventError::Input { path, source }),
        }
    }

    pub fn is_example(&self) -> bool {
        self.example
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Lines with trailing whitespace removed.
    pub fn lines(&self) -> impl Iterator<Item = &str> + '_ {
        self.text.lines().map(str::trim_end)
    }

    /// Lines split into blocks separated by empty lines.
    pub fn groups(&self) -> Vec<Vec<&str>> {
        let mut groups = Vec::new();
        let mut current = Vec::new();
        for line in self.lines() {
            if line.is_empty() {
                if !current.is_empty() {
                    groups.push(std::mem::take(&mut current));
                }
            } else {
                current.push(line);
            }
        }
        if !current.is_empty() {
            groups.push(current);
        }
        groups
    }

    pub fn single_line(&self) -> Result<&str> {
        let mut lines = self.lines().filter(|line| !line.is_empty());
        let Some(line) = lines.next() else {
            bail!("puzzle input is empty");
        };
        if lines.next().is_some() {
            bail!("puzzle input is expected to be a single line");
        }
        Ok(line)
    }
}

/// `<data_dir>/<year>/input<puzzle>[_example].txt`
pub fn input_path(data_dir: &Path, year: &str, puzzle: &str, example: bool) -> PathBuf {
    let postfix = if example { "_example" } else { "" };
    data_dir.join(year).join(format!("input{puzzle}{postfix}.txt"))
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;

    #[test]
    fn test_groups() {
        let input = PuzzleInput::example(indoc! {"
            a
            b

            c


            d
        "});
        assert_eq!(input.groups(), vec![vec!["a", "b"], vec!["c"], vec!["d"]]);
    }

    #[test]
    fn test_single_line() -> Result<()> {
        assert_eq!(PuzzleInput::real("1-2,3-4\n").single_line()?, "1-2,3-4");
        assert!(PuzzleInput::real("1\n2\n").single_line().is_err());
        assert!(PuzzleInput::real("").single_line().is_err());
        Ok(())
    }

    #[test]
    fn test_input_path() {
        assert_eq!(
            input_path(Path::new("data"), "2024", "7", true),
            PathBuf::from("data/2024/input7_example.txt")
        );
        assert_eq!(
            input_path(Path::new("data"), "vierkant", "sokoban", false),
            PathBuf::from("data/vierkant/inputsokoban.txt")
        );
    }
}
