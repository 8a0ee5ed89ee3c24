use std::fmt::{self, Display};

use anyhow::Result;
use indexmap::IndexMap;

use crate::{answer::Answer, error::AdventError, input::PuzzleInput, solutions};

pub type Solver = fn(&PuzzleInput) -> Result<Answer>;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SolverKey {
    pub year: String,
    pub puzzle: String,
    pub variation: String,
}

impl SolverKey {
    pub fn new(
        year: impl Into<String>,
        puzzle: impl Into<String>,
        variation: impl Into<String>,
    ) -> Self {
        Self {
            year: year.into(),
            puzzle: puzzle.into(),
            variation: variation.into(),
        }
    }
}

impl Display for SolverKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.year, self.puzzle, self.variation)
    }
}

/// Lookup table from (year, puzzle, variation) to solver. Keeps registration order so that
/// running a whole year goes through the puzzles in the order they were registered.
#[derive(Default)]
pub struct Registry {
    solvers: IndexMap<SolverKey, Solver>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_all_solvers() -> Result<Self, AdventError> {
        let mut registry = Self::new();
        solutions::register_all(&mut registry)?;
        Ok(registry)
    }

    pub fn register(
        &mut self,
        year: &str,
        puzzle: &str,
        variation: &str,
        solver: Solver,
    ) -> Result<(), AdventError> {
        let key = SolverKey::new(year, puzzle, variation);
        if self.solvers.contains_key(&key) {
            return Err(AdventError::DuplicateSolver {
                year: key.year,
                puzzle: key.puzzle,
                variation: key.variation,
            });
        }
        self.solvers.insert(key, solver);
        Ok(())
    }

    /// Registers the usual two parts of a puzzle as variations `a` and `b`.
    pub fn register_day(
        &mut self,
        year: &str,
        puzzle: &str,
        a: Solver,
        b: Solver,
    ) -> Result<(), AdventError> {
        self.register(year, puzzle, "a", a)?;
        self.register(year, puzzle, "b", b)
    }

    pub fn get(&self, year: &str, puzzle: &str, variation: &str) -> Option<Solver> {
        self.solvers
            .get(&SolverKey::new(year, puzzle, variation))
            .copied()
    }

    pub fn solve(&self, key: &SolverKey, input: &PuzzleInput) -> Result<Answer> {
        let solver = self
            .solvers
            .get(key)
            .ok_or_else(|| AdventError::NotImplemented {
                year: key.year.clone(),
                puzzle: key.puzzle.clone(),
                variation: key.variation.clone(),
            })?;
        solver(input)
    }

    pub fn keys(&self) -> impl Iterator<Item = &SolverKey> {
        self.solvers.keys()
    }

    pub fn len(&self) -> usize {
        self.solvers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solvers.is_empty()
    }

    /// Distinct puzzles of a year, in registration order.
    pub fn puzzles(&self, year: &str) -> Vec<String> {
        let mut puzzles: Vec<String> = Vec::new();
        for key in self.solvers.keys().filter(|key| key.year == year) {
            if !puzzles.contains(&key.puzzle) {
                puzzles.push(key.puzzle.clone());
            }
        }
        puzzles
    }

    /// Registered variations of one puzzle, in registration order.
    pub fn variations(&self, year: &str, puzzle: &str) -> Vec<String> {
        self.solvers
            .keys()
            .filter(|key| key.year == year && key.puzzle == puzzle)
            .map(|key| key.variation.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forty_two(_: &PuzzleInput) -> Result<Answer> {
        Ok(Answer::from(42))
    }

    fn line_count(input: &PuzzleInput) -> Result<Answer> {
        Ok(Answer::from(input.lines().count()))
    }

    #[test]
    fn test_register_and_solve() -> Result<()> {
        let mut registry = Registry::new();
        registry.register_day("2099", "1", forty_two, line_count)?;
        let input = PuzzleInput::example("x\ny\n");
        assert_eq!(registry.solve(&SolverKey::new("2099", "1", "a"), &input)?, Answer::from(42));
        assert_eq!(registry.solve(&SolverKey::new("2099", "1", "b"), &input)?, Answer::from(2));
        assert!(registry.get("2099", "1", "c").is_none());
        assert_eq!(registry.variations("2099", "1"), vec!["a", "b"]);
        Ok(())
    }

    #[test]
    fn test_duplicate_registration() {
        let mut registry = Registry::new();
        assert!(registry.register("2099", "1", "a", forty_two).is_ok());
        assert!(matches!(
            registry.register("2099", "1", "a", line_count),
            Err(AdventError::DuplicateSolver { .. })
        ));
    }

    #[test]
    fn test_not_implemented() {
        let registry = Registry::new();
        let err = registry
            .solve(&SolverKey::new("1999", "1", "a"), &PuzzleInput::real(""))
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AdventError>(),
            Some(AdventError::NotImplemented { .. })
        ));
    }

    #[test]
    fn test_all_solvers_register_without_duplicates() -> Result<()> {
        let registry = Registry::with_all_solvers()?;
        assert_eq!(registry.puzzles("2024").len(), 25);
        assert_eq!(registry.puzzles("2023").len(), 25);
        assert_eq!(registry.puzzles("2025").len(), 11);
        assert_eq!(registry.puzzles("2021"), vec!["24", "25"]);
        assert_eq!(registry.puzzles("2022"), vec!["11", "25"]);
        assert_eq!(registry.puzzles("vierkant"), vec!["sokoban"]);
        assert_eq!(registry.len(), 2 * (25 + 25 + 11 + 2 + 2 + 1));
        Ok(())
    }
}
