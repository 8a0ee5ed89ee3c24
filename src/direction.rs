use anyhow::{bail, Result};

use crate::grid::Coords;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Clockwise, starting north.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    pub fn delta(self) -> Coords {
        match self {
            Direction::North => Coords::new(0, -1),
            Direction::East => Coords::new(1, 0),
            Direction::South => Coords::new(0, 1),
            Direction::West => Coords::new(-1, 0),
        }
    }

    pub fn next_coords(self, from: Coords) -> Coords {
        from + self.delta()
    }

    pub fn next_coords_by(self, from: Coords, steps: isize) -> Coords {
        from + self.delta() * steps
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    pub fn cw(self) -> Direction {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }

    pub fn ccw(self) -> Direction {
        match self {
            Direction::North => Direction::West,
            Direction::West => Direction::South,
            Direction::South => Direction::East,
            Direction::East => Direction::North,
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::East | Direction::West)
    }

    pub fn is_vertical(self) -> bool {
        !self.is_horizontal()
    }

    pub fn all_but(self) -> impl Iterator<Item = Direction> {
        Self::ALL.into_iter().filter(move |&d| d != self)
    }

    /// Accepts arrows (`^>v<`), compass letters (`NESW`) and `UDLR`.
    pub fn from_char(c: char) -> Result<Direction> {
        Ok(match c {
            '^' | 'N' | 'U' => Direction::North,
            '>' | 'E' | 'R' => Direction::East,
            'v' | 'S' | 'D' => Direction::South,
            '<' | 'W' | 'L' => Direction::West,
            _ => bail!("unknown direction {c:?}"),
        })
    }

    pub fn to_char(self) -> char {
        match self {
            Direction::North => '^',
            Direction::East => '>',
            Direction::South => 'v',
            Direction::West => '<',
        }
    }

    /// Index into [`Direction::ALL`], handy for per-direction arrays.
    pub fn index(self) -> usize {
        self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turns() {
        for direction in Direction::ALL {
            assert_eq!(direction.cw().ccw(), direction);
            assert_eq!(direction.cw().cw(), direction.opposite());
            assert_eq!(direction.all_but().count(), 3);
            assert_eq!(Direction::ALL[direction.index()], direction);
        }
        assert!(Direction::East.is_horizontal());
        assert!(Direction::North.is_vertical());
    }

    #[test]
    fn test_next_coords() -> Result<()> {
        let origin = Coords::new(3, 3);
        assert_eq!(Direction::from_char('^')?.next_coords(origin), Coords::new(3, 2));
        assert_eq!(Direction::from_char('R')?.next_coords_by(origin, 4), Coords::new(7, 3));
        assert!(Direction::from_char('x').is_err());
        Ok(())
    }
}
