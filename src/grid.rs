use std::{
    collections::VecDeque,
    fmt::{self, Display},
    ops::{Add, Index, IndexMut, Mul, Sub},
};

use anyhow::{bail, Result};
use rustc_hash::FxHashMap;

use crate::{direction::Direction, error::AdventError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Coords {
    pub x: isize,
    pub y: isize,
}

impl Coords {
    pub const fn new(x: isize, y: isize) -> Self {
        Self { x, y }
    }

    pub fn step(self, direction: Direction) -> Self {
        direction.next_coords(self)
    }

    pub fn neighbours(self) -> impl Iterator<Item = Coords> {
        Direction::ALL.into_iter().map(move |d| d.next_coords(self))
    }

    /// The eight surrounding coordinates, diagonals included.
    pub fn neighbours8(self) -> impl Iterator<Item = Coords> {
        (-1..=1)
            .flat_map(|dy| (-1..=1).map(move |dx| (dx, dy)))
            .filter(|&(dx, dy)| dx != 0 || dy != 0)
            .map(move |(dx, dy)| Coords::new(self.x + dx, self.y + dy))
    }

    pub fn manhattan(self, other: Coords) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl Add for Coords {
    type Output = Coords;

    fn add(self, rhs: Coords) -> Coords {
        Coords::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Coords {
    type Output = Coords;

    fn sub(self, rhs: Coords) -> Coords {
        Coords::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<isize> for Coords {
    type Output = Coords;

    fn mul(self, rhs: isize) -> Coords {
        Coords::new(self.x * rhs, self.y * rhs)
    }
}

impl Display for Coords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// A tile type that maps one-to-one onto characters of the puzzle input.
pub trait TileChar: Sized + Copy {
    fn from_char(c: char) -> Result<Self>;
    fn to_char(self) -> char;
}

/// Declares a `Copy` enum whose variants map onto input characters and implements
/// [`TileChar`](crate::grid::TileChar) for it.
#[macro_export]
macro_rules! tile_enum {
    ($(#[$meta:meta])* $vis:vis enum $name:ident { $($variant:ident = $ch:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($variant),+
        }

        impl $crate::grid::TileChar for $name {
            fn from_char(c: char) -> ::anyhow::Result<Self> {
                match c {
                    $($ch => Ok(Self::$variant),)+
                    other => ::anyhow::bail!("unknown {} tile {:?}", stringify!($name), other),
                }
            }

            fn to_char(self) -> char {
                match self {
                    $(Self::$variant => $ch),+
                }
            }
        }
    };
}

/// Bounds-checked, row-major 2D array.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    tiles: Vec<T>,
    width: usize,
    height: usize,
}

impl<T> Grid<T> {
    pub fn from_size(width: usize, height: usize, tile: T) -> Self
    where
        T: Clone,
    {
        Self {
            tiles: vec![tile; width * height],
            width,
            height,
        }
    }

    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let mut tiles = Vec::with_capacity(width * height);
        for (y, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                bail!("row {y} has length {} where {width} was expected", row.len());
            }
            tiles.extend(row);
        }
        Ok(Self { tiles, width, height })
    }

    pub fn from_lines<'a, I, F>(lines: I, mut converter: F) -> Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
        F: FnMut(char) -> Result<T>,
    {
        let rows = lines
            .into_iter()
            .map(|line| line.chars().map(&mut converter).collect::<Result<Vec<_>>>())
            .collect::<Result<Vec<_>>>()?;
        Self::from_rows(rows)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn within_bounds(&self, c: Coords) -> bool {
        c.x >= 0 && c.y >= 0 && (c.x as usize) < self.width && (c.y as usize) < self.height
    }

    fn offset(&self, c: Coords) -> Option<usize> {
        self.within_bounds(c)
            .then(|| c.y as usize * self.width + c.x as usize)
    }

    pub fn get(&self, c: Coords) -> Option<&T> {
        self.offset(c).map(|i| &self.tiles[i])
    }

    pub fn get_mut(&mut self, c: Coords) -> Option<&mut T> {
        self.offset(c).map(|i| &mut self.tiles[i])
    }

    pub fn value_at_or(&self, c: Coords, default: T) -> T
    where
        T: Copy,
    {
        self.get(c).copied().unwrap_or(default)
    }

    pub fn set(&mut self, c: Coords, value: T) -> Result<(), AdventError> {
        let (width, height) = (self.width, self.height);
        match self.get_mut(c) {
            Some(tile) => {
                *tile = value;
                Ok(())
            }
            None => Err(AdventError::OutOfBounds {
                x: c.x,
                y: c.y,
                width,
                height,
            }),
        }
    }

    pub fn coords(&self) -> impl Iterator<Item = Coords> {
        let width = self.width;
        (0..self.height)
            .flat_map(move |y| (0..width).map(move |x| Coords::new(x as isize, y as isize)))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Coords, &T)> {
        self.coords().zip(self.tiles.iter())
    }

    pub fn tiles(&self) -> impl Iterator<Item = &T> {
        self.tiles.iter()
    }

    pub fn row(&self, y: usize) -> &[T] {
        &self.tiles[y * self.width..(y + 1) * self.width]
    }

    pub fn all_coords_for<'a>(&'a self, values: &'a [T]) -> impl Iterator<Item = Coords> + 'a
    where
        T: PartialEq,
    {
        self.iter()
            .filter(move |(_, tile)| values.contains(tile))
            .map(|(c, _)| c)
    }

    pub fn find(&self, value: &T) -> Option<Coords>
    where
        T: PartialEq,
    {
        self.iter().find(|(_, tile)| *tile == value).map(|(c, _)| c)
    }

    pub fn render(&self, mut to_char: impl FnMut(Coords, &T) -> char) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for (c, tile) in self.iter() {
            out.push(to_char(c, tile));
            if c.x as usize == self.width - 1 {
                out.push('\n');
            }
        }
        out
    }
}

impl<T: TileChar> Grid<T> {
    pub fn parse<'a>(lines: impl IntoIterator<Item = &'a str>) -> Result<Self> {
        Self::from_lines(lines, T::from_char)
    }
}

impl Grid<u8> {
    /// Raw bytes of each line, without any conversion.
    pub fn from_bytes<'a>(lines: impl IntoIterator<Item = &'a str>) -> Result<Self> {
        Self::from_rows(lines.into_iter().map(|line| line.as_bytes().to_vec()).collect())
    }
}

impl<T: TileChar> Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(|_, tile| tile.to_char()))
    }
}

impl<T> Index<Coords> for Grid<T> {
    type Output = T;

    fn index(&self, c: Coords) -> &T {
        match self.get(c) {
            Some(tile) => tile,
            None => panic!("{c} is outside of a {}x{} grid", self.width, self.height),
        }
    }
}

impl<T> IndexMut<Coords> for Grid<T> {
    fn index_mut(&mut self, c: Coords) -> &mut T {
        let (width, height) = (self.width, self.height);
        match self.get_mut(c) {
            Some(tile) => tile,
            None => panic!("{c} is outside of a {width}x{height} grid"),
        }
    }
}

/// Breadth-first distance from every `start_tile` to each reachable tile that is not a
/// `wall_tile`. Anything outside the grid counts as wall.
pub fn shortest_path_analysis<T: PartialEq>(
    grid: &Grid<T>,
    start_tile: &T,
    wall_tile: &T,
) -> FxHashMap<Coords, usize> {
    let mut visited: FxHashMap<Coords, usize> = FxHashMap::default();
    let mut boundary = VecDeque::new();
    for (c, tile) in grid.iter() {
        if tile == start_tile {
            visited.insert(c, 0);
            boundary.push_back(c);
        }
    }
    while let Some(c) = boundary.pop_front() {
        let distance = visited[&c];
        for next in c.neighbours() {
            if grid.get(next).is_some_and(|tile| tile != wall_tile)
                && !visited.contains_key(&next)
            {
                visited.insert(next, distance + 1);
                boundary.push_back(next);
            }
        }
    }
    visited
}
