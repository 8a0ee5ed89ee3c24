use anyhow::{Context, Result};
use rayon::prelude::*;

use crate::{
    grid::{shortest_path_analysis, Coords, Grid},
    tile_enum, Answer, PuzzleInput,
};

tile_enum! {
    enum Tile {
        Track = '.',
        Wall = '#',
        Start = 'S',
        End = 'E',
    }
}

fn count_cheats(input: &PuzzleInput, max_cheat: usize, example_threshold: usize) -> Result<Answer> {
    let threshold = if input.is_example() { example_threshold } else { 100 };
    let grid: Grid<Tile> = Grid::parse(input.lines().filter(|line| !line.is_empty()))?;
    grid.find(&Tile::End).context("race track has no end")?;
    let mut track: Vec<(Coords, usize)> = shortest_path_analysis(&grid, &Tile::Start, &Tile::Wall)
        .into_iter()
        .collect();
    track.sort_unstable_by_key(|&(_, picoseconds)| picoseconds);

    let cheats = track
        .par_iter()
        .enumerate()
        .map(|(i, &(from, from_time))| {
            track[i + 1..]
                .iter()
                .filter(|&&(to, to_time)| {
                    let distance = from.manhattan(to);
                    distance <= max_cheat && to_time >= from_time + distance + threshold
                })
                .count()
        })
        .sum::<usize>();
    Ok(cheats.into())
}

pub fn part_a(input: &PuzzleInput) -> Result<Answer> {
    count_cheats(input, 2, 1)
}

pub fn part_b(input: &PuzzleInput) -> Result<Answer> {
    count_cheats(input, 20, 50)
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        ###############
        #...#...#.....#
        #.#.#.#.#.###.#
        #S#...#.#.#...#
        #######.#.#.###
        #######.#.#...#
        #######.#.###.#
        ###..E#...#...#
        ###.#######.###
        #...###...#...#
        #.#####.#.###.#
        #.#...#.#.#...#
        #.#.#.#.#.#.###
        #...#...#...###
        ###############
    "};

    #[test]
    fn test_day20() -> Result<()> {
        let input = PuzzleInput::example(EXAMPLE);
        assert_eq!(part_a(&input)?, Answer::from(44));
        assert_eq!(part_b(&input)?, Answer::from(285));
        Ok(())
    }
}
