use crate::{error::AdventError, registry::Registry};

mod day1;
mod day10;
mod day11;
mod day2;
mod day3;
mod day4;
mod day5;
mod day6;
mod day7;
mod day8;
mod day9;

const YEAR: &str = "2025";

pub fn register(registry: &mut Registry) -> Result<(), AdventError> {
    registry.register_day(YEAR, "1", day1::part_a, day1::part_b)?;
    registry.register_day(YEAR, "2", day2::part_a, day2::part_b)?;
    registry.register_day(YEAR, "3", day3::part_a, day3::part_b)?;
    registry.register_day(YEAR, "4", day4::part_a, day4::part_b)?;
    registry.register_day(YEAR, "5", day5::part_a, day5::part_b)?;
    registry.register_day(YEAR, "6", day6::part_a, day6::part_b)?;
    registry.register_day(YEAR, "7", day7::part_a, day7::part_b)?;
    registry.register_day(YEAR, "8", day8::part_a, day8::part_b)?;
    registry.register_day(YEAR, "9", day9::part_a, day9::part_b)?;
    registry.register_day(YEAR, "10", day10::part_a, day10::part_b)?;
    registry.register_day(YEAR, "11", day11::part_a, day11::part_b)?;
    Ok(())
}
