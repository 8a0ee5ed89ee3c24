use crate::{error::AdventError, registry::Registry};

mod day1;
mod day10;
mod day11;
mod day12;
mod day13;
mod day14;
mod day15;
mod day16;
mod day17;
mod day18;
mod day19;
mod day2;
mod day20;
mod day21;
mod day22;
mod day23;
mod day24;
mod day25;
mod day3;
mod day4;
mod day5;
mod day6;
mod day7;
mod day8;
mod day9;

const YEAR: &str = "2024";

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
    registry.register_day(YEAR, "12", day12::part_a, day12::part_b)?;
    registry.register_day(YEAR, "13", day13::part_a, day13::part_b)?;
    registry.register_day(YEAR, "14", day14::part_a, day14::part_b)?;
    registry.register_day(YEAR, "15", day15::part_a, day15::part_b)?;
    registry.register_day(YEAR, "16", day16::part_a, day16::part_b)?;
    registry.register_day(YEAR, "17", day17::part_a, day17::part_b)?;
    registry.register_day(YEAR, "18", day18::part_a, day18::part_b)?;
    registry.register_day(YEAR, "19", day19::part_a, day19::part_b)?;
    registry.register_day(YEAR, "20", day20::part_a, day20::part_b)?;
    registry.register_day(YEAR, "21", day21::part_a, day21::part_b)?;
    registry.register_day(YEAR, "22", day22::part_a, day22::part_b)?;
    registry.register_day(YEAR, "23", day23::part_a, day23::part_b)?;
    registry.register_day(YEAR, "24", day24::part_a, day24::part_b)?;
    registry.register_day(YEAR, "25", day25::part_a, day25::part_b)?;
    Ok(())
}
