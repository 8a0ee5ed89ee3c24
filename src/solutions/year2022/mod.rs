use crate::{error::AdventError, registry::Registry};

mod day11;
mod day25;

const YEAR: &str = "2022";

pub fn register(registry: &mut Registry) -> Result<(), AdventError> {
    registry.register_day(YEAR, "11", day11::part_a, day11::part_b)?;
    registry.register_day(YEAR, "25", day25::part_a, day25::part_b)?;
    Ok(())
}
