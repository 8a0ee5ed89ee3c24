use crate::{error::AdventError, registry::Registry};

mod day24;
mod day25;

const YEAR: &str = "2021";

pub fn register(registry: &mut Registry) -> Result<(), AdventError> {
    registry.register_day(YEAR, "24", day24::part_a, day24::part_b)?;
    registry.register_day(YEAR, "25", day25::part_a, day25::part_b)?;
    Ok(())
}
