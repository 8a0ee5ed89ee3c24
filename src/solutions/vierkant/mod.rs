use crate::{error::AdventError, registry::Registry};

mod sokoban;

pub fn register(registry: &mut Registry) -> Result<(), AdventError> {
    registry.register("vierkant", "sokoban", "a", sokoban::part_a)?;
    registry.register("vierkant", "sokoban", "b", sokoban::part_b)
}
