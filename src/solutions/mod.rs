use crate::{error::AdventError, registry::Registry};

pub mod vierkant;
pub mod year2021;
pub mod year2022;
pub mod year2023;
pub mod year2024;
pub mod year2025;

pub fn register_all(registry: &mut Registry) -> Result<(), AdventError> {
    year2021::register(registry)?;
    year2022::register(registry)?;
    year2023::register(registry)?;
    year2024::register(registry)?;
    year2025::register(registry)?;
    vierkant::register(registry)
}
