use itertools::iterate;

use crate::{
    core::{pump, series::Series},
    prelude::*,
    quantity::{
        length::{Meters, MetersPerSecondSquared},
        percent::Percent,
        power::Kilowatts,
        water::CubicMetersPerHour,
    },
};

/// Pump performance curve: delivered flow across the electrical input range.
pub fn performance_curve(
    efficiency: Percent,
    gravity: MetersPerSecondSquared,
    head: Meters,
    max_power: Kilowatts,
    step: Kilowatts,
) -> Result<Series<Kilowatts, CubicMetersPerHour>> {
    ensure!(step > Kilowatts::zero(), "sweep step must be positive, got {step}");
    // Powers derive from the counter, not from a running sum, so rounding
    // does not drift across the sweep and the endpoint survives.
    Ok(iterate(0_u32, |index| index + 1)
        .map(|index| Kilowatts(step.0 * f64::from(index)))
        .take_while(|power| *power <= max_power)
        .map(|power| (power, pump::flow_rate(power, efficiency, gravity, head)))
        .collect())
}
