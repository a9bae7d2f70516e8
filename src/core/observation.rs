use bon::Builder;

use crate::quantity::{
    length::Meters,
    percent::Percent,
    power::Kilowatts,
    time::Hours,
    water::CubicMeters,
};

/// Live site readings for a single evaluation pass.
#[must_use]
#[derive(Copy, Clone, Debug, Builder)]
pub struct Observation {
    pub solar_power: Kilowatts,
    pub water_demand: CubicMeters,
    pub pump_efficiency: Percent,
    pub head_height: Meters,
    pub sun_hours: Hours,
}
