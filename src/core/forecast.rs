use chrono::{DateTime, Local, TimeDelta, Timelike};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::{
    core::series::Series,
    quantity::{power::Kilowatts, water::CubicMeters},
};

pub const HORIZON_HOURS: usize = 24;

/// Relative spread of the synthetic jitter around the live reading.
const JITTER: f64 = 0.1;

#[derive(Copy, Clone, Debug)]
pub struct ForecastPoint {
    pub solar: Kilowatts,
    pub demand: CubicMeters,
}

/// Synthetic hourly outlook around the live readings.
///
/// Stands in for a real forecasting model: each hour jitters the current
/// reading instead of learning from history. Reproducible for a fixed seed.
pub fn hourly_forecast(
    solar_power: Kilowatts,
    water_demand: CubicMeters,
    start: DateTime<Local>,
    seed: u64,
) -> Series<DateTime<Local>, ForecastPoint> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let start = start
        .with_minute(0)
        .and_then(|start| start.with_second(0))
        .and_then(|start| start.with_nanosecond(0))
        .unwrap_or(start);
    (0..HORIZON_HOURS)
        .map(|hour| {
            let at = start + TimeDelta::hours(hour as i64);
            let solar = Kilowatts(solar_power.0 * (1.0 + rng.gen_range(-JITTER..=JITTER)));
            let demand = CubicMeters(water_demand.0 * (1.0 + rng.gen_range(-JITTER..=JITTER)));
            (at, ForecastPoint { solar, demand })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_the_horizon_hour_by_hour() {
        let series = hourly_forecast(Kilowatts(500.0), CubicMeters(400.0), Local::now(), 42);
        assert_eq!(series.len(), HORIZON_HOURS);
        for ((earlier, _), (later, _)) in series.iter().zip(series.iter().skip(1)) {
            assert_eq!(*later - *earlier, TimeDelta::hours(1));
        }
    }

    #[test]
    fn reproducible_for_a_fixed_seed() {
        let start = Local::now();
        let first = hourly_forecast(Kilowatts(500.0), CubicMeters(400.0), start, 42);
        let second = hourly_forecast(Kilowatts(500.0), CubicMeters(400.0), start, 42);
        for ((_, left), (_, right)) in first.iter().zip(&second) {
            assert_eq!(left.solar, right.solar);
            assert_eq!(left.demand, right.demand);
        }
    }

    #[test]
    fn stays_within_the_jitter_band() {
        let series = hourly_forecast(Kilowatts(500.0), CubicMeters(400.0), Local::now(), 42);
        for (_, point) in &series {
            assert!((point.solar.0 - 500.0).abs() <= 500.0 * JITTER);
            assert!((point.demand.0 - 400.0).abs() <= 400.0 * JITTER);
        }
    }

    #[test]
    fn never_negative_on_a_dark_site() {
        let series = hourly_forecast(Kilowatts::zero(), CubicMeters::zero(), Local::now(), 42);
        for (_, point) in &series {
            assert!(point.solar >= Kilowatts::zero());
            assert!(point.demand >= CubicMeters::zero());
        }
    }
}
