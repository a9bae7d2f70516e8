use crate::{
    cli::FactorArgs,
    core::observation::Observation,
    quantity::{carbon::Tonnes, cost::Dollars, fuel::Liters},
};

/// Site accounting rule of the simple variant: five units of the solar
/// reading displace one liter of diesel.
const READING_UNITS_PER_LITER: f64 = 5.0;

/// The two accounting rules deployed in the field. They disagree on how a
/// solar reading translates into displaced diesel, so the caller picks one
/// explicitly.
#[derive(Copy, Clone, Debug, Eq, PartialEq, clap::ValueEnum, serde::Serialize)]
pub enum SavingsVariant {
    /// Flat rule applied straight to the solar reading.
    Simple,

    /// Integrate pump power over the effective sun hours, then convert via
    /// the per-kWh displacement factor.
    Engineering,
}

/// Avoided diesel and its downstream accounting.
#[must_use]
#[derive(Copy, Clone, Debug)]
pub struct Savings {
    pub diesel: Liters,
    pub carbon: Tonnes,
    pub green_assets: Dollars,
}

impl Savings {
    pub fn compute(variant: SavingsVariant, observation: &Observation, factors: &FactorArgs) -> Self {
        let diesel = match variant {
            SavingsVariant::Simple => Liters(observation.solar_power.0 / READING_UNITS_PER_LITER),
            SavingsVariant::Engineering => {
                observation.solar_power * observation.sun_hours * factors.liters_per_kwh
            }
        };
        let carbon = (diesel * factors.diesel_factor).to_tonnes();
        let green_assets = carbon * factors.carbon_price;
        Self { diesel, carbon, green_assets }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use itertools::Itertools;

    use super::*;
    use crate::{
        cli::tests::factor_args,
        quantity::{length::Meters, percent::Percent, power::Kilowatts, time::Hours, water::CubicMeters},
    };

    fn observation(solar_power: Kilowatts) -> Observation {
        Observation::builder()
            .solar_power(solar_power)
            .water_demand(CubicMeters(400.0))
            .pump_efficiency(Percent::from(70))
            .head_height(Meters(50.0))
            .sun_hours(Hours(6.0))
            .build()
    }

    #[test]
    fn simple_variant_example() {
        let savings =
            Savings::compute(SavingsVariant::Simple, &observation(Kilowatts(500.0)), &factor_args());
        assert_abs_diff_eq!(savings.diesel.0, 100.0, epsilon = 1e-9);
        assert_abs_diff_eq!(savings.carbon.0, 0.268, epsilon = 1e-9);
        assert_abs_diff_eq!(savings.green_assets.0, 5.36, epsilon = 1e-9);
    }

    #[test]
    fn engineering_variant_example() {
        let savings = Savings::compute(
            SavingsVariant::Engineering,
            &observation(Kilowatts(15.0)),
            &factor_args(),
        );
        assert_abs_diff_eq!(savings.diesel.0, 22.5, epsilon = 1e-9);
        assert_abs_diff_eq!(savings.carbon.0, 0.0603, epsilon = 1e-9);
        assert_abs_diff_eq!(savings.green_assets.0, 1.206, epsilon = 1e-9);
    }

    #[test]
    fn monotone_in_solar_power() {
        for variant in [SavingsVariant::Simple, SavingsVariant::Engineering] {
            let runs = (0..=10)
                .map(|step| {
                    Savings::compute(variant, &observation(Kilowatts(100.0 * f64::from(step))), &factor_args())
                })
                .collect_vec();
            assert!(runs.iter().tuple_windows().all(|(lower, upper)| {
                lower.diesel <= upper.diesel
                    && lower.carbon <= upper.carbon
                    && lower.green_assets <= upper.green_assets
            }));
        }
    }
}
