use clap::{Parser, Subcommand};
use enumset::EnumSet;

use crate::{
    core::{observation::Observation, savings::SavingsVariant},
    quantity::{
        carbon::KilogramsPerLiter,
        cost::DollarsPerTonne,
        fuel::LitersPerKilowattHour,
        length::{Meters, MetersPerSecondSquared},
        percent::Percent,
        power::Kilowatts,
        time::Hours,
        water::CubicMeters,
    },
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Main command: compute the derived metrics and render the dashboard panels.
    #[clap(name = "report")]
    Report(Box<ReportArgs>),

    /// Render the pump performance curve over a power sweep.
    #[clap(name = "sweep")]
    Sweep(Box<SweepArgs>),
}

#[derive(Parser)]
pub struct ReportArgs {
    #[clap(flatten)]
    pub readings: ReadingArgs,

    #[clap(flatten)]
    pub factors: FactorArgs,

    /// Accounting variant for the diesel and carbon savings.
    #[clap(long, value_enum, default_value = "simple", env = "SAVINGS_VARIANT")]
    pub variant: SavingsVariant,

    /// Panels to render.
    #[clap(
        long = "panels",
        value_delimiter = ',',
        num_args = 1..,
        default_value = "metrics,status,forecast",
    )]
    pub panels: Vec<Panel>,

    /// Output format of the metrics panel.
    #[clap(long, value_enum, default_value = "table")]
    pub format: Format,

    /// Forecast noise seed. Defaults to a clock-derived seed.
    #[clap(long, env = "FORECAST_SEED")]
    pub seed: Option<u64>,
}

impl ReportArgs {
    #[must_use]
    pub fn panels(&self) -> EnumSet<Panel> {
        self.panels.iter().copied().collect()
    }
}

#[derive(Debug, clap::ValueEnum, enumset::EnumSetType)]
pub enum Panel {
    /// Derived savings metrics.
    Metrics,

    /// Pump operational status.
    Status,

    /// 24-hour production and consumption outlook.
    Forecast,
}

#[derive(Copy, Clone, Debug, clap::ValueEnum)]
pub enum Format {
    Table,
    Json,
}

#[derive(Copy, Clone, Parser)]
pub struct ReadingArgs {
    /// Instantaneous solar production in kilowatts.
    #[clap(long = "solar-power", default_value = "500", env = "SOLAR_POWER_KILOWATTS")]
    pub solar_power: Kilowatts,

    /// Requested water volume in cubic meters.
    #[clap(long = "water-demand", default_value = "400", env = "WATER_DEMAND")]
    pub water_demand: CubicMeters,

    /// Pump conversion efficiency in whole percents.
    #[clap(long = "pump-efficiency", default_value = "70", env = "PUMP_EFFICIENCY_PERCENT")]
    pub pump_efficiency: Percent,

    /// Hydraulic lift height in meters.
    #[clap(long = "head-height", default_value = "50", env = "HEAD_HEIGHT_METERS")]
    pub head_height: Meters,

    /// Effective sun hours per day.
    #[clap(long = "sun-hours", default_value = "6", env = "SUN_HOURS")]
    pub sun_hours: Hours,
}

impl ReadingArgs {
    pub fn observation(&self) -> Observation {
        Observation::builder()
            .solar_power(self.solar_power)
            .water_demand(self.water_demand)
            .pump_efficiency(self.pump_efficiency)
            .head_height(self.head_height)
            .sun_hours(self.sun_hours)
            .build()
    }
}

/// Physical and commercial constants of the site.
#[derive(Copy, Clone, Parser)]
pub struct FactorArgs {
    /// Kilograms of CO₂ emitted per liter of diesel burned.
    #[clap(long = "diesel-factor", default_value = "2.68", env = "DIESEL_FACTOR")]
    pub diesel_factor: KilogramsPerLiter,

    /// Carbon price per metric ton of avoided emissions.
    #[clap(long = "carbon-price", default_value = "20", env = "CARBON_PRICE")]
    pub carbon_price: DollarsPerTonne,

    /// Diesel liters displaced per kilowatt-hour of solar pumping.
    #[clap(long = "liters-per-kwh", default_value = "0.25", env = "LITERS_PER_KWH")]
    pub liters_per_kwh: LitersPerKilowattHour,

    /// Gravitational acceleration.
    #[clap(long, default_value = "9.81", env = "GRAVITY")]
    pub gravity: MetersPerSecondSquared,

    /// Demand share above which the site runs fully on solar.
    #[clap(long = "full-solar-share", default_value = "0.8", env = "FULL_SOLAR_SHARE")]
    pub full_solar_share: f64,

    /// Minimal solar power that keeps the pump out of stand-by.
    #[clap(long = "standby-threshold", default_value = "2", env = "STANDBY_THRESHOLD_KILOWATTS")]
    pub standby_threshold: Kilowatts,
}

#[derive(Parser)]
pub struct SweepArgs {
    #[clap(flatten)]
    pub readings: ReadingArgs,

    #[clap(flatten)]
    pub factors: FactorArgs,

    /// Upper bound of the power sweep.
    #[clap(long = "max-power", default_value = "50", env = "MAX_POWER_KILOWATTS")]
    pub max_power: Kilowatts,

    /// Sweep step.
    #[clap(long, default_value = "2.5")]
    pub step: Kilowatts,
}
