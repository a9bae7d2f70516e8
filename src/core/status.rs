use std::fmt::{Display, Formatter};

use comfy_table::Color;

use crate::{
    cli::FactorArgs,
    core::savings::SavingsVariant,
    quantity::{power::Kilowatts, water::CubicMeters},
};

#[derive(Debug, Copy, Clone, Eq, PartialEq, serde::Serialize)]
pub enum PumpStatus {
    /// Solar covers the configured share of the demand; the grid stays idle.
    FullSolar,

    /// Solar and grid share the load.
    Hybrid,

    /// Enough sun to keep the pump spinning.
    Active,

    /// Not enough sun, the pump is parked.
    Standby,
}

impl PumpStatus {
    /// Threshold comparison against the live readings. Each accounting
    /// variant ships its own pair of states.
    pub fn derive(
        variant: SavingsVariant,
        power: Kilowatts,
        demand: CubicMeters,
        factors: &FactorArgs,
    ) -> Self {
        match variant {
            SavingsVariant::Simple => {
                if power.0 > demand.0 * factors.full_solar_share {
                    Self::FullSolar
                } else {
                    Self::Hybrid
                }
            }
            SavingsVariant::Engineering => {
                if power > factors.standby_threshold { Self::Active } else { Self::Standby }
            }
        }
    }

    pub const fn color(self) -> Color {
        match self {
            Self::FullSolar => Color::Green,
            Self::Hybrid => Color::DarkYellow,
            Self::Active => Color::Cyan,
            Self::Standby => Color::Magenta,
        }
    }
}

impl Display for PumpStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FullSolar => write!(f, "Operating 100% on solar"),
            Self::Hybrid => write!(f, "Hybrid mode (solar + grid)"),
            Self::Active => write!(f, "Active"),
            Self::Standby => write!(f, "Stand-by"),
        }
    }
}
