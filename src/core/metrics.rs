use comfy_table::{Cell, CellAlignment, Table, modifiers, presets};
use serde::Serialize;

use crate::{
    cli::FactorArgs,
    core::{
        observation::Observation,
        pump,
        savings::{Savings, SavingsVariant},
        status::PumpStatus,
    },
    quantity::{carbon::Tonnes, cost::Dollars, fuel::Liters, water::CubicMetersPerHour},
};

/// Everything the dashboard derives from one evaluation pass.
#[must_use]
#[derive(Copy, Clone, Debug, Serialize)]
pub struct Metrics {
    pub flow_rate: CubicMetersPerHour,
    pub diesel_saved: Liters,
    pub carbon_saved: Tonnes,
    pub green_assets: Dollars,
    pub status: PumpStatus,
}

impl Metrics {
    pub fn compute(variant: SavingsVariant, observation: &Observation, factors: &FactorArgs) -> Self {
        let flow_rate = pump::flow_rate(
            observation.solar_power,
            observation.pump_efficiency,
            factors.gravity,
            observation.head_height,
        );
        let savings = Savings::compute(variant, observation, factors);
        let status =
            PumpStatus::derive(variant, observation.solar_power, observation.water_demand, factors);
        Self {
            flow_rate,
            diesel_saved: savings.diesel,
            carbon_saved: savings.carbon,
            green_assets: savings.green_assets,
            status,
        }
    }

    pub fn into_table(self) -> Table {
        let mut table = Table::new();
        table
            .load_preset(presets::UTF8_FULL_CONDENSED)
            .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
            .enforce_styling()
            .set_header(vec![
                Cell::from("Flow rate"),
                Cell::from("Diesel saved"),
                Cell::from("CO₂ reduced"),
                Cell::from("Green assets"),
                Cell::from("Status").fg(self.status.color()),
            ])
            .add_row(vec![
                Cell::new(self.flow_rate).set_alignment(CellAlignment::Right),
                Cell::new(self.diesel_saved).set_alignment(CellAlignment::Right),
                Cell::new(self.carbon_saved).set_alignment(CellAlignment::Right),
                Cell::new(self.green_assets).set_alignment(CellAlignment::Right),
                Cell::new(self.status).fg(self.status.color()),
            ]);
        table
    }
}
