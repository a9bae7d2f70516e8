use chrono::{DateTime, Local};
use comfy_table::{Cell, CellAlignment, Table, modifiers, presets};

use crate::{
    core::{forecast::ForecastPoint, series::Series, status::PumpStatus},
    quantity::{power::Kilowatts, water::CubicMetersPerHour},
};

#[must_use]
pub fn build_forecast_table(series: &Series<DateTime<Local>, ForecastPoint>) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table.set_header(vec!["Hour", "Solar forecast", "Demand forecast"]);
    for (at, point) in series {
        table.add_row(vec![
            Cell::new(at.format("%H:%M")),
            Cell::new(point.solar).set_alignment(CellAlignment::Right),
            Cell::new(point.demand).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

#[must_use]
pub fn build_curve_table(curve: &Series<Kilowatts, CubicMetersPerHour>) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table.set_header(vec!["Power", "Flow rate"]);
    for (power, flow_rate) in curve {
        table.add_row(vec![
            Cell::new(power).set_alignment(CellAlignment::Right),
            Cell::new(flow_rate).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

#[must_use]
pub fn build_status_table(status: PumpStatus) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table
        .set_header(vec![Cell::from("Pump operational status").fg(status.color())])
        .add_row(vec![Cell::new(status).fg(status.color())]);
    table
}
