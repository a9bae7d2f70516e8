mod cli;
mod core;
mod prelude;
mod quantity;
mod tables;

use chrono::Local;
use clap::{Parser, crate_version};

use crate::{
    cli::{Args, Command, Format, Panel, ReportArgs, SweepArgs},
    core::{curve::performance_curve, forecast::hourly_forecast, metrics::Metrics},
    prelude::*,
    tables::{build_curve_table, build_forecast_table, build_status_table},
};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().init();
    info!(version = crate_version!(), "starting…");

    match Args::parse().command {
        Command::Report(args) => report(&args)?,
        Command::Sweep(args) => sweep(&args)?,
    }

    info!("done!");
    Ok(())
}

fn report(args: &ReportArgs) -> Result {
    let observation = args.readings.observation();
    let metrics = Metrics::compute(args.variant, &observation, &args.factors);
    info!(
        flow_rate = %metrics.flow_rate,
        diesel_saved = %metrics.diesel_saved,
        carbon_saved = %metrics.carbon_saved,
        green_assets = %metrics.green_assets,
        status = %metrics.status,
        "computed",
    );

    let panels = args.panels();
    if panels.contains(Panel::Metrics) {
        match args.format {
            Format::Table => println!("{}", metrics.into_table()),
            Format::Json => println!("{}", serde_json::to_string_pretty(&metrics)?),
        }
    }
    if panels.contains(Panel::Status) {
        println!("{}", build_status_table(metrics.status));
    }
    if panels.contains(Panel::Forecast) {
        let seed = args.seed.unwrap_or_else(|| Local::now().timestamp().unsigned_abs());
        let series = hourly_forecast(
            observation.solar_power,
            observation.water_demand,
            Local::now(),
            seed,
        );
        info!(seed, n_points = series.len(), "forecasted");
        println!("{}", build_forecast_table(&series));
    }

    Ok(())
}

fn sweep(args: &SweepArgs) -> Result {
    let curve = performance_curve(
        args.readings.pump_efficiency,
        args.factors.gravity,
        args.readings.head_height,
        args.max_power,
        args.step,
    )?;
    info!(n_points = curve.len(), "swept");
    println!("{}", build_curve_table(&curve));
    Ok(())
}
