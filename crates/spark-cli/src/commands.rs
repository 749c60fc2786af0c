//! Command execution

use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use spark_app::app::{evaluate_trip, LogTripRequest, TripService};
use spark_app::config::Config;
use spark_app::repository::open_trip_log;
use spark_domain::model::{
    BodyClass, EngineClass, FuelClass, IncentiveGoal, ShoppingSession, TripInput,
    VehicleConfiguration,
};
use spark_domain::service::{estimate_fuel_economy, tabulated_mpg};
use spark_types::{Error, OutputFormat, Result, Tier};

use crate::cli::{Cli, Commands, TripArgs, VehicleArgs};
use crate::output;

pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let output_format = cli.format.unwrap_or(config.output_format);
    let today = Local::now().date_naive();
    log::debug!(
        "config loaded: {} tier, ${:.2}/gal, {}",
        config.tier,
        config.fuel_price_per_gallon,
        config.vehicle
    );

    match cli.command {
        Commands::Rate { trip, vehicle } => {
            cmd_rate(&config, output_format, &trip, &vehicle)
        }
        Commands::Mpg { body, engine, fuel } => cmd_mpg(output_format, body, engine, fuel),
        Commands::Log {
            trip,
            vehicle,
            date,
            notes,
            shop_start,
            shop_end,
            shop_items,
            incentive_goal,
            incentive_done,
            incentive_bonus,
        } => {
            let input = trip_input(&config, &trip);
            let vehicle = resolve_vehicle(config.vehicle, &vehicle)?;
            let mut request = LogTripRequest::new(date.unwrap_or(today), input, vehicle);

            if let (Some(start), Some(end)) = (shop_start, shop_end) {
                request = request.with_shopping(ShoppingSession {
                    start,
                    end,
                    items: shop_items,
                });
            }
            if let (Some(goal_trips), Some(bonus)) = (incentive_goal, incentive_bonus) {
                request = request.with_incentive(IncentiveGoal {
                    goal_trips,
                    completed_trips: incentive_done,
                    bonus,
                });
            }
            if let Some(notes) = notes {
                request = request.with_notes(notes);
            }

            cmd_log(&config, output_format, request, today)
        }
        Commands::History { limit } => cmd_history(&config, output_format, limit, today),
        Commands::Summary => cmd_summary(&config, output_format, today),
        Commands::Export { output } => cmd_export(&config, output, today),
        Commands::Remove { id } => cmd_remove(&config, &id),
        Commands::Config {
            show,
            set_tier,
            set_fuel_price,
            set_body,
            set_engine,
            set_fuel,
            set_output,
            set_data_dir,
            reset,
        } => cmd_config(ConfigUpdate {
            show,
            set_tier,
            set_fuel_price,
            vehicle: VehicleArgs {
                body: set_body,
                engine: set_engine,
                fuel: set_fuel,
            },
            set_output,
            set_data_dir,
            reset,
        }),
    }
}

fn trip_input(config: &Config, trip: &TripArgs) -> TripInput {
    TripInput::new(trip.pay, trip.miles, trip.minutes, trip.stops)
        .with_fuel_price(trip.fuel_price.unwrap_or(config.fuel_price_per_gallon))
}

/// Merge vehicle flags over a base vehicle
///
/// Switching a hybrid or electric base to a gas body without naming an
/// engine falls back to V6.
fn resolve_vehicle(
    base: VehicleConfiguration,
    args: &VehicleArgs,
) -> Result<VehicleConfiguration> {
    if args.body.is_none() && args.engine.is_none() && args.fuel.is_none() {
        return Ok(base);
    }

    let body = args.body.unwrap_or(base.body());
    let engine = args.engine.unwrap_or(if base.engine().is_gas() {
        base.engine()
    } else {
        EngineClass::V6
    });
    let fuel = args.fuel.unwrap_or(FuelClass::Gas);

    VehicleConfiguration::new(body, engine, fuel)
}

fn cmd_rate(
    config: &Config,
    output_format: OutputFormat,
    trip: &TripArgs,
    vehicle: &VehicleArgs,
) -> Result<()> {
    let input = trip_input(config, trip);
    let vehicle = resolve_vehicle(config.vehicle, vehicle)?;
    let evaluation = evaluate_trip(&input, &vehicle)?;
    output::output_evaluation(output_format, &evaluation)
}

fn cmd_mpg(
    output_format: OutputFormat,
    body: BodyClass,
    engine: EngineClass,
    fuel: FuelClass,
) -> Result<()> {
    let mpg = estimate_fuel_economy(body, engine, fuel);
    let tabulated = tabulated_mpg(body, engine, fuel).is_some();
    output::output_mpg(output_format, body, engine, fuel, mpg, tabulated)
}

fn cmd_log(
    config: &Config,
    output_format: OutputFormat,
    request: LogTripRequest,
    today: NaiveDate,
) -> Result<()> {
    let service = TripService::new(open_trip_log(config)?, config.tier);
    let record = service.log_trip(request)?;
    output::output_record(output_format, &record)?;

    if output_format == OutputFormat::Table {
        if let Some(remaining) = service.remaining_this_week(today)? {
            println!(
                "\n{} trips left this week on the {} plan",
                remaining, config.tier
            );
        }
    }
    Ok(())
}

fn cmd_history(
    config: &Config,
    output_format: OutputFormat,
    limit: usize,
    today: NaiveDate,
) -> Result<()> {
    let service = TripService::new(open_trip_log(config)?, config.tier);
    let trips = service.history(today)?;
    output::output_history(output_format, &trips, limit, config.tier.retention_days())
}

fn cmd_summary(config: &Config, output_format: OutputFormat, today: NaiveDate) -> Result<()> {
    let service = TripService::new(open_trip_log(config)?, config.tier);
    let summary = service.summary(today)?;
    output::output_summary(output_format, &summary, service.remaining_this_week(today)?)
}

fn cmd_export(config: &Config, output: PathBuf, today: NaiveDate) -> Result<()> {
    let service = TripService::new(open_trip_log(config)?, config.tier);
    let count = service.export_report(&output, today)?;
    println!("Exported {} trips to {}", count, output.display());
    Ok(())
}

fn cmd_remove(config: &Config, id: &str) -> Result<()> {
    let service = TripService::new(open_trip_log(config)?, config.tier);
    let full_id = service.resolve_id(id)?;
    service.remove_trip(&full_id)?;
    println!("Removed trip {}", full_id);
    Ok(())
}

struct ConfigUpdate {
    show: bool,
    set_tier: Option<Tier>,
    set_fuel_price: Option<f64>,
    vehicle: VehicleArgs,
    set_output: Option<OutputFormat>,
    set_data_dir: Option<PathBuf>,
    reset: bool,
}

fn cmd_config(update: ConfigUpdate) -> Result<()> {
    if update.reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(tier) = update.set_tier {
        config.tier = tier;
        modified = true;
    }

    if let Some(price) = update.set_fuel_price {
        if !price.is_finite() || price < 0.0 {
            return Err(Error::InvalidInput(format!(
                "fuel price must be a non-negative amount, got {}",
                price
            )));
        }
        config.fuel_price_per_gallon = price;
        modified = true;
    }

    let vehicle = &update.vehicle;
    if vehicle.body.is_some() || vehicle.engine.is_some() || vehicle.fuel.is_some() {
        config.vehicle = resolve_vehicle(config.vehicle, &update.vehicle)?;
        modified = true;
    }

    if let Some(output_format) = update.set_output {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(dir) = update.set_data_dir {
        config.data_dir = Some(dir);
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if update.show || !modified {
        println!("{}", config);
    }

    Ok(())
}
