//! CLI definition using clap

use chrono::{NaiveDate, NaiveTime};
use clap::{Args, Parser, Subcommand};
use spark_domain::model::{BodyClass, EngineClass, FuelClass};
use spark_types::{OutputFormat, Tier};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "spark-tracker")]
#[command(author = "SavvyTech Automations")]
#[command(version)]
#[command(about = "Earnings tracker and deal rater for gig delivery drivers")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

/// Offer details shared by `rate` and `log`
#[derive(Args, Debug, Clone)]
pub struct TripArgs {
    /// Total pay offered ($)
    #[arg(long, short = 'p')]
    pub pay: f64,

    /// Miles to the last drop-off (doubled for the return leg)
    #[arg(long, short = 'm')]
    pub miles: f64,

    /// Estimated time in minutes
    #[arg(long, short = 't')]
    pub minutes: u32,

    /// Number of stops including the pickup
    #[arg(long, short = 's', default_value = "1")]
    pub stops: u32,

    /// Local fuel price ($/gal). Uses config value if not specified.
    #[arg(long)]
    pub fuel_price: Option<f64>,
}

/// Vehicle override; unset parts come from config
#[derive(Args, Debug, Clone, Default)]
pub struct VehicleArgs {
    /// Body class (coupe, sedan, large-car, pickup, 4-door-truck, minivan, suv,
    /// large-suv, electric, hybrid)
    #[arg(long)]
    pub body: Option<BodyClass>,

    /// Engine class (v4, v6, v8)
    #[arg(long)]
    pub engine: Option<EngineClass>,

    /// Fuel class (gas, electric, hybrid)
    #[arg(long)]
    pub fuel: Option<FuelClass>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rate an offer and show its earnings breakdown without saving
    Rate {
        #[command(flatten)]
        trip: TripArgs,

        #[command(flatten)]
        vehicle: VehicleArgs,
    },

    /// Look up fuel economy for any body/engine/fuel combination
    Mpg {
        #[arg(long)]
        body: BodyClass,

        #[arg(long)]
        engine: EngineClass,

        #[arg(long)]
        fuel: FuelClass,
    },

    /// Rate an offer and save it to the trip log
    Log {
        #[command(flatten)]
        trip: TripArgs,

        #[command(flatten)]
        vehicle: VehicleArgs,

        /// Trip date (YYYY-MM-DD). Defaults to today.
        #[arg(long, short = 'd')]
        date: Option<NaiveDate>,

        /// Optional notes
        #[arg(long, short = 'n')]
        notes: Option<String>,

        /// Shopping start time (HH:MM)
        #[arg(long, value_parser = parse_time, requires = "shop_end")]
        shop_start: Option<NaiveTime>,

        /// Shopping end time (HH:MM)
        #[arg(long, value_parser = parse_time, requires = "shop_start")]
        shop_end: Option<NaiveTime>,

        /// Items shopped
        #[arg(long, default_value = "1")]
        shop_items: u32,

        /// Incentive goal in trips
        #[arg(long, requires = "incentive_bonus")]
        incentive_goal: Option<u32>,

        /// Trips already completed toward the incentive
        #[arg(long, default_value = "0")]
        incentive_done: u32,

        /// Incentive bonus ($)
        #[arg(long, requires = "incentive_goal")]
        incentive_bonus: Option<f64>,
    },

    /// Show logged trips
    History {
        /// Limit number of entries shown
        #[arg(long, short = 'n', default_value = "10")]
        limit: usize,
    },

    /// Show earnings totals
    Summary,

    /// Export trips to a CSV report (Pro)
    Export {
        /// Output CSV file path
        #[arg(long, short = 'o', default_value = "spark-trips.csv")]
        output: PathBuf,
    },

    /// Remove a logged trip
    Remove {
        /// Trip id as shown by `history`
        id: String,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set subscription tier
        #[arg(long)]
        set_tier: Option<Tier>,

        /// Set local fuel price ($/gal)
        #[arg(long)]
        set_fuel_price: Option<f64>,

        /// Set default vehicle body class
        #[arg(long)]
        set_body: Option<BodyClass>,

        /// Set default engine class
        #[arg(long)]
        set_engine: Option<EngineClass>,

        /// Set default fuel class
        #[arg(long)]
        set_fuel: Option<FuelClass>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set trip log directory
        #[arg(long)]
        set_data_dir: Option<PathBuf>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}

fn parse_time(s: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(s, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .map_err(|_| format!("invalid time '{s}', expected HH:MM"))
}
