//! Output formatting module

use spark_app::app::TripEvaluation;
use spark_domain::model::{BodyClass, EngineClass, FuelClass, TripRecord};
use spark_domain::service::EarningsSummary;
use spark_types::{OutputFormat, Result};

pub fn output_evaluation(output_format: OutputFormat, eval: &TripEvaluation) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(eval)?;
        println!("{}", content);
        return Ok(());
    }

    let input = &eval.input;
    println!("\nTrip Rating");
    println!("===========");

    match eval.rating {
        Some(rating) => {
            println!("{}", rating.label());
            println!("Score:           {:.1}", rating.score);
            println!("Pay per mile:    ${:.2}", rating.pay_per_mile);
            println!("Pay per hour:    ${:.2}", rating.pay_per_hour);
            println!("Pay per stop:    ${:.2}", rating.pay_per_stop);
        }
        None => {
            println!("Unpaid offer, nothing to rate.");
        }
    }

    if let Some(economics) = eval.economics {
        println!("\n--- Earnings Breakdown ---");
        println!("Vehicle:         {}", eval.vehicle);
        println!("Fuel economy:    {:.0} mpg", economics.mpg);
        println!(
            "Round trip:      {:.1} mi ({:.1} mi each way)",
            input.one_way_miles * 2.0,
            input.one_way_miles
        );
        println!(
            "Fuel used:       {:.2} gal @ ${:.2}",
            economics.gallons, input.fuel_price_per_gallon
        );
        println!("--------------------------");
        println!("Gross pay:       ${:.2}", economics.gross);
        println!("Gas cost:       -${:.2}", economics.gas_cost);
        println!("Wear & tear:    -${:.2}", economics.wear_tear);
        println!("Net earnings:    ${:.2}", economics.net);
        println!("Net per hour:    ${:.2}", eval.net_per_hour);
    }

    Ok(())
}

pub fn output_mpg(
    output_format: OutputFormat,
    body: BodyClass,
    engine: EngineClass,
    fuel: FuelClass,
    mpg: f64,
    tabulated: bool,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        let value = serde_json::json!({
            "body": body,
            "engine": engine,
            "fuel": fuel,
            "mpg": mpg,
            "tabulated": tabulated,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("{} / {} / {}: {:.0} mpg", body, engine, fuel, mpg);
        if !tabulated {
            println!("(estimated, no exact match in the fuel economy table)");
        }
    }
    Ok(())
}

pub fn output_record(output_format: OutputFormat, record: &TripRecord) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(record)?);
        return Ok(());
    }

    println!("\nTrip logged");
    println!("===========");
    println!("Id:              {}", record.id);
    println!("Date:            {}", record.date);
    println!("Vehicle:         {}", record.vehicle);
    println!(
        "Rating:          {}",
        record.rating.map(|r| r.label()).unwrap_or("unrated")
    );
    println!("Gross pay:       ${:.2}", record.gross());
    println!("Net earnings:    ${:.2}", record.net());

    if let Some(shopping) = record.shopping {
        println!(
            "Shopping:        {} items in {} min",
            shopping.items,
            shopping.duration_minutes()
        );
    }
    if let Some(incentive) = record.incentive {
        println!(
            "Incentive:       {}/{} trips ({:.0}%), ${:.2} bonus{}",
            incentive.completed_trips,
            incentive.goal_trips,
            incentive.progress() * 100.0,
            incentive.bonus,
            if incentive.is_reached() { " earned" } else { "" }
        );
    }
    if let Some(ref notes) = record.notes {
        println!("Notes:           {}", notes);
    }

    Ok(())
}

pub fn output_history(
    output_format: OutputFormat,
    trips: &[TripRecord],
    limit: usize,
    retention_days: Option<i64>,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        let shown: Vec<&TripRecord> = trips.iter().take(limit).collect();
        println!("{}", serde_json::to_string_pretty(&shown)?);
        return Ok(());
    }

    println!("Trip History");
    println!("============");
    match retention_days {
        Some(days) => println!("Showing the last {} days ({} trips)", days, trips.len()),
        None => println!("Total trips: {}", trips.len()),
    }
    println!();

    if trips.is_empty() {
        println!("No trips found.");
        return Ok(());
    }

    println!(
        "{:<10} {:<10} {:>8} {:>7} {:>8} {:>10}  {}",
        "Id", "Date", "Pay", "Miles", "Net", "Rating", "Notes"
    );
    println!("{}", "-".repeat(78));

    for trip in trips.iter().take(limit) {
        let rating = trip.rating.map(|r| r.as_str()).unwrap_or("-");
        println!(
            "{:<10} {:<10} {:>8.2} {:>7.1} {:>8.2} {:>10}  {}",
            short_id(&trip.id),
            trip.date.format("%Y-%m-%d"),
            trip.gross(),
            trip.input.one_way_miles,
            trip.net(),
            rating,
            truncate(trip.notes.as_deref().unwrap_or(""), 24)
        );
    }

    if trips.len() > limit {
        println!();
        println!("... and {} more trips", trips.len() - limit);
    }

    Ok(())
}

pub fn output_summary(
    output_format: OutputFormat,
    summary: &EarningsSummary,
    remaining_this_week: Option<usize>,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(summary)?);
        return Ok(());
    }

    println!("Earnings Summary");
    println!("================");
    println!("Trips:           {}", summary.trip_count);
    println!("Gross:           ${:.2}", summary.total_gross);
    println!("Expenses:        ${:.2}", summary.total_expenses);
    println!("Net:             ${:.2}", summary.total_net);
    println!("Avg net/trip:    ${:.2}", summary.average_net_per_trip);
    println!("Miles driven:    {:.1}", summary.round_trip_miles);
    println!();
    println!(
        "Deals:           {} excellent, {} good, {} shit, {} unrated",
        summary.excellent_count, summary.good_count, summary.shit_count, summary.unrated_count
    );

    if let Some(remaining) = remaining_this_week {
        println!("Trips left this week: {}", remaining);
    }

    Ok(())
}

fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let head: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", head)
    } else {
        s.to_string()
    }
}
