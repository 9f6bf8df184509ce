//! today.rs
//!
//! Prints the calendar card for a date from the generated lookup table:
//! nameday celebrants, any fixed public holiday, zodiac sign, moon phase,
//! approximate sunrise/sunset for Warsaw, and the fixed holidays coming up
//! in the next 30 days.
//!
//! Usage: today [YYYY-MM-DD]   (defaults to the current local date)

use anyhow::{Context, Result};
use chrono::{Datelike, Local, NaiveDate};
use namedays::{
    astro::{moon_phase, sun_times, zodiac_sign},
    calendar::{holidays_on, upcoming_holidays},
    table::NamedayTable,
};
use std::{env, process::exit};

const TABLE_PATH: &str = "data/namedays.json";

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() > 2 {
        eprintln!("Usage: {} [YYYY-MM-DD]", args[0]);
        exit(1);
    }
    let date = match args.get(1) {
        Some(s) => match NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            Ok(d) => d,
            Err(e) => {
                eprintln!("Bad date {:?}: {}", s, e);
                exit(1);
            }
        },
        None => Local::now().date_naive(),
    };

    if let Err(e) = print_card(date) {
        eprintln!("Error: {}", e);
        exit(1);
    }
}

fn print_card(date: NaiveDate) -> Result<()> {
    let table = NamedayTable::load(TABLE_PATH)
        .with_context(|| format!("loading {TABLE_PATH} (run the builder first)"))?;

    println!("=== {} ===", date.format("%Y-%m-%d"));

    match table.get(date.month(), date.day()) {
        Some(names) => println!("Imieniny:        {}", names),
        None => println!("Imieniny:        (brak danych)"),
    }

    for holiday in holidays_on(date) {
        let tag = if holiday.work_free { "wolne od pracy" } else { "pracujące" };
        println!("Święto:          {} ({})", holiday.name, tag);
    }

    let sun = sun_times(date);
    println!("Znak zodiaku:    {}", zodiac_sign(date));
    println!("Faza Księżyca:   {}", moon_phase(date));
    println!(
        "Wschód/zachód:   {} / {}",
        sun.sunrise.format("%H:%M"),
        sun.sunset.format("%H:%M")
    );

    let upcoming = upcoming_holidays(date, 30);
    if !upcoming.is_empty() {
        println!();
        println!("Nadchodzące święta (30 dni):");
        for event in upcoming {
            println!("  {}  {}", event.date.format("%Y-%m-%d"), event.name);
        }
    }

    Ok(())
}
