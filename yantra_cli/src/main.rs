//! # Yantra CLI Application
//!
//! Terminal front end for the yantra calculation engine. Text output by
//! default; `--json` prints the engine's JSON on stdout. Logs go to stderr.
//!
//! Exit status: 0 on success, 1 for invalid input or unknown sites, 2 when a
//! yantra's geometry is undefined at the requested latitude.

mod config;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing_subscriber::EnvFilter;
use yantra_core::coordinates::{coordinates_dms, validate_coordinates, Axis, Location};
use yantra_core::ephemeris::{day_of_year, to_ujjain_time, SolarSnapshot};
use yantra_core::{
    compare_sites, site_details, to_dms, CalcError, CalculationResult, ComparisonTable, DimensionUnit,
    SiteCatalog, SiteDetails,
};

use crate::config::CliConfig;

#[derive(Parser)]
#[command(
    name = "yantra",
    version,
    about = "Construction specifications for historical astronomical instruments"
)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(long, global = true, env = "YANTRA_CONFIG")]
    config: Option<PathBuf>,

    /// Site catalog file (TOML or JSON), replacing the built-in catalog
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// All yantra specifications for a location
    Calculate {
        /// Latitude in decimal degrees, north positive
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        /// Longitude in decimal degrees, east positive
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
        /// Scale factor (0.1 to 10.0)
        #[arg(long)]
        scale: Option<f64>,
        #[arg(long)]
        json: bool,
    },
    /// Compare key metrics across catalog sites
    Compare {
        /// Site names, exact and case-sensitive
        sites: Vec<String>,
        #[arg(long)]
        json: bool,
    },
    /// Site details and yantra specifications for one catalog site
    Site {
        name: String,
        /// Scale factor (0.1 to 10.0)
        #[arg(long)]
        scale: Option<f64>,
        #[arg(long)]
        json: bool,
    },
    /// List catalog sites
    Sites {
        #[arg(long)]
        json: bool,
    },
    /// Solar position for a day and local solar time
    Sun {
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        #[arg(long, allow_negative_numbers = true, default_value_t = 0.0)]
        lon: f64,
        /// Day of year (1-366)
        #[arg(long, conflicts_with = "date", required_unless_present = "date")]
        day: Option<u32>,
        /// Calendar date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Local solar time in hours (0-24)
        #[arg(long, default_value_t = 12.0)]
        time: f64,
        #[arg(long)]
        json: bool,
    },
    /// Convert decimal degrees to degrees/minutes/seconds
    Dms {
        /// Angle in decimal degrees
        #[arg(allow_negative_numbers = true)]
        deg: f64,
        #[arg(long, value_enum, default_value_t = AxisArg::Latitude)]
        axis: AxisArg,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum AxisArg {
    Latitude,
    Longitude,
}

impl From<AxisArg> for Axis {
    fn from(arg: AxisArg) -> Self {
        match arg {
            AxisArg::Latitude => Axis::Latitude,
            AxisArg::Longitude => Axis::Longitude,
        }
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report(&err),
    }
}

/// Print an error on stderr and pick the exit status.
fn report(err: &anyhow::Error) -> ExitCode {
    let (text, status) = render_error(err);
    eprintln!("{}", text);
    ExitCode::from(status)
}

/// Stderr text and exit status for an error. Engine errors print as JSON,
/// preceded by any context wrapped around them.
fn render_error(err: &anyhow::Error) -> (String, u8) {
    let Some(calc) = err.downcast_ref::<CalcError>() else {
        return (format!("Error: {:#}", err), 1);
    };

    let json = serde_json::to_string_pretty(calc).unwrap_or_else(|_| calc.to_string());
    let context: Vec<String> = err
        .chain()
        .take_while(|cause| cause.downcast_ref::<CalcError>().is_none())
        .map(ToString::to_string)
        .collect();

    let text = if context.is_empty() {
        json
    } else {
        format!("Error: {}\n{}", context.join(": "), json)
    };
    (text, exit_status(calc))
}

fn exit_status(err: &CalcError) -> u8 {
    match err {
        CalcError::GeometryUndefined { .. } => 2,
        CalcError::Validation { .. } | CalcError::UnknownSite { .. } | CalcError::Serialization { .. } => 1,
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = CliConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Calculate { lat, lon, scale, json } => {
            let location = Location::new(lat, lon, scale.unwrap_or(config.default_scale))?;
            let result = yantra_core::calculate(&location)?;
            emit(json || config.json, &result, print_calculation)
        }

        Commands::Compare { sites, json } => {
            let catalog = config.site_catalog(cli.catalog.as_deref())?;
            let table = compare_sites(&catalog, &sites)?;
            emit(json || config.json, &table, print_comparison)
        }

        Commands::Site { name, scale, json } => {
            let catalog = config.site_catalog(cli.catalog.as_deref())?;
            let details = site_details(&catalog, &name, scale.unwrap_or(config.default_scale))?;
            emit(json || config.json, &details, print_site_details)
        }

        Commands::Sites { json } => {
            let catalog = config.site_catalog(cli.catalog.as_deref())?;
            emit(json || config.json, &catalog, print_sites)
        }

        Commands::Sun {
            lat,
            lon,
            day,
            date,
            time,
            json,
        } => {
            let day = match (day, date) {
                (Some(day), _) => day,
                (None, Some(date)) => day_of_year(date),
                (None, None) => anyhow::bail!("either --day or --date is required"),
            };
            let snapshot = SolarSnapshot::compute(lat, lon, day, time)?;
            emit(json || config.json, &snapshot, print_snapshot)
        }

        Commands::Dms { deg, axis } => {
            let axis = Axis::from(axis);
            match axis {
                Axis::Latitude => validate_coordinates(deg, 0.0)?,
                Axis::Longitude => validate_coordinates(0.0, deg)?,
            }
            println!("{}", to_dms(deg, axis));
            Ok(())
        }
    }
}

/// JSON on stdout, or the text renderer.
fn emit<T: Serialize>(json: bool, value: &T, print_text: fn(&T)) -> Result<()> {
    if json {
        let text = serde_json::to_string_pretty(value).context("failed to serialize output")?;
        println!("{}", text);
    } else {
        print_text(value);
    }
    Ok(())
}

fn banner(title: &str) {
    println!("═══════════════════════════════════════");
    println!("  {}", title);
    println!("═══════════════════════════════════════");
    println!();
}

fn print_calculation(result: &CalculationResult) {
    let location = &result.location;
    let dms = &result.site_analysis.coordinates_dms;
    let astro = &result.site_analysis.astronomical_data;

    banner("YANTRA SPECIFICATIONS");
    println!("Location:");
    println!("  Latitude:  {:>10.4}°  {}", location.latitude(), dms.latitude_dms);
    println!("  Longitude: {:>10.4}°  {}", location.longitude(), dms.longitude_dms);
    println!("  Scale:     {:>10.2}", location.scale());
    println!();
    let june = astro.summer_solstice.daylight_hours;
    let december = astro.winter_solstice.daylight_hours;
    println!("Sun path (solstice noon elevation):");
    println!("  Highest:  {:>6.2}°", astro.max_sun_elevation);
    println!("  Lowest:   {:>6.2}°", astro.min_sun_elevation);
    println!("  Daylight: {:.1} h to {:.1} h", june.min(december), june.max(december));
    println!();

    for spec in result.yantras.values() {
        println!("{} - {}", spec.name, spec.description);
        println!("  Dimensions:");
        for (key, value, unit) in spec.dimensions_with_units() {
            match unit {
                DimensionUnit::Count => println!("    {:<24} {:>10.0}", key, value),
                _ => println!("    {:<24} {:>10.3} {}", key, value, unit.symbol()),
            }
        }
        println!("  Angles:");
        for (key, value) in &spec.angles {
            println!("    {:<24} {:>10.4}°", key, value);
        }
        println!("  Materials: {}", spec.materials.join(", "));
        println!();
    }

    let notes = &result.site_analysis.construction_considerations;
    println!("Construction considerations:");
    println!("  Magnetic declination: {}", notes.magnetic_declination);
    println!("  Foundation:           {}", notes.foundation_requirements);
    println!("  Alignment precision:  {}", notes.alignment_precision);
    println!("  Weathering:           {}", notes.material_weathering);
}

fn print_comparison(table: &ComparisonTable) {
    banner("SITE COMPARISON");
    if table.is_empty() {
        println!("(no sites)");
        return;
    }

    println!(
        "{:<12} {:>9} {:>9} {:>10} {:>10} {:>9} {:>9}",
        "Site", "Lat", "Lon", "Gnomon m", "Gnomon °", "Max sun", "Min sun"
    );
    for (name, metrics) in table.iter() {
        println!(
            "{:<12} {:>9.4} {:>9.4} {:>10.2} {:>10.4} {:>9.2} {:>9.2}",
            name,
            metrics.latitude,
            metrics.longitude,
            metrics.samrat_gnomon_height,
            metrics.samrat_gnomon_angle,
            metrics.max_sun_elevation,
            metrics.min_sun_elevation,
        );
    }
}

fn print_site_details(details: &SiteDetails) {
    println!("{}", details.site.display_name);
    if !details.site.description.is_empty() {
        println!("{}", details.site.description);
    }
    println!();
    print_calculation(&details.result);
}

fn print_sites(catalog: &SiteCatalog) {
    banner("HISTORICAL SITES");
    for site in catalog.iter() {
        let dms = coordinates_dms(site.latitude, site.longitude);
        println!("{:<12} {} {}  {}", site.name, dms.latitude_dms, dms.longitude_dms, site.display_name);
        if !site.description.is_empty() {
            println!("{:<12} {}", "", site.description);
        }
    }
}

fn print_snapshot(sun: &SolarSnapshot) {
    banner("SOLAR POSITION");
    println!("  Day of year:       {}", sun.day_of_year);
    println!("  Local solar time:  {:.2} h", sun.local_solar_time);
    println!(
        "  Ujjain time:       {:.2} h",
        to_ujjain_time(sun.longitude, sun.local_solar_time)
    );
    println!("  Declination:       {:.4}°", sun.solar_declination);
    println!("  Equation of time:  {:.2} min", sun.equation_of_time);
    println!("  Hour angle:        {:.2}°", sun.hour_angle);
    println!("  Elevation:         {:.4}°", sun.solar_elevation);
    println!("  Azimuth:           {:.4}°", sun.solar_azimuth);
    println!("  Sunrise:           {:.2} h", sun.sunrise_time);
    println!("  Sunset:            {:.2} h", sun.sunset_time);
    println!("  Daylight:          {:.2} h", sun.daylight_hours);
}
