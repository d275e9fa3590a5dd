//! `neotrace query` command - Filtered queries over close approaches

use chrono::NaiveDate;
use console::style;
use miette::{IntoDiagnostic, Result};
use std::path::PathBuf;

use crate::cli::helpers::load_database;
use crate::cli::GlobalOpts;
use crate::core::{limit, write_to_csv, write_to_json, ApproachFilters};

/// How many matches the stdout display shows when no `--limit` is given.
const DEFAULT_DISPLAY_LIMIT: usize = 10;

#[derive(clap::Args, Debug)]
pub struct QueryArgs {
    /// Only match approaches on this date (YYYY-MM-DD)
    #[arg(long, short = 'd')]
    pub date: Option<NaiveDate>,

    /// Only match approaches on or after this date (YYYY-MM-DD)
    #[arg(long)]
    pub start_date: Option<NaiveDate>,

    /// Only match approaches on or before this date (YYYY-MM-DD)
    #[arg(long)]
    pub end_date: Option<NaiveDate>,

    /// Minimum approach distance in astronomical units
    #[arg(long)]
    pub min_distance: Option<f64>,

    /// Maximum approach distance in astronomical units
    #[arg(long)]
    pub max_distance: Option<f64>,

    /// Minimum relative approach velocity in km/s
    #[arg(long)]
    pub min_velocity: Option<f64>,

    /// Maximum relative approach velocity in km/s
    #[arg(long)]
    pub max_velocity: Option<f64>,

    /// Minimum NEO diameter in kilometers
    #[arg(long)]
    pub min_diameter: Option<f64>,

    /// Maximum NEO diameter in kilometers
    #[arg(long)]
    pub max_diameter: Option<f64>,

    /// Only match approaches of potentially hazardous NEOs
    #[arg(long, conflicts_with = "not_hazardous")]
    pub hazardous: bool,

    /// Only match approaches of non-hazardous NEOs
    #[arg(long)]
    pub not_hazardous: bool,

    /// Maximum number of results (0 means unlimited)
    #[arg(long, short = 'l')]
    pub limit: Option<usize>,

    /// Write results to this file (.csv or .json) instead of stdout
    #[arg(long, short = 'o')]
    pub outfile: Option<PathBuf>,
}

impl QueryArgs {
    fn to_filters(&self) -> ApproachFilters {
        ApproachFilters {
            date: self.date,
            start_date: self.start_date,
            end_date: self.end_date,
            distance_min: self.min_distance,
            distance_max: self.max_distance,
            velocity_min: self.min_velocity,
            velocity_max: self.max_velocity,
            diameter_min: self.min_diameter,
            diameter_max: self.max_diameter,
            hazardous: if self.hazardous {
                Some(true)
            } else if self.not_hazardous {
                Some(false)
            } else {
                None
            },
        }
    }
}

pub fn run(args: QueryArgs, global: &GlobalOpts) -> Result<()> {
    let database = load_database(global)?;
    let filters = args.to_filters();

    match &args.outfile {
        Some(path) => {
            let results = limit(database.query(&filters), args.limit);
            match path.extension().and_then(|e| e.to_str()) {
                Some("csv") => write_to_csv(results, path).into_diagnostic()?,
                Some("json") => write_to_json(results, path).into_diagnostic()?,
                _ => {
                    return Err(miette::miette!(
                        "Unsupported output format: {} (expected a .csv or .json path)",
                        path.display()
                    ))
                }
            }
            if !global.quiet {
                println!(
                    "{} Wrote results to {}",
                    style("✓").green(),
                    path.display()
                );
            }
        }
        None => {
            let display_limit = args.limit.or(Some(DEFAULT_DISPLAY_LIMIT));
            let mut count = 0usize;
            for result in limit(database.query(&filters), display_limit) {
                println!("{result}");
                count += 1;
            }
            if count == 0 {
                println!("{}", style("No matching approaches found.").yellow());
            }
        }
    }
    Ok(())
}
