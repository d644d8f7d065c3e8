// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc, Weekday};
use clap::{Parser, Subcommand};
use leeboards_calendar::{
    CalendarConfig, DateOffset, DateRange, Overlap, PeriodicDateGenerator, RangeGenerator,
    Standard, StandardGenerator, TimePeriod, parse_zone,
};
use serde_json::Value;
use tracing::{debug, error};

/// `LeeboardsLog` calendar - evaluate date rules from the command line
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Reference date (YYYY-MM-DD). Defaults to today in the local time zone.
    #[arg(short, long, global = true)]
    date: Option<NaiveDate>,

    /// First day of the week for rules that do not name one
    #[arg(long, global = true)]
    first_day_of_week: Option<Weekday>,

    /// IANA time zone used to place whole days on the timeline.
    /// Defaults to the system time zone.
    #[arg(short, long, global = true)]
    zone: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute a standard date range, e.g. `range PRECEEDING_MONTHS 3`
    Range {
        /// The range standard
        standard: Standard,

        /// The standard's integer parameters
        #[arg(allow_hyphen_values = true)]
        parameters: Vec<i32>,
    },

    /// Resolve a date offset record
    Offset {
        /// The offset as a JSON record
        json: String,
    },

    /// List the dates of a periodic generator record
    Periodic {
        /// The generator as a JSON record
        json: String,
    },

    /// Classify how period A overlaps period B
    ///
    /// Each edge is either a date (whole days) or an RFC 3339 instant.
    Overlap {
        /// Start of period A
        a_start: String,
        /// End of period A
        a_end: String,
        /// Start of period B
        b_start: String,
        /// End of period B
        b_end: String,
    },
}

/// One edge of a period given on the command line.
#[derive(Debug, Clone, Copy)]
enum Edge {
    Date(NaiveDate),
    Instant(DateTime<Utc>),
}

impl Edge {
    fn parse(value: &str) -> Result<Self, Box<dyn std::error::Error>> {
        if let Ok(date) = value.parse::<NaiveDate>() {
            return Ok(Self::Date(date));
        }
        let instant: DateTime<Utc> = DateTime::parse_from_rfc3339(value)
            .map_err(|err| format!("'{value}' is neither a date nor an RFC 3339 instant: {err}"))?
            .with_timezone(&Utc);
        Ok(Self::Instant(instant))
    }

    fn to_instant<Z: TimeZone>(
        self,
        zone: &Z,
    ) -> Result<DateTime<Utc>, Box<dyn std::error::Error>> {
        match self {
            Self::Instant(instant) => Ok(instant),
            Self::Date(date) => {
                let day: TimePeriod = TimePeriod::from_first_day_and_count(date, 1)?;
                Ok(day.start_instant(zone))
            }
        }
    }
}

fn build_period<Z: TimeZone>(
    start: &str,
    end: &str,
    zone: &Z,
) -> Result<TimePeriod, Box<dyn std::error::Error>> {
    match (Edge::parse(start)?, Edge::parse(end)?) {
        (Edge::Date(first), Edge::Date(last)) => Ok(TimePeriod::from_edge_dates(first, last)?),
        (first, last) => Ok(TimePeriod::from_edge_times(
            first.to_instant(zone)?,
            last.to_instant(zone)?,
        )),
    }
}

fn classify_overlap<Z: TimeZone>(
    [a_start, a_end, b_start, b_end]: [&str; 4],
    zone: &Z,
) -> Result<Overlap, Box<dyn std::error::Error>> {
    let a: TimePeriod = build_period(a_start, a_end, zone)?;
    let b: TimePeriod = build_period(b_start, b_end, zone)?;
    let overlap: Overlap = a.overlap(&b, zone);
    debug!(%a, %b, %overlap, "Classified overlap");
    Ok(overlap)
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let reference: NaiveDate = args.date.unwrap_or_else(|| Local::now().date_naive());
    debug!(%reference, "Resolved reference date");

    match &args.command {
        Command::Range {
            standard,
            parameters,
        } => {
            let generator: StandardGenerator =
                StandardGenerator::from_parameters(*standard, parameters)?;
            let range: DateRange = generator.generate_range(reference)?;
            println!("{range}");
        }
        Command::Offset { json } => {
            let record: Value = serde_json::from_str(json)?;
            let offset: DateOffset = DateOffset::from_json(&record)?;
            println!("{}", offset.offset_date(reference)?);
        }
        Command::Periodic { json } => {
            let record: Value = serde_json::from_str(json)?;
            let generator: PeriodicDateGenerator = PeriodicDateGenerator::from_json(&record)?;
            for date in generator.iter(reference)? {
                println!("{}", date?);
            }
        }
        Command::Overlap {
            a_start,
            a_end,
            b_start,
            b_end,
        } => {
            let edges: [&str; 4] = [a_start, a_end, b_start, b_end].map(String::as_str);
            let overlap: Overlap = match &args.zone {
                Some(name) => classify_overlap(edges, &parse_zone(name)?)?,
                None => classify_overlap(edges, &Local)?,
            };
            println!("{overlap}");
        }
    }

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    if let Some(first_day_of_week) = args.first_day_of_week {
        CalendarConfig { first_day_of_week }.install();
    }

    if let Err(err) = run(&args) {
        error!(error = %err, "Command failed");
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::Tz;

    #[test]
    fn test_args_parse_range_with_parameters() {
        let args: Args = Args::parse_from([
            "leeboards-calendar",
            "--date",
            "2018-02-11",
            "range",
            "current_week",
            "1",
            "2",
        ]);
        assert_eq!(args.date, NaiveDate::from_ymd_opt(2018, 2, 11));
        match args.command {
            Command::Range {
                standard,
                parameters,
            } => {
                assert_eq!(standard, Standard::CurrentWeek);
                assert_eq!(parameters, vec![1, 2]);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_args_parse_first_day_of_week() {
        let args: Args = Args::parse_from([
            "leeboards-calendar",
            "offset",
            "{}",
            "--first-day-of-week",
            "monday",
        ]);
        assert_eq!(args.first_day_of_week, Some(Weekday::Mon));
        assert_eq!(args.zone, None);
    }

    #[test]
    fn test_edge_parse() {
        assert!(matches!(Edge::parse("2018-01-01"), Ok(Edge::Date(_))));
        assert!(matches!(
            Edge::parse("2018-01-01T06:00:00-05:00"),
            Ok(Edge::Instant(_))
        ));
        assert!(Edge::parse("yesterday").is_err());
    }

    #[test]
    fn test_build_period_from_dates_and_instants() {
        let zone: Tz = parse_zone("UTC").unwrap();
        let days: TimePeriod = build_period("2018-01-03", "2018-01-01", &zone).unwrap();
        assert_eq!(days.full_day_count(), Some(3));

        let mixed: TimePeriod = build_period("2018-01-01", "2018-01-01T12:00:00Z", &zone).unwrap();
        assert!(!mixed.is_full_days());
        assert_eq!(mixed.duration(&zone), chrono::TimeDelta::hours(12));
    }

    #[test]
    fn test_zone_is_optional_and_named() {
        let args: Args = Args::parse_from([
            "leeboards-calendar",
            "--zone",
            "America/New_York",
            "overlap",
            "2018-01-01",
            "2018-01-01",
            "2018-01-01T06:00:00Z",
            "2018-01-01T08:00:00Z",
        ]);
        assert_eq!(args.zone.as_deref(), Some("America/New_York"));
    }

    #[test]
    fn test_classify_overlap_uses_the_zone() {
        let edges: [&str; 4] = [
            "2018-01-01",
            "2018-01-01",
            "2018-01-01T02:00:00Z",
            "2018-01-01T05:00:00Z",
        ];
        let new_york: Tz = parse_zone("America/New_York").unwrap();

        assert_eq!(
            classify_overlap(edges, &new_york).unwrap(),
            Overlap::TouchOtherEnd
        );
        assert_eq!(classify_overlap(edges, &Utc).unwrap(), Overlap::EnclosesOther);
    }

    #[test]
    fn test_classify_overlap_in_system_zone() {
        let edges: [&str; 4] = ["2018-01-01", "2018-01-03", "2018-01-04", "2018-01-05"];
        assert_eq!(
            classify_overlap(edges, &Local).unwrap(),
            Overlap::TouchOtherStart
        );
    }
}
