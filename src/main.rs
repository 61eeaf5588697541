use anyhow::Result;
use bts_compare::models::Config;
use bts_compare::{analyzer, loader, report};
use clap::parser::ValueSource;
use clap::{Arg, Command};
use std::path::Path;

fn main() -> Result<()> {
    let matches = Command::new("bts-compare")
        .version("1.0")
        .about("Compare BTS day files (only classes 7/8/9)")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Configuration file path")
                .default_value("config.toml"),
        )
        .arg(
            Arg::new("day1")
                .long("day1")
                .value_name("PATH")
                .help("Day 1 file"),
        )
        .arg(
            Arg::new("day2")
                .long("day2")
                .value_name("PATH")
                .help("Day 2 file"),
        )
        .arg(
            Arg::new("both-out")
                .long("both-out")
                .value_name("PATH")
                .help("Output file for students present on both days"),
        )
        .arg(
            Arg::new("one-day-out")
                .long("one-day-out")
                .value_name("PATH")
                .help("Output file for students present on one day only"),
        )
        .get_matches();

    let config_file = matches.get_one::<String>("config").unwrap();
    let config_requested = matches.value_source("config") == Some(ValueSource::CommandLine);

    // Load configuration; create the file only when it was asked for.
    let config = if Path::new(config_file).exists() {
        println!("📋 Loading configuration from: {}", config_file);
        Config::load_from_file(config_file)?
    } else if config_requested {
        println!("📝 Creating default configuration file: {}", config_file);
        let default_config = Config::default();
        default_config.save_to_file(config_file)?;
        default_config
    } else {
        Config::default()
    };

    // Command line beats config file beats built-in defaults.
    let day1_path = matches
        .get_one::<String>("day1")
        .cloned()
        .unwrap_or(config.day1);
    let day2_path = matches
        .get_one::<String>("day2")
        .cloned()
        .unwrap_or(config.day2);
    let both_out = matches
        .get_one::<String>("both-out")
        .cloned()
        .unwrap_or(config.both_out);
    let one_day_out = matches
        .get_one::<String>("one-day-out")
        .cloned()
        .unwrap_or(config.one_day_out);

    for path in [&day1_path, &day2_path] {
        if !Path::new(path).exists() {
            anyhow::bail!("input file not found: {}", path);
        }
    }

    println!("📄 Day 1: {}", day1_path);
    println!("📄 Day 2: {}", day2_path);

    let day1 = loader::load_records(Path::new(&day1_path))?;
    let day2 = loader::load_records(Path::new(&day2_path))?;

    let recon = analyzer::reconcile(&day1.records, &day2.records);
    let reports = report::build_reports(&day1.records, &day2.records, &recon);
    report::write_reports(Path::new(&both_out), Path::new(&one_day_out), &reports)?;

    println!("✅ Done. Both days: {}", recon.both.len());
    println!("One day only: {}", recon.one_day.len());
    println!("Saved: {}", both_out);
    println!("Saved: {}", one_day_out);

    let skipped_count = day1.skipped.len() + day2.skipped.len();
    if skipped_count > 0 {
        println!("⚠️  Skipped rows (invalid/filtered): {}", skipped_count);
    }

    Ok(())
}
