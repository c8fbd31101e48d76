//! Command-line front-end for sample_colors
//!
//! Samples an image at the given click coordinates, prints per-region
//! digests as JSON to stdout, and optionally writes the frequency sheet as
//! aligned text and/or delimited spreadsheet rows.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};

use sample_colors::{
    sample_image, summarize, write_delimited, write_text, Channel, FrequencyTable, SamplerConfig,
    SamplingError,
};

#[derive(Parser)]
#[command(
    name = "sample-colors",
    version,
    about = "Sample image regions and tabulate color model frequencies"
)]
struct Cli {
    /// Path to the image file
    image: PathBuf,

    /// Sample point as X,Y (repeat for multiple areas)
    #[arg(
        short = 'c',
        long = "click",
        value_name = "X,Y",
        required = true,
        value_parser = parse_click
    )]
    clicks: Vec<(u32, u32)>,

    /// Sampling window half-width (overrides the config file)
    #[arg(short, long)]
    radius: Option<u32>,

    /// Channel set: all, rgb, cmyk, hsi, hsl, gray (overrides the config file)
    #[arg(long)]
    channels: Option<String>,

    /// Write the aligned text sheet to this path
    #[arg(long, value_name = "FILE")]
    out: Option<PathBuf>,

    /// Write delimited spreadsheet rows to this path
    #[arg(long, value_name = "FILE")]
    delimited: Option<PathBuf>,

    /// JSON configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn parse_click(s: &str) -> Result<(u32, u32), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{s}'"))?;
    let x = x
        .trim()
        .parse::<u32>()
        .map_err(|e| format!("bad X coordinate: {e}"))?;
    let y = y
        .trim()
        .parse::<u32>()
        .map_err(|e| format!("bad Y coordinate: {e}"))?;
    Ok((x, y))
}

fn init_logging(verbose: bool) {
    let stderr = ConsoleAppender::builder().target(Target::Stderr).build();
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))
        .expect("valid logging configuration");
    log4rs::init_config(config).expect("logging initialized once");
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(error) = run(&cli) {
        eprintln!("Sampling failed: {error}");
        if error.is_recoverable() {
            eprintln!("Suggestion: {}", error.user_message());
        }
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), SamplingError> {
    let config = match &cli.config {
        Some(path) => SamplerConfig::from_json_file(path).map_err(|e| {
            SamplingError::invalid_parameter("config", format!("{}: {e}", path.display()))
        })?,
        None => SamplerConfig::default(),
    };

    let radius = cli.radius.unwrap_or(config.sample_radius);
    let channels = match &cli.channels {
        Some(name) => Channel::parse_set(name)?,
        None => config.channels.clone(),
    };

    let session = sample_image(&cli.image, &cli.clicks, radius)?;
    let table = FrequencyTable::build(session.regions(), &channels)?;

    // JSON digests to stdout for programmatic use
    let summaries = summarize(&session);
    match serde_json::to_string_pretty(&summaries) {
        Ok(json) => println!("{json}"),
        Err(e) => log::warn!("could not serialize summaries: {e}"),
    }

    // Short human summary to stderr
    eprintln!();
    eprintln!("Sampling Summary:");
    for summary in &summaries {
        eprintln!(
            "  {}: {} pixels, mean {} (gray {:.1})",
            summary.label, summary.pixel_count, summary.hex, summary.gray
        );
    }
    eprintln!(
        "  Sheet: {} rows x {} columns",
        table.rows().len(),
        table.column_count()
    );

    if let Some(path) = &cli.out {
        write_text(&table, path)?;
        eprintln!("  Wrote text sheet to {}", path.display());
    }
    if let Some(path) = &cli.delimited {
        write_delimited(&table, path, config.export.delimiter)?;
        eprintln!("  Wrote delimited sheet to {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_click() {
        assert_eq!(parse_click("12,34"), Ok((12, 34)));
        assert_eq!(parse_click(" 5 , 7 "), Ok((5, 7)));
        assert!(parse_click("12").is_err());
        assert!(parse_click("a,b").is_err());
        assert!(parse_click("-1,4").is_err());
    }

    #[test]
    fn test_parse_minimal_arguments() {
        let cli = Cli::try_parse_from(["sample-colors", "photo.png", "--click", "3,4"]).unwrap();
        assert_eq!(cli.image, PathBuf::from("photo.png"));
        assert_eq!(cli.clicks, vec![(3, 4)]);
        assert_eq!(cli.radius, None);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_click_argument_is_required() {
        assert!(Cli::try_parse_from(["sample-colors", "photo.png"]).is_err());
    }

    #[test]
    fn test_repeated_clicks() {
        let cli = Cli::try_parse_from([
            "sample-colors",
            "photo.png",
            "-c",
            "1,2",
            "-c",
            "3,4",
            "--channels",
            "cmyk",
        ])
        .unwrap();
        assert_eq!(cli.clicks, vec![(1, 2), (3, 4)]);
        assert_eq!(cli.channels.as_deref(), Some("cmyk"));
    }
}
