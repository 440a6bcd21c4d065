use clap::Parser;
use macrometer::cli::commands::{Cli, Commands};
use macrometer::{Config, MacroMeter};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let mut config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    if let Commands::ExportAll { path } = &cli.command {
        config.csv_export_path = Some(PathBuf::from(path));
    }

    let meter = match MacroMeter::new(config) {
        Ok(meter) => meter,
        Err(e) => {
            eprintln!("Error initializing macrometer: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run_command(meter, cli.command).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run_command(meter: MacroMeter, cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::List => {
            for def in meter.definitions() {
                println!("{} ({})", def.name, def.source_label);
            }
        }
        Commands::Fetch { name } => {
            let record = meter.fetch_one(&name).await?;
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        Commands::All => {
            let merged = meter.fetch_all().await;
            println!("{}", serde_json::to_string_pretty(&merged)?);
        }
        Commands::ExportAll { path } => {
            let count = meter.export_all().await?;
            println!("Exported {count} indicators to {path}");
        }
        Commands::History {
            series_id,
            start,
            end,
        } => {
            let start = parse_date(&start)?;
            let end = parse_date(&end)?;
            let history = meter.history(&series_id, start, end).await?;
            println!("{}", serde_json::to_string_pretty(&history)?);
        }
    }
    Ok(())
}

fn parse_date(s: &Option<String>) -> Result<Option<chrono::NaiveDate>, String> {
    match s {
        None => Ok(None),
        Some(s) => chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| format!("Invalid date format: {s}. Use YYYY-MM-DD")),
    }
}
