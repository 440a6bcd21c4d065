use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "macrometer", about = "Macro and market indicator tracker")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every registered indicator and its source
    List,
    /// Fetch one indicator by name or key (e.g. "US CAPE Ratio" or cape_ratio)
    Fetch {
        /// Indicator display name or normalized key
        name: String,
    },
    /// Fetch every indicator and print the merged flat mapping
    All,
    /// Fetch every indicator and append the records to a CSV file
    ExportAll {
        /// Path of the CSV sink (created if absent, appended otherwise)
        path: String,
    },
    /// Print historical observations for a raw series id (e.g. GDP, DGS10)
    History {
        /// Series identifier
        series_id: String,
        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        start: Option<String>,
        /// End date (YYYY-MM-DD)
        #[arg(long)]
        end: Option<String>,
    },
}
