mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "tabmap",
    version,
    about = "Extract field-mapped records from CSV and Excel files"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract records from a tabular file using a field mapping
    Extract {
        /// Path to a .csv, .xlsx, or .xls file
        input_file: PathBuf,

        /// Field mapping as a JSON object: {"source column": "alias", ...}
        #[arg(short, long, value_name = "JSON", conflicts_with = "fields_file")]
        fields: Option<String>,

        /// Read the field mapping JSON from a file instead
        #[arg(long = "fields-file", value_name = "FILE")]
        fields_file: Option<PathBuf>,

        /// Output format: json (default) or table
        #[arg(short, long, default_value = "json")]
        output: String,

        /// Write the JSON output to a file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,

        /// Encoding tried for CSV files after UTF-8 (e.g. gbk, windows-1252)
        #[arg(long = "fallback-encoding", value_name = "LABEL", default_value = "gbk")]
        fallback_encoding: String,
    },
    /// List the normalized column names a mapping could reference
    Columns {
        /// Path to a .csv, .xlsx, or .xls file
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Encoding tried for CSV files after UTF-8 (e.g. gbk, windows-1252)
        #[arg(long = "fallback-encoding", value_name = "LABEL", default_value = "gbk")]
        fallback_encoding: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Extract {
            input_file,
            fields,
            fields_file,
            output,
            out,
            fallback_encoding,
        } => commands::extract::run(
            input_file,
            fields,
            fields_file,
            &output,
            out,
            &fallback_encoding,
        ),
        Commands::Columns {
            input_file,
            output,
            fallback_encoding,
        } => commands::columns::run(input_file, &output, &fallback_encoding),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
