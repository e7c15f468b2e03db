//! Clinical calculator command-line interface

use clap::{Parser, Subcommand};
use octofhir_calc::cli::{
    compute::{self, ComputeConfig},
    list::{self, ListConfig},
    output::{self, ColorMode, OutputFormat},
    show::{self, ShowConfig},
};
use std::path::PathBuf;

/// Clinical calculator command-line tool
#[derive(Parser)]
#[command(name = "calc")]
#[command(author, version, about = "Bedside clinical calculators", long_about = None)]
struct Cli {
    /// Verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t, global = true)]
    format: OutputFormat,

    /// Output file (default: stdout)
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Color output
    #[arg(long, value_enum, default_value_t, global = true)]
    color: ColorMode,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List calculators
    List {
        /// Filter by name, category or tag
        #[arg(short, long)]
        query: Option<String>,
    },

    /// Show a calculator's inputs and links
    Show {
        /// Calculator id
        id: String,
    },

    /// Compute a result
    Compute {
        /// Calculator id
        id: String,

        /// Inputs (key=value)
        inputs: Vec<String>,
    },

    /// Print the copy/export text
    Copy {
        /// Calculator id
        id: String,

        /// Inputs (key=value)
        inputs: Vec<String>,
    },
}

fn main() {
    human_panic::setup_panic!();

    let cli = Cli::parse();

    output::setup_colors(cli.color);

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let result = match cli.command {
        Commands::List { query } => list::list(ListConfig {
            query,
            format: cli.format,
            output_file: cli.output,
        }),

        Commands::Show { id } => show::show(ShowConfig {
            id,
            format: cli.format,
            output_file: cli.output,
        }),

        Commands::Compute { id, inputs } => compute::compute(ComputeConfig {
            id,
            assignments: inputs,
            format: cli.format,
            output_file: cli.output,
        }),

        Commands::Copy { id, inputs } => compute::copy(ComputeConfig {
            id,
            assignments: inputs,
            format: cli.format,
            output_file: cli.output,
        }),
    };

    if let Err(e) = result {
        eprintln!("{}", output::format_error(&e));
        std::process::exit(output::exit_code(&e));
    }
}
