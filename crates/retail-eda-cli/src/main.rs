//! create-notebook - writes the retail sales EDA Jupyter notebook.

mod generate;

use std::path::PathBuf;

use clap::Parser;
use retail_eda::DEFAULT_OUTPUT_PATH;

#[derive(Parser)]
#[command(name = "create-notebook")]
#[command(about = "Generate the retail sales exploratory data analysis notebook")]
#[command(version)]
struct Cli {
    /// Output path for the notebook
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging; stdout is reserved for the success line
    let filter = if cli.verbose {
        tracing_subscriber::EnvFilter::from_default_env()
            .add_directive(tracing::Level::DEBUG.into())
    } else {
        tracing_subscriber::EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    generate::execute(&cli.output)
}
