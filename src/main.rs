use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

use zxml::{
    error::Result,
    utils::{format_xml, parse_xml, read_file, write_file},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input file path
    #[arg(short, long)]
    file: String,

    /// Output file path
    #[arg(short, long)]
    output: Option<String>,
}

fn main() {
    // Initialize the default subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .without_time()
        .init();

    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    info!("Reading file: {}", args.file);
    let content = read_file(&args.file)?;

    let document = parse_xml(&content)?;
    let formatted_output = format_xml(&document)?;

    if let Some(output_path) = args.output {
        write_file(&output_path, &formatted_output)?;
    } else {
        println!("{}", formatted_output);
    }

    Ok(())
}
