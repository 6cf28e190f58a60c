use clap::Parser;
use intelrag::cli::commands::{Cli, Commands};
use intelrag::cli::render;
use intelrag::config::Settings;
use intelrag::domain::values::date_range::DateRange;
use intelrag::domain::values::filter_selection::FilterSelection;
use intelrag::IntelRag;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();

    let settings = match Settings::load(&cli.config) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            std::process::exit(1);
        }
    };

    let rag = match IntelRag::new(&settings) {
        Ok(rag) => rag,
        Err(e) => {
            eprintln!("Error initializing: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run_command(rag, cli.command).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run_command(
    rag: IntelRag,
    cmd: Commands,
) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::Setup { num_reports, reset } => {
            let outcome = rag.setup(num_reports, reset).await?;
            println!("Ingested {} documents", outcome.success_count);
            if let Some(err) = outcome.first_error {
                println!("First ingest failure: {err}");
            }
        }
        Commands::Search {
            query,
            mode,
            date_range,
            classifications,
            sources,
            countries,
            compartments,
        } => {
            let date_range: DateRange = date_range.parse()?;
            let selection = FilterSelection::new(
                date_range,
                classifications,
                sources,
                countries,
                compartments,
            );
            let outcome = rag.route(&query, &mode, &selection).await?;
            print!("{}", render::render(&outcome));
        }
    }
    Ok(())
}
