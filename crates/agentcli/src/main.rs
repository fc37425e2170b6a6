use agentcore::GraphState;
use agentnodes::{create_graph, stdout_sink};
use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "css-agent")]
#[command(about = "Demo analysis pipeline CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Execute the demo pipeline once
    Run {
        /// Show verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { verbose } => {
            // Initialize logging, RUST_LOG overrides the verbosity flag
            let default_level = if verbose { "debug" } else { "info" };
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| EnvFilter::new(default_level)),
                )
                .init();

            run_pipeline(verbose).await?;
        }
    }

    Ok(())
}

async fn run_pipeline(verbose: bool) -> Result<()> {
    tracing::debug!("building demo pipeline");
    let graph = create_graph(stdout_sink())?;
    let (_, summary) = graph.run(GraphState::new()).await?;

    if verbose {
        println!(
            "run {} finished: {} nodes in {}ms (started {})",
            summary.run_id, summary.steps, summary.duration_ms, summary.started_at
        );
    }

    Ok(())
}
