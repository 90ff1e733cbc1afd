//! StudyPlan CLI — the main entry point.
//!
//! Commands:
//! - `plan`     — Generate a study plan with the configured provider
//! - `preview`  — Show the allocation and prompt without calling the provider
//! - `serve`    — Start the HTTP gateway with the form page
//! - `doctor`   — Diagnose configuration and provider reachability
//! - `init`     — Write a starter config file

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "studyplan",
    about = "StudyPlan — personalized study plans for exam preparation",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a personalized study plan
    Plan(commands::plan::PlanArgs),

    /// Print the allocation, summary and prompt without contacting the provider
    Preview {
        #[command(flatten)]
        request: commands::RequestArgs,

        /// Print the draft as JSON
        #[arg(long)]
        json: bool,
    },

    /// Start the HTTP gateway serving the form page
    Serve {
        /// Override the port
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Diagnose configuration health
    Doctor {
        /// Also check that the provider answers
        #[arg(long)]
        ping: bool,
    },

    /// Write a starter config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Logs go to stderr so plan text on stdout stays clean
    let filter = if cli.verbose { "debug" } else { "info" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false);
    if cli.log_json {
        builder.json().init();
    } else {
        builder.init();
    }

    match cli.command {
        Commands::Plan(args) => commands::plan::run(args).await?,
        Commands::Preview { request, json } => commands::preview::run(request, json)?,
        Commands::Serve { port } => commands::serve::run(port).await?,
        Commands::Doctor { ping } => commands::doctor::run(ping).await?,
        Commands::Init { force } => commands::init::run(force)?,
    }

    Ok(())
}
