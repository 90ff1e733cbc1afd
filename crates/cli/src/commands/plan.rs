//! `studyplan plan` — Generate a study plan from the command line.

use std::path::PathBuf;

use clap::Args;
use studyplan_config::AppConfig;
use studyplan_planner::StudyPlanner;

use super::RequestArgs;

#[derive(Debug, Args)]
pub struct PlanArgs {
    #[command(flatten)]
    pub request: RequestArgs,

    /// Save the plan text to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the heuristic allocation before the plan
    #[arg(long)]
    pub show_allocation: bool,
}

pub async fn run(args: PlanArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;
    let request = args.request.to_request(&config.form);

    config
        .form
        .limits
        .validate(&request)
        .map_err(|e| format!("Invalid study request: {e}"))?;

    let planner = StudyPlanner::from_config(&config)?;

    if args.show_allocation {
        println!("\nInitial allocation\n");
        for entry in request.allocation() {
            println!("  {}", entry.render());
        }
    }

    let plan = planner.generate(&request).await?;

    println!("\nAI GENERATED STUDY PLAN\n");
    println!("{plan}");

    if let Some(path) = args.output {
        std::fs::write(&path, &plan)?;
        println!("\n📥 Saved to {}", path.display());
    }

    Ok(())
}
