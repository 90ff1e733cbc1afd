//! `studyplan preview` — Show what would be sent, without sending it.

use studyplan_config::AppConfig;
use studyplan_planner::PlanDraft;

use super::RequestArgs;

pub fn run(args: RequestArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;
    let request = args.to_request(&config.form);
    let draft = PlanDraft::new(&request);
    let summary = request.summary();

    if json {
        let out = serde_json::json!({
            "request": request,
            "summary": summary,
            "allocation": draft.allocation,
            "prompt": draft.prompt,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("📘 Study plan preview");
    println!("=====================\n");
    println!("  Total study hours:  {}", summary.total_hours);
    println!("  Subjects selected:  {}", summary.subject_count);
    println!("  Hours per subject:  {:.1}", summary.hours_per_subject);

    if let Err(e) = config.form.limits.validate(&request) {
        println!("\n  ⚠️  The form would reject this request: {e}");
    }

    println!("\nAllocation:");
    for entry in &draft.allocation {
        println!("  {}", entry.render());
    }

    println!("\nPrompt ({} → {}):", config.provider, config.model);
    println!("----------------------------------------");
    print!("{}", draft.prompt);
    println!("----------------------------------------");

    Ok(())
}
