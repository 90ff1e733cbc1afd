//! `studyplan serve` — Start the HTTP gateway with the form page.

use studyplan_config::AppConfig;

pub async fn run(port_override: Option<u16>) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;

    if let Some(port) = port_override {
        config.gateway.port = port;
    }

    println!("📘 StudyPlan Gateway");
    println!(
        "   Open: http://{}:{}/",
        config.gateway.host, config.gateway.port
    );
    println!("   Model: {} via {}", config.model, config.provider);

    studyplan_gateway::start(config).await?;

    Ok(())
}
