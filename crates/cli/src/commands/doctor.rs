//! `studyplan doctor` — Diagnose configuration health.

use studyplan_config::{AppConfig, ConfigError};
use studyplan_planner::StudyPlanner;

pub async fn run(ping: bool) -> Result<(), Box<dyn std::error::Error>> {
    println!("🩺 StudyPlan Doctor — Diagnostics");
    println!("=================================\n");

    let config_path = AppConfig::config_dir().join("config.toml");
    if config_path.exists() {
        println!("  ✅ Config file found: {}", config_path.display());
    } else {
        println!("  ⚠️  No config file, using defaults (run `studyplan init` to create one)");
    }

    let issues = diagnose(AppConfig::load(), ping).await;

    println!();
    if issues == 0 {
        println!("  🎉 All checks passed!");
        Ok(())
    } else {
        println!("  ⚠️  {issues} issue(s) found. See above for details.");
        Err(format!("doctor found {issues} issue(s)").into())
    }
}

/// Print one line per check and return how many failed.
async fn diagnose(loaded: Result<AppConfig, ConfigError>, ping: bool) -> usize {
    let config = match loaded {
        Ok(config) => {
            println!("  ✅ Configuration valid");
            config
        }
        Err(e) => {
            println!("  ❌ Configuration invalid: {e}");
            return 1;
        }
    };

    println!("     Provider: {}  Model: {}", config.provider, config.model);

    let planner = match StudyPlanner::from_config(&config) {
        Ok(planner) => {
            println!("  ✅ API key configured");
            planner
        }
        Err(e) => {
            println!("  ❌ {e}");
            return 1;
        }
    };

    if !ping {
        return 0;
    }

    match planner.ping().await {
        Ok(true) => {
            println!("  ✅ Provider reachable");
            0
        }
        Ok(false) => {
            println!("  ❌ Provider answered with an error (check the key)");
            1
        }
        Err(e) => {
            println!("  ❌ Provider unreachable: {e}");
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn invalid_config_counts_as_issue() {
        let loaded = Err(ConfigError::ValidationError("temperature out of range".into()));
        assert_eq!(diagnose(loaded, false).await, 1);
    }

    #[tokio::test]
    async fn missing_key_counts_as_issue() {
        assert_eq!(diagnose(Ok(AppConfig::default()), false).await, 1);
    }

    #[tokio::test]
    async fn configured_key_without_ping_passes() {
        let config = AppConfig {
            api_key: Some("gsk-test".into()),
            ..AppConfig::default()
        };
        assert_eq!(diagnose(Ok(config), false).await, 0);
    }

    #[tokio::test]
    async fn unreachable_provider_counts_as_issue() {
        let config = AppConfig {
            api_key: Some("gsk-test".into()),
            api_url: Some("http://127.0.0.1:1/v1".into()),
            request_timeout_secs: 2,
            ..AppConfig::default()
        };
        assert_eq!(diagnose(Ok(config), true).await, 1);
    }
}
