use anyhow::{Context, Result};
use colored::*;
use std::time::Instant;

use crate::config::Config;
use crate::fixtures::organizations::{delete_stub_organization, stub_organization};
use crate::fixtures::phases::phase_payload;
use crate::output::ScenarioReport;

/// Stubs an organization against the live backend, then deletes it again.
pub async fn test_organization_lifecycle(config: &Config) -> Result<ScenarioReport> {
    let start = Instant::now();

    println!(
        "\n{}",
        "=== TEST: Organization Lifecycle ===".bright_cyan().bold()
    );

    println!("{} Creating stub organization...", "→".blue());
    let organization = stub_organization(config).await?;

    let organization_id = organization["id"]
        .as_str()
        .context("No organization ID in creation response")?
        .to_string();
    println!(
        "{} Organization created (ID: {})",
        "✓".green(),
        organization_id
    );

    println!("{} Deleting stub organization...", "→".blue());
    let response = delete_stub_organization(config, &organization_id).await?;
    println!(
        "{} Organization deleted (status: {})",
        "✓".green(),
        response.status()
    );

    Ok(ScenarioReport::passed(
        "organization_lifecycle",
        Some(organization_id),
        start.elapsed(),
    ))
}

/// Offline checks on the phase payload generator.
pub fn test_phase_payload(tournament_id: &str) -> ScenarioReport {
    let start = Instant::now();

    println!("\n{}", "=== TEST: Phase Payload ===".bright_cyan().bold());

    let first = phase_payload(tournament_id);
    let second = phase_payload(tournament_id);

    let mut failures = Vec::new();

    if first.phase.tournament_id != tournament_id {
        failures.push(format!(
            "tournament_id mismatch: expected {}, got {}",
            tournament_id, first.phase.tournament_id
        ));
    }

    match serde_json::to_value(&first) {
        Ok(value) => {
            let phase_type = value["phase"]["type"].as_str().unwrap_or_default();
            if phase_type != "elimination" && phase_type != "draw" {
                failures.push(format!("unexpected phase type: {}", phase_type));
            }
        }
        Err(e) => failures.push(format!("payload failed to serialize: {}", e)),
    }

    if first.phase.title == second.phase.title {
        failures.push(format!("duplicate random title: {}", first.phase.title));
    }

    if failures.is_empty() {
        println!("{} Payload shape verified correctly", "✓".green());
        ScenarioReport::passed("phase_payload", None, start.elapsed())
    } else {
        println!("{} Payload checks failed", "✗".red());
        ScenarioReport::failed("phase_payload", failures.join("; "), start.elapsed())
    }
}
