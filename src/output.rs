use colored::*;
use std::time::Duration;

/// Outcome of one fixture scenario run.
#[derive(Debug)]
pub struct ScenarioReport {
    pub scenario: String,
    pub passed: bool,
    /// Id of the remote resource the scenario stubbed, when it touched one.
    pub resource_id: Option<String>,
    pub message: Option<String>,
    pub duration: Duration,
}

impl ScenarioReport {
    pub fn passed(scenario: &str, resource_id: Option<String>, duration: Duration) -> Self {
        Self {
            scenario: scenario.to_string(),
            passed: true,
            resource_id,
            message: None,
            duration,
        }
    }

    pub fn failed(scenario: &str, message: String, duration: Duration) -> Self {
        Self {
            scenario: scenario.to_string(),
            passed: false,
            resource_id: None,
            message: Some(message),
            duration,
        }
    }
}

pub fn print_scenario_summary(reports: &[ScenarioReport]) {
    println!("\n{}", "=== FIXTURE SUMMARY ===".bright_white().bold());

    for report in reports {
        let status = if report.passed {
            "PASS".green().bold()
        } else {
            "FAIL".red().bold()
        };

        let resource = match &report.resource_id {
            Some(id) => format!(" [stubbed: {}]", id),
            None => String::new(),
        };

        println!(
            "[{}] {}{} ({:?})",
            status,
            report.scenario,
            resource.dimmed(),
            report.duration
        );

        if let Some(msg) = &report.message {
            println!("      {}", msg.dimmed());
        }
    }

    let passed = reports.iter().filter(|r| r.passed).count();
    println!(
        "\n{} {}/{} scenarios passed",
        "Results:".bold(),
        passed.to_string().green(),
        reports.len()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passed_report_carries_resource_id() {
        let report = ScenarioReport::passed(
            "organization_lifecycle",
            Some("org-42".to_string()),
            Duration::from_millis(120),
        );
        assert!(report.passed);
        assert_eq!(report.resource_id.as_deref(), Some("org-42"));
        assert!(report.message.is_none());
    }

    #[test]
    fn test_failed_report_carries_message() {
        let report = ScenarioReport::failed(
            "phase_payload",
            "duplicate random title".to_string(),
            Duration::from_millis(3),
        );
        assert!(!report.passed);
        assert!(report.resource_id.is_none());
        assert_eq!(report.message.as_deref(), Some("duplicate random title"));
    }
}
