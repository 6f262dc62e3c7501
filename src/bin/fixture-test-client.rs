use anyhow::Result;
use clap::Parser;
use colored::*;

use tournament_testing_tools::config::Config;
use tournament_testing_tools::output::print_scenario_summary;
use tournament_testing_tools::scenarios;

#[derive(Parser)]
#[command(name = "fixture-test-client")]
#[command(about = "Fixture Smoke Testing Tool")]
struct Cli {
    #[command(flatten)]
    config: Config,

    /// Tournament ID used by the phase payload scenario
    #[arg(long, default_value = "tour-smoke-test")]
    tournament_id: String,

    /// Test scenario to run
    #[arg(long, value_enum)]
    scenario: ScenarioChoice,

    /// Enable verbose output
    #[arg(long, short)]
    verbose: bool,
}

#[derive(clap::ValueEnum, Clone)]
enum ScenarioChoice {
    /// Check phase payload generation without touching the backend
    PhasePayload,
    /// Create and delete a stub organization against the backend
    OrganizationLifecycle,
    /// Run all scenarios
    All,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before parsing so env-backed config args see it
    Config::load_env();
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    }

    println!("{}", "=== TEST PHASE ===".bright_white().bold());

    let mut results = Vec::new();

    match cli.scenario {
        ScenarioChoice::PhasePayload => {
            results.push(scenarios::test_phase_payload(&cli.tournament_id));
        }
        ScenarioChoice::OrganizationLifecycle => {
            results.push(scenarios::test_organization_lifecycle(&cli.config).await?);
        }
        ScenarioChoice::All => {
            results.push(scenarios::test_phase_payload(&cli.tournament_id));
            results.push(scenarios::test_organization_lifecycle(&cli.config).await?);
        }
    }

    println!("\n{}", "=== RESULTS ===".bright_white().bold());
    print_scenario_summary(&results);

    let all_passed = results.iter().all(|r| r.passed);

    if all_passed {
        println!("\n{}", "All tests passed! ✓".bright_green().bold());
    } else {
        println!("\n{}", "Some tests failed! ✗".bright_red().bold());
    }

    std::process::exit(if all_passed { 0 } else { 1 });
}
