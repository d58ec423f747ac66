mod browser;
mod common;
mod logic;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::{Path, PathBuf};
use std::time::Instant;

use browser::{BrowserConfig, BrowserKind, SitePage, new_session};
use common::scenario::{SCENARIOS, ScenarioCtx, get_scenario, list_scenarios};
use common::{artifacts_dir, capture_artifacts, split_csv};
use logic::{LogicTester, ScenarioResult};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TestMode {
    /// Router and content logic against fixture data (fast, no browser)
    Logic,
    /// Browser automation against a running site
    Browser,
    /// Run both logic and browser tests
    Both,
}

#[derive(Debug, Parser)]
#[command(name = "ottaku-tester", version)]
#[command(about = "Automated QA for the Ottaku Brasil site - router logic and browser automation")]
struct Args {
    /// Test mode: logic (fast), browser (live site), or both
    #[arg(long, value_enum, default_value_t = TestMode::Logic)]
    mode: TestMode,

    /// Scenarios to run (comma-separated, or `all`)
    #[arg(long, default_value = "smoke")]
    scenarios: String,

    /// List all available scenarios and exit
    #[arg(long)]
    list_scenarios: bool,

    /// Fixture seeds to run (comma-separated, logic mode only)
    #[arg(long, default_value = "1337")]
    seeds: String,

    /// Number of iterations per scenario and seed (logic mode only)
    #[arg(long, default_value_t = 10)]
    iterations: usize,

    /// Output report format
    #[arg(long, default_value = "console")]
    #[arg(value_parser = ["json", "markdown", "console"])]
    report: String,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Browsers to run (chrome,edge,firefox,safari) - browser mode only
    #[arg(long, default_value = "chrome")]
    browsers: String,

    /// Base URL of the deployed site
    #[arg(long, default_value = "http://localhost:8080/")]
    base_url: String,

    /// Artifacts directory for screenshots and page dumps
    #[arg(long, default_value = "target/test-artifacts")]
    artifacts_dir: String,

    /// Connect to a Selenium Grid hub instead of local drivers
    #[arg(long)]
    hub: Option<String>,

    /// Show browser windows instead of running headless
    #[arg(long)]
    windowed: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if maybe_list_scenarios(&args)? {
        return Ok(());
    }

    announce_banner();

    let start_time = Instant::now();
    let scenarios = expand_scenarios(&args.scenarios);
    let seeds = parse_seeds(&args.seeds)?;

    let logic_results = run_logic_scenarios(&args, &scenarios, &seeds);
    let browser_failures = run_browser_scenarios(&args, &scenarios).await?;

    write_reports(&args, &logic_results, start_time)?;

    if browser_failures > 0 || logic_results.iter().any(|r| !r.passed) {
        std::process::exit(1);
    }

    Ok(())
}

fn maybe_list_scenarios(args: &Args) -> Result<bool> {
    if !args.list_scenarios {
        return Ok(false);
    }
    let mut out = open_output(args.output.as_deref())?;
    writeln!(out, "Available scenarios:")?;
    for (key, description) in list_scenarios() {
        writeln!(out, "  {key:15} - {description}")?;
    }
    out.flush()?;
    Ok(true)
}

fn announce_banner() {
    println!("{}", "🎌 Ottaku Automated Tester".bright_cyan().bold());
    println!("{}", "================================".cyan());
}

fn expand_scenarios(scenarios_arg: &str) -> Vec<String> {
    let mut scenarios = split_csv(scenarios_arg);
    if scenarios.iter().any(|s| s == "all") {
        scenarios.retain(|s| s != "all");
        for (key, _) in SCENARIOS {
            if !scenarios.iter().any(|s| s == key) {
                scenarios.push(key.to_string());
            }
        }
    }
    scenarios
}

fn parse_seeds(raw: &str) -> Result<Vec<u64>> {
    split_csv(raw)
        .iter()
        .map(|s| s.parse().with_context(|| format!("invalid seed {s:?}")))
        .collect()
}

fn build_browser_config(args: &Args) -> BrowserConfig {
    BrowserConfig {
        headless: !args.windowed,
        implicit_wait_secs: 3,
        remote_hub: args.hub.clone(),
    }
}

fn run_logic_scenarios(args: &Args, scenarios: &[String], seeds: &[u64]) -> Vec<ScenarioResult> {
    let mut results = Vec::new();
    if !matches!(args.mode, TestMode::Logic | TestMode::Both) {
        return results;
    }

    println!("{}", "🧠 Running Logic Tests".bright_yellow().bold());
    println!("{}", "-".repeat(30).yellow());

    let logic_tester = LogicTester::new(args.verbose);
    for scenario_name in scenarios {
        let Some(combined) = get_scenario(scenario_name) else {
            eprintln!("⚠️  Unknown scenario: {}", scenario_name.yellow());
            continue;
        };
        if let Some(logic_scenario) = combined.as_logic_scenario() {
            results.extend(logic_tester.run_scenario(&logic_scenario, seeds, args.iterations));
        } else {
            eprintln!(
                "⚠️  Scenario {} has no logic test implementation",
                scenario_name.yellow()
            );
        }
    }
    results
}

/// Returns the number of failed browser scenario runs.
async fn run_browser_scenarios(args: &Args, scenarios: &[String]) -> Result<usize> {
    if !matches!(args.mode, TestMode::Browser | TestMode::Both) {
        return Ok(0);
    }

    println!("{}", "🌐 Running Browser Tests".bright_blue().bold());
    println!("{}", "-".repeat(30).blue());

    let mut failures = 0;
    for browser_name in split_csv(&args.browsers) {
        let Some(kind) = BrowserKind::parse(&browser_name) else {
            eprintln!("⚠️  Unknown browser: {}", browser_name.yellow());
            continue;
        };

        let driver = match new_session(kind, &build_browser_config(args)).await {
            Ok(d) => d,
            Err(e) => {
                eprintln!("❌ Could not start {kind:?}: {e}");
                failures += 1;
                continue;
            }
        };

        failures += run_browser_scenarios_for_driver(args, scenarios, kind, &driver).await;
        if let Err(e) = driver.quit().await {
            log::warn!("could not close {kind:?} session: {e}");
        }
    }

    Ok(failures)
}

async fn run_browser_scenarios_for_driver(
    args: &Args,
    scenarios: &[String],
    kind: BrowserKind,
    driver: &thirtyfour::WebDriver,
) -> usize {
    let label = kind.label();
    let mut failures = 0;
    for scenario_name in scenarios {
        let Some(scenario) = get_scenario(scenario_name) else {
            continue;
        };
        let ctx = ScenarioCtx {
            page: SitePage::new(driver, &args.base_url),
            verbose: args.verbose,
        };

        let scenario_start = Instant::now();
        match scenario.run_browser(&ctx).await {
            Ok(()) => {
                println!(
                    "✅ [{}] {scenario_name} - {:?}",
                    label.green(),
                    scenario_start.elapsed()
                );
            }
            Err(e) => {
                failures += 1;
                eprintln!(
                    "❌ [{}] {scenario_name} - {:?}: {e:#}",
                    label.red(),
                    scenario_start.elapsed()
                );
                let dir = artifacts_dir(&args.artifacts_dir, &label, scenario_name);
                if let Err(err) = capture_artifacts(&ctx.page, driver, &dir, &e).await {
                    log::warn!("could not save artifacts to {dir}: {err:#}");
                }
            }
        }
    }
    failures
}

fn write_reports(args: &Args, results: &[ScenarioResult], start_time: Instant) -> Result<()> {
    let mut out = open_output(args.output.as_deref())?;

    match (args.report.as_str(), results.is_empty()) {
        ("json", _) => logic::reports::generate_json_report(&mut out, results)?,
        ("markdown", true) => {
            writeln!(out, "# Ottaku Logic Test Results\n\n_No scenarios executed._")?;
        }
        ("markdown", false) => logic::reports::generate_markdown_report(&mut out, results)?,
        (_, true) => writeln!(out, "No logic scenarios executed.")?,
        (_, false) => {
            logic::reports::generate_console_report(&mut out, results, start_time.elapsed())?;
            writeln!(out, "🏁 Total time: {:?}", start_time.elapsed())?;
        }
    }

    out.flush()?;
    Ok(())
}

/// Report sink: the `--output` file, or stdout.
fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    let Some(path) = path else {
        return Ok(Box::new(BufWriter::new(stdout())));
    };
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    Ok(Box::new(BufWriter::new(file)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn base_args() -> Args {
        Args {
            mode: TestMode::Logic,
            scenarios: "smoke".to_string(),
            list_scenarios: false,
            seeds: "1337".to_string(),
            iterations: 1,
            report: "json".to_string(),
            verbose: false,
            output: None,
            browsers: "chrome".to_string(),
            base_url: "http://localhost:8080/".to_string(),
            artifacts_dir: "target/test-artifacts".to_string(),
            hub: None,
            windowed: false,
        }
    }

    fn temp_output(label: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "ottaku-main-{label}-{}",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos()
        ))
    }

    #[test]
    fn expands_all_scenarios_keyword() {
        let scenarios = expand_scenarios("history,all");
        assert_eq!(scenarios[0], "history");
        assert_eq!(scenarios.len(), SCENARIOS.len());
    }

    #[test]
    fn expand_scenarios_without_all_preserves_order() {
        assert_eq!(expand_scenarios("filters, smoke"), vec!["filters", "smoke"]);
    }

    #[test]
    fn seeds_must_be_numbers() {
        assert_eq!(parse_seeds("1, 2").expect("seeds"), vec![1, 2]);
        assert!(parse_seeds("one").is_err());
    }

    #[test]
    fn logic_run_covers_each_seed() {
        let args = base_args();
        let results = run_logic_scenarios(&args, &expand_scenarios("smoke,deep-links"), &[1, 2]);
        assert_eq!(results.len(), 4);
        assert!(results.iter().all(|r| r.passed), "{results:?}");
    }

    #[test]
    fn run_logic_scenarios_skips_when_not_enabled() {
        let mut args = base_args();
        args.mode = TestMode::Browser;
        assert!(run_logic_scenarios(&args, &["smoke".to_string()], &[1]).is_empty());
    }

    #[test]
    fn write_reports_emits_json_output() {
        let mut args = base_args();
        let path = temp_output("json");
        args.output = Some(path.clone());
        let result = ScenarioResult {
            scenario_name: "Smoke Test".to_string(),
            seed: 1,
            passed: true,
            iterations_run: 1,
            successful_iterations: 1,
            failures: Vec::new(),
            average_duration: Duration::from_millis(2),
            performance_data: vec![Duration::from_millis(2)],
        };
        write_reports(&args, &[result], Instant::now()).expect("report");
        let text = std::fs::read_to_string(path).expect("read report");
        let parsed: serde_json::Value = serde_json::from_str(&text).expect("json");
        assert_eq!(parsed[0]["scenario_name"], "Smoke Test");
    }

    #[test]
    fn write_reports_markdown_empty_results() {
        let mut args = base_args();
        let path = temp_output("md");
        args.output = Some(path.clone());
        args.report = "markdown".to_string();
        write_reports(&args, &[], Instant::now()).expect("report");
        let text = std::fs::read_to_string(path).expect("read report");
        assert!(text.contains("_No scenarios executed._"));
    }

    #[test]
    fn maybe_list_scenarios_writes_output() {
        let mut args = base_args();
        let path = temp_output("list");
        args.list_scenarios = true;
        args.output = Some(path.clone());
        assert!(maybe_list_scenarios(&args).expect("list"));
        let text = std::fs::read_to_string(path).expect("read list");
        for (key, _) in SCENARIOS {
            assert!(text.contains(key), "{key} missing");
        }
    }

    #[test]
    fn build_browser_config_respects_headless_and_hub() {
        let mut args = base_args();
        args.windowed = true;
        args.hub = Some("http://grid:4444".to_string());
        let cfg = build_browser_config(&args);
        assert!(!cfg.headless);
        assert_eq!(cfg.remote_hub.as_deref(), Some("http://grid:4444"));
    }

    #[tokio::test]
    async fn run_browser_scenarios_skips_when_not_enabled() {
        let args = base_args();
        let failures = run_browser_scenarios(&args, &["smoke".to_string()])
            .await
            .expect("skip");
        assert_eq!(failures, 0);
    }

    #[tokio::test]
    async fn run_browser_scenarios_ignores_unknown_browser() {
        let mut args = base_args();
        args.mode = TestMode::Browser;
        args.browsers = "lynx".to_string();
        let failures = run_browser_scenarios(&args, &["smoke".to_string()])
            .await
            .expect("unknown browser skipped");
        assert_eq!(failures, 0);
    }
}
