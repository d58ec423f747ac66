use anyhow::Result;

use crate::browser::SitePage;

pub mod deep_links;
pub mod filters;
pub mod history;
pub mod resilience;
pub mod smoke;

#[derive(Debug, Clone)]
pub struct ScenarioCtx<'a> {
    pub page: SitePage<'a>,
    pub verbose: bool,
}

/// A logic check run once per iteration seed.
pub type LogicCheck = fn(u64) -> Result<()>;

#[derive(Debug, Clone)]
pub struct TestScenario {
    pub name: String,
    pub check: LogicCheck,
}

impl TestScenario {
    #[must_use]
    pub fn new(name: impl Into<String>, check: LogicCheck) -> Self {
        Self {
            name: name.into(),
            check,
        }
    }
}

#[async_trait::async_trait]
pub trait BrowserScenario {
    async fn run_browser(&self, ctx: &ScenarioCtx<'_>) -> Result<()>;
}

// Scenario with both a logic run and a browser run
pub trait CombinedScenario: BrowserScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario>;
}

/// Every scenario key, in the order `all` runs them.
pub const SCENARIOS: [(&str, &str); 5] = [
    ("smoke", "Smoke Test"),
    ("deep-links", "Deep Links and Canonical URLs"),
    ("history", "Back/Forward History"),
    ("filters", "Category and Search Filters"),
    ("resilience", "Failing and Stale Loads"),
];

pub fn get_scenario(name: &str) -> Option<Box<dyn CombinedScenario + Send + Sync>> {
    match name.trim().to_lowercase().as_str() {
        "smoke" => Some(Box::new(smoke::SmokeScenario)),
        "deep-links" | "links" => Some(Box::new(deep_links::DeepLinksScenario)),
        "history" => Some(Box::new(history::HistoryScenario)),
        "filters" | "filter" => Some(Box::new(filters::FiltersScenario)),
        "resilience" | "stale" => Some(Box::new(resilience::ResilienceScenario)),
        _ => None,
    }
}

pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    SCENARIOS.to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_scenario_resolves_with_a_logic_run() {
        for (key, description) in list_scenarios() {
            let scenario = get_scenario(key).unwrap_or_else(|| panic!("{key} missing"));
            let logic = scenario.as_logic_scenario().expect("logic scenario");
            assert_eq!(logic.name, description);
        }
        assert!(get_scenario("unknown").is_none());
    }

    #[test]
    fn logic_runs_pass_for_several_seeds() {
        for (key, _) in list_scenarios() {
            let logic = get_scenario(key)
                .and_then(|s| s.as_logic_scenario())
                .expect("logic scenario");
            for seed in [1, 42, 1337] {
                if let Err(err) = (logic.check)(seed) {
                    panic!("{key} failed for seed {seed}: {err:#}");
                }
            }
        }
    }
}
