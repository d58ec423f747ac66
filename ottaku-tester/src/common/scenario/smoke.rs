use anyhow::Result;
use ottaku_core::{ContentKind, Section};

use super::{BrowserScenario, CombinedScenario, ScenarioCtx, TestScenario};
use crate::browser::ensure_section;
use crate::browser::page::title_pattern;
use crate::logic::fixtures::NEWEST_NEWS_TITLE;
use crate::logic::{FixtureSource, SiteHarness};

pub struct SmokeScenario;

/// Home shows capped, newest-first content and every section is reachable.
fn smoke_check(seed: u64) -> Result<()> {
    let mut site = SiteHarness::open("/", FixtureSource::seeded(seed));
    anyhow::ensure!(site.section() == Section::Home, "startup should show home");
    anyhow::ensure!(
        site.title() == "Home | Ottaku Brasil",
        "unexpected home title {:?}",
        site.title()
    );

    let store = site.store();
    let news = store.news();
    anyhow::ensure!(news.len() == 3, "home should cap news at 3, got {}", news.len());
    anyhow::ensure!(
        news[0].title == NEWEST_NEWS_TITLE,
        "newest news should lead, got {:?}",
        news[0].title
    );
    anyhow::ensure!(
        store.quiz_winners().len() == 3,
        "home should cap quiz winners at 3"
    );
    anyhow::ensure!(
        store.settings().announcement.is_some(),
        "settings should load at startup"
    );
    anyhow::ensure!(
        !ContentKind::ALL
            .into_iter()
            .any(|kind| site.store().is_loading(kind)),
        "nothing should still be loading"
    );

    for section in Section::ALL {
        let transition = site.navigate(section.base_path());
        anyhow::ensure!(
            transition.section() == section,
            "{} should activate {section}",
            section.base_path()
        );
        anyhow::ensure!(
            title_pattern(section.title())?.is_match(site.title()),
            "unexpected title {:?} on {section}",
            site.title()
        );
    }
    Ok(())
}

#[async_trait::async_trait]
impl BrowserScenario for SmokeScenario {
    async fn run_browser(&self, ctx: &ScenarioCtx<'_>) -> Result<()> {
        let home = ctx.page.open("/").await?;
        ensure_section(&home, Section::Home.slug(), Section::Home.title())?;
        if ctx.verbose {
            println!("  🌐 Home loaded: {}", home.title);
        }

        for section in Section::ALL {
            let snapshot = ctx.page.open(section.base_path()).await?;
            ensure_section(&snapshot, section.slug(), section.title())?;
            anyhow::ensure!(
                snapshot.path == section.base_path(),
                "{} loaded at {}",
                section.slug(),
                snapshot.path
            );
        }
        Ok(())
    }
}

impl CombinedScenario for SmokeScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(TestScenario::new("Smoke Test", smoke_check))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smoke_check_passes_on_fixture_content() {
        smoke_check(1337).expect("smoke ok");
    }

    #[test]
    fn smoke_scenario_exposes_logic_check() {
        let logic = SmokeScenario.as_logic_scenario().expect("logic scenario");
        assert_eq!(logic.name, "Smoke Test");
    }
}
