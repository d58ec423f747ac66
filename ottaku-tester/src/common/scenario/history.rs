use anyhow::Result;
use ottaku_core::{HistoryAction, Section, resolve_route};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::{BrowserScenario, CombinedScenario, ScenarioCtx, TestScenario};
use crate::browser::ensure_section;
use crate::logic::{FixtureSource, SiteHarness};

pub struct HistoryScenario;

const TARGETS: [&str; 7] = [
    "/novidades",
    "/novidades/anime",
    "/gaming",
    "/parceiros",
    "/quiz",
    "/ganhadores/quiz",
    "/apoie",
];

const VISITS: usize = 6;
const MOVES: usize = 12;

fn ensure_at(site: &SiteHarness, expected: &str) -> Result<()> {
    anyhow::ensure!(
        site.url() == expected,
        "history should be at {expected}, got {}",
        site.url()
    );
    let route = resolve_route(expected);
    anyhow::ensure!(
        site.router().route() == &route,
        "route for {expected} was not restored"
    );
    if route.section() == Section::Novidades {
        let category = route.category();
        let visible = site.visible_news();
        anyhow::ensure!(
            visible.iter().all(|item| category.matches(&item.category_key)),
            "{expected} shows news outside its category"
        );
        if category.is_all() {
            anyhow::ensure!(
                visible.len() == site.store().news().len(),
                "{expected} should show every news item"
            );
        }
    }
    Ok(())
}

/// A seeded walk of navigations followed by random back/forward steps,
/// checked against a model of the history stack.
fn history_check(seed: u64) -> Result<()> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut site = SiteHarness::open("/", FixtureSource::seeded(seed));
    let mut model = vec!["/".to_string()];

    while model.len() <= VISITS {
        let target = TARGETS[rng.gen_range(0..TARGETS.len())];
        let canonical = resolve_route(target).to_url();
        if model.last() == Some(&canonical) {
            continue;
        }
        let transition = site.navigate(target);
        anyhow::ensure!(
            transition.history == HistoryAction::Pushed,
            "{target} should push"
        );
        model.push(canonical);
    }
    anyhow::ensure!(
        site.router().history().entries() == model.as_slice(),
        "history entries {:?} differ from {model:?}",
        site.router().history().entries()
    );

    let mut index = model.len() - 1;
    let mut generation = site.router().generation();
    for _ in 0..MOVES {
        let go_back = index > 0 && (index + 1 == model.len() || rng.gen_bool(0.5));
        let transition = if go_back {
            index -= 1;
            site.back()
        } else {
            index += 1;
            site.forward()
        };
        let Some(transition) = transition else {
            anyhow::bail!("history step to entry {index} was refused");
        };
        anyhow::ensure!(
            transition.history == HistoryAction::Unchanged,
            "popping history must not write history"
        );
        anyhow::ensure!(
            transition.generation > generation,
            "generation must grow on every activation"
        );
        generation = transition.generation;
        ensure_at(&site, &model[index])?;
    }
    anyhow::ensure!(
        site.router().history().len() == model.len(),
        "back/forward changed the stack length"
    );

    while site.back().is_some() {}
    ensure_at(&site, "/")?;
    Ok(())
}

#[async_trait::async_trait]
impl BrowserScenario for HistoryScenario {
    async fn run_browser(&self, ctx: &ScenarioCtx<'_>) -> Result<()> {
        let page = &ctx.page;
        page.open("/").await?;

        page.click("header a[data-page='novidades']").await?;
        let news = page.wait_for_section("novidades").await?;
        ensure_section(&news, "novidades", "Novidades")?;

        page.click("header a[data-page='gaming']").await?;
        page.wait_for_section("gaming").await?;

        page.back().await?;
        let back = page.wait_for_section("novidades").await?;
        anyhow::ensure!(back.path == "/novidades", "back landed on {}", back.path);

        page.back().await?;
        let home = page.wait_for_section("home").await?;
        ensure_section(&home, "home", "Home")?;

        page.forward().await?;
        let forward = page.wait_for_section("novidades").await?;
        ensure_section(&forward, "novidades", "Novidades")?;
        if ctx.verbose {
            println!("  ↩️  back/forward restored {}", forward.path);
        }
        Ok(())
    }
}

impl CombinedScenario for HistoryScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(TestScenario::new("Back/Forward History", history_check))
    }
}
