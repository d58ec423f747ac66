use anyhow::Result;
use ottaku_core::{ContentKind, FetchTicket, ScrollTarget, Section};
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use std::collections::BTreeMap;

use super::{BrowserScenario, CombinedScenario, ScenarioCtx, TestScenario};
use crate::browser::ensure_section;
use crate::logic::fixtures::NEWEST_NEWS_TITLE;
use crate::logic::{FixtureSource, SiteHarness};

pub struct ResilienceScenario;

/// Rapid navigations whose responses arrive in a seeded order.
const RAPID: [&str; 3] = ["/novidades", "/quiz", "/"];

fn failing_collection(seed: u64) -> Result<()> {
    let source = FixtureSource::seeded(seed).failing(ContentKind::Gaming);
    let mut site = SiteHarness::open("/gaming", source);
    let store = site.store();
    anyhow::ensure!(
        store.is_loaded(ContentKind::Gaming) && !store.is_loading(ContentKind::Gaming),
        "a failed load should settle"
    );
    anyhow::ensure!(store.gaming().is_empty(), "a failed load shows nothing");

    site.navigate("/parceiros");
    anyhow::ensure!(
        site.store().partners().len() == 3,
        "one failing collection must not hold back the others"
    );
    Ok(())
}

fn out_of_order_responses(seed: u64) -> Result<()> {
    let mut site = SiteHarness::open("/", FixtureSource::seeded(seed));
    let mut tickets: Vec<FetchTicket> = RAPID
        .iter()
        .flat_map(|target| site.navigate_deferred(target).tickets)
        .collect();
    tickets.shuffle(&mut ChaCha8Rng::seed_from_u64(seed));

    let mut newest: BTreeMap<ContentKind, u64> = BTreeMap::new();
    for ticket in tickets {
        let latest = newest.entry(ticket.kind()).or_default();
        let expected = ticket.generation >= *latest;
        if expected {
            *latest = ticket.generation;
        }
        let accepted = site.deliver(ticket);
        anyhow::ensure!(
            accepted == expected,
            "{} from generation {} accepted={accepted}, expected {expected}",
            ticket.kind(),
            ticket.generation
        );
    }

    let store = site.store();
    anyhow::ensure!(
        !store.is_loading(ContentKind::News),
        "news should settle once every response arrived"
    );
    let news = store.news();
    anyhow::ensure!(
        news.len() == 3 && news[0].title == NEWEST_NEWS_TITLE,
        "home should end with its own capped news, got {} items",
        news.len()
    );
    anyhow::ensure!(site.section() == Section::Home, "last navigation wins");
    Ok(())
}

fn legacy_show_page(seed: u64) -> Result<()> {
    let mut site = SiteHarness::open("/", FixtureSource::seeded(seed));
    let donors = site.show_page("doadores");
    anyhow::ensure!(
        site.url() == "/apoie" && donors.scroll == ScrollTarget::Anchor("doadores"),
        "showPage('doadores') should scroll to the donors block at /apoie"
    );
    site.show_page("#Gaming");
    anyhow::ensure!(site.url() == "/gaming", "showPage('#Gaming') went to {}", site.url());
    site.show_page("bogus");
    anyhow::ensure!(site.url() == "/", "unknown pages fall back home");
    Ok(())
}

fn resilience_check(seed: u64) -> Result<()> {
    failing_collection(seed)?;
    out_of_order_responses(seed)?;
    legacy_show_page(seed)
}

#[async_trait::async_trait]
impl BrowserScenario for ResilienceScenario {
    async fn run_browser(&self, ctx: &ScenarioCtx<'_>) -> Result<()> {
        let page = &ctx.page;
        page.open("/#parceiros").await?;
        let legacy = page
            .wait_for("the legacy hash to be rewritten", |snap| snap.path == "/parceiros")
            .await?;
        ensure_section(&legacy, "parceiros", "Parceiros")?;

        page.call_global("showPage", Some("doadores")).await?;
        let donors = page.wait_for("/apoie", |snap| snap.path == "/apoie").await?;
        ensure_section(&donors, "home", "Apoie")?;

        page.click("#hamburger").await?;
        page.wait_for("the menu to open", |snap| snap.menu_open).await?;
        page.press_escape().await?;
        page.wait_for("Escape to close the menu", |snap| !snap.menu_open)
            .await?;

        page.call_global("toggleMenu", None).await?;
        page.wait_for("toggleMenu to open the menu", |snap| snap.menu_open)
            .await?;
        page.click("#slideMenu a[data-page='quiz']").await?;
        let quiz = page
            .wait_for("the menu link to close the menu", |snap| {
                snap.section.as_deref() == Some("quiz") && !snap.menu_open
            })
            .await?;
        ensure_section(&quiz, "quiz", "Quiz")?;
        if ctx.verbose {
            println!("  🛟 legacy entry points and menu handling ok");
        }
        Ok(())
    }
}

impl CombinedScenario for ResilienceScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(TestScenario::new("Failing and Stale Loads", resilience_check))
    }
}
