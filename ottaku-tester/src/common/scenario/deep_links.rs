use anyhow::Result;
use ottaku_core::{HistoryAction, resolve_route};
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use super::{BrowserScenario, CombinedScenario, ScenarioCtx, TestScenario};
use crate::browser::ensure_section;
use crate::logic::{FixtureSource, SiteHarness};

pub struct DeepLinksScenario;

struct DeepLink {
    input: &'static str,
    canonical: &'static str,
    section: &'static str,
    heading: &'static str,
}

const fn link(
    input: &'static str,
    canonical: &'static str,
    section: &'static str,
    heading: &'static str,
) -> DeepLink {
    DeepLink {
        input,
        canonical,
        section,
        heading,
    }
}

const DEEP_LINKS: [DeepLink; 10] = [
    link("/Novidades?cat=Anime", "/novidades/anime", "novidades", "Novidades"),
    link("/ganhadores/Quiz", "/ganhadores/quiz", "ganhadores", "Ganhadores"),
    link(
        "/novidades?search=one+piece",
        "/novidades?q=one%20piece",
        "novidades",
        "Novidades",
    ),
    link("/#parceiros", "/parceiros", "parceiros", "Parceiros"),
    link("/#doadores", "/apoie", "home", "Apoie"),
    link("/apoie", "/apoie", "home", "Apoie"),
    link("/parceiros/", "/parceiros", "parceiros", "Parceiros"),
    link("/home", "/", "home", "Home"),
    link("/nao-existe", "/", "home", "Home"),
    link("/gaming/extra", "/", "home", "Home"),
];

fn check_link(site: &SiteHarness, link: &DeepLink) -> Result<()> {
    anyhow::ensure!(
        site.url() == link.canonical,
        "{} should settle on {}, got {}",
        link.input,
        link.canonical,
        site.url()
    );
    anyhow::ensure!(
        site.section().slug() == link.section,
        "{} should show #{}, got #{}",
        link.input,
        link.section,
        site.section().slug()
    );
    anyhow::ensure!(
        resolve_route(&site.url()) == *site.router().route(),
        "{} does not round-trip through its URL",
        site.url()
    );
    let heading_ok = crate::browser::page::title_pattern(link.heading)?.is_match(site.title());
    anyhow::ensure!(
        heading_ok,
        "{} has title {:?}",
        link.input,
        site.title()
    );
    Ok(())
}

/// Every deep link lands on its canonical URL, both at startup and when
/// followed in a seeded order from a running site.
fn deep_links_check(seed: u64) -> Result<()> {
    for link in &DEEP_LINKS {
        let site = SiteHarness::open(link.input, FixtureSource::seeded(seed));
        check_link(&site, link)?;
        anyhow::ensure!(
            site.router().history().len() == 1,
            "startup on {} must replace, not push",
            link.input
        );
    }

    let mut order: Vec<&DeepLink> = DEEP_LINKS.iter().collect();
    order.shuffle(&mut ChaCha8Rng::seed_from_u64(seed));
    let mut site = SiteHarness::open("/", FixtureSource::seeded(seed));
    for link in order {
        let before = site.url();
        let transition = site.navigate(link.input);
        check_link(&site, link)?;
        let expected = if before == link.canonical {
            HistoryAction::Unchanged
        } else {
            HistoryAction::Pushed
        };
        anyhow::ensure!(
            transition.history == expected,
            "{} from {before}: expected {expected:?}, got {:?}",
            link.input,
            transition.history
        );
    }
    Ok(())
}

#[async_trait::async_trait]
impl BrowserScenario for DeepLinksScenario {
    async fn run_browser(&self, ctx: &ScenarioCtx<'_>) -> Result<()> {
        for link in &DEEP_LINKS {
            ctx.page.open(link.input).await?;
            let snapshot = ctx
                .page
                .wait_for(&format!("{} to settle", link.canonical), |snap| {
                    format!("{}{}", snap.path, snap.query) == link.canonical
                })
                .await?;
            ensure_section(&snapshot, link.section, link.heading)?;
            if ctx.verbose {
                println!("  🔗 {} -> {}", link.input, link.canonical);
            }
        }
        Ok(())
    }
}

impl CombinedScenario for DeepLinksScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(TestScenario::new(
            "Deep Links and Canonical URLs",
            deep_links_check,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deep_links_settle_for_any_order() {
        for seed in 0..5 {
            deep_links_check(seed).expect("deep links ok");
        }
    }

    #[test]
    fn canonical_urls_are_fixed_points() {
        for link in &DEEP_LINKS {
            assert_eq!(resolve_route(link.canonical).to_url(), link.canonical);
        }
    }
}
