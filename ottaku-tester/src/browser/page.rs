use anyhow::{Context, Result, bail};
use ottaku_core::constants::SITE_NAME;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thirtyfour::prelude::*;

const POLL_ATTEMPTS: usize = 20;
const POLL_INTERVAL: Duration = Duration::from_millis(150);

const SNAPSHOT_SCRIPT: &str = r"
const active = document.querySelector('section.page.active');
const menu = document.getElementById('slideMenu');
const cards = Array.from(document.querySelectorAll('#newsGrid .news-card:not(.hidden)'));
return {
  section: active ? active.id : null,
  title: document.title,
  path: window.location.pathname,
  query: window.location.search,
  menuOpen: !!(menu && menu.classList.contains('active')),
  visibleNews: cards.map((card) => card.dataset.category || '')
};
";

/// What the page shows right now, read in one script round trip.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSnapshot {
    pub section: Option<String>,
    pub title: String,
    pub path: String,
    pub query: String,
    pub menu_open: bool,
    pub visible_news: Vec<String>,
}

/// Document title pattern for a heading, with or without a category prefix.
pub fn title_pattern(heading: &str) -> Result<Regex> {
    let pattern = format!(
        r"^(?:.+ · )?{} \| {}$",
        regex::escape(heading),
        regex::escape(SITE_NAME)
    );
    Regex::new(&pattern).context("building title pattern")
}

/// Path prefix of a deployment, `""` when served from the host root.
pub fn base_path(base_url: &str) -> &str {
    let without_scheme = base_url
        .split_once("://")
        .map_or(base_url, |(_, rest)| rest);
    without_scheme
        .find('/')
        .map_or("", |i| without_scheme[i..].trim_end_matches('/'))
}

#[derive(Debug, Clone)]
pub struct SitePage<'a> {
    driver: &'a WebDriver,
    base_url: String,
}

impl<'a> SitePage<'a> {
    pub fn new(driver: &'a WebDriver, base_url: &str) -> Self {
        Self {
            driver,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn url_for(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Load `path` and wait for the router to activate a section.
    pub async fn open(&self, path: &str) -> Result<PageSnapshot> {
        self.driver.goto(self.url_for(path)).await?;
        self.wait_for("a section to become active", |snap| snap.section.is_some())
            .await
    }

    pub async fn snapshot(&self) -> Result<PageSnapshot> {
        let ret = self.driver.execute(SNAPSHOT_SCRIPT, vec![]).await?;
        let mut snapshot: PageSnapshot =
            serde_json::from_value(ret.json().clone()).context("parsing page snapshot")?;
        let prefix = base_path(&self.base_url);
        if let Some(rest) = snapshot.path.strip_prefix(prefix) {
            snapshot.path = if rest.is_empty() { "/".to_string() } else { rest.to_string() };
        }
        Ok(snapshot)
    }

    /// Poll until `ready` holds, failing with the last snapshot otherwise.
    pub async fn wait_for(
        &self,
        what: &str,
        ready: impl Fn(&PageSnapshot) -> bool,
    ) -> Result<PageSnapshot> {
        let mut last = PageSnapshot::default();
        for _ in 0..POLL_ATTEMPTS {
            last = self.snapshot().await?;
            if ready(&last) {
                return Ok(last);
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
        bail!("timed out waiting for {what}; page was {last:?}")
    }

    /// Wait until the section with element id `section` is the active one.
    pub async fn wait_for_section(&self, section: &str) -> Result<PageSnapshot> {
        self.wait_for(&format!("#{section} to be active"), |snap| {
            snap.section.as_deref() == Some(section)
        })
        .await
    }

    /// Click through the DOM so the document-level delegation sees a plain
    /// left click regardless of layout.
    pub async fn click(&self, selector: &str) -> Result<()> {
        let found = self
            .driver
            .execute(
                "const el = document.querySelector(arguments[0]); if (el) { el.click(); } return !!el;",
                vec![selector.into()],
            )
            .await?;
        if !found.json().as_bool().unwrap_or(false) {
            bail!("no element matches {selector}");
        }
        Ok(())
    }

    /// Call one of the `window` functions kept for inline handlers.
    pub async fn call_global(&self, name: &str, arg: Option<&str>) -> Result<()> {
        let script = format!(
            "if (typeof window.{name} !== 'function') {{ return false; }} window.{name}(arguments[0]); return true;"
        );
        let args = vec![arg.map_or(serde_json::Value::Null, Into::into)];
        let ret = self.driver.execute(&script, args).await?;
        if !ret.json().as_bool().unwrap_or(false) {
            bail!("window.{name} is not installed");
        }
        Ok(())
    }

    pub async fn type_into(&self, selector: &str, text: &str) -> Result<()> {
        let input = self.driver.find(By::Css(selector)).await?;
        input.clear().await?;
        input.send_keys(text).await?;
        Ok(())
    }

    pub async fn press_escape(&self) -> Result<()> {
        self.driver
            .execute(
                "document.dispatchEvent(new KeyboardEvent('keydown', { key: 'Escape', bubbles: true }));",
                vec![],
            )
            .await?;
        Ok(())
    }

    pub async fn back(&self) -> Result<()> {
        self.driver.back().await?;
        Ok(())
    }

    pub async fn forward(&self) -> Result<()> {
        self.driver.forward().await?;
        Ok(())
    }
}

/// Check the active section and its document title.
pub fn ensure_section(snapshot: &PageSnapshot, section: &str, heading: &str) -> Result<()> {
    anyhow::ensure!(
        snapshot.section.as_deref() == Some(section),
        "expected #{section} to be active, found {:?}",
        snapshot.section
    );
    anyhow::ensure!(
        title_pattern(heading)?.is_match(&snapshot.title),
        "unexpected title {:?} for {heading}",
        snapshot.title
    );
    Ok(())
}
