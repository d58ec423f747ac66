use anyhow::{Context, Result};
use chrono::Utc;
use std::{fs, path::Path};
use thirtyfour::prelude::*;

use crate::browser::SitePage;

pub fn artifacts_dir(base: &str, browser: &str, scenario: &str) -> String {
    let ts = Utc::now().format("%Y%m%dT%H%M%S");
    format!("{base}/{browser}/{scenario}/{ts}")
}

/// Save a screenshot, the DOM, the page snapshot and the error chain of a
/// failed browser scenario.
pub async fn capture_artifacts(
    page: &SitePage<'_>,
    driver: &WebDriver,
    dir: &str,
    err: &anyhow::Error,
) -> Result<()> {
    let screenshot = driver.screenshot_as_png().await.ok();
    let source = driver.source().await.ok();
    let snapshot = page
        .snapshot()
        .await
        .ok()
        .and_then(|snap| serde_json::to_value(snap).ok());
    let chain = format!("{err:#}");

    write_artifact_files(
        Path::new(dir),
        screenshot.as_deref(),
        source.as_deref(),
        snapshot.as_ref(),
        &chain,
    )
}

fn write_artifact_files(
    dir: &Path,
    screenshot: Option<&[u8]>,
    source: Option<&str>,
    snapshot: Option<&serde_json::Value>,
    error_chain: &str,
) -> Result<()> {
    fs::create_dir_all(dir).context("creating artifacts dir")?;

    if let Some(png) = screenshot {
        let _ = fs::write(dir.join("screenshot.png"), png);
    }
    if let Some(src) = source {
        let _ = fs::write(dir.join("dom.html"), src);
    }
    if let Some(snapshot) = snapshot {
        let payload = serde_json::to_vec_pretty(snapshot).unwrap_or_default();
        let _ = fs::write(dir.join("page.json"), payload);
    }
    let _ = fs::write(dir.join("error.txt"), error_chain);

    Ok(())
}

pub fn split_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn split_csv_trims_and_filters() {
        let parts = split_csv(" smoke, ,filters,  history ");
        assert_eq!(parts, vec!["smoke", "filters", "history"]);
    }

    #[test]
    fn artifacts_dir_includes_browser_and_scenario() {
        let dir = artifacts_dir("target/out", "chrome", "deep-links");
        assert!(dir.starts_with("target/out/chrome/deep-links/"));
    }

    #[test]
    fn write_artifact_files_writes_expected_payloads() {
        let base = std::env::temp_dir().join(format!(
            "ottaku-artifacts-{}",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos()
        ));
        let snapshot = json!({ "section": "home", "title": "Home | Ottaku Brasil" });
        write_artifact_files(
            &base,
            Some(&[1, 2, 3]),
            Some("<html />"),
            Some(&snapshot),
            "boom",
        )
        .expect("write artifacts");

        assert!(base.join("screenshot.png").exists());
        assert!(base.join("dom.html").exists());
        assert!(base.join("page.json").exists());
        assert!(base.join("error.txt").exists());
    }
}
