use once_cell::sync::Lazy;
use ottaku_core::SiteConfig;

static SITE_CONFIG: Lazy<SiteConfig> =
    Lazy::new(|| parse_config(include_str!("../static/site.json")));

fn parse_config(json: &str) -> SiteConfig {
    SiteConfig::from_json(json).unwrap_or_else(|err| {
        log::error!("invalid site.json, using defaults: {err}");
        SiteConfig::default()
    })
}

/// Site configuration bundled with the app.
#[must_use]
pub fn site_config() -> &'static SiteConfig {
    &SITE_CONFIG
}
