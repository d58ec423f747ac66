//! Deployment base path handling.
///
/// When `PUBLIC_URL` is set at compile time (e.g. `/site` when hosted under a
/// subdirectory), browser URLs carry that prefix while routes never do.
#[must_use]
pub fn asset_path(relative: &str) -> String {
    asset_path_with_base(relative, public_url())
}

/// Base path for the router, `None` when the site is served from the root.
#[must_use]
pub fn router_base() -> Option<String> {
    router_base_with_base(public_url())
}

/// Turn a browser path into a site-relative route path.
#[must_use]
pub fn strip_base(path: &str) -> String {
    strip_base_with_base(path, public_url())
}

/// Turn a site-relative route URL into a browser URL.
#[must_use]
pub fn with_base(url: &str) -> String {
    with_base_with_base(url, public_url())
}

fn public_url() -> &'static str {
    option_env!("PUBLIC_URL").unwrap_or("")
}

fn asset_path_with_base(relative: &str, base: &str) -> String {
    let base = base.trim_end_matches('/');
    let rel = relative.trim_start_matches('/');

    if base.is_empty() {
        format!("/{rel}")
    } else {
        format!("{base}/{rel}")
    }
}

fn router_base_with_base(base: &str) -> Option<String> {
    let base = base.trim().trim_end_matches('/');
    (!base.is_empty()).then(|| base.to_string())
}

fn strip_base_with_base(path: &str, base: &str) -> String {
    let Some(base) = router_base_with_base(base) else {
        return path.to_string();
    };
    match path.strip_prefix(&base) {
        Some(rest) if rest.is_empty() => "/".to_string(),
        Some(rest) if rest.starts_with(['/', '?', '#']) => rest.to_string(),
        _ => path.to_string(),
    }
}

fn with_base_with_base(url: &str, base: &str) -> String {
    match router_base_with_base(base) {
        Some(base) if url == "/" => format!("{base}/"),
        Some(base) => format!("{base}{url}"),
        None => url.to_string(),
    }
}
