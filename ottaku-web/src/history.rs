//! Browser history adapter for the core router.

use ottaku_core::History;
use yew_router::history::{BrowserHistory, History as _};

use crate::paths::{strip_base, with_base};

/// `History` over the browser session history.
///
/// Routes are site-relative; the deployment base path is added on write and
/// removed on read.
#[derive(Clone)]
pub struct WebHistory {
    inner: BrowserHistory,
}

impl WebHistory {
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: BrowserHistory::new(),
        }
    }
}

impl Default for WebHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl History for WebHistory {
    fn current_url(&self) -> String {
        let location = self.inner.location();
        format!(
            "{}{}{}",
            strip_base(location.path()),
            location.query_str(),
            location.hash()
        )
    }

    fn push(&mut self, url: &str) {
        self.inner.push(with_base(url));
    }

    fn replace(&mut self, url: &str) {
        self.inner.replace(with_base(url));
    }
}
