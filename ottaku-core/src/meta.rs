use serde::{Deserialize, Serialize};

use crate::constants::SITE_NAME;
use crate::route::RouteDescriptor;

/// Document title and SEO fields for a route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub canonical_path: String,
}

impl PageMeta {
    #[must_use]
    pub fn for_route(route: &RouteDescriptor) -> Self {
        let section = route.section();
        let heading = route.anchor.map_or_else(|| section.title(), |a| a.title());
        let title = if route.category().is_all() {
            format!("{heading} | {SITE_NAME}")
        } else {
            format!("{} · {heading} | {SITE_NAME}", route.category().label())
        };
        Self {
            title,
            description: section.description().to_string(),
            canonical_path: route.to_url(),
        }
    }
}
