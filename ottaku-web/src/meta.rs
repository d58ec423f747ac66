//! Applies [`PageMeta`] to the live document head.

use ottaku_core::PageMeta;

pub fn apply(meta: &PageMeta) {
    let Some(doc) = crate::dom::document() else {
        return;
    };
    doc.set_title(&meta.title);
    crate::dom::upsert_head_element(
        "meta[name='description']",
        "meta",
        ("name", "description"),
        ("content", &meta.description),
    );
    crate::dom::upsert_head_element(
        "meta[property='og:title']",
        "meta",
        ("property", "og:title"),
        ("content", &meta.title),
    );
    crate::dom::upsert_head_element(
        "meta[property='og:description']",
        "meta",
        ("property", "og:description"),
        ("content", &meta.description),
    );
    let canonical = canonical_href(
        &crate::dom::window()
            .and_then(|win| win.location().origin().ok())
            .unwrap_or_default(),
        &meta.canonical_path,
    );
    crate::dom::upsert_head_element(
        "link[rel='canonical']",
        "link",
        ("rel", "canonical"),
        ("href", &canonical),
    );
}

#[must_use]
pub fn canonical_href(origin: &str, canonical_path: &str) -> String {
    format!(
        "{}{}",
        origin.trim_end_matches('/'),
        crate::paths::with_base(canonical_path)
    )
}
