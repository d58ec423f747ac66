// Accessibility helpers

/// Id of the polite live region that announces route changes.
pub const STATUS_REGION_ID: &str = "route-status";

/// Focus ring and screen-reader-only utility styles, injected once at startup.
#[must_use]
pub const fn visible_focus_css() -> &'static str {
    ":focus-visible{outline:3px solid #fbbf24;outline-offset:2px} .sr-only{position:absolute;width:1px;height:1px;margin:-1px;overflow:hidden;clip:rect(0 0 0 0);white-space:nowrap;}"
}

/// Announce a message through the live region, if it is mounted.
pub fn announce(msg: &str) {
    if let Some(node) =
        crate::dom::document().and_then(|doc| doc.get_element_by_id(STATUS_REGION_ID))
    {
        node.set_text_content(Some(msg));
    }
}

/// Live-region text for an activated page.
#[must_use]
pub fn page_announcement(page_title: &str) -> String {
    let mut vars = std::collections::BTreeMap::new();
    vars.insert("page", page_title);
    crate::i18n::tr("status.page", Some(&vars))
}

/// Add the focus styles to `<head>`.
pub fn inject_focus_styles() {
    let Some(doc) = crate::dom::document() else {
        return;
    };
    if doc.get_element_by_id("a11y-focus-css").is_some() {
        return;
    }
    let (Some(head), Ok(style)) = (doc.head(), doc.create_element("style")) else {
        return;
    };
    style.set_id("a11y-focus-css");
    style.set_text_content(Some(visible_focus_css()));
    let _ = head.append_child(&style);
}
