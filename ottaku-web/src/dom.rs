use js_sys::{Function, Promise};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    Document, Element, Event, EventTarget, Response, ScrollBehavior, ScrollIntoViewOptions, Window,
};

/// The global `window`, when running in a browser.
#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Perform a fetch request and return the browser `Response`.
///
/// # Errors
/// Returns an error if there is no window, the request fails or the result is not a `Response`.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn fetch_response(url: &str) -> Result<Response, JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("window unavailable"))?;
    let resp_value = JsFuture::from(win.fetch_with_str(url)).await?;
    resp_value.dyn_into::<Response>()
}

/// Read a fetched body as JSON.
///
/// # Errors
/// Returns an error if the body cannot be read or is not JSON.
#[allow(clippy::future_not_send)]
pub async fn response_json(response: &Response) -> Result<JsValue, JsValue> {
    JsFuture::from(response.json()?).await
}

pub fn scroll_to_top() {
    if let Some(win) = window() {
        win.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// Smooth-scroll to the element with this id. Returns `false` when it is missing.
pub fn scroll_to_element(id: &str) -> bool {
    let Some(el) = document().and_then(|doc| doc.get_element_by_id(id)) else {
        return false;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

/// Path of the current location, without the deployment base.
#[must_use]
pub fn current_path() -> String {
    window()
        .and_then(|win| win.location().pathname().ok())
        .map_or_else(|| "/".to_string(), |path| crate::paths::strip_base(&path))
}

/// The nearest `<a href>` at or above an event target.
#[must_use]
pub fn closest_link(target: Option<web_sys::EventTarget>) -> Option<Element> {
    target?
        .dyn_into::<Element>()
        .ok()?
        .closest("a[href]")
        .ok()
        .flatten()
}

/// Set an attribute on the first element matching `selector`, creating it in
/// `<head>` from `tag` and `key`/`value` when it does not exist yet.
pub fn upsert_head_element(selector: &str, tag: &str, key: (&str, &str), attr: (&str, &str)) {
    let Some(doc) = document() else {
        return;
    };
    let existing = doc.query_selector(selector).ok().flatten();
    let el = match existing {
        Some(el) => el,
        None => {
            let Some(head) = doc.head() else {
                return;
            };
            let Ok(el) = doc.create_element(tag) else {
                return;
            };
            let _ = el.set_attribute(key.0, key.1);
            if head.append_child(&el).is_err() {
                return;
            }
            el
        }
    };
    let _ = el.set_attribute(attr.0, attr.1);
}

/// Resolve after `duration_ms` milliseconds.
///
/// # Errors
/// Returns an error if the timer cannot be scheduled.
#[allow(clippy::future_not_send)]
pub async fn sleep_ms(duration_ms: i32) -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("window unavailable"))?;
    let mut resolve_slot: Option<Function> = None;
    let promise = Promise::new(&mut |resolve, _reject| {
        resolve_slot = Some(resolve);
    });
    let resolve =
        resolve_slot.ok_or_else(|| JsValue::from_str("resolve function should be set"))?;
    let closure = Closure::once(move || {
        let _ = resolve.call0(&JsValue::UNDEFINED);
    });
    win.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        duration_ms,
    )?;
    closure.forget();
    JsFuture::from(promise).await?;
    Ok(())
}

/// An event listener that is removed when dropped.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    /// Attach `handler` to `target`; `None` if the browser refuses it.
    pub fn new(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Option<Self> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .ok()?;
        Some(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}
