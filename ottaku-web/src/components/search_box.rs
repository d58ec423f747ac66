use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub id: AttrValue,
    pub value: AttrValue,
    pub label: AttrValue,
    pub placeholder: AttrValue,
    pub on_search: Callback<String>,
}

/// Text the input should hold.
///
/// The route keeps a trimmed term, so the typed text wins while both mean
/// the same search. A different route term (back/forward, category reset)
/// replaces it.
#[must_use]
pub fn shown_text(typed: &str, route_term: &str) -> String {
    if typed.trim() == route_term.trim() {
        typed.to_string()
    } else {
        route_term.to_string()
    }
}

#[function_component(SearchBox)]
pub fn search_box(p: &Props) -> Html {
    let typed = use_state(|| p.value.to_string());
    let shown = shown_text(&typed, &p.value);
    let oninput = {
        let cb = p.on_search.clone();
        let typed = typed.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                let value = input.value();
                typed.set(value.clone());
                cb.emit(value);
            }
        })
    };
    html! {
        <div class="search-box">
            <label for={p.id.clone()} class="sr-only">{ p.label.clone() }</label>
            <input
                id={p.id.clone()}
                type="search"
                class="search-input"
                value={shown}
                placeholder={p.placeholder.clone()}
                autocomplete="off"
                {oninput}
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_space_survives_the_trimmed_route_term() {
        assert_eq!(shown_text("one ", "one"), "one ");
        assert_eq!(shown_text("one p", "one p"), "one p");
        assert_eq!(shown_text("  frieren ", "frieren"), "  frieren ");
    }

    #[test]
    fn a_different_route_term_replaces_the_typed_text() {
        assert_eq!(shown_text("one ", ""), "");
        assert_eq!(shown_text("one", "naruto"), "naruto");
    }
}
