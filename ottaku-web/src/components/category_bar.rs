use crate::i18n::t;
use ottaku_core::{Category, Filterable};
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryOption {
    pub category: Category,
    pub label: String,
}

/// "All" first, then each category found in `items` in first-seen order.
///
/// An active category that no loaded item carries is still listed, so a deep
/// link to it shows which filter is applied.
pub fn category_options<'a, T, I>(items: I, active: &Category) -> Vec<CategoryOption>
where
    T: Filterable + 'a,
    I: IntoIterator<Item = (&'a T, &'a str)>,
{
    let mut options = vec![CategoryOption {
        category: Category::All,
        label: t("filter.all"),
    }];
    for (item, label) in items {
        let category = Category::parse(Some(item.category_key()));
        if category.is_all() || options.iter().any(|o| o.category == category) {
            continue;
        }
        options.push(CategoryOption {
            category,
            label: label.to_string(),
        });
    }
    if !options.iter().any(|o| &o.category == active) {
        options.push(CategoryOption {
            category: active.clone(),
            label: active.label(),
        });
    }
    options
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub options: Vec<CategoryOption>,
    pub active: Category,
    pub on_select: Callback<Option<String>>,
}

#[function_component(CategoryBar)]
pub fn category_bar(p: &Props) -> Html {
    let buttons = p.options.iter().map(|option| {
        let is_active = option.category == p.active;
        let onclick = {
            let cb = p.on_select.clone();
            let token = option.category.token().to_string();
            Callback::from(move |_| cb.emit(Some(token.clone())))
        };
        html! {
            <button
                type="button"
                class={classes!("category-btn", is_active.then_some("active"))}
                data-category={option.category.token().to_string()}
                aria-pressed={is_active.to_string()}
                {onclick}
            >
                { option.label.clone() }
            </button>
        }
    });
    html! {
        <div class="category-bar" role="group" aria-label={t("filter.categories")}>
            { for buttons }
        </div>
    }
}
