use serde_json::Value;
use std::cell::RefCell;
use std::collections::BTreeMap;

const STORAGE_KEY: &str = "ottaku.locale";
const DEFAULT_LANG: &str = "pt";
const FALLBACK_LANG: &str = "en";

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LocaleMeta {
    pub code: &'static str,
    pub name: &'static str,
    /// Value for `<html lang>`.
    pub html_lang: &'static str,
}

const LOCALE_META: &[LocaleMeta] = &[
    LocaleMeta {
        code: "pt",
        name: "Português",
        html_lang: "pt-BR",
    },
    LocaleMeta {
        code: "en",
        name: "English",
        html_lang: "en",
    },
];

const LOCALE_TABLE: &[(&str, &str)] = &[
    ("pt", include_str!("../i18n/pt.json")),
    ("en", include_str!("../i18n/en.json")),
];

pub struct I18nBundle {
    pub lang: String,
    translations: Value,
    fallback: Value,
}

fn load_translations(lang: &str) -> Option<Value> {
    let (_, data) = LOCALE_TABLE.iter().find(|(code, _)| *code == lang)?;
    serde_json::from_str(data).ok()
}

fn build_bundle(lang: &str) -> Option<I18nBundle> {
    Some(I18nBundle {
        lang: lang.to_string(),
        translations: load_translations(lang)?,
        fallback: load_translations(FALLBACK_LANG)?,
    })
}

fn empty_bundle() -> I18nBundle {
    I18nBundle {
        lang: DEFAULT_LANG.to_string(),
        translations: Value::Object(serde_json::Map::new()),
        fallback: Value::Object(serde_json::Map::new()),
    }
}

/// Supported locales.
#[must_use]
pub const fn locales() -> &'static [LocaleMeta] {
    LOCALE_META
}

fn saved_lang() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|win| win.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten())
            .unwrap_or_else(|| DEFAULT_LANG.to_string())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        DEFAULT_LANG.to_string()
    }
}

thread_local! {
    static CURRENT: RefCell<I18nBundle> = RefCell::new(
        build_bundle(&saved_lang())
            .or_else(|| build_bundle(DEFAULT_LANG))
            .unwrap_or_else(empty_bundle)
    );
}

/// Switch the active language; unknown codes are ignored.
///
/// In the browser this also updates `<html lang>` and remembers the choice.
pub fn set_lang(lang: &str) {
    let Some(bundle) = build_bundle(lang) else {
        log::warn!("unsupported locale {lang}");
        return;
    };
    CURRENT.with(|cell| cell.replace(bundle));
    #[cfg(target_arch = "wasm32")]
    {
        let html_lang = LOCALE_META
            .iter()
            .find(|m| m.code == lang)
            .map_or(lang, |m| m.html_lang);
        if let Some(el) = crate::dom::document().and_then(|doc| doc.document_element()) {
            let _ = el.set_attribute("lang", html_lang);
        }
        if let Some(storage) = web_sys::window().and_then(|win| win.local_storage().ok().flatten())
        {
            let _ = storage.set_item(STORAGE_KEY, lang);
        }
    }
}

#[must_use]
pub fn current_lang() -> String {
    CURRENT.with(|c| c.borrow().lang.clone())
}

fn get_nested_value<'a>(obj: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(obj, |current, k| current.get(k))
}

fn plural_category(count: f64) -> &'static str {
    if (count - 1.0).abs() < f64::EPSILON {
        "one"
    } else {
        "other"
    }
}

fn render_value(value: &Value, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    let mut text = match value {
        Value::String(s) => s.clone(),
        Value::Object(map) => {
            let category = args
                .and_then(|m| m.get("count"))
                .and_then(|count| count.parse::<f64>().ok())
                .map(plural_category);
            category
                .and_then(|c| map.get(c))
                .or_else(|| map.get("_"))
                .and_then(Value::as_str)?
                .to_string()
        }
        _ => return None,
    };

    if let Some(args_map) = args {
        for (k, v) in args_map {
            text = text.replace(&format!("{{{k}}}"), v);
        }
    }
    Some(text)
}

fn resolve(key: &str, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    CURRENT.with(|cell| {
        let bundle = cell.borrow();
        get_nested_value(&bundle.translations, key)
            .and_then(|v| render_value(v, args))
            .or_else(|| get_nested_value(&bundle.fallback, key).and_then(|v| render_value(v, args)))
    })
}

/// Translate a key; unknown keys come back unchanged.
#[must_use]
pub fn t(key: &str) -> String {
    tr(key, None)
}

/// Translate a key, replacing `{name}` placeholders.
///
/// A `count` argument selects the `one`/`other` plural form when the entry has them.
#[must_use]
pub fn tr(key: &str, args: Option<&BTreeMap<&str, &str>>) -> String {
    resolve(key, args).unwrap_or_else(|| key.to_string())
}

/// "3 resultados" style counter.
#[must_use]
pub fn count_label(key: &str, count: usize) -> String {
    let count = count.to_string();
    let mut vars = BTreeMap::new();
    vars.insert("count", count.as_str());
    tr(key, Some(&vars))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn portuguese_is_the_default() {
        set_lang("pt");
        assert_eq!(current_lang(), "pt");
        assert_eq!(t("news.cta.whatsapp"), "Ler no WhatsApp");
        assert_eq!(t("nada.aqui"), "nada.aqui");
    }

    #[test]
    fn plural_forms_follow_count() {
        set_lang("pt");
        assert_eq!(count_label("filter.results", 1), "1 resultado");
        assert_eq!(count_label("filter.results", 0), "0 resultados");
        assert_eq!(count_label("filter.results", 7), "7 resultados");
    }

    #[test]
    fn unknown_locale_keeps_current_bundle() {
        set_lang("en");
        set_lang("xx");
        assert_eq!(current_lang(), "en");
        assert_eq!(t("nav.novidades"), "News");
        set_lang("pt");
    }

    #[test]
    fn every_locale_has_the_same_keys() {
        fn keys(value: &Value, prefix: &str, out: &mut Vec<String>) {
            if let Value::Object(map) = value {
                for (k, v) in map {
                    let path = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    keys(v, &path, out);
                }
            } else {
                out.push(prefix.to_string());
            }
        }
        let mut reference = Vec::new();
        keys(&load_translations("pt").unwrap(), "", &mut reference);
        for meta in locales() {
            let mut other = Vec::new();
            keys(&load_translations(meta.code).unwrap(), "", &mut other);
            assert_eq!(other, reference, "{}", meta.code);
        }
    }
}
