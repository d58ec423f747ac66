#[cfg(target_arch = "wasm32")]
use ottaku_web::dom;
use ottaku_core::ContentKind;
use ottaku_web::source::FirestoreSource;
use ottaku_web::{config, i18n, legacy, logging, meta};
use std::collections::BTreeMap;

#[cfg(target_arch = "wasm32")]
#[test]
fn dom_helpers_find_the_window() {
    assert!(dom::window().is_some());
    assert!(dom::document().is_some());
}

#[test]
fn i18n_switches_and_pluralizes() {
    i18n::set_lang("en");
    assert_eq!(i18n::current_lang(), "en");
    assert_eq!(i18n::count_label("filter.results", 1), "1 result");
    assert_eq!(i18n::count_label("filter.results", 4), "4 results");

    i18n::set_lang("pt");
    assert_eq!(i18n::count_label("filter.results", 0), "0 resultados");
    let mut vars = BTreeMap::new();
    vars.insert("page", "Quiz");
    assert_eq!(i18n::tr("status.page", Some(&vars)), "Página Quiz carregada");

    i18n::set_lang("xx");
    assert_eq!(i18n::current_lang(), "pt");
}

#[test]
fn locales_metadata_is_accessible() {
    let metas = i18n::locales();
    assert!(metas.iter().any(|m| m.code == "pt" && m.html_lang == "pt-BR"));
    assert!(metas.iter().any(|m| m.code == "en"));
}

#[test]
fn bundled_config_drives_the_firestore_source() {
    let cfg = config::site_config();
    assert!(cfg.home_news_limit > 0);
    let source = FirestoreSource::new(cfg);
    assert!(
        source
            .page_url(ContentKind::QuizWinners, None)
            .contains("/projects/ottaku-brasil/databases/")
    );
}

#[test]
fn canonical_links_are_absolute() {
    assert_eq!(
        meta::canonical_href("https://ottakubrasil.com", "/ganhadores/quiz"),
        "https://ottakubrasil.com/ganhadores/quiz"
    );
}

#[test]
fn configured_log_level_drives_the_console_logger() {
    assert!(logging::logger_config(log::LevelFilter::Off).is_none());
    assert!(logging::logger_config(log::LevelFilter::Warn).is_some());
    assert!(logging::logger_config(config::site_config().log_level()).is_some());
}

#[test]
fn legacy_globals_cover_the_published_markup() {
    for name in ["showPage", "goHome", "toggleMenu", "closeMenu"] {
        assert!(legacy::GLOBALS.contains(&name));
    }
    assert!(legacy::filter_target("filterWinners").is_some());
}
