use futures::executor::block_on;
use ottaku_core::{
    Category, ContentRecord, GamingCard as CoreGamingCard, NewsItem, Partner, QuizWinner,
    Section, SiteSettings, Winner,
};
use ottaku_web::components::category_bar::{CategoryBar, category_options};
use ottaku_web::components::footer::Footer;
use ottaku_web::components::gaming_card::GamingCard;
use ottaku_web::components::header::Header;
use ottaku_web::components::news_card::NewsCard;
use ottaku_web::components::partner_card::PartnerCard;
use ottaku_web::components::quiz_winner_card::QuizWinnerCard;
use ottaku_web::components::skeleton::Skeleton;
use ottaku_web::components::slide_menu::SlideMenu;
use ottaku_web::components::winner_item::WinnerItem;
use yew::{AttrValue, Callback, LocalServerRenderer};

fn news(target: &str) -> NewsItem {
    NewsItem::from(
        &ContentRecord::new("n1")
            .with("title", "Novo anime anunciado")
            .with("category", "Anime")
            .with("targetType", target)
            .with("targetUrl", "https://example.com/materia")
            .with("date", "2024-01-05"),
    )
}

#[test]
fn header_marks_the_active_section() {
    ottaku_web::i18n::set_lang("pt");
    let props = ottaku_web::components::header::Props {
        current: Section::Gaming,
        menu_open: false,
        on_toggle_menu: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<Header>::with_props(props).render());
    assert!(html.contains(r#"aria-current="page""#));
    assert!(html.contains(r#"data-page="gaming""#));
    assert!(html.contains(r#"href="/apoie""#));
    assert!(html.contains(r#"aria-expanded="false""#));
}

#[test]
fn slide_menu_and_overlay_follow_open_state() {
    ottaku_web::i18n::set_lang("pt");
    let open = ottaku_web::components::slide_menu::Props {
        open: true,
        current: Section::Home,
        on_close: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<SlideMenu>::with_props(open).render());
    assert!(html.contains("slide-menu active"));
    assert!(html.contains("menu-overlay active"));

    let closed = ottaku_web::components::slide_menu::Props {
        open: false,
        current: Section::Home,
        on_close: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<SlideMenu>::with_props(closed).render());
    assert!(!html.contains("menu-overlay active"));
}

#[test]
fn footer_lists_only_configured_social_links() {
    ottaku_web::i18n::set_lang("pt");
    let settings = SiteSettings {
        instagram_url: Some("https://instagram.com/ottakubrasil".into()),
        ..SiteSettings::default()
    };
    let html = block_on(
        LocalServerRenderer::<Footer>::with_props(ottaku_web::components::footer::Props {
            settings,
        })
        .render(),
    );
    assert!(html.contains("instagram.com/ottakubrasil"));
    assert!(!html.contains("Discord"));
    assert!(html.contains("Ottaku Brasil"));
}

#[test]
fn news_card_uses_the_target_call_to_action() {
    ottaku_web::i18n::set_lang("pt");
    let props = ottaku_web::components::news_card::Props {
        item: news("site"),
        visible: true,
    };
    let html = block_on(LocalServerRenderer::<NewsCard>::with_props(props).render());
    assert!(html.contains("Ler matéria completa"));
    assert!(html.contains(r#"data-category="anime""#));
    assert!(html.contains(r#"target="_blank""#));
    assert!(!html.contains("news-card hidden"));

    let hidden = ottaku_web::components::news_card::Props {
        item: news("instagram"),
        visible: false,
    };
    let html = block_on(LocalServerRenderer::<NewsCard>::with_props(hidden).render());
    assert!(html.contains("news-card hidden"));
    assert!(html.contains("Ver no Instagram"));
}

#[test]
fn partner_and_gaming_cards_render_fallbacks() {
    let partner = Partner::from(&ContentRecord::new("p1"));
    let html = block_on(
        LocalServerRenderer::<PartnerCard>::with_props(ottaku_web::components::partner_card::Props {
            partner,
        })
        .render(),
    );
    assert!(html.contains("Parceiro"));
    assert!(html.contains("fa-handshake"));

    let card = CoreGamingCard::from(&ContentRecord::new("g1").with("event1Value", "Sábado"));
    let html = block_on(
        LocalServerRenderer::<GamingCard>::with_props(ottaku_web::components::gaming_card::Props {
            card,
        })
        .render(),
    );
    assert!(html.contains("Evento 1"));
    assert!(html.contains("Sábado"));
    assert!(html.contains("linear-gradient"));
}

#[test]
fn winner_rows_hide_instead_of_disappearing() {
    ottaku_web::i18n::set_lang("pt");
    let winner = Winner::from(
        &ContentRecord::new("w1")
            .with("name", "@sakura")
            .with("category", "Quiz"),
    );
    let html = block_on(
        LocalServerRenderer::<WinnerItem>::with_props(ottaku_web::components::winner_item::Props {
            winner,
            visible: false,
        })
        .render(),
    );
    assert!(html.contains("winner-item hidden"));
    assert!(html.contains("@sakura"));

    let quiz = QuizWinner::from(&ContentRecord::new("q1").with("name", "@naruto"));
    let html = block_on(
        LocalServerRenderer::<QuizWinnerCard>::with_props(
            ottaku_web::components::quiz_winner_card::Props { winner: quiz },
        )
        .render(),
    );
    assert!(html.contains("winner-card"));
    assert!(html.contains("Ver"));
}

#[test]
fn category_bar_marks_the_active_button() {
    ottaku_web::i18n::set_lang("pt");
    let items = [news("site")];
    let options = category_options(
        items.iter().map(|n| (n, n.category_label.as_str())),
        &Category::parse(Some("anime")),
    );
    let props = ottaku_web::components::category_bar::Props {
        options,
        active: Category::parse(Some("anime")),
        on_select: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<CategoryBar>::with_props(props).render());
    assert!(html.contains(r#"data-category="todos""#));
    assert!(html.contains("category-btn active"));
    assert!(html.contains(r#"aria-pressed="true""#));
}

#[test]
fn skeleton_renders_requested_placeholders() {
    ottaku_web::i18n::set_lang("pt");
    let props = ottaku_web::components::skeleton::Props {
        count: 3,
        variant: AttrValue::from("news"),
    };
    let html = block_on(LocalServerRenderer::<Skeleton>::with_props(props).render());
    assert_eq!(html.matches("skeleton-news").count(), 3);
    assert!(html.contains("Carregando"));
}
