use crate::a11y::STATUS_REGION_ID;
use crate::app::routing::{Navigation, section_title};
use crate::app::state::AppState;
use crate::components::announcement::AnnouncementBar;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::slide_menu::SlideMenu;
use crate::config::site_config;
use crate::pages::{
    ganhadores::GanhadoresPage, gaming::GamingPage, home::HomePage, novidades::NovidadesPage,
    parceiros::ParceirosPage, quiz::QuizPage,
};
use ottaku_core::{CategoryFilter, ContentKind, ContentStore, RouteDescriptor, Section};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ShellProps {
    pub route: RouteDescriptor,
    pub store: ContentStore,
    #[prop_or_default]
    pub menu_open: bool,
    #[prop_or_default]
    pub on_toggle_menu: Callback<()>,
    #[prop_or_default]
    pub on_close_menu: Callback<()>,
    #[prop_or_default]
    pub on_category: Callback<Option<String>>,
    #[prop_or_default]
    pub on_search: Callback<String>,
}

/// Whether a collection should still show placeholders.
fn pending(store: &ContentStore, kind: ContentKind) -> bool {
    store.is_loading(kind) || !store.is_loaded(kind)
}

fn render_section(p: &ShellProps) -> Html {
    let store = &p.store;
    let config = site_config();
    match p.route.section() {
        Section::Home => {
            // The slot may still hold a full listing from another section.
            let mut news = store.news();
            news.truncate(config.home_news_limit);
            let mut quiz_winners = store.quiz_winners();
            quiz_winners.truncate(config.home_quiz_limit);
            html! {
                <HomePage
                    {news}
                    news_loading={pending(store, ContentKind::News)}
                    {quiz_winners}
                    quiz_loading={pending(store, ContentKind::QuizWinners)}
                    settings={store.settings()}
                    placeholders={config.home_news_limit}
                />
            }
        }
        Section::Novidades => html! {
            <NovidadesPage
                news={store.news()}
                loading={pending(store, ContentKind::News)}
                filter={CategoryFilter::from_state(&p.route.state)}
                search={p.route.search().to_string()}
                on_category={p.on_category.clone()}
                on_search={p.on_search.clone()}
            />
        },
        Section::Gaming => html! {
            <GamingPage cards={store.gaming()} loading={pending(store, ContentKind::Gaming)} />
        },
        Section::Parceiros => html! {
            <ParceirosPage partners={store.partners()} loading={pending(store, ContentKind::Partners)} />
        },
        Section::Quiz => html! {
            <QuizPage
                winners={store.quiz_winners()}
                loading={pending(store, ContentKind::QuizWinners)}
                join_url={store.settings().whatsapp_url}
            />
        },
        Section::Ganhadores => html! {
            <GanhadoresPage
                winners={store.winners()}
                loading={pending(store, ContentKind::Winners)}
                filter={CategoryFilter::from_state(&p.route.state)}
                search={p.route.search().to_string()}
                on_category={p.on_category.clone()}
                on_search={p.on_search.clone()}
            />
        },
    }
}

/// The whole page for one route: chrome plus exactly one active section.
#[function_component(Shell)]
pub fn shell(p: &ShellProps) -> Html {
    let section = p.route.section();
    let settings = p.store.settings();
    html! {
        <>
            <Header current={section} menu_open={p.menu_open} on_toggle_menu={p.on_toggle_menu.clone()} />
            <SlideMenu open={p.menu_open} current={section} on_close={p.on_close_menu.clone()} />
            if let Some(text) = settings.announcement.clone() {
                <AnnouncementBar {text} />
            }
            <main id="main" role="main">
                <section id={section.slug()} class="page active" aria-label={section_title(section)}>
                    { render_section(p) }
                </section>
            </main>
            <Footer {settings} />
            <div id={STATUS_REGION_ID} class="sr-only" role="status" aria-live="polite"></div>
        </>
    }
}

pub fn render_app(state: &AppState, nav: &Navigation) -> Html {
    let on_toggle_menu = {
        let nav = nav.clone();
        Callback::from(move |()| nav.toggle_menu())
    };
    let on_close_menu = {
        let nav = nav.clone();
        Callback::from(move |()| nav.close_menu())
    };
    let on_category = {
        let nav = nav.clone();
        Callback::from(move |raw: Option<String>| nav.select_category(raw.as_deref()))
    };
    let on_search = {
        let nav = nav.clone();
        Callback::from(move |term: String| nav.set_search(&term))
    };
    html! {
        <Shell
            route={(*state.route).clone()}
            store={state.content.store.clone()}
            menu_open={state.menu.open}
            {on_toggle_menu}
            {on_close_menu}
            {on_category}
            {on_search}
        />
    }
}
