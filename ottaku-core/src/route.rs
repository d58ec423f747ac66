//! URL ⇄ route state mapping.
//!
//! Every URL the site can be opened with resolves to exactly one
//! [`RouteDescriptor`]; unknown input falls back to the home section. The
//! mapping is pure so the browser shell, the tester and the unit tests all
//! share it.

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::collection::{ContentKind, LoadRequest};
use crate::constants::{HOME_NEWS_LIMIT, HOME_QUIZ_LIMIT};
use crate::section::{Anchor, Section};

/// What is shown: section, category filter and search term.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct RouteState {
    pub section: Section,
    pub category: Category,
    pub search: String,
}

impl RouteState {
    #[must_use]
    pub fn section(section: Section) -> Self {
        Self {
            section,
            ..Self::default()
        }
    }

    /// Drop filter state that the section cannot carry.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        if self.section.is_filterable() {
            self.search = self.search.trim().to_string();
        } else {
            self.category = Category::All;
            self.search.clear();
        }
        self
    }
}

/// A fully resolved route: state plus an optional in-page anchor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct RouteDescriptor {
    pub state: RouteState,
    pub anchor: Option<Anchor>,
}

impl RouteDescriptor {
    #[must_use]
    pub fn home() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_state(state: RouteState) -> Self {
        Self {
            state: state.normalized(),
            anchor: None,
        }
    }

    #[must_use]
    pub fn anchor(anchor: Anchor) -> Self {
        Self {
            state: RouteState::section(anchor.section()),
            anchor: Some(anchor),
        }
    }

    #[must_use]
    pub const fn section(&self) -> Section {
        self.state.section
    }

    #[must_use]
    pub const fn category(&self) -> &Category {
        &self.state.category
    }

    #[must_use]
    pub fn search(&self) -> &str {
        &self.state.search
    }

    /// Canonical URL (path plus `?q=` when searching).
    #[must_use]
    pub fn to_url(&self) -> String {
        if let Some(anchor) = self.anchor {
            return anchor.alias_path().to_string();
        }
        let mut url = self.state.section.base_path().to_string();
        if self.state.section.is_filterable() {
            if let Some(segment) = self.state.category.segment() {
                url.push('/');
                url.push_str(&segment);
            }
            if !self.state.search.is_empty() {
                url.push_str("?q=");
                url.push_str(&urlencoding::encode(&self.state.search));
            }
        }
        url
    }
}

/// Resolve any URL to a route. Total: unknown paths become the home route.
#[must_use]
pub fn resolve_route(url: &str) -> RouteDescriptor {
    match_route(url).unwrap_or_else(RouteDescriptor::home)
}

/// Resolve a URL, or `None` when its path is not part of the route table.
///
/// Accepts plain paths, `/<section>/<category>`, query strings carrying
/// `cat`, `q` or `search`, legacy hash routes (`/#novidades`) and absolute
/// URLs.
#[must_use]
pub fn match_route(url: &str) -> Option<RouteDescriptor> {
    let url = strip_origin(url.trim());
    let (before_fragment, fragment) = url.split_once('#').unwrap_or((url, ""));
    let (path, query) = before_fragment
        .split_once('?')
        .unwrap_or((before_fragment, ""));
    let params = QueryParams::parse(query);

    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    let lowered: Vec<String> = segments
        .iter()
        .map(|s| decode_component(s).to_lowercase())
        .collect();

    let (section, path_category) = match lowered.as_slice() {
        [] => match legacy_fragment(fragment) {
            Some(FragmentTarget::Section(section)) => (section, None),
            Some(FragmentTarget::Anchor(anchor)) => return Some(RouteDescriptor::anchor(anchor)),
            None => (Section::Home, None),
        },
        [only] if only == "home" || only == "index.html" => (Section::Home, None),
        [only] if only == Anchor::Doadores.alias_path().trim_start_matches('/') => {
            return Some(RouteDescriptor::anchor(Anchor::Doadores));
        }
        [only] => (Section::from_slug(only)?, None),
        [first, _] => {
            let section = Section::from_slug(first).filter(|s| s.is_filterable())?;
            (section, Some(segments[1]))
        }
        _ => return None,
    };

    let category = match path_category {
        Some(raw) => Category::parse(Some(raw)),
        None => Category::from_decoded(params.get("cat")),
    };
    let search = params
        .get("q")
        .or_else(|| params.get("search"))
        .unwrap_or_default()
        .to_string();

    Some(RouteDescriptor::from_state(RouteState {
        section,
        category,
        search,
    }))
}

enum FragmentTarget {
    Section(Section),
    Anchor(Anchor),
}

fn legacy_fragment(fragment: &str) -> Option<FragmentTarget> {
    let token = fragment.trim().trim_start_matches('/').to_lowercase();
    if token == Anchor::Doadores.element_id() {
        return Some(FragmentTarget::Anchor(Anchor::Doadores));
    }
    Section::from_slug(&token)
        .filter(|s| *s != Section::Home)
        .map(FragmentTarget::Section)
}

fn strip_origin(url: &str) -> &str {
    let Some((_, rest)) = url.split_once("://") else {
        return url;
    };
    rest.find(['/', '?', '#']).map_or("/", |idx| &rest[idx..])
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(std::borrow::Cow::into_owned)
        .unwrap_or(spaced)
}

/// Decoded query-string pairs; the first occurrence of a key wins.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    #[must_use]
    pub fn parse(query: &str) -> Self {
        let pairs = query
            .trim_start_matches('?')
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                (decode_component(key), decode_component(value))
            })
            .collect();
        Self(pairs)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Declarative section → loader table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteTable {
    pub home_news_limit: usize,
    pub home_quiz_limit: usize,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self {
            home_news_limit: HOME_NEWS_LIMIT,
            home_quiz_limit: HOME_QUIZ_LIMIT,
        }
    }
}

impl RouteTable {
    /// Collections a section needs when it becomes active.
    #[must_use]
    pub fn loads(&self, section: Section) -> Vec<LoadRequest> {
        match section {
            Section::Home => vec![
                LoadRequest::latest(ContentKind::News, self.home_news_limit),
                LoadRequest::latest(ContentKind::QuizWinners, self.home_quiz_limit),
            ],
            Section::Novidades => vec![LoadRequest::all(ContentKind::News)],
            Section::Gaming => vec![LoadRequest::all(ContentKind::Gaming)],
            Section::Parceiros => vec![LoadRequest::all(ContentKind::Partners)],
            Section::Quiz => vec![LoadRequest::latest(
                ContentKind::QuizWinners,
                self.home_quiz_limit,
            )],
            Section::Ganhadores => vec![LoadRequest::all(ContentKind::Winners)],
        }
    }

    /// Collections loaded once at startup regardless of the section.
    #[must_use]
    pub fn startup_loads(&self) -> Vec<LoadRequest> {
        vec![LoadRequest::all(ContentKind::Settings)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(token: &str) -> Category {
        Category::Named(token.to_string())
    }

    #[test]
    fn static_paths_resolve() {
        assert_eq!(resolve_route("/").section(), Section::Home);
        assert_eq!(resolve_route("").section(), Section::Home);
        assert_eq!(resolve_route("/home").section(), Section::Home);
        assert_eq!(resolve_route("/index.html").section(), Section::Home);
        assert_eq!(resolve_route("/gaming").section(), Section::Gaming);
        assert_eq!(resolve_route("/parceiros/").section(), Section::Parceiros);
        assert_eq!(resolve_route("/QUIZ").section(), Section::Quiz);
    }

    #[test]
    fn apoie_alias_targets_donors_anchor() {
        let route = resolve_route("/apoie");
        assert_eq!(route.section(), Section::Home);
        assert_eq!(route.anchor, Some(Anchor::Doadores));
        assert_eq!(route.to_url(), "/apoie");
        assert_eq!(resolve_route("/#doadores"), route);
    }

    #[test]
    fn trailing_category_only_on_filterable_sections() {
        let route = resolve_route("/novidades/Anime/");
        assert_eq!(route.section(), Section::Novidades);
        assert_eq!(route.category(), &named("anime"));

        let winners = resolve_route("/ganhadores/sorteio");
        assert_eq!(winners.category(), &named("sorteio"));

        assert!(match_route("/gaming/anime").is_none());
        assert_eq!(resolve_route("/gaming/anime"), RouteDescriptor::home());
        assert!(match_route("/novidades/anime/extra").is_none());
    }

    #[test]
    fn query_string_encoding_is_equivalent() {
        let by_path = resolve_route("/novidades/anime");
        let by_query = resolve_route("/novidades?cat=Anime");
        assert_eq!(by_path, by_query);

        let searched = resolve_route("/novidades?cat=anime&q=One+Piece");
        assert_eq!(searched.search(), "One Piece");
        assert_eq!(resolve_route("/novidades?search=naruto").search(), "naruto");
        assert_eq!(
            resolve_route("/novidades?q=first&search=second").search(),
            "first"
        );
        // Path category wins over the query one.
        assert_eq!(
            resolve_route("/novidades/games?cat=anime").category(),
            &named("games")
        );
    }

    #[test]
    fn filters_are_dropped_on_plain_sections() {
        let route = resolve_route("/gaming?cat=anime&q=x");
        assert!(route.category().is_all());
        assert!(route.search().is_empty());
    }

    #[test]
    fn sentinel_categories_mean_all() {
        for url in [
            "/novidades/todos",
            "/novidades/Todos",
            "/novidades/undefined",
            "/novidades/null",
            "/novidades?cat=",
        ] {
            assert_eq!(resolve_route(url), resolve_route("/novidades"), "{url}");
        }
    }

    #[test]
    fn legacy_hash_and_absolute_urls() {
        assert_eq!(resolve_route("/#novidades").section(), Section::Novidades);
        assert_eq!(resolve_route("#gaming").section(), Section::Gaming);
        assert_eq!(resolve_route("/#home").section(), Section::Home);
        assert_eq!(
            resolve_route("https://ottakubrasil.com/parceiros?x=1").section(),
            Section::Parceiros
        );
        assert_eq!(resolve_route("https://ottakubrasil.com").section(), Section::Home);
        // Fragments on a real path are plain anchors, not routes.
        assert_eq!(resolve_route("/quiz#novidades").section(), Section::Quiz);
    }

    #[test]
    fn unknown_paths_fall_back_home() {
        for url in ["/nada", "/novidades/a/b/c", "//", "/apoie/x", "?cat=anime"] {
            let route = resolve_route(url);
            assert_eq!(route.section(), Section::Home, "{url}");
            assert!(route.category().is_all());
        }
    }

    #[test]
    fn canonical_urls_round_trip() {
        let urls = [
            "/",
            "/novidades",
            "/novidades/anime",
            "/novidades/cultura%20pop?q=one%20piece",
            "/ganhadores/quiz",
            "/gaming",
            "/parceiros",
            "/quiz",
            "/apoie",
        ];
        for url in urls {
            let route = resolve_route(url);
            assert_eq!(route.to_url(), url);
            assert_eq!(resolve_route(&route.to_url()), route);
        }
    }

    #[test]
    fn path_and_query_categories_decode_once() {
        for (path, query) in [
            ("/novidades/100%2525", "/novidades?cat=100%2525"),
            ("/novidades/cultura%20pop", "/novidades?cat=cultura+pop"),
            ("/ganhadores/50%25", "/ganhadores?cat=50%25"),
        ] {
            assert_eq!(resolve_route(path), resolve_route(query), "{path} vs {query}");
        }
        let route = resolve_route("/novidades?cat=100%2525");
        assert_eq!(route.category(), &named("100%25"));
        assert_eq!(resolve_route(&route.to_url()), route);
    }

    #[test]
    fn dot_categories_keep_a_stable_url() {
        for raw in ["/novidades?cat=..", "/novidades?cat=.", "/novidades/%2E%2E"] {
            let route = resolve_route(raw);
            assert!(route.category().is_all(), "{raw}");
            assert_eq!(route.to_url(), "/novidades");
        }
    }

    #[test]
    fn route_table_caps_home_collections() {
        let table = RouteTable::default();
        assert_eq!(
            table.loads(Section::Home),
            vec![
                LoadRequest::latest(ContentKind::News, 3),
                LoadRequest::latest(ContentKind::QuizWinners, 3),
            ]
        );
        assert_eq!(
            table.loads(Section::Novidades),
            vec![LoadRequest::all(ContentKind::News)]
        );
        assert_eq!(
            table.startup_loads(),
            vec![LoadRequest::all(ContentKind::Settings)]
        );
    }
}
