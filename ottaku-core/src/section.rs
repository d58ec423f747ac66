use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of page sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Home,
    Novidades,
    Gaming,
    Parceiros,
    Quiz,
    Ganhadores,
}

impl Section {
    pub const ALL: [Self; 6] = [
        Self::Home,
        Self::Novidades,
        Self::Gaming,
        Self::Parceiros,
        Self::Quiz,
        Self::Ganhadores,
    ];

    /// Element id of the section and its path segment.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Novidades => "novidades",
            Self::Gaming => "gaming",
            Self::Parceiros => "parceiros",
            Self::Quiz => "quiz",
            Self::Ganhadores => "ganhadores",
        }
    }

    #[must_use]
    pub const fn base_path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Novidades => "/novidades",
            Self::Gaming => "/gaming",
            Self::Parceiros => "/parceiros",
            Self::Quiz => "/quiz",
            Self::Ganhadores => "/ganhadores",
        }
    }

    /// Sections that accept a `/<section>/<category>` suffix and a search term.
    #[must_use]
    pub const fn is_filterable(self) -> bool {
        matches!(self, Self::Novidades | Self::Ganhadores)
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Novidades => "Novidades",
            Self::Gaming => "Gaming",
            Self::Parceiros => "Parceiros",
            Self::Quiz => "Quiz",
            Self::Ganhadores => "Ganhadores",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Home => {
                "Ottaku Brasil: a maior comunidade otaku do Brasil. Notícias, quiz, gaming e parceiros."
            }
            Self::Novidades => "Últimas notícias de animes, mangás, games e cultura pop.",
            Self::Gaming => "Nossa guilda, eventos e campeonatos da comunidade Ottaku Brasil.",
            Self::Parceiros => "Conheça os parceiros da comunidade Ottaku Brasil.",
            Self::Quiz => "Participe do quiz semanal e concorra a prêmios.",
            Self::Ganhadores => "Veja os ganhadores dos sorteios, quizzes e eventos.",
        }
    }

    /// Case-insensitive lookup by slug (`home`, `Novidades`, ...).
    #[must_use]
    pub fn from_slug(raw: &str) -> Option<Self> {
        let token = raw.trim().trim_matches('/').to_lowercase();
        Self::ALL.into_iter().find(|s| s.slug() == token)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// In-page targets reached through path aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Anchor {
    /// Donors block on the home page, reached through `/apoie`.
    Doadores,
}

impl Anchor {
    #[must_use]
    pub const fn element_id(self) -> &'static str {
        match self {
            Self::Doadores => "doadores",
        }
    }

    #[must_use]
    pub const fn alias_path(self) -> &'static str {
        match self {
            Self::Doadores => "/apoie",
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Doadores => "Apoie",
        }
    }

    #[must_use]
    pub const fn section(self) -> Section {
        match self {
            Self::Doadores => Section::Home,
        }
    }
}
