use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of remote collections the site reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    News,
    Partners,
    Gaming,
    QuizWinners,
    Winners,
    Settings,
}

impl ContentKind {
    pub const ALL: [Self; 6] = [
        Self::News,
        Self::Partners,
        Self::Gaming,
        Self::QuizWinners,
        Self::Winners,
        Self::Settings,
    ];

    /// Collection name used when the configuration does not override it.
    #[must_use]
    pub const fn default_collection(self) -> &'static str {
        match self {
            Self::News => "newsCards",
            Self::Partners => "partners",
            Self::Gaming => "gamingCards",
            Self::QuizWinners => "quizWinners",
            Self::Winners => "winners",
            Self::Settings => "settings",
        }
    }

    /// Collections shown newest-first.
    #[must_use]
    pub const fn is_recency_ordered(self) -> bool {
        matches!(self, Self::News | Self::QuizWinners | Self::Winners)
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::News => "news",
            Self::Partners => "partners",
            Self::Gaming => "gaming",
            Self::QuizWinners => "quiz winners",
            Self::Winners => "winners",
            Self::Settings => "settings",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What a section loader asks for: a collection and an optional "most recent N" cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LoadRequest {
    pub kind: ContentKind,
    pub limit: Option<usize>,
}

impl LoadRequest {
    #[must_use]
    pub const fn all(kind: ContentKind) -> Self {
        Self { kind, limit: None }
    }

    #[must_use]
    pub const fn latest(kind: ContentKind, limit: usize) -> Self {
        Self {
            kind,
            limit: Some(limit),
        }
    }
}

/// A load request stamped with the navigation generation that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FetchTicket {
    pub request: LoadRequest,
    pub generation: u64,
}

impl FetchTicket {
    #[must_use]
    pub const fn new(request: LoadRequest, generation: u64) -> Self {
        Self {
            request,
            generation,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> ContentKind {
        self.request.kind
    }
}
