//! Seeded fixture content served through [`ContentSource`].
//!
//! Every collection comes back shuffled so that ordering checks never depend
//! on the order the backend happens to return documents in.

use async_trait::async_trait;
use ottaku_core::{ContentError, ContentKind, ContentRecord, ContentSource};
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use serde_json::json;
use std::collections::{BTreeMap, BTreeSet};

/// Title of the newest news item, whatever the seed.
pub const NEWEST_NEWS_TITLE: &str = "Frieren ganha segunda temporada";

/// Categories used by the news fixtures, with how many items each has.
pub const NEWS_CATEGORIES: [(&str, usize); 3] = [("Anime", 3), ("Mangá", 2), ("Games", 2)];

#[derive(Debug, Clone, Default)]
pub struct FixtureSource {
    collections: BTreeMap<ContentKind, Vec<ContentRecord>>,
    failing: BTreeSet<ContentKind>,
}

impl FixtureSource {
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut collections = BTreeMap::new();
        for kind in ContentKind::ALL {
            let mut records = catalogue(kind);
            records.shuffle(&mut rng);
            collections.insert(kind, records);
        }
        Self {
            collections,
            failing: BTreeSet::new(),
        }
    }

    /// Make every fetch of `kind` fail.
    #[must_use]
    pub fn failing(mut self, kind: ContentKind) -> Self {
        self.failing.insert(kind);
        self
    }

    #[must_use]
    pub fn records(&self, kind: ContentKind) -> &[ContentRecord] {
        self.collections.get(&kind).map_or(&[], Vec::as_slice)
    }
}

#[async_trait(?Send)]
impl ContentSource for FixtureSource {
    type Error = ContentError;

    async fn fetch_collection(
        &self,
        kind: ContentKind,
    ) -> Result<Vec<ContentRecord>, Self::Error> {
        if self.failing.contains(&kind) {
            return Err(ContentError::Transport(format!("{kind} unavailable")));
        }
        Ok(self.records(kind).to_vec())
    }
}

fn news(id: &str, title: &str, category: &str) -> ContentRecord {
    ContentRecord::new(id)
        .with("title", title)
        .with("category", category)
        .with("excerpt", format!("{title}: confira os detalhes"))
        .with("targetUrl", format!("https://ottakubrasil.com/{id}"))
}

fn winner(id: &str, name: &str, category: &str) -> ContentRecord {
    ContentRecord::new(id)
        .with("name", name)
        .with("category", category)
        .with("prize", "Kit Ottaku")
}

// Recency values deliberately mix every shape the admin panel has written.
fn catalogue(kind: ContentKind) -> Vec<ContentRecord> {
    match kind {
        ContentKind::News => vec![
            news("n1", NEWEST_NEWS_TITLE, "Anime").with("createdAt", 1_717_200_000_000_i64),
            news("n2", "One Piece capítulo 1100", "Mangá").with("createdAt", 1_717_100_000_i64),
            news("n3", "Naruto Storm Connections", "Games")
                .with("date", "2024-05-30T18:00:00Z"),
            news("n4", "Kimetsu no Yaiba: filme", "anime").with(
                "timestamp",
                json!({ "seconds": 1_716_900_000_i64, "nanoseconds": 0 }),
            ),
            news("n5", "Chainsaw Man volume 15", "Mangá").with("date", "20/05/2024"),
            news("n6", "Evento de Genshin", "Games").with("date", "2024-05-01"),
            news("n7", "Spy x Family temporada 3", "ANIME").with("createdAt", "sem data"),
        ],
        ContentKind::QuizWinners => (1..=5)
            .map(|n| {
                ContentRecord::new(format!("q{n}"))
                    .with("name", format!("Participante {n}"))
                    .with("quizTitle", format!("Quiz semanal #{n}"))
                    .with("createdAt", 1_716_000_000_000_i64 + n * 86_400_000)
            })
            .collect(),
        ContentKind::Winners => vec![
            winner("w1", "Ana Souza", "Quiz").with("date", "2024-06-01"),
            winner("w2", "Bruno Lima", "Sorteio").with("date", "2024-05-15"),
            winner("w3", "Carla Dias", "Evento").with("date", "2024-04-20"),
            winner("w4", "Diego Rocha", "quiz").with("date", "2024-03-02"),
        ],
        ContentKind::Partners => (1..=3)
            .map(|n| {
                ContentRecord::new(format!("p{n}"))
                    .with("name", format!("Parceiro {n}"))
                    .with("link", format!("https://parceiro{n}.com.br"))
            })
            .collect(),
        ContentKind::Gaming => vec![
            ContentRecord::new("g1")
                .with("title", "Guilda Ottaku")
                .with("events", json!([{ "name": "Raid semanal", "date": "Sábado" }])),
            ContentRecord::new("g2").with("title", "Campeonato de Smash"),
        ],
        ContentKind::Settings => vec![
            ContentRecord::new("site")
                .with("announcement", "Quiz novo toda sexta!")
                .with("donationUrl", "https://apoia.se/ottakubrasil"),
        ],
    }
}
