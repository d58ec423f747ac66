//! Typed display shapes.
//!
//! Each shape is built from a [`ContentRecord`] in a single step that fills
//! every missing field with its fallback value, so renderers never deal with
//! absent data.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::constants::{
    COLOR_BUTTON, COLOR_DEFAULT_NEWS, COLOR_EVENT_PRIMARY, COLOR_EVENT_SECONDARY,
    COLOR_GRADIENT_END, COLOR_GRADIENT_START, COLOR_INSTAGRAM, COLOR_PARTNER, DATE_NOT_INFORMED,
    FALLBACK_DESCRIPTION, FALLBACK_LINK, GAMING_FALLBACK_BUTTON_ICON, GAMING_FALLBACK_BUTTON_TEXT,
    GAMING_FALLBACK_EVENTS_TITLE, GAMING_FALLBACK_GUILD_HEADING, GAMING_FALLBACK_ICON,
    GAMING_FALLBACK_TITLE, MONTHS_PT, NEWS_FALLBACK_CATEGORY, NEWS_FALLBACK_TITLE,
    PARTNER_FALLBACK_CATEGORY, PARTNER_FALLBACK_ICON, PARTNER_FALLBACK_NAME,
    PARTNER_FALLBACK_SYMBOL, PLACEHOLDER_AVATAR, PLACEHOLDER_CARD_IMAGE, WINNER_FALLBACK_NAME,
    WINNER_FALLBACK_PRIZE,
};
use crate::filter::Filterable;
use crate::record::ContentRecord;

/// Where a news card links to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NewsTarget {
    Instagram,
    #[default]
    WhatsApp,
    Site,
}

impl NewsTarget {
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::to_lowercase).as_deref() {
            Some("instagram") => Self::Instagram,
            Some("site") => Self::Site,
            _ => Self::WhatsApp,
        }
    }

    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Instagram => "fab fa-instagram",
            Self::WhatsApp => "fab fa-whatsapp",
            Self::Site => "fas fa-external-link-alt",
        }
    }

    /// i18n key of the call-to-action label.
    #[must_use]
    pub const fn cta_key(self) -> &'static str {
        match self {
            Self::Instagram => "news.cta.instagram",
            Self::WhatsApp => "news.cta.whatsapp",
            Self::Site => "news.cta.site",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub image_url: String,
    pub target_url: String,
    pub target: NewsTarget,
    pub color: String,
    pub category_label: String,
    pub category_key: String,
    pub date_label: String,
}

impl From<&ContentRecord> for NewsItem {
    fn from(record: &ContentRecord) -> Self {
        let target = NewsTarget::parse(record.str_field("targetType").as_deref());
        let default_color = if target == NewsTarget::Instagram {
            COLOR_INSTAGRAM
        } else {
            COLOR_DEFAULT_NEWS
        };
        let category = record.str_field("category");
        Self {
            id: record.id.clone(),
            title: record.str_or("title", NEWS_FALLBACK_TITLE),
            excerpt: record.str_or("excerpt", FALLBACK_DESCRIPTION),
            image_url: record.str_or("imageUrl", PLACEHOLDER_CARD_IMAGE),
            target_url: record.str_or("targetUrl", FALLBACK_LINK),
            target,
            color: record.str_or("color", default_color),
            category_key: category.as_deref().map(str::to_lowercase).unwrap_or_default(),
            category_label: category.unwrap_or_else(|| NEWS_FALLBACK_CATEGORY.to_string()),
            date_label: date_label(record.str_field("date").as_deref()),
        }
    }
}

impl Filterable for NewsItem {
    fn category_key(&self) -> &str {
        &self.category_key
    }
    fn title(&self) -> &str {
        &self.title
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partner {
    pub id: String,
    pub name: String,
    pub subname: String,
    pub category: String,
    pub description: String,
    pub sub_description: String,
    pub icon: String,
    pub link: String,
    pub link_symbol: String,
    pub color: String,
}

impl From<&ContentRecord> for Partner {
    fn from(record: &ContentRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: record.str_or("name", PARTNER_FALLBACK_NAME),
            subname: record.str_or_empty("subname"),
            category: record.str_or("category", PARTNER_FALLBACK_CATEGORY),
            description: record.str_or("description", FALLBACK_DESCRIPTION),
            sub_description: record.str_or_empty("subDesc"),
            icon: record.str_or("iconSelect", PARTNER_FALLBACK_ICON),
            link: record.str_or("destLink", FALLBACK_LINK),
            link_symbol: record.str_or("destSymbol", PARTNER_FALLBACK_SYMBOL),
            color: record.str_or("color", COLOR_PARTNER),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GamingEvent {
    pub title: String,
    pub subtitle: String,
    pub value: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GamingCard {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub icon: String,
    pub gradient: (String, String),
    pub guild_heading: String,
    pub description: String,
    pub events_title: String,
    pub events: [GamingEvent; 2],
    pub button_text: String,
    pub button_icon: String,
    pub button_link: String,
    pub button_color: String,
    pub bottom_text: String,
}

fn gaming_event(record: &ContentRecord, n: u8, title: &str, color: &str) -> GamingEvent {
    GamingEvent {
        title: record.str_or(&format!("event{n}Title"), title),
        subtitle: record.str_or_empty(&format!("event{n}Sub")),
        value: record.str_or_empty(&format!("event{n}Value")),
        color: record.str_or(&format!("event{n}Color"), color),
    }
}

impl From<&ContentRecord> for GamingCard {
    fn from(record: &ContentRecord) -> Self {
        Self {
            id: record.id.clone(),
            title: record.str_or("title", GAMING_FALLBACK_TITLE),
            subtitle: record.str_or_empty("subtitle"),
            icon: record.str_or("iconSelect", GAMING_FALLBACK_ICON),
            gradient: (
                record.str_or("gradientColor1", COLOR_GRADIENT_START),
                record.str_or("gradientColor2", COLOR_GRADIENT_END),
            ),
            guild_heading: record.str_or("title2", GAMING_FALLBACK_GUILD_HEADING),
            description: record.str_or("description", FALLBACK_DESCRIPTION),
            events_title: record.str_or("minicardTitle", GAMING_FALLBACK_EVENTS_TITLE),
            events: [
                gaming_event(record, 1, "Evento 1", COLOR_EVENT_PRIMARY),
                gaming_event(record, 2, "Evento 2", COLOR_EVENT_SECONDARY),
            ],
            button_text: record.str_or("buttonText", GAMING_FALLBACK_BUTTON_TEXT),
            button_icon: record.str_or("buttonIcon", GAMING_FALLBACK_BUTTON_ICON),
            button_link: record.str_or("buttonLink", FALLBACK_LINK),
            button_color: record.str_or("buttonColor", COLOR_BUTTON),
            bottom_text: record.str_or_empty("bottomText"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizWinner {
    pub id: String,
    pub name: String,
    pub prize: String,
    pub photo_url: String,
    pub link: String,
}

impl From<&ContentRecord> for QuizWinner {
    fn from(record: &ContentRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: record.str_or("name", WINNER_FALLBACK_NAME),
            prize: record.str_or("prize", WINNER_FALLBACK_PRIZE),
            photo_url: record.str_or("photoUrl", PLACEHOLDER_AVATAR),
            link: record.str_or("link", FALLBACK_LINK),
        }
    }
}

/// Entry on the general winners page; filterable by category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Winner {
    pub id: String,
    pub name: String,
    pub prize: String,
    pub category_label: String,
    pub category_key: String,
    pub photo_url: String,
    pub link: String,
    pub date_label: String,
}

impl From<&ContentRecord> for Winner {
    fn from(record: &ContentRecord) -> Self {
        let category = record.str_field("category");
        Self {
            id: record.id.clone(),
            name: record.str_or("name", WINNER_FALLBACK_NAME),
            prize: record.str_or("prize", WINNER_FALLBACK_PRIZE),
            category_key: category.as_deref().map(str::to_lowercase).unwrap_or_default(),
            category_label: category.unwrap_or_default(),
            photo_url: record.str_or("photoUrl", PLACEHOLDER_AVATAR),
            link: record.str_or("link", FALLBACK_LINK),
            date_label: date_label(record.str_field("date").as_deref()),
        }
    }
}

impl Filterable for Winner {
    fn category_key(&self) -> &str {
        &self.category_key
    }
    fn title(&self) -> &str {
        &self.name
    }
}

/// Site-wide settings document; every field is optional.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SiteSettings {
    pub announcement: Option<String>,
    pub whatsapp_url: Option<String>,
    pub instagram_url: Option<String>,
    pub discord_url: Option<String>,
    pub donation_url: Option<String>,
}

impl SiteSettings {
    /// Settings live in the first document of the settings collection.
    #[must_use]
    pub fn from_records(records: &[ContentRecord]) -> Self {
        records.first().map(Self::from).unwrap_or_default()
    }
}

impl From<&ContentRecord> for SiteSettings {
    fn from(record: &ContentRecord) -> Self {
        Self {
            announcement: record.str_field("announcement"),
            whatsapp_url: record.str_field("whatsappUrl"),
            instagram_url: record.str_field("instagramUrl"),
            discord_url: record.str_field("discordUrl"),
            donation_url: record.str_field("donationUrl"),
        }
    }
}

/// Card date: `2024-01-05` becomes `05 jan 2024`.
///
/// Values that do not parse as a date are shown verbatim; a missing date
/// shows the "not informed" label.
#[must_use]
pub fn date_label(raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return DATE_NOT_INFORMED.to_string();
    };
    let date_part = raw.split('T').next().unwrap_or(raw);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(date_part, "%d/%m/%Y"))
        .map_or_else(
            |_| raw.to_string(),
            |date| {
                let month = MONTHS_PT[date.month0() as usize];
                format!("{:02} {month} {}", date.day(), date.year())
            },
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_news_record_gets_every_default() {
        let item = NewsItem::from(&ContentRecord::new("n1"));
        assert_eq!(item.title, "Sem título");
        assert_eq!(item.excerpt, "Sem descrição");
        assert_eq!(item.image_url, "https://via.placeholder.com/400x200");
        assert_eq!(item.target_url, "#");
        assert_eq!(item.target, NewsTarget::WhatsApp);
        assert_eq!(item.color, "#22c55e");
        assert_eq!(item.category_label, "Notícia");
        assert_eq!(item.category_key, "");
        assert_eq!(item.date_label, "Data não informada");
    }

    #[test]
    fn instagram_news_defaults_to_gold() {
        let record = ContentRecord::new("n2")
            .with("targetType", "instagram")
            .with("category", "Anime")
            .with("date", "2024-03-09");
        let item = NewsItem::from(&record);
        assert_eq!(item.target, NewsTarget::Instagram);
        assert_eq!(item.color, "#fbbf24");
        assert_eq!(item.category_key, "anime");
        assert_eq!(item.category_label, "Anime");
        assert_eq!(item.date_label, "09 mar 2024");
        assert_eq!(item.target.icon(), "fab fa-instagram");
    }

    #[test]
    fn explicit_color_wins() {
        let record = ContentRecord::new("n3")
            .with("targetType", "site")
            .with("color", "#ff00ff");
        let item = NewsItem::from(&record);
        assert_eq!(item.color, "#ff00ff");
        assert_eq!(item.target.cta_key(), "news.cta.site");
    }

    #[test]
    fn gaming_card_events_fall_back_per_slot() {
        let record = ContentRecord::new("g1")
            .with("event1Title", "Guerra de Guildas")
            .with("event2Value", json!(3));
        let card = GamingCard::from(&record);
        assert_eq!(card.events[0].title, "Guerra de Guildas");
        assert_eq!(card.events[0].color, "#ef4444");
        assert_eq!(card.events[1].title, "Evento 2");
        assert_eq!(card.events[1].value, "3");
        assert_eq!(card.gradient.0, "#8b5cf6");
        assert_eq!(card.button_text, "Participar");
    }

    #[test]
    fn partner_and_winner_defaults() {
        let partner = Partner::from(&ContentRecord::new("p1"));
        assert_eq!(partner.name, "Parceiro");
        assert_eq!(partner.icon, "fas fa-handshake");
        assert_eq!(partner.link_symbol, "fab fa-instagram");

        let quiz = QuizWinner::from(&ContentRecord::new("q1"));
        assert_eq!(quiz.name, "@usuário");
        assert_eq!(quiz.prize, "R$0");
        assert_eq!(quiz.photo_url, "https://via.placeholder.com/60");

        let winner = Winner::from(&ContentRecord::new("w1").with("category", "Sorteio"));
        assert_eq!(winner.category_key, "sorteio");
    }

    #[test]
    fn settings_come_from_first_record() {
        let records = vec![
            ContentRecord::new("main").with("announcement", "Live hoje às 20h"),
            ContentRecord::new("old").with("announcement", "ignorado"),
        ];
        let settings = SiteSettings::from_records(&records);
        assert_eq!(settings.announcement.as_deref(), Some("Live hoje às 20h"));
        assert_eq!(SiteSettings::from_records(&[]), SiteSettings::default());
    }

    #[test]
    fn date_labels() {
        assert_eq!(date_label(Some("2024-12-25")), "25 dez 2024");
        assert_eq!(date_label(Some("2024-12-25T10:00:00Z")), "25 dez 2024");
        assert_eq!(date_label(Some("25/12/2024")), "25 dez 2024");
        assert_eq!(date_label(Some("semana passada")), "semana passada");
        assert_eq!(date_label(Some("  ")), "Data não informada");
        assert_eq!(date_label(None), "Data não informada");
    }
}
