//! Site-wide constants: names, fallback display values and default colors.

pub const SITE_NAME: &str = "Ottaku Brasil";

/// Category token that means "no category filter".
pub const ALL_CATEGORIES: &str = "todos";

/// Raw category inputs that collapse to [`ALL_CATEGORIES`].
pub const ALL_CATEGORY_ALIASES: [&str; 5] = ["todos", "all", "null", "undefined", "*"];

pub const HOME_NEWS_LIMIT: usize = 3;
pub const HOME_QUIZ_LIMIT: usize = 3;

// Recency fields, in lookup order.
pub const RECENCY_FIELDS: [&str; 3] = ["createdAt", "date", "timestamp"];

// Numbers below this are epoch seconds rather than milliseconds.
pub const EPOCH_SECONDS_CUTOFF: i64 = 100_000_000_000;

pub const PLACEHOLDER_CARD_IMAGE: &str = "https://via.placeholder.com/400x200";
pub const PLACEHOLDER_AVATAR: &str = "https://via.placeholder.com/60";
pub const FALLBACK_LINK: &str = "#";

pub const NEWS_FALLBACK_TITLE: &str = "Sem título";
pub const NEWS_FALLBACK_IMAGE_ALT: &str = "Notícia";
pub const NEWS_FALLBACK_CATEGORY: &str = "Notícia";
pub const FALLBACK_DESCRIPTION: &str = "Sem descrição";
pub const DATE_NOT_INFORMED: &str = "Data não informada";

pub const PARTNER_FALLBACK_NAME: &str = "Parceiro";
pub const PARTNER_FALLBACK_CATEGORY: &str = "Parceiro";
pub const PARTNER_FALLBACK_ICON: &str = "fas fa-handshake";
pub const PARTNER_FALLBACK_SYMBOL: &str = "fab fa-instagram";

pub const GAMING_FALLBACK_TITLE: &str = "Jogo";
pub const GAMING_FALLBACK_ICON: &str = "fas fa-gamepad";
pub const GAMING_FALLBACK_GUILD_HEADING: &str = "Nossa Guilda";
pub const GAMING_FALLBACK_EVENTS_TITLE: &str = "Principais Eventos";
pub const GAMING_FALLBACK_BUTTON_TEXT: &str = "Participar";
pub const GAMING_FALLBACK_BUTTON_ICON: &str = "fab fa-whatsapp";

pub const WINNER_FALLBACK_NAME: &str = "@usuário";
pub const WINNER_FALLBACK_ALT: &str = "Ganhador";
pub const WINNER_FALLBACK_PRIZE: &str = "R$0";

pub const COLOR_INSTAGRAM: &str = "#fbbf24";
pub const COLOR_DEFAULT_NEWS: &str = "#22c55e";
pub const COLOR_PARTNER: &str = "#fbbf24";
pub const COLOR_GRADIENT_START: &str = "#8b5cf6";
pub const COLOR_GRADIENT_END: &str = "#3b82f6";
pub const COLOR_BUTTON: &str = "#8b5cf6";
pub const COLOR_EVENT_PRIMARY: &str = "#ef4444";
pub const COLOR_EVENT_SECONDARY: &str = "#10b981";

/// Portuguese month abbreviations used for card dates.
pub const MONTHS_PT: [&str; 12] = [
    "jan", "fev", "mar", "abr", "mai", "jun", "jul", "ago", "set", "out", "nov", "dez",
];
