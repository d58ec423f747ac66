pub mod page;
pub mod session;

pub use page::{PageSnapshot, SitePage, ensure_section};
pub use session::{BrowserConfig, BrowserKind, new_session};
