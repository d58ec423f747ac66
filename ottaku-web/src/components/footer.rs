use crate::i18n::t;
use ottaku_core::SiteSettings;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub settings: SiteSettings,
}

#[function_component(Footer)]
pub fn footer(p: &Props) -> Html {
    let social = [
        ("Instagram", p.settings.instagram_url.as_ref()),
        ("WhatsApp", p.settings.whatsapp_url.as_ref()),
        ("Discord", p.settings.discord_url.as_ref()),
    ];
    let links: Vec<Html> = social
        .into_iter()
        .filter_map(|(name, url)| {
            url.map(|url| {
                html! {
                    <a href={url.clone()} target="_blank" rel="noopener noreferrer" class="social-link">
                        { name }
                    </a>
                }
            })
        })
        .collect();
    html! {
        <footer class="site-footer">
            if !links.is_empty() {
                <nav class="social-links" aria-label={t("footer.follow")}>
                    { for links }
                </nav>
            }
            <p>{ t("footer.copyright") }</p>
        </footer>
    }
}
