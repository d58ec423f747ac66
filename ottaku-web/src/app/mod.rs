use yew::prelude::*;

pub mod loading;
pub mod routing;
pub mod state;
pub mod view;

pub use view::{Shell, ShellProps};

#[function_component(App)]
pub fn app() -> Html {
    let app_state = state::use_app_state();
    let navigation = routing::use_navigation(&app_state);
    routing::use_browser_events(&navigation);
    view::render_app(&app_state, &navigation)
}
