use log::{info, warn};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod handoff;
mod lead;

mod components {
    pub mod budget_form;
    pub mod footer;
    pub mod hero;
    pub mod navbar;
    pub mod portfolio;
    pub mod software_icons;
    pub mod toast;
}

mod pages {
    pub mod home;
    pub mod not_found;
}

use pages::{home::Home, not_found::NotFound};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    if !config::whatsapp_number_configured() {
        warn!(
            "WHATSAPP_NUMBER not set at build time, budget requests go to placeholder {}",
            config::PLACEHOLDER_WHATSAPP_NUMBER
        );
    }

    info!("Starting portfolio");
    yew::Renderer::<App>::new().render();
}
