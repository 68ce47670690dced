use log::info;
use yew::prelude::*;

mod config;
mod countdown;
mod document;
mod lifecycle;
mod state;
mod theme;
mod waitlist;
mod pages {
    pub mod landing;
}

use pages::landing::LandingPage;
use theme::ThemeVariables;

#[function_component]
fn App() -> Html {
    html! {
        <>
            <ThemeVariables />
            <LandingPage />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting Chai Royal landing page");
    yew::Renderer::<App>::new().render();
}
