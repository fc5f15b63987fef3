use log::{info, Level};
use yew::prelude::*;

mod config;
mod components {
    pub mod consultation;
}
mod lead {
    pub mod controller;
    pub mod device;
    pub mod rate_limit;
    pub mod store;
    pub mod supabase;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    html! { <Landing /> }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
