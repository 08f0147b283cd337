use dioxus::prelude::*;

mod api;
mod components;
mod config;
mod mode;
mod mood;
mod notice;
mod playlist;
mod search;
mod selection;
mod utils;

use components::PlaylistPage;

const APP_CSS: Asset = asset!("/assets/styling/app.css");

fn main() {
    if let Err(err) = dioxus::logger::init(tracing::Level::INFO) {
        eprintln!("Failed to initialize logger: {err}");
    }
    tracing::info!("starting wave guide client");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "Wave Guide" }
        document::Meta { name: "theme-color", content: "#1db954" }
        document::Stylesheet { href: APP_CSS }

        PlaylistPage {}
    }
}
