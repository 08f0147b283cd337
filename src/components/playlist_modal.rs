use crate::components::{Icon, IconKind};
use crate::playlist::{ModalSlot, PlaylistModal};
use dioxus::prelude::*;

const SPOTIFY_ICON: &str = "/static/images/spotify_icon.png";

impl ModalSlot for Signal<PlaylistModal> {
    fn update(&mut self, f: impl FnOnce(&mut PlaylistModal)) {
        self.with_mut(f);
    }
}

#[component]
pub fn PlaylistModalView() -> Element {
    let mut modal = use_context::<Signal<PlaylistModal>>();
    let current = modal();

    if !current.is_open() {
        return rsx! {};
    }

    let body = match current {
        PlaylistModal::Closed => rsx! {},
        PlaylistModal::Loading => rsx! {
            div { class: "playlist-result-top",
                div {
                    id: "playlist-thumbnail",
                    class: "shimmer placeholder-playlist-thumbnail",
                }
                div { class: "playlist-result-top-right",
                    span { id: "playlist-button", class: "btn shimmer", "CREATING PLAYLIST" }
                }
            }
            div { id: "playlist-title", class: "shimmer placeholder-playlist-title" }
        },
        PlaylistModal::Ready(result) => rsx! {
            div { class: "playlist-result-top",
                img {
                    id: "playlist-thumbnail",
                    class: "selected-thumbnail",
                    src: "{result.image}",
                    alt: "Playlist Cover",
                }
                div { class: "playlist-result-top-right",
                    a {
                        id: "playlist-button",
                        class: "btn",
                        href: "{result.url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        img { class: "spotify-logo", src: SPOTIFY_ICON, alt: "" }
                        span { "Listen on Spotify" }
                        Icon { kind: IconKind::ExternalLink, class: "icon-sm".to_string() }
                    }
                }
            }
            div {
                id: "playlist-title",
                class: "selected-playlist-title",
                title: "{result.name}",
                "{result.name}"
            }
        },
        PlaylistModal::Failed(message) => rsx! {
            div { class: "playlist-error", role: "alert",
                p { "{message}" }
                button {
                    class: "btn",
                    onclick: move |_| modal.with_mut(PlaylistModal::close),
                    "Close"
                }
            }
        },
    };

    rsx! {
        div { id: "modal-container", class: "modal-container",
            div { id: "playlist-modal-content", class: "modal-content",
                span {
                    class: "close-modal",
                    aria_label: "Close",
                    onclick: move |_| modal.with_mut(PlaylistModal::close),
                    "×"
                }
                {body}
            }
        }
    }
}
