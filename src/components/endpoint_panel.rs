use crate::components::{Icon, IconKind, MoodSelect, ModeTabs, SearchBox};
use crate::selection::{Endpoint, Mode, Preview, SelectionState};
use dioxus::prelude::*;

fn heading(endpoint: Endpoint) -> &'static str {
    match endpoint {
        Endpoint::Source => "Start with",
        Endpoint::Destination => "End with",
    }
}

fn display(visible: bool) -> &'static str {
    if visible {
        "display: block"
    } else {
        "display: none"
    }
}

/// One side of the playlist request: mode tabs, the input for the active
/// mode, and a preview of what is currently chosen.
///
/// Both inputs stay mounted so a half-typed search survives a mode switch.
#[component]
pub fn EndpointPanel(endpoint: Endpoint) -> Element {
    let selection = use_context::<Signal<SelectionState>>();
    let state = selection();
    let mode = state.mode(endpoint);

    let song_id = endpoint.element_id("selected-song");
    let mood_id = endpoint.element_id("selected-mood");
    let placeholder_id = endpoint.element_id("selected-result-placeholder");

    rsx! {
        section { class: "endpoint-panel", id: "{endpoint}-panel",
            h2 { class: "endpoint-heading", {heading(endpoint)} }
            ModeTabs { endpoint }

            div { style: display(mode == Mode::Song), SearchBox { endpoint } }
            div { style: display(mode == Mode::Mood), MoodSelect { endpoint } }

            {
                match state.preview(endpoint) {
                    Preview::Track(track) => rsx! {
                        div {
                            id: "{song_id}",
                            class: "selected-result",
                            title: track.caption(),
                            img {
                                class: "selected-thumbnail",
                                src: "{track.large_image}",
                                alt: "Album art for {track.track_name}",
                            }
                            div { class: "selected-track-info",
                                div { class: "selected-title", "{track.track_name}" }
                                div { class: "selected-artist", "{track.artist_name}" }
                            }
                        }
                    },
                    Preview::Mood(mood) => rsx! {
                        div { id: "{mood_id}", class: "selected-result",
                            img {
                                class: "selected-thumbnail",
                                src: mood.icon_path(),
                                alt: "{mood} mood",
                            }
                            div {
                                div { class: "selected-title", {mood.label()} }
                            }
                        }
                    },
                    Preview::Placeholder => rsx! {
                        div { id: "{placeholder_id}", class: "selected-result-placeholder",
                            Icon {
                                kind: if mode == Mode::Song { IconKind::Music } else { IconKind::Smile },
                                class: "placeholder-icon".to_string(),
                            }
                            span {
                                if mode == Mode::Song {
                                    "Pick a song to see it here"
                                } else {
                                    "Pick a mood to see it here"
                                }
                            }
                        }
                    },
                }
            }
        }
    }
}
