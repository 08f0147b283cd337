use crate::mode::select_mode;
use crate::notice::Notices;
use crate::selection::{Endpoint, Mode, SelectionState};
use dioxus::prelude::*;

fn tab_label(mode: Mode) -> &'static str {
    match mode {
        Mode::Song => "Song",
        Mode::Mood => "Mood",
    }
}

#[component]
pub fn ModeTabs(endpoint: Endpoint) -> Element {
    let mut selection = use_context::<Signal<SelectionState>>();
    let mut notices = use_context::<Signal<Notices>>();
    let active = selection.read().mode(endpoint);

    rsx! {
        div { class: "mode-tabs",
            for mode in Mode::ALL {
                button {
                    id: endpoint.element_id(&format!("mode-tab-{mode}")),
                    class: if mode == active { "mode-tab-selected" } else { "mode-tab" },
                    "data-endpoint": endpoint.as_str(),
                    "data-mode": mode.as_str(),
                    onclick: move |_| {
                        selection.with_mut(|state| {
                            select_mode(state, endpoint.as_str(), mode.as_str(), &mut notices.write());
                        });
                    },
                    {tab_label(mode)}
                }
            }
        }
    }
}
