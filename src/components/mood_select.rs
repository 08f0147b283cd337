use crate::mood::choose_mood;
use crate::notice::Notices;
use crate::selection::{Endpoint, Mood, SelectionState};
use crate::utils::capitalize;
use dioxus::prelude::*;

#[component]
pub fn MoodSelect(endpoint: Endpoint) -> Element {
    let mut selection = use_context::<Signal<SelectionState>>();
    let mut notices = use_context::<Signal<Notices>>();
    let current = selection.read().mood(endpoint);
    let select_id = endpoint.element_id("mood-select");

    rsx! {
        select {
            id: "{select_id}",
            class: "mood-select",
            onchange: move |e| {
                let raw = e.value();
                selection.with_mut(|state| {
                    choose_mood(state, endpoint, &raw, &mut notices.write());
                });
            },
            option { value: "", disabled: true, selected: current.is_none(), "Choose a mood" }
            for mood in Mood::ALL {
                option {
                    value: mood.as_str(),
                    selected: current == Some(mood),
                    {capitalize(mood.as_str())}
                }
            }
        }
    }
}
