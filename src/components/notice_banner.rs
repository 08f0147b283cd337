use crate::components::{Icon, IconKind};
use crate::notice::Notices;
use dioxus::prelude::*;

#[component]
pub fn NoticeBanner() -> Element {
    let mut notices = use_context::<Signal<Notices>>();
    if notices.read().is_empty() {
        return rsx! {};
    }
    let items = notices.read().items().to_vec();

    rsx! {
        div { class: "notice-stack", role: "alert",
            for notice in items {
                div { key: "{notice.id}", class: "notice",
                    span { class: "notice-message", "{notice.message}" }
                    button {
                        class: "notice-dismiss",
                        aria_label: "Dismiss",
                        onclick: move |_| notices.write().dismiss(notice.id),
                        Icon { kind: IconKind::Close, class: "icon-sm".to_string() }
                    }
                }
            }
        }
    }
}
