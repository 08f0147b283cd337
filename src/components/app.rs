use crate::api::WaveGuideClient;
use crate::components::{EndpointPanel, Icon, IconKind, NoticeBanner, PlaylistModalView};
use crate::config::load_config;
use crate::notice::Notices;
use crate::playlist::{create_playlist, PlaylistError, PlaylistModal, SESSION_EXPIRED_MESSAGE};
use crate::selection::{Endpoint, SelectionState};
use crate::utils::redirect_to;
use dioxus::prelude::*;

/// Counts clicks anywhere on the page; search boxes close their dropdown
/// when it changes and the click did not start inside them.
#[derive(Clone, Copy, PartialEq)]
pub struct PageClicks(pub Signal<u64>);

#[component]
pub fn PlaylistPage() -> Element {
    let config = use_hook(load_config);
    let client = use_hook({
        let base = config.api_base.clone();
        move || WaveGuideClient::new(base)
    });
    let selection = use_signal(SelectionState::default);
    let mut notices = use_signal(Notices::default);
    let modal = use_signal(PlaylistModal::default);
    let mut page_clicks = use_signal(|| 0u64);
    let mut explainer_open = use_signal(|| true);

    // Provide state via context
    use_context_provider(|| config.clone());
    use_context_provider(|| client.clone());
    use_context_provider(|| selection);
    use_context_provider(|| notices);
    use_context_provider(|| modal);
    use_context_provider(|| PageClicks(page_clicks));

    let generate = {
        let client = client.clone();
        let entry_path = config.entry_path.clone();
        move |_| {
            let snapshot = selection();
            let client = client.clone();
            let entry_path = entry_path.clone();
            let mut modal = modal;
            spawn(async move {
                match create_playlist(&client, &snapshot, &mut modal).await {
                    Ok(_) => {}
                    Err(PlaylistError::Invalid(err)) => notices.write().push(err.to_string()),
                    Err(PlaylistError::SessionExpired) => {
                        notices.write().push(SESSION_EXPIRED_MESSAGE);
                        redirect_to(&entry_path);
                    }
                    // Already rendered inside the modal.
                    Err(PlaylistError::Failed(_)) => {}
                }
            });
        }
    };

    let loading = modal.read().is_loading();
    let logout_path = config.logout_path.clone();

    rsx! {
        div {
            class: "page",
            onclick: move |_| page_clicks.with_mut(|count| *count = count.wrapping_add(1)),
            header { class: "page-header",
                span { class: "page-title", "Wave Guide" }
                a { class: "logout-link", href: "{logout_path}",
                    Icon { kind: IconKind::LogOut, class: "icon-sm".to_string() }
                    "Log out"
                }
            }

            NoticeBanner {}

            if explainer_open() {
                div { id: "explainer", class: "explainer",
                    p {
                        "Pick where your playlist should start and where it should end. "
                        "Each side can be a song you search for or a mood, and the playlist "
                        "glides from one to the other."
                    }
                    button {
                        id: "close-explainer",
                        class: "explainer-close",
                        aria_label: "Hide explanation",
                        onclick: move |_| explainer_open.set(false),
                        Icon { kind: IconKind::Close, class: "icon-sm".to_string() }
                    }
                }
            }

            main { class: "endpoints",
                for endpoint in Endpoint::ALL {
                    EndpointPanel { key: "{endpoint}", endpoint }
                }
            }

            div { class: "generate-row",
                button {
                    id: "generate-playlist-button",
                    class: "btn btn-primary",
                    disabled: loading,
                    onclick: generate,
                    if loading {
                        Icon { kind: IconKind::Loader, class: "icon-sm".to_string() }
                        "Creating..."
                    } else {
                        Icon { kind: IconKind::Sparkles, class: "icon-sm".to_string() }
                        "Generate playlist"
                    }
                }
            }

            PlaylistModalView {}
        }
    }
}
