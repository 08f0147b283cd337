use crate::api::{SearchResultItem, WaveGuideClient};
use crate::components::{Icon, IconKind, PageClicks};
use crate::config::AppConfig;
use crate::search::*;
use crate::selection::{Endpoint, SelectionState};
use dioxus::prelude::*;
use std::cell::Cell;
use std::rc::Rc;

fn commit_row(
    mut selection: Signal<SelectionState>,
    mut results: Signal<ResultList>,
    endpoint: Endpoint,
    item: SearchResultItem,
) {
    selection.with_mut(|state| results.with_mut(|list| commit_track(state, list, endpoint, item)));
}

fn row_class(highlighted: bool) -> &'static str {
    if highlighted {
        "search-results-item search-results-item-hover"
    } else {
        "search-results-item"
    }
}

/// Backends may return the same track twice; the position keeps keys unique.
fn row_key(index: usize, item: &SearchResultItem) -> String {
    format!("{index}-{}", item.id)
}

fn list_key(key: &Key) -> Option<ListKey> {
    match key {
        Key::ArrowDown => Some(ListKey::Down),
        Key::ArrowUp => Some(ListKey::Up),
        Key::Enter => Some(ListKey::Enter),
        Key::Escape => Some(ListKey::Escape),
        _ => None,
    }
}

/// Track search for one endpoint: debounced lookups, a keyboard-navigable
/// dropdown, and dismissal on clicks elsewhere on the page.
#[component]
pub fn SearchBox(endpoint: Endpoint) -> Element {
    let config = use_context::<AppConfig>();
    let client = use_context::<WaveGuideClient>();
    let selection = use_context::<Signal<SelectionState>>();
    let page_clicks = use_context::<PageClicks>();

    let mut query = use_signal(String::new);
    let mut results = use_signal(ResultList::default);
    let flow = use_hook(|| SearchFlow::new(client, SearchTiming::from(&config)));
    let clicked_inside = use_hook(|| Rc::new(Cell::new(false)));

    // Every click on the page bumps the counter after bubbling; clicks that
    // started inside this box mark themselves first and are skipped.
    {
        let clicked_inside = clicked_inside.clone();
        use_effect(move || {
            let _ = (page_clicks.0)();
            let inside = clicked_inside.replace(false);
            results.with_mut(|list| list.page_click(inside));
        });
    }

    let list = results();
    let open = list.is_visible();
    let input_id = endpoint.element_id("autocomplete-input");
    let list_id = endpoint.element_id("search-results-list");
    let rows: Vec<(usize, String, SearchResultItem)> = list
        .items()
        .iter()
        .cloned()
        .enumerate()
        .map(|(index, item)| (index, row_key(index, &item), item))
        .collect();

    rsx! {
        div {
            class: "search-box",
            onclick: {
                let clicked_inside = clicked_inside.clone();
                move |_| clicked_inside.set(true)
            },
            div { class: "search-input-wrapper",
                Icon {
                    kind: IconKind::Search,
                    class: "search-input-icon".to_string(),
                }
                input {
                    id: "{input_id}",
                    class: if open { "search-input search-input-with-results" } else { "search-input" },
                    placeholder: "Search for a song...",
                    autocomplete: "off",
                    value: query,
                    oninput: move |e| {
                        let value = e.value();
                        query.set(value.clone());
                        results.with_mut(ResultList::reset_highlight);
                        let lookup = flow.on_input(&value);
                        spawn(async move {
                            if let Some(outcome) = lookup.await {
                                results.with_mut(|list| list.apply(outcome));
                            }
                        });
                    },
                    onkeydown: move |e| {
                        let Some(key) = list_key(&e.key()) else {
                            return;
                        };
                        let outcome = results.with_mut(|list| list.handle_key(key));
                        match outcome {
                            KeyOutcome::Ignored | KeyOutcome::Closed => {}
                            KeyOutcome::Moved(_) => e.prevent_default(),
                            KeyOutcome::Commit(item) => {
                                e.prevent_default();
                                commit_row(selection, results, endpoint, item);
                            }
                        }
                    },
                }
            }

            if open {
                ul { id: "{list_id}", class: "search-results-list",
                    if list.failed() {
                        li { class: "search-results-item search-error", "{SEARCH_ERROR_MESSAGE}" }
                    } else if list.items().is_empty() {
                        li { class: "search-results-item search-empty", "No matching songs" }
                    } else {
                        for (index, row_id, item) in rows {
                            li {
                                key: "{row_id}",
                                class: row_class(list.highlighted() == Some(index)),
                                title: item.caption(),
                                "data-id": "{item.id}",
                                onmouseenter: move |_| results.with_mut(|list| list.highlight(index)),
                                onclick: {
                                    let item = item.clone();
                                    move |_| commit_row(selection, results, endpoint, item.clone())
                                },
                                img {
                                    class: "search-result-thumbnail",
                                    src: "{item.small_image}",
                                    alt: "Album art for {item.track_name}",
                                }
                                div { class: "search-result-track-info",
                                    div { class: "search-result-title", "{item.track_name}" }
                                    div { class: "search-result-artist", "{item.artist_name}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
