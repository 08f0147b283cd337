//! Debounced track search and the result list behind each search box.

use crate::api::{ApiError, Backend, SearchResultItem};
use crate::config::AppConfig;
use crate::selection::{Endpoint, SelectionState};
use crate::utils::delay_ms;
use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

pub const SEARCH_ERROR_MESSAGE: &str = "Please refresh the page and try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTiming {
    pub debounce_ms: u64,
    pub retries: u32,
    pub retry_interval_ms: u64,
}

impl From<&AppConfig> for SearchTiming {
    fn from(config: &AppConfig) -> Self {
        Self {
            debounce_ms: config.debounce_ms,
            retries: config.search_retries,
            retry_interval_ms: config.retry_interval_ms,
        }
    }
}

/// Generation counter shared by every pending lookup of one search box.
/// Only the most recent input may issue a request or render its response.
#[derive(Debug, Clone, Default)]
pub struct Debouncer {
    generation: Rc<Cell<u64>>,
}

impl Debouncer {
    pub fn bump(&self) -> u64 {
        let next = self.generation.get().saturating_add(1);
        self.generation.set(next);
        next
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.generation.get() == generation
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// Empty query: the list closes without a request.
    Hidden,
    Results(Vec<SearchResultItem>),
    Failed,
}

/// Run a lookup, retrying transient failures with a fixed delay.
///
/// Retries stop as soon as `generation` is superseded; the last error is
/// returned and the caller drops it.
pub async fn autocomplete_with_retry<B: Backend>(
    backend: &B,
    query: &str,
    timing: SearchTiming,
    debouncer: &Debouncer,
    generation: u64,
) -> Result<Vec<SearchResultItem>, ApiError> {
    let mut attempt = 0;
    loop {
        match backend.autocomplete(query).await {
            Ok(items) => return Ok(items),
            Err(err) if err.is_transient() && attempt < timing.retries => {
                attempt += 1;
                tracing::warn!(%err, attempt, "search failed, retrying");
                delay_ms(timing.retry_interval_ms).await;
                if !debouncer.is_current(generation) {
                    tracing::debug!(%query, "search superseded, not retrying");
                    return Err(err);
                }
            }
            Err(err) => return Err(err),
        }
    }
}

#[derive(Clone)]
pub struct SearchFlow<B: Backend> {
    backend: B,
    timing: SearchTiming,
    debouncer: Debouncer,
}

impl<B: Backend> SearchFlow<B> {
    pub fn new(backend: B, timing: SearchTiming) -> Self {
        Self {
            backend,
            timing,
            debouncer: Debouncer::default(),
        }
    }

    /// Register a keystroke and return the lookup it schedules.
    ///
    /// The keystroke supersedes every earlier one as soon as this is called.
    /// The future resolves to `None` when a later keystroke arrives before
    /// the quiet period ends or before the response comes back.
    pub fn on_input(&self, text: &str) -> impl Future<Output = Option<SearchOutcome>> + 'static {
        let generation = self.debouncer.bump();
        let query = text.trim().to_string();
        let backend = self.backend.clone();
        let debouncer = self.debouncer.clone();
        let timing = self.timing;

        async move {
            if query.is_empty() {
                return Some(SearchOutcome::Hidden);
            }

            delay_ms(timing.debounce_ms).await;
            if !debouncer.is_current(generation) {
                tracing::debug!(%query, "search superseded before sending");
                return None;
            }

            let outcome = match autocomplete_with_retry(
                &backend,
                &query,
                timing,
                &debouncer,
                generation,
            )
            .await
            {
                Ok(items) => SearchOutcome::Results(items),
                Err(err) => {
                    tracing::warn!(%err, %query, "search failed");
                    SearchOutcome::Failed
                }
            };

            if !debouncer.is_current(generation) {
                tracing::debug!(%query, "dropping stale search response");
                return None;
            }
            Some(outcome)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKey {
    Down,
    Up,
    Enter,
    Escape,
}

#[derive(Debug, Clone, PartialEq)]
pub enum KeyOutcome {
    Ignored,
    Moved(usize),
    Commit(SearchResultItem),
    Closed,
}

/// Rows, highlight and visibility of one search box's dropdown.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultList {
    items: Vec<SearchResultItem>,
    failed: bool,
    highlighted: Option<usize>,
    visible: bool,
}

impl ResultList {
    pub fn apply(&mut self, outcome: SearchOutcome) {
        self.highlighted = None;
        match outcome {
            SearchOutcome::Hidden => self.visible = false,
            SearchOutcome::Results(items) => {
                self.items = items;
                self.failed = false;
                self.visible = true;
            }
            SearchOutcome::Failed => {
                self.items.clear();
                self.failed = true;
                self.visible = true;
            }
        }
    }

    pub fn items(&self) -> &[SearchResultItem] {
        &self.items
    }

    pub fn failed(&self) -> bool {
        self.failed
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// A click landed somewhere on the page. Clicks that started inside the
    /// search box keep the list open; any other click hides it. Returns
    /// whether the list was hidden.
    pub fn page_click(&mut self, clicked_inside: bool) -> bool {
        if clicked_inside || !self.visible {
            return false;
        }
        self.visible = false;
        true
    }

    /// Typing starts a fresh navigation.
    pub fn reset_highlight(&mut self) {
        self.highlighted = None;
    }

    pub fn highlight(&mut self, index: usize) {
        if index < self.items.len() {
            self.highlighted = Some(index);
        }
    }

    pub fn handle_key(&mut self, key: ListKey) -> KeyOutcome {
        if !self.visible {
            return KeyOutcome::Ignored;
        }
        if key == ListKey::Escape {
            self.visible = false;
            return KeyOutcome::Closed;
        }
        let Some(last) = self.items.len().checked_sub(1) else {
            return KeyOutcome::Ignored;
        };

        match key {
            ListKey::Down => {
                let next = self.highlighted.map_or(0, |i| (i + 1).min(last));
                self.highlighted = Some(next);
                KeyOutcome::Moved(next)
            }
            ListKey::Up => {
                let next = self.highlighted.map_or(0, |i| i.saturating_sub(1));
                self.highlighted = Some(next);
                KeyOutcome::Moved(next)
            }
            ListKey::Enter => {
                let index = self.highlighted.unwrap_or(0);
                KeyOutcome::Commit(self.items[index].clone())
            }
            ListKey::Escape => KeyOutcome::Closed,
        }
    }
}

/// Store a picked row as the endpoint's track and close the dropdown.
pub fn commit_track(
    state: &mut SelectionState,
    list: &mut ResultList,
    endpoint: Endpoint,
    item: SearchResultItem,
) {
    tracing::debug!(endpoint = %endpoint, track_id = %item.id, "track selected");
    state.set_track(endpoint, item);
    list.hide();
    list.reset_highlight();
}
