//! In-memory backend used by the flow tests.

use crate::api::*;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

#[derive(Clone, Default)]
pub struct FakeBackend {
    inner: Rc<RefCell<FakeState>>,
}

#[derive(Default)]
struct FakeState {
    latency_ms: u64,
    queries: Vec<String>,
    search_replies: VecDeque<Result<Vec<SearchResultItem>, ApiError>>,
    playlist_requests: Vec<NewPlaylistRequest>,
    playlist_replies: VecDeque<Result<PlaylistResult, ApiError>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delay every search reply, so later keystrokes can overtake it.
    pub fn set_latency_ms(&self, ms: u64) {
        self.inner.borrow_mut().latency_ms = ms;
    }

    pub fn push_search(&self, reply: Result<Vec<SearchResultItem>, ApiError>) {
        self.inner.borrow_mut().search_replies.push_back(reply);
    }

    pub fn push_playlist(&self, reply: Result<PlaylistResult, ApiError>) {
        self.inner.borrow_mut().playlist_replies.push_back(reply);
    }

    pub fn queries(&self) -> Vec<String> {
        self.inner.borrow().queries.clone()
    }

    pub fn playlist_requests(&self) -> Vec<NewPlaylistRequest> {
        self.inner.borrow().playlist_requests.clone()
    }
}

impl Backend for FakeBackend {
    async fn autocomplete(&self, query: &str) -> Result<Vec<SearchResultItem>, ApiError> {
        let latency_ms = {
            let mut state = self.inner.borrow_mut();
            state.queries.push(query.to_string());
            state.latency_ms
        };
        if latency_ms > 0 {
            crate::utils::delay_ms(latency_ms).await;
        }
        self.inner
            .borrow_mut()
            .search_replies
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn new_playlist(&self, request: &NewPlaylistRequest) -> Result<PlaylistResult, ApiError> {
        let mut state = self.inner.borrow_mut();
        state.playlist_requests.push(request.clone());
        state
            .playlist_replies
            .pop_front()
            .unwrap_or(Err(ApiError::Status(500)))
    }
}

pub fn track(id: &str, name: &str) -> SearchResultItem {
    SearchResultItem {
        id: id.to_string(),
        track_name: name.to_string(),
        artist_name: "Test Artist".to_string(),
        small_image: format!("{id}-small.jpg"),
        large_image: format!("{id}-large.jpg"),
    }
}
