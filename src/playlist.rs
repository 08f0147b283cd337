//! Validation, request and modal state for "Generate playlist".

use crate::api::{ApiError, Backend, NewPlaylistRequest, PlaylistResult};
use crate::selection::{Endpoint, SelectionState};
use thiserror::Error;

pub const GENERIC_FAILURE_MESSAGE: &str = "There was an issue creating your playlist. Sorry.";
pub const SESSION_EXPIRED_MESSAGE: &str = "Your session has expired. Please sign in again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please choose a song or mood to start your playlist")]
    MissingStart,
    #[error("Please choose a song or mood to end your playlist")]
    MissingEnd,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaylistError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("Your session has expired. Please sign in again.")]
    SessionExpired,
    #[error("There was an issue creating your playlist. Sorry.")]
    Failed(ApiError),
}

impl From<ApiError> for PlaylistError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Forbidden => PlaylistError::SessionExpired,
            other => PlaylistError::Failed(other),
        }
    }
}

/// Check both endpoints and build the request body.
///
/// Every stored value is sent, including ones left over from the inactive
/// mode; the backend reads the mode fields to pick the active one.
pub fn build_request(state: &SelectionState) -> Result<NewPlaylistRequest, ValidationError> {
    if !state.endpoint(Endpoint::Source).is_complete() {
        return Err(ValidationError::MissingStart);
    }
    if !state.endpoint(Endpoint::Destination).is_complete() {
        return Err(ValidationError::MissingEnd);
    }

    let track_id = |e: Endpoint| state.track_id(e).unwrap_or_default().to_string();
    let mood = |e: Endpoint| {
        state
            .mood(e)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default()
    };

    Ok(NewPlaylistRequest {
        source_mode: state.mode(Endpoint::Source).as_str().to_string(),
        seed_track_id: track_id(Endpoint::Source),
        source_mood: mood(Endpoint::Source),
        destination_track_id: track_id(Endpoint::Destination),
        destination_mode: state.mode(Endpoint::Destination).as_str().to_string(),
        destination_mood: mood(Endpoint::Destination),
    })
}

/// Result modal, one request at a time.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum PlaylistModal {
    #[default]
    Closed,
    Loading,
    Ready(PlaylistResult),
    Failed(String),
}

impl PlaylistModal {
    pub fn begin_loading(&mut self) {
        *self = PlaylistModal::Loading;
    }

    pub fn show_result(&mut self, result: PlaylistResult) {
        *self = PlaylistModal::Ready(result);
    }

    pub fn show_error(&mut self, message: impl Into<String>) {
        *self = PlaylistModal::Failed(message.into());
    }

    /// Safe from any state, including one that never opened.
    pub fn close(&mut self) {
        *self = PlaylistModal::Closed;
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, PlaylistModal::Closed)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, PlaylistModal::Loading)
    }
}

/// Somewhere a `PlaylistModal` lives: a plain value in tests, a signal in the
/// page.
pub trait ModalSlot {
    fn update(&mut self, f: impl FnOnce(&mut PlaylistModal));
}

impl ModalSlot for PlaylistModal {
    fn update(&mut self, f: impl FnOnce(&mut PlaylistModal)) {
        f(self)
    }
}

/// Validate, show the loading modal, send one request and render the outcome.
///
/// Validation errors return before the modal opens or anything is sent. A
/// 403 closes the modal; the caller is expected to send the user back to the
/// entry page.
pub async fn create_playlist<B, M>(
    backend: &B,
    state: &SelectionState,
    modal: &mut M,
) -> Result<PlaylistResult, PlaylistError>
where
    B: Backend,
    M: ModalSlot,
{
    let request = build_request(state)?;

    modal.update(PlaylistModal::begin_loading);
    tracing::info!(
        source_mode = %request.source_mode,
        destination_mode = %request.destination_mode,
        "creating playlist"
    );

    match backend.new_playlist(&request).await {
        Ok(result) => {
            tracing::info!(name = %result.name, "playlist created");
            modal.update(|m| m.show_result(result.clone()));
            Ok(result)
        }
        Err(err) => {
            let err = PlaylistError::from(err);
            match &err {
                PlaylistError::SessionExpired => {
                    tracing::info!("session expired while creating playlist");
                    modal.update(PlaylistModal::close);
                }
                _ => {
                    tracing::warn!(error = ?err, "playlist creation failed");
                    modal.update(|m| m.show_error(GENERIC_FAILURE_MESSAGE));
                }
            }
            Err(err)
        }
    }
}
