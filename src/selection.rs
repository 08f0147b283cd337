//! Per-endpoint selections shared by the search boxes, mood selects, mode
//! tabs and the playlist request.

use crate::api::SearchResultItem;
use crate::utils::capitalize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Rejected user-facing values. `Display` is the notice shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("Unknown mood \"{0}\" selected")]
    UnknownMood(String),
    #[error("unknown mode provided: {0}")]
    UnknownMode(String),
    #[error("unknown location provided: {0}")]
    UnknownEndpoint(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Source,
    Destination,
}

impl Endpoint {
    pub const ALL: [Endpoint; 2] = [Endpoint::Source, Endpoint::Destination];

    pub fn as_str(self) -> &'static str {
        match self {
            Endpoint::Source => "source",
            Endpoint::Destination => "destination",
        }
    }

    /// Id of a page element belonging to this endpoint, e.g.
    /// `source-autocomplete-input`.
    pub fn element_id(self, suffix: &str) -> String {
        format!("{}-{}", self.as_str(), suffix)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Endpoint {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "source" => Ok(Endpoint::Source),
            "destination" => Ok(Endpoint::Destination),
            other => Err(SelectionError::UnknownEndpoint(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Song,
    Mood,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Song, Mode::Mood];

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Song => "song",
            Mode::Mood => "mood",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "song" => Ok(Mode::Song),
            "mood" => Ok(Mode::Mood),
            other => Err(SelectionError::UnknownMode(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mood {
    Happy,
    Energized,
    Calm,
}

impl Mood {
    pub const ALL: [Mood; 3] = [Mood::Happy, Mood::Energized, Mood::Calm];

    /// Case-insensitive lookup in the fixed mood set.
    pub fn parse(raw: &str) -> Result<Self, SelectionError> {
        match raw.to_lowercase().as_str() {
            "happy" => Ok(Mood::Happy),
            "energized" => Ok(Mood::Energized),
            "calm" => Ok(Mood::Calm),
            _ => Err(SelectionError::UnknownMood(raw.to_string())),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Energized => "energized",
            Mood::Calm => "calm",
        }
    }

    pub fn icon_path(self) -> &'static str {
        match self {
            Mood::Happy => "/static/images/happy.png",
            Mood::Energized => "/static/images/energized.png",
            Mood::Calm => "/static/images/calm.png",
        }
    }

    pub fn label(self) -> String {
        format!("{} Mood", capitalize(self.as_str()))
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EndpointSelection {
    pub mode: Mode,
    pub track: Option<SearchResultItem>,
    pub mood: Option<Mood>,
}

impl EndpointSelection {
    fn new(mode: Mode) -> Self {
        Self {
            mode,
            track: None,
            mood: None,
        }
    }

    /// Whether the value matching the current mode is filled in.
    pub fn is_complete(&self) -> bool {
        match self.mode {
            Mode::Song => self.track.as_ref().is_some_and(|t| !t.id.is_empty()),
            Mode::Mood => self.mood.is_some(),
        }
    }
}

/// What the preview area of an endpoint shows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Preview<'a> {
    Placeholder,
    Track(&'a SearchResultItem),
    Mood(Mood),
}

/// Selections for both endpoints.
///
/// Values chosen under one mode survive a switch to the other; the mode
/// alone decides which of them is active.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionState {
    source: EndpointSelection,
    destination: EndpointSelection,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            source: EndpointSelection::new(Mode::Song),
            destination: EndpointSelection::new(Mode::Mood),
        }
    }
}

impl SelectionState {
    pub fn endpoint(&self, endpoint: Endpoint) -> &EndpointSelection {
        match endpoint {
            Endpoint::Source => &self.source,
            Endpoint::Destination => &self.destination,
        }
    }

    fn endpoint_mut(&mut self, endpoint: Endpoint) -> &mut EndpointSelection {
        match endpoint {
            Endpoint::Source => &mut self.source,
            Endpoint::Destination => &mut self.destination,
        }
    }

    pub fn mode(&self, endpoint: Endpoint) -> Mode {
        self.endpoint(endpoint).mode
    }

    /// Returns `false` when `mode` was already active.
    pub fn set_mode(&mut self, endpoint: Endpoint, mode: Mode) -> bool {
        let selection = self.endpoint_mut(endpoint);
        if selection.mode == mode {
            return false;
        }
        selection.mode = mode;
        true
    }

    pub fn track(&self, endpoint: Endpoint) -> Option<&SearchResultItem> {
        self.endpoint(endpoint).track.as_ref()
    }

    pub fn track_id(&self, endpoint: Endpoint) -> Option<&str> {
        self.track(endpoint).map(|t| t.id.as_str())
    }

    pub fn set_track(&mut self, endpoint: Endpoint, track: SearchResultItem) {
        self.endpoint_mut(endpoint).track = Some(track);
    }

    pub fn mood(&self, endpoint: Endpoint) -> Option<Mood> {
        self.endpoint(endpoint).mood
    }

    pub fn set_mood(&mut self, endpoint: Endpoint, mood: Mood) {
        self.endpoint_mut(endpoint).mood = Some(mood);
    }

    pub fn preview(&self, endpoint: Endpoint) -> Preview<'_> {
        let selection = self.endpoint(endpoint);
        match selection.mode {
            Mode::Song => selection
                .track
                .as_ref()
                .map_or(Preview::Placeholder, Preview::Track),
            Mode::Mood => selection.mood.map_or(Preview::Placeholder, Preview::Mood),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::track;

    #[test]
    fn defaults_match_page_load() {
        let state = SelectionState::default();
        assert_eq!(state.mode(Endpoint::Source), Mode::Song);
        assert_eq!(state.mode(Endpoint::Destination), Mode::Mood);
        assert!(state.track_id(Endpoint::Source).is_none());
        assert!(state.mood(Endpoint::Destination).is_none());
        assert_eq!(state.preview(Endpoint::Source), Preview::Placeholder);
    }

    #[test]
    fn track_and_mood_are_independent() {
        let mut state = SelectionState::default();
        state.set_track(Endpoint::Source, track("a1", "Roygbiv"));
        assert_eq!(state.track_id(Endpoint::Source), Some("a1"));
        assert!(state.mood(Endpoint::Source).is_none());

        state.set_mood(Endpoint::Destination, Mood::Calm);
        assert_eq!(state.mood(Endpoint::Destination), Some(Mood::Calm));
        assert!(state.track(Endpoint::Destination).is_none());
    }

    #[test]
    fn stale_values_survive_mode_switch() {
        let mut state = SelectionState::default();
        state.set_track(Endpoint::Source, track("a1", "Roygbiv"));
        assert!(state.set_mode(Endpoint::Source, Mode::Mood));
        assert_eq!(state.preview(Endpoint::Source), Preview::Placeholder);
        assert_eq!(state.track_id(Endpoint::Source), Some("a1"));

        assert!(state.set_mode(Endpoint::Source, Mode::Song));
        assert!(matches!(state.preview(Endpoint::Source), Preview::Track(t) if t.id == "a1"));
    }

    #[test]
    fn parsing_rejects_unknown_values() {
        assert_eq!(Mood::parse("HAPPY"), Ok(Mood::Happy));
        assert!(Mood::parse(" calm").is_err());
        assert_eq!(
            Mood::parse("sleepy").unwrap_err().to_string(),
            "Unknown mood \"sleepy\" selected"
        );
        assert_eq!("mood".parse::<Mode>(), Ok(Mode::Mood));
        assert!("Song".parse::<Mode>().is_err());
        assert_eq!(
            "middle".parse::<Endpoint>().unwrap_err().to_string(),
            "unknown location provided: middle"
        );
    }

    #[test]
    fn mood_labels_are_capitalized() {
        assert_eq!(Mood::Energized.label(), "Energized Mood");
        assert_eq!(Mood::Calm.icon_path(), "/static/images/calm.png");
        assert_eq!(Endpoint::Destination.element_id("mood-select"), "destination-mood-select");
    }
}
