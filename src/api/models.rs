use serde::{Deserialize, Serialize};

/// One row of the `/autocomplete` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SearchResultItem {
    pub id: String,
    #[serde(default)]
    pub track_name: String,
    #[serde(default)]
    pub artist_name: String,
    #[serde(default)]
    pub small_image: String,
    #[serde(default)]
    pub large_image: String,
}

impl SearchResultItem {
    /// Tooltip used on result rows and the selected-song panel.
    pub fn caption(&self) -> String {
        format!("{} by {}", self.track_name, self.artist_name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutocompleteRequest {
    pub query: String,
}

/// Body of `POST /new_playlist`. Absent selections are sent as empty strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct NewPlaylistRequest {
    pub source_mode: String,
    pub seed_track_id: String,
    pub source_mood: String,
    pub destination_track_id: String,
    pub destination_mode: String,
    pub destination_mood: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PlaylistResult {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub image: String,
}
