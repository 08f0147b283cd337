use crate::notice::Notices;
use crate::selection::{Endpoint, Mood, SelectionState};

/// Apply a mood chosen in an endpoint's mood select.
///
/// An unknown value produces one notice and leaves the state alone.
pub fn choose_mood(
    state: &mut SelectionState,
    endpoint: Endpoint,
    raw: &str,
    notices: &mut Notices,
) -> Option<Mood> {
    match Mood::parse(raw) {
        Ok(mood) => {
            state.set_mood(endpoint, mood);
            tracing::debug!(endpoint = %endpoint, mood = %mood, "mood selected");
            Some(mood)
        }
        Err(err) => {
            notices.push(err.to_string());
            None
        }
    }
}
