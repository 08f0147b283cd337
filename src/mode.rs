use crate::notice::Notices;
use crate::selection::{Endpoint, Mode, SelectionState};

/// Switch an endpoint between song and mood input from raw tab values.
///
/// Returns `true` only when the mode actually changed. Unknown values are
/// reported through `notices` and change nothing.
pub fn select_mode(
    state: &mut SelectionState,
    endpoint: &str,
    mode: &str,
    notices: &mut Notices,
) -> bool {
    let mode = match mode.parse::<Mode>() {
        Ok(mode) => mode,
        Err(err) => {
            notices.push(err.to_string());
            return false;
        }
    };
    let endpoint = match endpoint.parse::<Endpoint>() {
        Ok(endpoint) => endpoint,
        Err(err) => {
            notices.push(err.to_string());
            return false;
        }
    };

    switch_mode(state, endpoint, mode)
}

pub fn switch_mode(state: &mut SelectionState, endpoint: Endpoint, mode: Mode) -> bool {
    let changed = state.set_mode(endpoint, mode);
    if changed {
        tracing::debug!(endpoint = %endpoint, mode = %mode, "mode switched");
    }
    changed
}
