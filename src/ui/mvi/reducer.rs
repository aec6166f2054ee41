//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// Transforms state based on intents: `(State, Intent) -> State`.
///
/// Reducers never perform I/O. Side effects such as handing a record to the
/// submission sink happen in the controller before or after dispatch.
pub trait Reducer {
    type State: UiState;

    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
