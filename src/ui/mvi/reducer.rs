use super::intent::Intent;
use super::state::UiState;

/// Pure state transition: (State, Intent) -> State.
///
/// Reducers never talk to the store. Anything that needs I/O is sent as a
/// command by the caller and comes back later as another intent.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
