use crate::ui::mvi::Reducer;

use super::intent::ProfileIntent;
use super::state::ProfileState;

/// Reducer for the profile load state.
///
/// Only `Loading` accepts a transition; Loaded and Failed are final.
pub struct ProfileReducer;

impl Reducer for ProfileReducer {
    type State = ProfileState;
    type Intent = ProfileIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match (state, intent) {
            (ProfileState::Loading, ProfileIntent::Loaded { record }) => {
                ProfileState::Loaded { record }
            }
            (ProfileState::Loading, ProfileIntent::Failed { reason }) => {
                ProfileState::Failed { reason }
            }
            (terminal, _) => terminal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::UserRecord;

    #[test]
    fn loaded_stores_record() {
        let record = UserRecord::new("Ada", "ada@example.com");
        let state = ProfileReducer::reduce(
            ProfileState::Loading,
            ProfileIntent::Loaded {
                record: record.clone(),
            },
        );
        assert_eq!(state, ProfileState::Loaded { record });
    }

    #[test]
    fn failed_stores_reason() {
        let state = ProfileReducer::reduce(
            ProfileState::Loading,
            ProfileIntent::Failed {
                reason: "HTTP 500".into(),
            },
        );
        assert_eq!(state.failure(), Some("HTTP 500"));
    }
}
