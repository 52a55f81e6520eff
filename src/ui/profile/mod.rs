//! Profile card feature module.
//!
//! Container/presenter split on top of MVI:
//! - `state.rs` - Load state (Loading / Loaded / Failed)
//! - `intent.rs` - Fetch completion events
//! - `reducer.rs` - State transitions
//! - `card.rs` - Stateless presenter
//! - `container.rs` - Owns state, runs the fetch, delegates rendering

mod card;
mod container;
mod intent;
mod reducer;
mod state;

pub use card::ProfileCard;
pub use container::{ProfileContainer, FAILURE_PREFIX, PLACEHOLDER, TASK_LOST};
pub use intent::ProfileIntent;
pub use reducer::ProfileReducer;
pub use state::ProfileState;
