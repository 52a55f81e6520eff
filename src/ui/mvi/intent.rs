/// Marker trait for intents.
///
/// Intents carry user actions and system events (fetch results, timers)
/// into a reducer. They cross task boundaries, hence `Send + 'static`.
pub trait Intent: Send + 'static {}
