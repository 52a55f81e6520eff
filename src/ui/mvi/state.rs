/// Marker trait for UI state objects.
///
/// States are values: cloned to derive new ones, compared to detect
/// changes, and defaulted to get the initial state.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
