/// Marker trait for reducer-owned state. `Default` is the freshly mounted state.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
