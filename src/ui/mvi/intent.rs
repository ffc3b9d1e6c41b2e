/// Marker trait for intents: key presses, store results, session changes.
pub trait Intent: Send + 'static {}
