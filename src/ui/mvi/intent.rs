//! Base trait for intents.

/// Marker trait for intent objects.
///
/// An intent is either a user action (typing into a field, switching tabs)
/// or the outcome of a side effect (a submission was acknowledged).
pub trait Intent: 'static {}
