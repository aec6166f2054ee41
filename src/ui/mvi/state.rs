//! Base trait for UI state.

/// Marker trait for UI state objects.
///
/// States are plain values: cloned to derive new states, compared to detect
/// changes, and defaulted so the controller can `mem::take` them during
/// dispatch.
pub trait UiState: Clone + PartialEq + Default + 'static {}
