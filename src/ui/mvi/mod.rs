//! Model-View-Intent (MVI) primitives.
//!
//! Every piece of mutable form state lives in a `UiState`, changes only
//! through a `Reducer`, and is driven by `Intent`s produced by the input
//! handler.
//!
//! ```text
//! key event ──→ Intent ──→ Reducer ──→ State ──→ render
//!     ↑                                            │
//!     └────────────────────────────────────────────┘
//! ```

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
