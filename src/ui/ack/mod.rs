mod dialog;
mod intent;
mod reducer;
mod state;

pub use dialog::render_ack_dialog;
pub use intent::AckIntent;
pub use reducer::AckReducer;
pub use state::AckDialogState;
