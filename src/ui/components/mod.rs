mod popup;

pub use popup::{wrap_words, PopupDialog};
