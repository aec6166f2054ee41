//! MedSUS profile form: a terminal UI for editing personal data, medical
//! history and care preferences, with in-memory state and a simulated
//! submission sink.

pub mod cli;
pub mod config;
pub mod logging;
pub mod profile;
pub mod submission;
pub mod ui;
