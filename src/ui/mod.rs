pub mod ack;
pub mod app;
pub mod components;
pub mod editors;
pub mod events;
pub mod footer;
pub mod form;
pub mod header;
pub mod icons;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod profile;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
