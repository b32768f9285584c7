//! Terminal input.
//!
//! [`keymap`] turns raw key presses into editor [`Action`](crate::command::Action)s
//! and [`terminal`] is the [`EventSource`](crate::traits::EventSource) that
//! reads them from the controlling terminal.

pub mod keymap;
pub mod terminal;
