//! **hyprdisplay** — an interactive terminal editor for Hyprland monitor
//! layouts.
//!
//! Monitors are discovered once at startup, drawn as a scaled diagram, and
//! moved around with the arrow keys.  The resulting arrangement can be
//! applied immediately or copied to the clipboard as a chain of
//! `hyprctl keyword monitor` commands.
//!
//! # Architecture
//!
//! The crate is organised around a single-consumer event loop:
//!
//! * [`editor::Editor`] owns the [`layout::Layout`] and turns every
//!   [`traits::AppEvent`] into a state change and an [`editor::Outcome`].
//! * [`render`] rebuilds the frame from scratch using [`projection`].
//! * Side effects go through [`traits::DisplayServer`] and
//!   [`traits::Clipboard`], run on background threads by [`effects`], and
//!   report back as events on the same queue.
//!
//! Concrete implementations live in [`hyprland`] (Hyprland IPC and
//! `hyprctl`), [`clipboard`] (`arboard` / `wl-copy`) and [`input`] (crossterm).

pub mod clipboard;
pub mod command;
pub mod config;
pub mod editor;
pub mod effects;
pub mod hyprland;
pub mod input;
pub mod layout;
pub mod projection;
pub mod render;
pub mod screen;
pub mod traits;
