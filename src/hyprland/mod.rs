//! Hyprland-specific implementations.
//!
//! This module provides the concrete [`DisplayServer`](crate::traits::DisplayServer)
//! backend and the `hyprctl` command generator.
//!
//! Nothing outside this module should reference Hyprland directly.

pub mod display;
pub mod keyword;
