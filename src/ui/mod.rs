//! GUI module for the tic-tac-toe game
//!
//! This module provides a native Rust GUI using egui/eframe. It only renders
//! the controller's read model and forwards user intents as [`Command`]s.
//!
//! [`Command`]: crate::game::Command

mod app;
mod board_view;
mod theme;
mod toast;

pub use app::TicTacToeApp;
pub use toast::{Toast, ToastKind};
