//! Game session: history store, thinking timer and turn controller
//!
//! Front ends talk to [`GameController`] only. It owns the [`History`] and
//! hands out read-only views of it.

pub mod controller;
pub mod history;
pub mod schedule;

pub use controller::{Command, GameController, TurnState};
pub use history::{History, Snapshot};
pub use schedule::{MoveScheduler, TaskHandle};
