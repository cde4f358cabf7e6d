//! Session-level game control
//!
//! The controller that owns the current round, plus the timed message slot
//! the front ends share.

mod controller;
pub mod notice;

pub use controller::{Game, GameError};
pub use notice::{HINT_DISPLAY, Notice, NoticeBoard, NoticeStyle};
