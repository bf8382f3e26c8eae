//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{App, InputMode, MAX_SIZE, MIN_SIZE, Message, MessageStyle, Statistics, run_tui};
