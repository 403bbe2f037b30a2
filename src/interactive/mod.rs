//! Interactive TUI mode

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, run_tui};
pub use rendering::{tile_style, ui};
