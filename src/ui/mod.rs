//! Front ends: a ratatui game view with a background computer player, and a
//! plain console mode.

mod app;
pub mod console;
mod game_view;

pub use app::App;
