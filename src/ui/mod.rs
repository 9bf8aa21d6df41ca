//! Terminal UI: the hex board drawn as offset text rows, a keyboard cursor,
//! and status/message panels.

mod app;
pub mod board_widget;
mod game_view;

pub use app::App;
