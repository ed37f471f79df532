//! Terminal front end: viewport geometry, board renderer, game view and the
//! render/input loop, plus a headless runner for computer-only games.

mod app;
pub mod board_widget;
mod game_view;
pub mod headless;
mod layout;
pub mod terminal;

pub use app::App;
pub use game_view::board_area;
pub use layout::Geometry;
