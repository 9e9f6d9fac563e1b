//! Terminal UI: difficulty selection and the game board view.

mod app;
mod game_view;

pub use app::App;
