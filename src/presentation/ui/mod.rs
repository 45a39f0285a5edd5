pub mod app;
pub mod cli;
pub mod render;

pub use app::App;
pub use cli::{Cli, Command};
