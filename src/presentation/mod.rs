pub mod app;
pub mod cli;
pub mod config;

pub use app::{BootstrapError, build_dispatcher};
pub use cli::Cli;
pub use config::{Environment, Settings};
