#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

pub const DEFAULT_WINDOW_SIZE: usize = 3;
pub const DEFAULT_LAMBDA: f64 = 0.1;
pub const DEFAULT_KEYWORD_COUNT: usize = 3;
pub const DEFAULT_WORKERS: usize = 4;
