//! One module per subcommand.

pub mod completions;
pub mod config;
pub mod init;
pub mod layers;
pub mod new;
pub mod presets;
pub mod resolve;
