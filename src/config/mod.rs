//! Layered options configuration
//!
//! Options are merged from, lowest precedence first:
//! 1. Built-in defaults
//! 2. User config (~/.config/errorprone/options.toml)
//! 3. Project config files (.errorprone.toml, or each --config in order)
//! 4. CLI overrides

mod defaults;
mod effective;
mod file;
mod merge;
mod overrides;

pub use defaults::BuiltinDefaults;
pub use effective::{ConfigError, ConfigOrigin, ConfigSource, EffectiveConfig};
pub use file::OptionsFile;
pub use merge::{deep_merge, merge_layers};
pub use overrides::CliOverrides;

/// Project config file looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = ".errorprone.toml";

/// User config path relative to `$HOME`.
pub const USER_CONFIG_PATH: &str = ".config/errorprone/options.toml";
