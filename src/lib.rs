//! Error Prone argument compiler
//!
//! Reads layered Error Prone configuration (built-in defaults, user and
//! project TOML files, command-line overrides) and compiles it into the
//! argument string passed to the Error Prone javac plugin.

pub mod config;
pub mod render;

pub use config::{CliOverrides, ConfigError, EffectiveConfig, OptionsFile};
pub use errorprone_flags::{parse_argument_string, FlagError, ParsedFlags};
pub use errorprone_options::{
    ArgumentProvider, CheckSeverity, Deferred, ErrorProneOptions, OptionsError, Property,
    ResolvedOptions,
};
pub use render::{render, RenderReport};
