//! Error Prone plugin options compiler.
//!
//! Options are accumulated on an [`ErrorProneOptions`] during configuration,
//! possibly as deferred values, and compiled once at build time into the
//! `-Xep…` argument tokens understood by the Error Prone javac plugin.

mod deferred;
mod error;
mod options;
mod provider;
mod serialize;
mod severity;
mod validate;

pub use deferred::{Deferred, Property};
pub use error::OptionsError;
pub use options::ErrorProneOptions;
pub use provider::ArgumentProvider;
pub use serialize::{
    ResolvedOptions, ALL_DISABLED_CHECKS_AS_WARNINGS, ALL_ERRORS_AS_WARNINGS, CHECK_PREFIX,
    COMPILING_TEST_ONLY_CODE, DISABLE_ALL_CHECKS, DISABLE_WARNINGS_IN_GENERATED_CODE,
    EXCLUDED_PATHS_PREFIX, IGNORE_SUPPRESSION_ANNOTATIONS, IGNORE_UNKNOWN_CHECK_NAMES,
    OPTION_PREFIX, PLUGIN_ARGUMENT,
};
pub use severity::{CheckSeverity, UnknownSeverity};
pub use validate::{validate_name, validate_no_whitespace};
