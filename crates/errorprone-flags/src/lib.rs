//! Reader for the Error Prone argument grammar.
//!
//! Splits an argument string the way javac hands it to the plugin and sorts
//! each token into boolean flags, the excluded-paths pattern, the check
//! severity map and the check option map. Anything else is passed through.

mod parser;
mod result;

pub use parser::{parse_argument_string, parse_flags, split_arguments, BOOLEAN_FLAGS};
pub use result::{FlagError, ParsedFlags};
