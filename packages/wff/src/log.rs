/*!
Targets for the [log] macros used throughout the library.

No logger is installed here; binaries choose their own.
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [parsing](crate::parser)
    pub const PARSER: &str = "parser";

    /// Logs related to [evaluation](crate::evaluate)
    pub const EVALUATION: &str = "evaluation";

    /// Logs related to [equivalence checks](crate::equivalence)
    pub const EQUIVALENCE: &str = "equivalence";

    /// Logs related to [formula generation](crate::generate)
    pub const GENERATOR: &str = "generator";
}
