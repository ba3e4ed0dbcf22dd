//! Version discovery error types

/// Errors that can occur while reading the published version.
#[derive(Debug, thiserror::Error)]
pub enum VersionError {
    /// The build properties carried no `version.old` entry.
    #[error("no version.old entry in the build properties")]
    MissingEntry,

    /// The version string lacked major or minor components.
    #[error("version `{value}` needs at least major and minor components")]
    TooFewComponents {
        /// The value that failed to parse.
        value: String,
    },
}
