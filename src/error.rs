//! Error types for argument binding

use thiserror::Error;

use crate::schema::FieldKind;

/// Result type for binding operations
pub type BindResult<T> = Result<T, BindError>;

/// Errors that can occur while binding command-line arguments
#[derive(Debug, Error)]
pub enum BindError {
    /// The binding target does not describe a bindable structure
    #[error("Invalid binding target: {0}")]
    InvalidTarget(String),

    /// Two fields registered the same option name in one binding session
    #[error("Duplicate option name: '{name}'")]
    DuplicateOption {
        /// The option name that was registered twice
        name: String,
    },

    /// A field descriptor carries no help text
    #[error("Field '{field}' has an empty description")]
    MissingDescription {
        /// The offending field's option name
        field: String,
    },

    /// A field's kind has no registered option type
    #[error("Field '{field}' has unsupported kind '{kind}'")]
    UnsupportedKind {
        /// The offending field's option name
        field: String,
        /// The kind tag as declared
        kind: String,
    },

    /// A declared kind tag disagrees with the field's storage slot
    #[error("Field '{field}' declares kind '{declared}' but its storage holds '{storage}'")]
    KindMismatch {
        /// The offending field's option name
        field: String,
        /// The kind named by the descriptor
        declared: FieldKind,
        /// The kind of the storage slot
        storage: FieldKind,
    },

    /// A declared default value does not parse into the field's kind
    #[error("Field '{field}' has default '{value}' which does not parse as '{kind}'")]
    InvalidDefault {
        /// The offending field's option name
        field: String,
        /// The field's resolved kind
        kind: FieldKind,
        /// The default text that failed to parse
        value: String,
    },

    /// The argument vector contains a malformed or unrecognized option
    #[error(transparent)]
    Parse(#[from] clap::Error),

    /// One or more required options were not supplied on the command line
    #[error("Required options not supplied: {}", .names.join(", "))]
    MissingRequired {
        /// The missing option names, sorted
        names: Vec<String>,
        /// Rendered usage text of the option registry that ran the parse
        usage: String,
    },

    /// A schema manifest could not be read or decoded
    #[error("Schema error: {0}")]
    Schema(String),
}

impl BindError {
    /// Create an invalid-target error with context
    pub fn invalid_target<S: Into<String>>(msg: S) -> Self {
        Self::InvalidTarget(msg.into())
    }

    /// Create a schema error with context
    pub fn schema<S: Into<String>>(msg: S) -> Self {
        Self::Schema(msg.into())
    }

    /// Usage text carried by this error, when the option registry had
    /// already been configured at the point of failure
    pub fn usage(&self) -> Option<&str> {
        match self {
            BindError::MissingRequired { usage, .. } => Some(usage),
            _ => None,
        }
    }
}
