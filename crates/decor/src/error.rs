use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecorError {
    #[error("validation error: {source}")]
    Validation {
        #[from]
        source: ValidationError,
    },

    #[error("configuration error: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("argument error: {source}")]
    Args {
        #[from]
        source: ArgsError,
    },
}

/// Raised by guards before the target is invoked
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("argument {argument} must not be an empty string")]
    EmptyText { argument: String },

    #[error("rejected value: {reason}")]
    Rejected { reason: String },
}

impl ValidationError {
    pub fn empty_text<S: ToString>(argument: S) -> Self {
        Self::EmptyText { argument: argument.to_string() }
    }

    pub fn rejected<S: ToString>(reason: S) -> Self {
        Self::Rejected { reason: reason.to_string() }
    }
}

/// Raised by decorator factories when given invalid parameters
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("repeat count must not be negative, current: {times}")]
    NegativeRepeat { times: i64 },

    #[error("repeat count {times} can't be represented on this platform")]
    RepeatOverflow { times: i64 },

    #[error("{field} must be set")]
    MissingField { field: &'static str },
}

impl ConfigError {
    pub fn missing_field(field: &'static str) -> Self {
        Self::MissingField { field }
    }
}

/// Raised when a value can't be extracted from [`CallArgs`](crate::CallArgs)
#[derive(Error, Debug)]
pub enum ArgsError {
    #[error("missing positional argument #{index}")]
    MissingPositional { index: usize },

    #[error("missing keyed argument `{key}`")]
    MissingKeyed { key: String },

    #[error("argument {argument} has an unexpected type: {source}")]
    InvalidType {
        argument: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ArgsError {
    pub fn missing_keyed<S: ToString>(key: S) -> Self {
        Self::MissingKeyed { key: key.to_string() }
    }

    pub fn invalid_type<S: ToString>(argument: S, source: serde_json::Error) -> Self {
        Self::InvalidType { argument: argument.to_string(), source }
    }
}
