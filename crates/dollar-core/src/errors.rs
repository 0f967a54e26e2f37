//! Structured error types shared across the dollar game crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable machine readable error codes carried in [`ErrorInfo::code`].
pub mod codes {
    /// A node was added under an id that is already in use.
    pub const DUPLICATE_ID: &str = "duplicate-id";
    /// An edge was added between two ids that already share one.
    pub const DUPLICATE_EDGE: &str = "duplicate-edge";
    /// An edge from a node to itself was rejected by configuration.
    pub const SELF_LOOP: &str = "self-loop";
    /// The genus was requested for a graph that is not connected.
    pub const NOT_CONNECTED: &str = "not-connected";
    /// Replaying a graph into a copy failed on a well-formed source.
    pub const CLONE_INCONSISTENT: &str = "clone-inconsistent";
    /// Sampler input violates `count > 0` or `floor <= ceiling`.
    pub const INVALID_REQUEST: &str = "invalid-request";
    /// The stars-and-bars encoding would need more than 32 slots.
    pub const CAPACITY_EXCEEDED: &str = "capacity-exceeded";
    /// No integer sequence satisfies the requested constraints.
    pub const NO_SOLUTION: &str = "no-solution";
    /// A game operation referenced a node that does not exist.
    pub const UNKNOWN_NODE: &str = "unknown-node";
    /// A configuration value failed validation.
    pub const INVALID_CONFIG: &str = "invalid-config";
}

/// Structured payload attached to every [`DollarError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (identifiers, sizes, etc.).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.context.insert(key.into(), value.to_string());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for the dollar game engine.
///
/// Every failure is recoverable: the variant names the component family and
/// the payload's `code` names the condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum DollarError {
    /// Graph structure and query errors.
    #[error("graph error: {0}")]
    Graph(ErrorInfo),
    /// Combinatorial sampling errors.
    #[error("sample error: {0}")]
    Sample(ErrorInfo),
    /// Puzzle level errors.
    #[error("game error: {0}")]
    Game(ErrorInfo),
    /// Configuration parsing and validation errors.
    #[error("config error: {0}")]
    Config(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl DollarError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            DollarError::Graph(info)
            | DollarError::Sample(info)
            | DollarError::Game(info)
            | DollarError::Config(info) => info,
        }
    }

    /// Returns the stable code of the error.
    pub fn code(&self) -> &str {
        &self.info().code
    }

    /// Returns whether the error carries the given code.
    pub fn is(&self, code: &str) -> bool {
        self.code() == code
    }

    /// Adds a context entry to the payload, keeping the family.
    pub fn with_context(self, key: impl Into<String>, value: impl ToString) -> Self {
        self.map_info(|info| info.with_context(key, value))
    }

    /// Sets the remediation hint on the payload, keeping the family.
    pub fn with_hint(self, hint: impl Into<String>) -> Self {
        self.map_info(|info| info.with_hint(hint))
    }

    fn map_info(self, f: impl FnOnce(ErrorInfo) -> ErrorInfo) -> Self {
        match self {
            DollarError::Graph(info) => DollarError::Graph(f(info)),
            DollarError::Sample(info) => DollarError::Sample(f(info)),
            DollarError::Game(info) => DollarError::Game(f(info)),
            DollarError::Config(info) => DollarError::Config(f(info)),
        }
    }
}

/// Shorthand for a [`DollarError::Graph`] with the given code and message.
pub fn graph_error(code: impl Into<String>, message: impl Into<String>) -> DollarError {
    DollarError::Graph(ErrorInfo::new(code, message))
}

/// Shorthand for a [`DollarError::Sample`] with the given code and message.
pub fn sample_error(code: impl Into<String>, message: impl Into<String>) -> DollarError {
    DollarError::Sample(ErrorInfo::new(code, message))
}

/// Shorthand for a [`DollarError::Game`] with the given code and message.
pub fn game_error(code: impl Into<String>, message: impl Into<String>) -> DollarError {
    DollarError::Game(ErrorInfo::new(code, message))
}

/// Shorthand for a [`DollarError::Config`] with the given code and message.
pub fn config_error(code: impl Into<String>, message: impl Into<String>) -> DollarError {
    DollarError::Config(ErrorInfo::new(code, message))
}
