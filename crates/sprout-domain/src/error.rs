//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the Sprout registration engine
#[derive(Error, Debug)]
pub enum Error {
    /// A candidate unit's structure could not be reflected.
    ///
    /// The registrar swallows this per candidate: the branch is dropped and
    /// sibling processing continues.
    #[error("introspection failed for `{type_name}`: {message}")]
    Introspection {
        /// Qualified name of the type that could not be inspected
        type_name: String,
        /// Description of the structural failure
        message: String,
    },

    /// A condition threw while evaluating, or was evaluated in the wrong
    /// registration phase. Always propagated: it indicates a genuine
    /// misconfiguration rather than absence.
    #[error("condition evaluation failed: {message}")]
    ConditionEvaluation {
        /// Description of the evaluation failure
        message: String,
    },

    /// A producer parameter could not be uniquely resolved
    #[error("unresolved dependency `{parameter}` requested by `{requested_by}`: {message}")]
    UnresolvedDependency {
        /// Qualified name of the parameter type
        parameter: String,
        /// Name of the definition that requested the dependency
        requested_by: String,
        /// Why resolution failed (zero candidates, ambiguity, ...)
        message: String,
    },

    /// An unexpected error aborted a registration pass, attributed to the
    /// root unit that was being registered
    #[error("registration of `{root}` failed: {source}")]
    Registration {
        /// Qualified name of the root unit
        root: String,
        /// The underlying failure
        #[source]
        source: Box<Error>,
    },

    /// A definition's construction recipe could not produce an instance
    #[error("instantiation of `{key}` failed: {message}")]
    Instantiation {
        /// Registry key of the failing definition
        key: String,
        /// Description of the construction failure
        message: String,
    },

    /// Instance creation re-entered a key already being created on the
    /// same thread
    #[error("circular dependency detected while creating `{key}`: {chain}")]
    CircularDependency {
        /// Registry key whose creation cycled
        key: String,
        /// The creation chain that closed the cycle
        chain: String,
    },

    /// Configuration-related error (loading, parsing, validation)
    #[error("configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O operation error
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },
}

// Basic error creation methods
impl Error {
    /// Create an introspection error
    pub fn introspection<T: Into<String>, M: Into<String>>(type_name: T, message: M) -> Self {
        Self::Introspection {
            type_name: type_name.into(),
            message: message.into(),
        }
    }

    /// Create a condition evaluation error
    pub fn condition<S: Into<String>>(message: S) -> Self {
        Self::ConditionEvaluation {
            message: message.into(),
        }
    }

    /// Create an unresolved dependency error
    pub fn unresolved<P: Into<String>, R: Into<String>, M: Into<String>>(
        parameter: P,
        requested_by: R,
        message: M,
    ) -> Self {
        Self::UnresolvedDependency {
            parameter: parameter.into(),
            requested_by: requested_by.into(),
            message: message.into(),
        }
    }

    /// Wrap an error with the identity of the root unit being registered
    pub fn registration<S: Into<String>>(root: S, source: Error) -> Self {
        Self::Registration {
            root: root.into(),
            source: Box::new(source),
        }
    }

    /// Create an instantiation error
    pub fn instantiation<K: Into<String>, M: Into<String>>(key: K, message: M) -> Self {
        Self::Instantiation {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Create a circular dependency error
    pub fn circular<K: Into<String>, C: Into<String>>(key: K, chain: C) -> Self {
        Self::CircularDependency {
            key: key.into(),
            chain: chain.into(),
        }
    }
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

impl Error {
    /// Whether this error is a structural introspection failure.
    ///
    /// The registrar drops candidates that fail structurally instead of
    /// aborting the pass; every other error kind propagates.
    pub fn is_introspection(&self) -> bool {
        matches!(self, Self::Introspection { .. })
    }
}
