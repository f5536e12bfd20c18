//! Error types for spanning tree operations.

use std::fmt;

/// Result type for spanning tree operations.
pub type MstResult<T> = Result<T, MstError>;

/// Errors that can occur while loading a graph or computing its spanning tree.
#[derive(Debug, Clone)]
pub enum MstError {
    /// Malformed or incomplete input graph description.
    Input { line: usize, message: String },

    /// Invalid parameter value.
    InvalidParameter { parameter: String, message: String },

    /// A round accepted no edges before the tree was complete.
    Disconnected { components: usize, rounds: usize },

    /// The configured round cap was reached before the tree was complete.
    RoundLimitExceeded { max_rounds: usize },

    /// Filesystem failure while reading input or writing a report.
    Io { path: String, message: String },
}

impl MstError {
    pub(crate) fn input(line: usize, message: impl Into<String>) -> Self {
        Self::Input {
            line,
            message: message.into(),
        }
    }

    pub(crate) fn invalid_parameter(parameter: &str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            parameter: parameter.to_string(),
            message: message.into(),
        }
    }
}

impl fmt::Display for MstError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input { line, message } => {
                if *line == 0 {
                    write!(f, "Invalid input: {}", message)
                } else {
                    write!(f, "Invalid input at line {}: {}", line, message)
                }
            }
            Self::InvalidParameter { parameter, message } => {
                write!(f, "Invalid parameter '{}': {}", parameter, message)
            }
            Self::Disconnected { components, rounds } => {
                write!(
                    f,
                    "Graph is disconnected: {} components remain after {} rounds, no spanning tree exists",
                    components, rounds
                )
            }
            Self::RoundLimitExceeded { max_rounds } => {
                write!(
                    f,
                    "Spanning tree incomplete after the maximum of {} rounds",
                    max_rounds
                )
            }
            Self::Io { path, message } => {
                write!(f, "I/O error on {}: {}", path, message)
            }
        }
    }
}

impl std::error::Error for MstError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_display_with_and_without_line() {
        let err = MstError::input(3, "expected edge cost");
        assert_eq!(err.to_string(), "Invalid input at line 3: expected edge cost");

        let err = MstError::input(0, "empty file");
        assert_eq!(err.to_string(), "Invalid input: empty file");
    }

    #[test]
    fn test_disconnected_display() {
        let err = MstError::Disconnected {
            components: 2,
            rounds: 3,
        };
        assert!(err.to_string().contains("2 components"));
        assert!(err.to_string().contains("3 rounds"));
    }
}
