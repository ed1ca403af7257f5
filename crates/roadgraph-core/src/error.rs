//! Error types and exit codes for roadgraph
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (bad network file, unknown vertex, rejected insertion)

mod macros;

use thiserror::Error;

/// Hard upper bound on the number of vertex slots in a network
pub const MAX_CAPACITY: usize = 100;

/// Exit codes for the roadgraph binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - bad network file, rejected insertion (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while building or querying a road network
#[derive(Error, Debug)]
pub enum RoadGraphError {
    // Construction
    #[error("capacity {requested} exceeds the maximum of {max} vertices")]
    CapacityExceeded { requested: usize, max: usize },

    // Insertion rejections. The failed call leaves the network unchanged.
    #[error("invalid vertex id {id:?} (expected a non-numeric prefix followed by a 1-based number)")]
    InvalidVertexId { id: String },

    #[error("vertex {id} is out of range (slot {index}, capacity {capacity})")]
    OutOfRange {
        id: String,
        index: usize,
        capacity: usize,
    },

    #[error("vertex {id} already exists")]
    DuplicateVertex { id: String },

    #[error("one or both vertices {from} and {to} do not exist")]
    MissingEndpoint { from: String, to: String },

    #[error("vertex {vertex} does not exist to link house {house}")]
    MissingAttachment { house: String, vertex: String },

    #[error("edge {edge_id} has invalid weight {weight} (must be finite and non-negative)")]
    InvalidWeight { edge_id: String, weight: f64 },

    // Query errors
    #[error("vertex not found: {id}")]
    UnknownVertex { id: String },

    // Usage errors
    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("{0}")]
    UsageError(String),

    // Generic failures
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl RoadGraphError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        RoadGraphError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a vertex that is not registered
    pub fn unknown_vertex(id: impl Into<String>) -> Self {
        RoadGraphError::UnknownVertex { id: id.into() }
    }

    /// True for insertion-time failures. These are non-fatal: the rejected
    /// call was a no-op and the network remains usable.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            RoadGraphError::InvalidVertexId { .. }
                | RoadGraphError::OutOfRange { .. }
                | RoadGraphError::DuplicateVertex { .. }
                | RoadGraphError::MissingEndpoint { .. }
                | RoadGraphError::MissingAttachment { .. }
                | RoadGraphError::InvalidWeight { .. }
        )
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            RoadGraphError::InvalidValue { .. } | RoadGraphError::UsageError(_) => ExitCode::Usage,

            RoadGraphError::CapacityExceeded { .. }
            | RoadGraphError::InvalidVertexId { .. }
            | RoadGraphError::OutOfRange { .. }
            | RoadGraphError::DuplicateVertex { .. }
            | RoadGraphError::MissingEndpoint { .. }
            | RoadGraphError::MissingAttachment { .. }
            | RoadGraphError::InvalidWeight { .. }
            | RoadGraphError::UnknownVertex { .. }
            | RoadGraphError::Toml(_) => ExitCode::Data,

            RoadGraphError::Io(_) | RoadGraphError::Json(_) | RoadGraphError::Other(_) => {
                ExitCode::Failure
            }
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            RoadGraphError::CapacityExceeded { .. } => "capacity_exceeded",
            RoadGraphError::InvalidVertexId { .. } => "invalid_vertex_id",
            RoadGraphError::OutOfRange { .. } => "out_of_range",
            RoadGraphError::DuplicateVertex { .. } => "duplicate_vertex",
            RoadGraphError::MissingEndpoint { .. } => "missing_endpoint",
            RoadGraphError::MissingAttachment { .. } => "missing_attachment",
            RoadGraphError::InvalidWeight { .. } => "invalid_weight",
            RoadGraphError::UnknownVertex { .. } => "unknown_vertex",
            RoadGraphError::InvalidValue { .. } => "invalid_value",
            RoadGraphError::UsageError(_) => "usage_error",
            RoadGraphError::Io(_) => "io_error",
            RoadGraphError::Toml(_) => "toml_error",
            RoadGraphError::Json(_) => "json_error",
            RoadGraphError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for roadgraph operations
pub type Result<T> = std::result::Result<T, RoadGraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejections_are_data_errors() {
        let err = RoadGraphError::DuplicateVertex {
            id: "I1".to_string(),
        };
        assert!(err.is_rejection());
        assert_eq!(err.exit_code(), ExitCode::Data);
        assert_eq!(err.to_string(), "vertex I1 already exists");
    }

    #[test]
    fn test_unknown_vertex_is_not_a_rejection() {
        let err = RoadGraphError::unknown_vertex("I9");
        assert!(!err.is_rejection());
        assert_eq!(err.exit_code(), ExitCode::Data);
    }

    #[test]
    fn test_usage_errors() {
        let err = RoadGraphError::invalid_value("heuristic", "euclid");
        assert_eq!(err.exit_code(), ExitCode::Usage);
        assert_eq!(err.to_string(), "invalid heuristic: euclid");
    }

    #[test]
    fn test_to_json_envelope() {
        let err = RoadGraphError::CapacityExceeded {
            requested: 101,
            max: MAX_CAPACITY,
        };
        let json = err.to_json();
        assert_eq!(json["error"]["code"], 3);
        assert_eq!(json["error"]["type"], "capacity_exceeded");
        assert_eq!(
            json["error"]["message"],
            "capacity 101 exceeds the maximum of 100 vertices"
        );
    }
}
