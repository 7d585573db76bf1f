/// Error type for sinoproj operations.
#[derive(Debug, Clone, PartialEq)]
pub enum CrsError {
    /// The system code is not known to the registry or the geodetic service.
    UnknownCrs(String),
    /// No transform rule exists between the two systems.
    UnsupportedPair { from: String, to: String },
    /// The geometry kind has no counterpart in the rewriter.
    UnsupportedGeometry(String),
    /// The generic geodetic service failed to transform coordinates.
    ProjectionError(String),
    /// Input that cannot produce a meaningful result (e.g. an empty envelope).
    DegenerateInput(String),
    /// Failed to parse geometry from string (GeoJSON or WKT).
    GeometryParseError(String),
    /// CSV parsing or writing error.
    CsvError(String),
    /// File I/O error.
    IoError(String),
}

impl std::fmt::Display for CrsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CrsError::UnknownCrs(code) => write!(f, "Unknown CRS: {}", code),
            CrsError::UnsupportedPair { from, to } => {
                write!(f, "Unsupported transform from {} to {}", from, to)
            }
            CrsError::UnsupportedGeometry(kind) => write!(f, "Unsupported geometry: {}", kind),
            CrsError::ProjectionError(msg) => write!(f, "Projection error: {}", msg),
            CrsError::DegenerateInput(msg) => write!(f, "Degenerate input: {}", msg),
            CrsError::GeometryParseError(msg) => write!(f, "Geometry parse error: {}", msg),
            CrsError::CsvError(msg) => write!(f, "CSV error: {}", msg),
            CrsError::IoError(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for CrsError {}
