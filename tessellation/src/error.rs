use crate::geometry_builder::Count;

/// The triangulator's result type.
pub type TriangulationResult = Result<Count, TriangulationError>;

/// A violated precondition of one of the triangulation entry points.
///
/// These are programming errors on the caller's side, reported synchronously
/// at the offending call; no partial output is produced.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PreconditionError {
    /// The input ring has fewer than three vertices.
    TooFewVertices,
    /// The requested stride leaves no room for the vertex position.
    StrideTooSmall,
    /// A vertex coordinate is NaN or infinite.
    PositionNotFinite,
    /// An attribute slice extends past the end of the stride.
    AttributeOutOfBounds,
    /// An attribute slice overlaps the position columns.
    AttributeOverlapsPosition,
    /// An attribute column does not provide one row per vertex.
    AttributeLengthMismatch,
}

#[cfg(feature = "std")]
impl core::fmt::Display for PreconditionError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PreconditionError::TooFewVertices => {
                std::write!(f, "The input ring has fewer than three vertices")
            }
            PreconditionError::StrideTooSmall => {
                std::write!(f, "The stride leaves no room for the vertex position")
            }
            PreconditionError::PositionNotFinite => {
                std::write!(f, "A vertex coordinate is NaN or infinite")
            }
            PreconditionError::AttributeOutOfBounds => {
                std::write!(f, "An attribute slice extends past the end of the stride")
            }
            PreconditionError::AttributeOverlapsPosition => {
                std::write!(f, "An attribute slice overlaps the position columns")
            }
            PreconditionError::AttributeLengthMismatch => {
                std::write!(f, "An attribute column does not provide one row per vertex")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PreconditionError {}

/// An error that can happen while triangulating a polygon.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TriangulationError {
    Precondition(PreconditionError),
    /// The input ring encloses no area (for example all of its vertices are
    /// collinear), so the partitioning sweep cannot make progress.
    DegenerateGeometry,
}

#[cfg(feature = "std")]
impl core::fmt::Display for TriangulationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TriangulationError::Precondition(e) => {
                std::write!(f, "Precondition violation: {}", e)
            }
            TriangulationError::DegenerateGeometry => {
                std::write!(f, "The input ring encloses no area")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TriangulationError {}

impl core::convert::From<PreconditionError> for TriangulationError {
    fn from(value: PreconditionError) -> Self {
        Self::Precondition(value)
    }
}
