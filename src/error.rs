use thiserror::Error;

/// Errors produced by the classify / search / encode stages.
///
/// All of these are terminal for a pipeline run: none are retried or
/// recovered into a default path.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// No cell was classified as the start (no green-dominant region).
    #[error("no start cell found in the image")]
    MissingStart,

    /// No cell was classified as the goal (no red-dominant region).
    #[error("no goal cell found in the image")]
    MissingGoal,

    /// The frontier was exhausted without reaching the goal.
    #[error("no path from start to goal")]
    NoPath,

    /// The grid would have zero cells (image smaller than one cell,
    /// or a cell size of zero).
    #[error("grid has no cells")]
    DegenerateGrid,

    /// A path with no coordinates cannot be encoded.
    #[error("cannot encode an empty path")]
    EmptyPath,
}
