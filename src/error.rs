use std::fmt;

/// Errors surfaced by maze generation and solving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MazeError {
    /// A zero-sized grid was requested. Callers recover by clamping
    /// their input; the core never retries.
    InvalidDimensions { width: u8, height: u8 },
    /// The solver exhausted its backtracking stack without reaching the
    /// exit. Cannot happen for a correctly generated maze, so seeing it
    /// means the grid or its walkable derivation is broken.
    NoSolutionFound,
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MazeError::InvalidDimensions { width, height } => {
                write!(f, "invalid maze dimensions {}x{}", width, height)
            }
            MazeError::NoSolutionFound => write!(f, "no path from entrance to exit"),
        }
    }
}

impl std::error::Error for MazeError {}
