pub mod error;
pub mod generators;
pub mod maze;
pub mod renderer;
pub mod session;
pub mod solvers;

pub use error::MazeError;
