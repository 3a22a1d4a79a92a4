use crate::error::MazeError;
use crate::generators::{self, Generator};
use crate::maze::Maze;
use crate::solvers;

/// Owns the single current maze and its solution path.
///
/// Regenerating replaces the grid wholesale and drops any previously
/// computed path before the new carve begins, so a stale path can never
/// outlive the maze it was solved against.
#[derive(Debug)]
pub struct Session {
    maze: Maze,
    path: Option<Vec<(u16, u16)>>,
}

impl Session {
    pub fn new(
        width: u8,
        height: u8,
        generator: Generator,
        seed: Option<u64>,
    ) -> Result<Self, MazeError> {
        Ok(Session {
            maze: generators::generate(width, height, generator, seed)?,
            path: None,
        })
    }

    /// Replaces the current maze with a freshly generated one.
    pub fn regenerate(
        &mut self,
        width: u8,
        height: u8,
        generator: Generator,
        seed: Option<u64>,
    ) -> Result<(), MazeError> {
        // The old path describes the old maze; drop it before carving
        self.path = None;
        self.maze = generators::generate(width, height, generator, seed)?;
        Ok(())
    }

    /// Solves the current maze and stores the resulting path, available
    /// through [`Session::path`] until the next regeneration.
    pub fn solve(&mut self, seed: Option<u64>) -> Result<(), MazeError> {
        self.path = Some(solvers::solve(&self.maze, seed)?);
        Ok(())
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn path(&self) -> Option<&[(u16, u16)]> {
        self.path.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solve_stores_path() {
        let mut session = Session::new(5, 5, Generator::RecurBacktrack, Some(2)).unwrap();
        assert!(session.path().is_none());
        session.solve(Some(2)).unwrap();
        assert!(session.path().is_some_and(|p| !p.is_empty()));
    }

    #[test]
    fn test_regenerate_invalidates_path() {
        let mut session = Session::new(5, 5, Generator::HuntKill, Some(2)).unwrap();
        session.solve(Some(2)).unwrap();
        session
            .regenerate(8, 4, Generator::RecurBacktrack, Some(3))
            .unwrap();
        assert!(session.path().is_none());
        assert_eq!(session.maze().width(), 8);
        assert_eq!(session.maze().height(), 4);
    }
}
