use std::time::Instant;

use mazecarver::{MazeError, generators::Generator, session::Session};

fn main() -> Result<(), MazeError> {
    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args
        .next()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(10);

    let start = Instant::now();
    for _ in 0..num_iters {
        let mut session = Session::new(u8::MAX, u8::MAX, Generator::HuntKill, None)?;
        session.solve(None)?;
    }
    println!(
        "{} generate+solve runs of a 255x255 maze in {:?}",
        num_iters,
        start.elapsed()
    );
    Ok(())
}
