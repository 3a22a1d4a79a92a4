use mazecarver::{generators::Generator, renderer, session::Session, solvers::Walkable};

fn main() -> std::io::Result<()> {
    // Log to a file so log lines never interleave with the rendered maze
    let file_appender = tracing_appender::rolling::never(".", "mazecarver.log");
    let (writer, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut input = String::new();
    println!("Enter maze dimensions (width height). Maximum size is 255x255:");
    std::io::stdin().read_line(&mut input)?;

    // Parse the input dimensions
    let dims = input
        .split_whitespace()
        .take(2)
        .filter_map(|s| s.parse::<u8>().ok())
        .collect::<Vec<_>>();

    if dims.len() != 2 {
        eprintln!("Please enter two valid numbers for width and height.");
        return Ok(());
    }
    // The core rejects zero-sized grids outright; anything below 2 is
    // clamped here instead of erroring
    let (width, height) = (dims[0].max(2), dims[1].max(2));

    // Let user select the algorithm
    println!("Select maze generation algorithm:");
    println!("1. {}", Generator::RecurBacktrack);
    println!("2. {}", Generator::HuntKill);
    input.clear();
    std::io::stdin().read_line(&mut input)?;
    let generator = match input.trim() {
        "1" => Generator::RecurBacktrack,
        "2" => Generator::HuntKill,
        _ => {
            eprintln!("Invalid selection.");
            return Ok(());
        }
    };

    let mut session = match Session::new(width, height, generator, None) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Failed to generate maze: {e}");
            return Ok(());
        }
    };
    if let Err(e) = session.solve(None) {
        eprintln!("Failed to solve maze: {e}");
        return Ok(());
    }

    let walkable = Walkable::from_maze(session.maze());
    let mut stdout = std::io::stdout();
    renderer::render(&walkable, session.path().unwrap_or(&[]), &mut stdout)?;
    Ok(())
}
