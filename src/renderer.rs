use std::collections::HashSet;
use std::io::Write;

use crossterm::{
    queue,
    style::{self, Color, StyledContent, Stylize},
};

use crate::solvers::{Tile, Walkable};

/// The width of each tile when rendered, in character widths.
pub const TILE_WIDTH: usize = 2;

fn symbol(tile: Tile, on_route: bool, is_start: bool, is_goal: bool) -> StyledContent<&'static str> {
    let styled_symbol = if is_start {
        "🟩".with(Color::Green)
    } else if is_goal {
        "🟥".with(Color::Red)
    } else if on_route {
        "* ".with(Color::Yellow)
    } else {
        match tile {
            Tile::Wall => "⬜".with(Color::White),
            Tile::Floor | Tile::Visited => "  ".with(Color::Reset),
        }
    };

    #[cfg(debug_assertions)]
    {
        use unicode_width::UnicodeWidthStr;
        assert_eq!(
            styled_symbol.content().width(),
            TILE_WIDTH,
            "Each tile must occupy exactly two character widths."
        );
    }

    styled_symbol
}

/// Prints the walkable grid with the solution route overlaid, the
/// entrance in green and the exit in red.
pub fn render(
    walkable: &Walkable,
    path: &[(u16, u16)],
    out: &mut impl Write,
) -> std::io::Result<()> {
    let route: HashSet<(u16, u16)> = path.iter().copied().collect();
    let entrance = walkable.entrance();
    let exit = walkable.exit();
    for y in 0..walkable.height() {
        for x in 0..walkable.width() {
            let coord = (x, y);
            queue!(
                out,
                style::Print(symbol(
                    walkable.tile(coord),
                    route.contains(&coord),
                    coord == entrance,
                    coord == exit,
                ))
            )?;
        }
        queue!(out, style::Print("\n"))?;
    }
    out.flush()
}
