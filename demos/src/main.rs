//! Terminal pathfinding demo.
//!
//! Run: cargo run --bin gridpath -- [ALGORITHM|all] [MAP_FILE]
//!
//! Without a map file a built-in maze is used. Maps use `.` for empty cells,
//! `#` for walls, `S` for the start and `E` for the end.

use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use gridpath_core::{Grid, NodeType, Position};
use gridpath_search::{Algorithm, Pathfinder, SearchResult};

const DEFAULT_MAP: &str = "\
    S.....#.............
    .####.#.#######.###.
    .#....#.#.....#...#.
    .#.####.#.###.###.#.
    .#......#...#...#.#.
    .########.#.###.#.#.
    ..........#.....#..E";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let selection = args.next().unwrap_or_else(|| "all".to_string());
    let algorithms = if selection.eq_ignore_ascii_case("all") {
        Algorithm::ALL.to_vec()
    } else {
        vec![selection.parse::<Algorithm>()?]
    };

    let source = match args.next() {
        Some(path) => std::fs::read_to_string(path)?,
        None => DEFAULT_MAP.to_string(),
    };
    let grid = Grid::parse(&source)?;

    let mut pathfinder = Pathfinder::default();
    let mut stdout = io::stdout();
    for algorithm in algorithms {
        let mut g = grid.clone();
        let result = pathfinder.run(&mut g, algorithm)?;
        writeln!(stdout, "== {algorithm}")?;
        draw(&mut stdout, &g)?;
        match result {
            SearchResult::Found(_) => writeln!(
                stdout,
                "path: {} moves, {} cells visited\n",
                result.moves(),
                pathfinder.visited().len()
            )?,
            SearchResult::NotFound => writeln!(
                stdout,
                "no path, {} cells visited\n",
                pathfinder.visited().len()
            )?,
        }
    }
    stdout.flush()?;
    Ok(())
}

fn color(kind: NodeType) -> Color {
    match kind {
        NodeType::Empty => Color::DarkGrey,
        NodeType::Wall => Color::White,
        NodeType::Start => Color::Green,
        NodeType::End => Color::Red,
        NodeType::Visited => Color::Blue,
        NodeType::Path => Color::Yellow,
    }
}

fn draw(out: &mut impl Write, grid: &Grid) -> io::Result<()> {
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let kind = grid.kind(Position::new(row, col)).unwrap_or_default();
            queue!(out, SetForegroundColor(color(kind)), Print(kind.glyph()))?;
        }
        queue!(out, ResetColor, Print('\n'))?;
    }
    Ok(())
}
