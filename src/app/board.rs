use std::io::Write;

use crossterm::{
    cursor, queue,
    style::{self, Attribute, Color, StyledContent, Stylize},
    terminal::{self, ClearType},
};

use super::tile::Tile;
use crate::{maze::Maze, solvers::Exploration};

/// Rows reserved below the board for status messages
pub const NUM_LOG_ROWS: u16 = 3;

/// Board size in tiles: one tile per cell plus one per wall slot between and around cells.
pub fn board_dims(maze: &Maze) -> (u16, u16) {
    let width = maze.cols() * 2 + 1;
    let height = maze.rows() * 2 + 1;
    (
        width.min(u16::MAX as usize) as u16,
        height.min(u16::MAX as usize) as u16,
    )
}

/// Check if the terminal can show the whole board plus the log rows.
pub fn fits_terminal(maze: &Maze) -> std::io::Result<bool> {
    let (term_width, term_height) = terminal::size()?;
    let (width, height) = board_dims(maze);
    Ok(term_width >= width.saturating_mul(Tile::WIDTH)
        && term_height >= height.saturating_add(NUM_LOG_ROWS))
}

fn cell_tile(maze: &Maze, exploration: &Exploration, idx: usize, player: Option<usize>) -> Tile {
    if player == Some(idx) {
        Tile::Player
    } else if idx == maze.start() {
        Tile::Start
    } else if idx == maze.goal() {
        Tile::Goal
    } else if exploration.is_in_solution(idx) {
        Tile::Solution
    } else if exploration.is_searched(idx) {
        Tile::Searched
    } else {
        Tile::Empty
    }
}

/// Tile between two adjacent cells. Open passages take the color both ends share.
fn link_tile(exploration: &Exploration, open: bool, a: usize, b: usize) -> Tile {
    if !open {
        Tile::Wall
    } else if exploration.is_in_solution(a) && exploration.is_in_solution(b) {
        Tile::Solution
    } else if exploration.is_searched(a) && exploration.is_searched(b) {
        Tile::Searched
    } else {
        Tile::Empty
    }
}

/// Compute the tile at board position `(x, y)`.
pub fn tile_at(
    maze: &Maze,
    exploration: &Exploration,
    player: Option<usize>,
    x: usize,
    y: usize,
) -> Tile {
    let (col, row) = (x / 2, y / 2);
    match (x % 2, y % 2) {
        // Cell centers sit on odd coordinates
        (1, 1) => cell_tile(maze, exploration, row * maze.cols() + col, player),
        // Between a cell and its right neighbor
        (0, 1) if col > 0 && col < maze.cols() => {
            let left = row * maze.cols() + col - 1;
            link_tile(exploration, maze.cell(left).right.open, left, left + 1)
        }
        // Between a cell and its bottom neighbor
        (1, 0) if row > 0 && row < maze.rows() => {
            let top = (row - 1) * maze.cols() + col;
            link_tile(
                exploration,
                maze.cell(top).bottom.open,
                top,
                top + maze.cols(),
            )
        }
        _ => Tile::Wall,
    }
}

/// Draw the whole board at the top-left corner of the terminal.
pub fn draw<W: Write>(
    out: &mut W,
    maze: &Maze,
    exploration: &Exploration,
    player: Option<usize>,
) -> std::io::Result<()> {
    let (width, height) = board_dims(maze);
    for y in 0..height {
        queue!(out, cursor::MoveTo(0, y))?;
        for x in 0..width {
            let tile = tile_at(maze, exploration, player, x as usize, y as usize);
            queue!(out, style::Print(tile))?;
        }
    }
    out.flush()
}

/// Log a message on the given row below the board, clearing what was there.
pub fn log_line<W: Write>(
    out: &mut W,
    maze: &Maze,
    row: u16,
    msg: StyledContent<String>,
) -> std::io::Result<()> {
    let (_, height) = board_dims(maze);
    queue!(
        out,
        cursor::MoveTo(0, height + row),
        terminal::Clear(ClearType::CurrentLine),
        style::PrintStyledContent(msg)
    )?;
    out.flush()
}

/// Tell the user the terminal is too small for the board.
pub fn show_too_small<W: Write>(out: &mut W, maze: &Maze) -> std::io::Result<()> {
    let (width, height) = board_dims(maze);
    let msg = format!(
        "Terminal size is too small for the maze ({}x{} characters needed). Please resize the terminal.\r\n",
        width * Tile::WIDTH,
        height + NUM_LOG_ROWS,
    );
    queue!(
        out,
        terminal::Clear(ClearType::All),
        cursor::MoveTo(0, 0),
        style::PrintStyledContent(msg.with(Color::Yellow).attribute(Attribute::Bold)),
        style::PrintStyledContent(
            "Press Esc to go back...\r\n"
                .with(Color::Blue)
                .attribute(Attribute::Bold)
        )
    )?;
    out.flush()
}
