use crossterm::style::{Color, Stylize};

use std::fmt;

/// What a single position of the drawn board shows.
/// Cells and the links between them are both drawn as tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Wall,
    Empty,
    /// Reached by the search
    Searched,
    /// Part of the solution path
    Solution,
    Start,
    Goal,
    /// The user's position in manual mode
    Player,
}

impl Tile {
    /// The width of each tile when rendered, in character widths.
    pub const WIDTH: u16 = 2;
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let styled_symbol = match self {
            Tile::Wall => "⬜".with(Color::White),
            Tile::Empty => "  ".with(Color::Reset),
            Tile::Searched => "* ".with(Color::Blue),
            Tile::Solution => "🟨".with(Color::Yellow),
            Tile::Start => "🟩".with(Color::Green),
            Tile::Goal => "🟥".with(Color::Red),
            Tile::Player => "🟡".with(Color::Yellow),
        };

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                styled_symbol.content().width(),
                Tile::WIDTH as usize,
                "Each tile must occupy exactly two character widths."
            );
        }

        write!(f, "{}", styled_symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unicode_width::UnicodeWidthStr;

    #[test]
    fn test_tiles_are_two_columns_wide() {
        for tile in [
            Tile::Wall,
            Tile::Empty,
            Tile::Searched,
            Tile::Solution,
            Tile::Start,
            Tile::Goal,
            Tile::Player,
        ] {
            // Display asserts the width in debug builds
            let rendered = tile.to_string();
            assert!(!rendered.is_empty());
        }
        assert_eq!("⬜".width(), Tile::WIDTH as usize);
    }
}
