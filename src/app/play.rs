use std::io::Stdout;

use crossterm::{
    event::KeyCode,
    queue,
    style::{Color, Stylize},
    terminal::{self, ClearType},
};

use super::{App, SessionEnd, board, to_io};
use crate::{
    config::Config,
    generators::build_maze,
    maze::{Direction, Maze},
    solvers::{ManualOutcome, ManualRun},
};

/// Map arrow keys and WASD to moves.
fn key_direction(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Left | KeyCode::Char('a') => Some(Direction::Left),
        KeyCode::Right | KeyCode::Char('d') => Some(Direction::Right),
        KeyCode::Up | KeyCode::Char('w') => Some(Direction::Top),
        KeyCode::Down | KeyCode::Char('s') => Some(Direction::Bottom),
        _ => None,
    }
}

impl App {
    /// Let the user walk fresh mazes by hand until they exit.
    pub(super) fn play(&self, stdout: &mut Stdout, config: Config) -> std::io::Result<()> {
        loop {
            let maze = build_maze(config.rows, config.cols, None).map_err(to_io)?;
            queue!(stdout, terminal::Clear(ClearType::All))?;
            if !board::fits_terminal(&maze)? {
                return board::show_too_small(stdout, &maze).and_then(|_| App::wait_for_esc());
            }
            if self.walk(stdout, &maze)? == SessionEnd::Exit {
                return Ok(());
            }
        }
    }

    fn walk(&self, stdout: &mut Stdout, maze: &Maze) -> std::io::Result<SessionEnd> {
        let mut run = ManualRun::new(maze);
        board::log_line(
            stdout,
            maze,
            0,
            "Arrows/WASD: move, r: new maze, Esc: exit"
                .to_string()
                .with(Color::Blue),
        )?;
        board::draw(stdout, maze, run.exploration(), Some(run.position()))?;

        loop {
            let Some(code) = App::poll_key(self.frame_timeout)? else {
                continue;
            };
            let direction = match code {
                KeyCode::Esc => return Ok(SessionEnd::Exit),
                KeyCode::Char('r') => return Ok(SessionEnd::Regenerate),
                code => match key_direction(code) {
                    Some(direction) => direction,
                    None => continue,
                },
            };

            let outcome = run.step(direction).map_err(to_io)?;
            let msg = match outcome {
                ManualOutcome::Rejected => continue,
                ManualOutcome::Advanced(_) | ManualOutcome::Retreated(_) => {
                    format!("{} steps from the start", run.path().len() - 1).with(Color::Yellow)
                }
                ManualOutcome::Reached { path_length } => {
                    format!("Goal reached in {} steps! Press r for a new maze.", path_length)
                        .with(Color::Green)
                }
            };
            board::draw(stdout, maze, run.exploration(), Some(run.position()))?;
            board::log_line(stdout, maze, 1, msg)?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_direction() {
        assert_eq!(key_direction(KeyCode::Char('w')), Some(Direction::Top));
        assert_eq!(key_direction(KeyCode::Down), Some(Direction::Bottom));
        assert_eq!(key_direction(KeyCode::Char('a')), Some(Direction::Left));
        assert_eq!(key_direction(KeyCode::Right), Some(Direction::Right));
        assert_eq!(key_direction(KeyCode::Enter), None);
    }
}
