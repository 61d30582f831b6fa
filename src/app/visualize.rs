use std::io::Stdout;

use crossterm::{
    event::KeyCode,
    queue,
    style::{Attribute, Color, Stylize},
    terminal::{self, ClearType},
};

use super::{App, SessionEnd, board, to_io};
use crate::{
    config::Config,
    generators::build_maze,
    maze::Maze,
    solvers::{RunStatus, SearchParams, SearchRun},
};

impl App {
    /// Animate the selected solver on fresh mazes until the user exits.
    pub(super) fn visualize(&self, stdout: &mut Stdout, mut config: Config) -> std::io::Result<()> {
        loop {
            let maze = build_maze(config.rows, config.cols, None).map_err(to_io)?;
            queue!(stdout, terminal::Clear(ClearType::All))?;
            if !board::fits_terminal(&maze)? {
                return board::show_too_small(stdout, &maze).and_then(|_| App::wait_for_esc());
            }
            if self.animate(stdout, &maze, &mut config)? == SessionEnd::Exit {
                return Ok(());
            }
            tracing::debug!("[visualize] regenerating maze");
        }
    }

    fn animate(
        &self,
        stdout: &mut Stdout,
        maze: &Maze,
        config: &mut Config,
    ) -> std::io::Result<SessionEnd> {
        let mut run = SearchRun::new(maze, config.solver, SearchParams::default());
        let mut is_paused = false;
        let mut dirty = true;

        board::log_line(
            stdout,
            maze,
            0,
            format!("Running {}", config.solver)
                .with(Color::Blue)
                .attribute(Attribute::Bold),
        )?;
        board::log_line(
            stdout,
            maze,
            1,
            "Enter: pause/resume, Up/Down: speed, r: new maze, Esc: exit"
                .to_string()
                .with(Color::DarkGrey),
        )?;

        loop {
            if !is_paused && run.status() == RunStatus::Running {
                for _ in 0..config.step_rate {
                    if !run.step_once().map_err(to_io)? {
                        break;
                    }
                }
                dirty = true;
            }

            if dirty {
                board::draw(stdout, maze, run.exploration(), None)?;
                board::log_line(stdout, maze, 2, status_line(&run, config, is_paused))?;
                dirty = false;
            }

            let Some(code) = App::poll_key(self.frame_timeout)? else {
                continue;
            };
            match code {
                KeyCode::Esc => return Ok(SessionEnd::Exit),
                KeyCode::Char('r') => return Ok(SessionEnd::Regenerate),
                KeyCode::Enter => {
                    is_paused = !is_paused;
                    dirty = true;
                }
                KeyCode::Up => {
                    config.speed_up();
                    dirty = true;
                }
                KeyCode::Down => {
                    config.slow_down();
                    dirty = true;
                }
                _ => {}
            }
        }
    }
}

fn status_line(
    run: &SearchRun<'_>,
    config: &Config,
    is_paused: bool,
) -> crossterm::style::StyledContent<String> {
    match run.status() {
        RunStatus::Running => {
            let state = if is_paused { "Paused" } else { "Searching" };
            format!(
                "{} at {} steps per frame, {} cells searched",
                state,
                config.step_rate,
                run.exploration().marks().iter().filter(|m| m.searched).count()
            )
            .with(Color::Yellow)
        }
        RunStatus::Found => format!("Goal reached. {}", run.statistics()).with(Color::Green),
        RunStatus::NotFound => "No path to the goal.".to_string().with(Color::Red),
        RunStatus::Failed => "The search failed, see the log.".to_string().with(Color::Red),
    }
}
