mod board;
mod compare;
mod play;
mod tile;
mod visualize;

use std::{
    io::{Stdout, Write},
    time::Duration,
};

use crossterm::{
    ExecutableCommand, QueueableCommand, cursor,
    event::{self, KeyCode},
    queue,
    style::{self, Attribute, Color, Stylize},
    terminal::{self, ClearType},
};

use crate::{config::Config, error::MazeError, solvers::Solver};

pub use tile::Tile;

/// What the user wants to do with the maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Visualize,
    Play,
    Compare,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Visualize => write!(f, "Visualize a search"),
            Mode::Play => write!(f, "Play manually"),
            Mode::Compare => write!(f, "Compare all algorithms"),
        }
    }
}

/// How a maze session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionEnd {
    /// Build a new maze with the same settings
    Regenerate,
    Exit,
}

pub struct App {
    /// How long to wait for input before drawing the next frame
    frame_timeout: Duration,
}

impl Default for App {
    fn default() -> Self {
        Self {
            frame_timeout: Duration::from_millis(50),
        }
    }
}

/// Convert core errors for the terminal layer.
fn to_io(e: MazeError) -> std::io::Error {
    std::io::Error::other(e)
}

impl App {
    const MODES: [Mode; 3] = [Mode::Visualize, Mode::Play, Mode::Compare];

    /// Set a panic hook to restore terminal state on panic
    fn set_panic_hook() {
        let hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = App::restore_terminal(&mut std::io::stdout()); // ignore any errors as we are already failing
            hook(panic_info);
        }));
    }

    /// Setup terminal in raw mode and enter alternate screen
    /// Also sets a panic hook to restore terminal on panic
    pub fn setup_terminal(stdout: &mut Stdout) -> std::io::Result<()> {
        terminal::enable_raw_mode()?;
        App::set_panic_hook();
        queue!(
            stdout,
            terminal::EnterAlternateScreen,
            terminal::Clear(ClearType::All),
            cursor::Hide,
            cursor::MoveTo(0, 0)
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Restore terminal to original state
    /// Leave alternate screen and disable raw mode
    pub fn restore_terminal(stdout: &mut Stdout) -> std::io::Result<()> {
        queue!(stdout, terminal::LeaveAlternateScreen, cursor::Show)?;
        stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Main application loop: pick a mode and settings, run it, repeat until Esc.
    pub fn run(&self, stdout: &mut Stdout) -> std::io::Result<()> {
        tracing::info!("Started main app loop");
        loop {
            queue!(stdout, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;
            let Some(mode) = App::select_from_menu(
                stdout,
                "Select a mode (use arrow keys and Enter, or Esc to exit):",
                &App::MODES,
            )?
            else {
                break;
            };
            let Some(config) = App::ask_config(stdout, mode)? else {
                continue;
            };
            tracing::info!("[app] {} with {:?}", mode, config);

            match mode {
                Mode::Visualize => self.visualize(stdout, config)?,
                Mode::Play => self.play(stdout, config)?,
                Mode::Compare => App::compare(stdout, config)?,
            }
        }
        tracing::info!("Exiting main app loop");
        Ok(())
    }

    /// Ask for the maze size, and the solver when the mode needs one.
    /// Returns None if the user cancels with Esc.
    fn ask_config(stdout: &mut Stdout, mode: Mode) -> std::io::Result<Option<Config>> {
        let Some(rows) = App::select_from_menu(
            stdout,
            "Select the number of rows:",
            &Config::ROW_OPTIONS,
        )?
        else {
            return Ok(None);
        };
        let Some(cols) = App::select_from_menu(
            stdout,
            "Select the number of columns:",
            &Config::COL_OPTIONS,
        )?
        else {
            return Ok(None);
        };
        let solver = if mode == Mode::Visualize {
            match App::select_from_menu(stdout, "Select a search algorithm:", &Solver::ALL)? {
                Some(solver) => solver,
                None => return Ok(None),
            }
        } else {
            Config::default().solver
        };
        Config::new(rows, cols, solver, Config::default().step_rate)
            .map(Some)
            .map_err(to_io)
    }

    /// Show `msg` and block until Esc is pressed.
    fn show_and_wait(stdout: &mut Stdout, msg: &str) -> std::io::Result<()> {
        stdout.execute(style::PrintStyledContent(
            format!("{msg}\r\nPress Esc to go back...\r\n")
                .with(Color::Blue)
                .attribute(Attribute::Bold),
        ))?;
        App::wait_for_esc()
    }

    /// Wait for the user to press the Esc key
    /// This function blocks until Esc is pressed
    fn wait_for_esc() -> std::io::Result<()> {
        loop {
            if let event::Event::Key(event::KeyEvent { code, kind, .. }) = event::read()? {
                if code == KeyCode::Esc && kind == event::KeyEventKind::Press {
                    break;
                }
            }
        }
        Ok(())
    }

    /// Poll for a key press for at most `timeout`.
    fn poll_key(timeout: Duration) -> std::io::Result<Option<KeyCode>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        match event::read()? {
            event::Event::Key(key_event) if key_event.kind == event::KeyEventKind::Press => {
                Ok(Some(key_event.code))
            }
            _ => Ok(None),
        }
    }

    /// Present a menu of options to the user and let them select one using arrow keys
    /// Returns None if user cancels input with Esc
    fn select_from_menu<T: std::fmt::Display + Copy>(
        stdout: &mut Stdout,
        prompt: &str,
        options: &[T],
    ) -> std::io::Result<Option<T>> {
        if options.is_empty() {
            return Ok(None);
        }

        // Save cursor position so we can restore / redraw
        queue!(stdout, cursor::Hide, cursor::SavePosition)?;

        let mut selected = 0;

        let selected_option = loop {
            queue!(
                stdout,
                cursor::RestorePosition,
                terminal::Clear(ClearType::FromCursorDown)
            )?;

            stdout.queue(style::PrintStyledContent(prompt.with(Color::Yellow)))?;

            for (i, option) in options.iter().enumerate() {
                if i == selected {
                    stdout.queue(style::SetAttribute(Attribute::Reverse))?;
                }
                stdout.queue(style::Print(format!("\r\n{}", option)))?;
                if i == selected {
                    stdout.queue(style::SetAttribute(Attribute::NoReverse))?;
                }
            }
            stdout.queue(style::Print("\r\n"))?;

            stdout.flush()?;

            if let event::Event::Key(event::KeyEvent { code, kind, .. }) = event::read()? {
                if kind != event::KeyEventKind::Press {
                    continue;
                }
                match code {
                    KeyCode::Up => {
                        selected = match selected {
                            0 => options.len() - 1,
                            _ => selected - 1,
                        };
                    }
                    KeyCode::Down => {
                        selected = if selected >= options.len() - 1 {
                            0
                        } else {
                            selected + 1
                        };
                    }
                    KeyCode::Enter => break Some(options[selected]),
                    KeyCode::Esc => break None,
                    _ => {}
                }
            }
        };
        queue!(
            stdout,
            cursor::RestorePosition,
            terminal::Clear(ClearType::FromCursorDown)
        )?;
        stdout.flush()?;

        Ok(selected_option)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_names() {
        let names: Vec<String> = App::MODES.iter().map(|m| m.to_string()).collect();
        assert_eq!(
            names,
            ["Visualize a search", "Play manually", "Compare all algorithms"]
        );
    }

    #[test]
    fn test_core_errors_convert() {
        let e = to_io(MazeError::InvalidStepRate(0));
        assert_eq!(e.kind(), std::io::ErrorKind::Other);
        assert_eq!(e.to_string(), "step rate 0 is out of range");
    }
}
