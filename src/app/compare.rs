use std::io::Stdout;

use crossterm::{
    ExecutableCommand, queue,
    style::{self, Attribute, Color, Stylize},
    terminal::{self, ClearType},
};
use unicode_truncate::{Alignment, UnicodeTruncateStr};

use super::{App, to_io};
use crate::{
    config::Config,
    generators::build_maze,
    solvers::SearchParams,
    stats::{RunStatistics, compare_algorithms},
};

const HEADERS: [&str; 5] = [
    "Algorithm",
    "Cells Explored",
    "Max Memory",
    "Path Length",
    "Time (s)",
];
const COLUMN_WIDTHS: [usize; 5] = [26, 15, 12, 12, 10];

/// Lay out one table row, truncating cells that do not fit their column.
fn format_row(cells: [&str; 5]) -> String {
    cells
        .iter()
        .zip(COLUMN_WIDTHS)
        .enumerate()
        .map(|(i, (cell, width))| {
            // Names on the left, numbers on the right
            let alignment = if i == 0 {
                Alignment::Left
            } else {
                Alignment::Right
            };
            cell.unicode_pad(width, alignment, true).into_owned()
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn stats_row(stats: &RunStatistics) -> String {
    let path_length = if stats.found {
        stats.path_length.to_string()
    } else {
        "-".to_string()
    };
    format_row([
        &stats.solver.to_string(),
        &stats.cells_explored.to_string(),
        &stats.max_frontier_size.to_string(),
        &path_length,
        &format!("{:.4}", stats.execution_time.as_secs_f64()),
    ])
}

impl App {
    /// Run every solver on one maze and print a table of their statistics.
    pub(super) fn compare(stdout: &mut Stdout, config: Config) -> std::io::Result<()> {
        let maze = build_maze(config.rows, config.cols, None).map_err(to_io)?;
        let all = compare_algorithms(&maze, SearchParams::default()).map_err(to_io)?;

        queue!(
            stdout,
            terminal::Clear(ClearType::All),
            crossterm::cursor::MoveTo(0, 0),
            style::PrintStyledContent(
                format!("Comparison on a {}x{} maze\r\n\r\n", maze.rows(), maze.cols())
                    .with(Color::Yellow)
                    .attribute(Attribute::Bold)
            ),
            style::PrintStyledContent(
                format!("{}\r\n", format_row(HEADERS)).attribute(Attribute::Bold)
            )
        )?;
        for stats in &all {
            stdout.execute(style::Print(format!("{}\r\n", stats_row(stats))))?;
        }
        stdout.execute(style::Print("\r\n"))?;
        App::show_and_wait(stdout, "Done.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solvers::Solver;
    use std::time::Duration;

    #[test]
    fn test_header_row() {
        let row = format_row(HEADERS);
        assert!(row.starts_with("Algorithm "));
        assert!(row.ends_with("  Time (s)"));
        assert_eq!(row.chars().count(), COLUMN_WIDTHS.iter().sum::<usize>() + 4);
    }

    #[test]
    fn test_stats_row() {
        let mut stats = RunStatistics::new(Solver::Bfs);
        stats.found = true;
        stats.cells_explored = 42;
        stats.max_frontier_size = 5;
        stats.path_length = 17;
        stats.execution_time = Duration::from_millis(1500);
        let row = stats_row(&stats);
        assert!(row.starts_with("Breadth-First Search "));
        assert!(row.contains(" 42 "));
        assert!(row.ends_with("1.5000"));

        stats.found = false;
        assert!(stats_row(&stats).contains(" - "));
    }

    #[test]
    fn test_long_names_are_truncated() {
        let row = format_row(["a".repeat(40).as_str(), "1", "2", "3", "4"]);
        assert!(row.starts_with(&"a".repeat(26)));
        assert!(!row.starts_with(&"a".repeat(27)));
    }
}
