// ABOUTME: Live terminal status table for in-flight pulls.
// ABOUTME: Redraws in place on a fixed cadence until the coordinator drains.

use super::coordinator::{PullCoordinator, PullStatus, TaskView};
use crate::error::Result;
use crossterm::cursor::MoveToPreviousLine;
use crossterm::queue;
use crossterm::style::{Print, Stylize};
use crossterm::terminal::{Clear, ClearType};
use std::io::{IsTerminal, Write};
use std::time::Duration;

const FRAME_INTERVAL: Duration = Duration::from_millis(200);

/// Drive the render loop until every pull completes.
///
/// On a terminal the table is redrawn in place every frame; piped output
/// gets a single final table. Either way the last render happens after
/// [`PullCoordinator::wait`], so no task can be shown stuck as Running.
pub async fn run(coordinator: &mut PullCoordinator) -> Result<()> {
    let mut table = StatusTable::new();

    if std::io::stdout().is_terminal() {
        while !coordinator.all_done() {
            table.redraw(&coordinator.poll())?;
            tokio::time::sleep(FRAME_INTERVAL).await;
        }
    }

    coordinator.wait().await;
    table.redraw(&coordinator.poll())?;
    Ok(())
}

/// In-place table writer. Remembers how many lines the previous frame drew
/// so the next one can rewind and overwrite them without flicker.
struct StatusTable {
    out: std::io::Stdout,
    drawn: u16,
}

impl StatusTable {
    fn new() -> Self {
        Self {
            out: std::io::stdout(),
            drawn: 0,
        }
    }

    fn redraw(&mut self, tasks: &[TaskView]) -> Result<()> {
        if self.drawn > 0 {
            queue!(
                self.out,
                MoveToPreviousLine(self.drawn),
                Clear(ClearType::FromCursorDown)
            )?;
        }

        let lines = render_lines(tasks);
        for line in &lines {
            queue!(self.out, Print(line), Print("\n"))?;
        }
        self.out.flush()?;

        self.drawn = u16::try_from(lines.len()).unwrap_or(u16::MAX);
        Ok(())
    }
}

fn render_lines(tasks: &[TaskView]) -> Vec<String> {
    let running = tasks
        .iter()
        .filter(|t| t.status == PullStatus::Running)
        .count();

    let header = if running > 0 {
        format!("{running} image(s) still running").yellow().bold()
    } else {
        "All pulls finished".to_string().green().bold()
    };

    let index_width = tasks.len().to_string().len().max(1);
    let image_width = tasks
        .iter()
        .map(|t| t.image.as_str().len())
        .max()
        .unwrap_or(0)
        .max("IMAGE".len());

    let mut lines = Vec::with_capacity(tasks.len() + 2);
    lines.push(header.to_string());
    lines.push(format!(
        "{:>index_width$}  {:<image_width$}  STATUS",
        "#", "IMAGE"
    ));
    for (index, task) in tasks.iter().enumerate() {
        let status = match task.status {
            PullStatus::Running => "Running".yellow(),
            PullStatus::Success => "Success".green(),
            PullStatus::Failed => "Failed".red(),
        };
        lines.push(format!(
            "{:>index_width$}  {:<image_width$}  {status}",
            index + 1,
            task.image.as_str()
        ));
    }
    lines
}
