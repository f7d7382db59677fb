use crossterm::{
    cursor,
    event::{self, KeyCode, KeyEvent, KeyModifiers},
    execute, queue,
    style::{self, Stylize},
    terminal,
};
use rowca::{Renderer, RowWindow};
use std::io;

pub enum ConsoleCommand {
    Exit,
    Handled,
}

/// Scrolling terminal view, newest generation at the bottom
///
/// The last terminal line is kept for the stats footer.
pub struct ConsoleRender {
    offset: usize,
    report: String,
}
impl ConsoleRender {
    pub fn new() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(
            io::stdout(),
            cursor::Hide,
            terminal::Clear(terminal::ClearType::All)
        )?;
        Ok(Self {
            offset: 0,
            report: String::new(),
        })
    }

    pub fn poll_events(&mut self) -> io::Result<Option<ConsoleCommand>> {
        // make sure event is preset for us to take
        if !event::poll(std::time::Duration::from_secs(0))? {
            return Ok(None);
        }

        let mut outp = Ok(Some(ConsoleCommand::Handled));
        match event::read()? {
            // CTRL+C
            event::Event::Key(KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            }) => {
                outp = Ok(Some(ConsoleCommand::Exit));
            }
            // arrows to pan a row wider than the terminal
            event::Event::Key(KeyEvent {
                code: KeyCode::Left,
                ..
            }) => self.offset = self.offset.saturating_sub(1),
            event::Event::Key(KeyEvent {
                code: KeyCode::Right,
                ..
            }) => self.offset += 1,
            _ => {}
        }
        outp
    }

    pub fn set_report(&mut self, report: String) {
        self.report = report;
    }
}

impl Renderer for ConsoleRender {
    fn render(&mut self, _generation: u64, row: &[u8]) -> io::Result<()> {
        let (cols, rows) = terminal::size()?;
        let rows = rows.max(2);
        let mut stdout = io::stdout();

        // keep the view on the row when it is narrower than the pan offset
        self.offset = self.offset.min(row.len().saturating_sub(1));
        let window = RowWindow::new(row, self.offset..self.offset + cols as usize);

        queue!(
            stdout,
            terminal::ScrollUp(1),
            cursor::MoveTo(0, rows - 2),
            terminal::Clear(terminal::ClearType::CurrentLine)
        )?;
        for cell in window.iter() {
            queue!(
                stdout,
                cursor::MoveTo(cell as u16, rows - 2),
                style::PrintStyledContent("█".red())
            )?;
        }

        // write footer
        queue!(
            stdout,
            cursor::MoveTo(0, rows - 1),
            terminal::Clear(terminal::ClearType::CurrentLine),
            style::Print(&self.report)
        )?;

        io::Write::flush(&mut stdout)
    }
}

impl Drop for ConsoleRender {
    fn drop(&mut self) {
        // if we can enable it, we should be able to disable it
        terminal::disable_raw_mode().expect("disable raw mode");
        execute!(io::stdout(), cursor::Show).expect("enable cursor");
    }
}
