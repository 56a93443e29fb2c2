//! Terminal setup, teardown and drawing.

use std::io::{self, Stdout, Write};
use std::panic;

use crossterm::{
    cursor, queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{self, ClearType},
};

use staffing_table::LineKind;

use crate::app::{App, Painted, Tone};

/// Raw-mode alternate screen, restored on drop or panic.
pub struct Terminal {
    stdout: Stdout,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let original_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            let _ = restore_terminal();
            original_hook(panic_info);
        }));

        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        crossterm::execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;
        Ok(Self { stdout })
    }

    pub fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    pub fn draw(&mut self, app: &App) -> io::Result<()> {
        let (width, height) = self.size()?;
        let lines = app.render(width, height);
        for (y, line) in lines.iter().enumerate() {
            queue!(self.stdout, cursor::MoveTo(0, y as u16))?;
            self.paint(line)?;
        }
        queue!(
            self.stdout,
            cursor::MoveTo(0, lines.len() as u16),
            terminal::Clear(ClearType::FromCursorDown)
        )?;
        self.stdout.flush()
    }

    fn paint(&mut self, line: &Painted) -> io::Result<()> {
        let (color, attribute) = style_for(line.tone);
        if let Some(color) = color {
            queue!(self.stdout, SetForegroundColor(color))?;
        }
        if let Some(attribute) = attribute {
            queue!(self.stdout, SetAttribute(attribute))?;
        }
        queue!(
            self.stdout,
            Print(&line.text),
            SetAttribute(Attribute::Reset),
            ResetColor
        )
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = restore_terminal();
    }
}

fn restore_terminal() -> io::Result<()> {
    crossterm::execute!(io::stdout(), cursor::Show, terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()
}

fn style_for(tone: Tone) -> (Option<Color>, Option<Attribute>) {
    match tone {
        Tone::Title => (Some(Color::Cyan), Some(Attribute::Bold)),
        Tone::Tabs => (Some(Color::White), None),
        Tone::Filter => (Some(Color::Yellow), None),
        Tone::Table(kind) => match kind {
            LineKind::Header => (None, Some(Attribute::Bold)),
            LineKind::Row { focused: true, .. } => (None, Some(Attribute::Reverse)),
            LineKind::Row { selected: true, .. } => (Some(Color::Green), None),
            LineKind::Row { .. } => (None, None),
            LineKind::Detail => (Some(Color::Blue), None),
            LineKind::Skeleton => (Some(Color::DarkGrey), None),
            LineKind::Empty => (Some(Color::DarkGrey), Some(Attribute::Italic)),
        },
        Tone::Status => (Some(Color::DarkGrey), None),
        Tone::Toast => (Some(Color::Yellow), Some(Attribute::Bold)),
        Tone::Hint => (Some(Color::DarkGrey), None),
    }
}
