use crate::{Point, TermInt};
use crate::layout::Button;
use std::{io::{self, Stdout, Write, stdout}, time::Duration};

use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::style::Color;
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, Event, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags, poll, read,
};
use log::{debug, info};

/// Owns the terminal while the game runs: raw mode, the alternate screen,
/// mouse capture and all drawing.
pub struct TermManager {
    width: TermInt,
    height: TermInt,
    stdout: Stdout,
    enhanced_keyboard: bool,
}

impl TermManager {
    pub fn new() -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        Ok(TermManager { width, height, stdout: stdout(), enhanced_keyboard: false })
    }

    pub fn setup(&mut self) -> io::Result<()> {
        execute!(self.stdout, EnterAlternateScreen, EnableMouseCapture)?;
        terminal::enable_raw_mode()?;
        execute!(self.stdout, cursor::Hide, cursor::DisableBlinking)?;

        // Key releases are only reported once the terminal is asked to
        if terminal::supports_keyboard_enhancement()? {
            execute!(
                self.stdout,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )?;
            self.enhanced_keyboard = true;
        }

        info!(
            "Terminal is {}x{}, key releases {}",
            self.width,
            self.height,
            if self.reports_release() { "reported" } else { "synthesized" }
        );
        Ok(())
    }

    /// Undoes `setup`. Every step runs even if an earlier one fails; the
    /// first error is returned.
    pub fn restore(&mut self) -> io::Result<()> {
        let res = restore_terminal(&mut self.stdout, self.enhanced_keyboard);
        self.enhanced_keyboard = false;
        res
    }

    /// Whether key release events come from the terminal itself.
    pub fn reports_release(&self) -> bool {
        self.enhanced_keyboard || cfg!(windows)
    }

    /// Waits for the next event. `None` as timeout waits forever, otherwise
    /// `Ok(None)` means the timeout ran out first.
    pub fn next_event(&mut self, timeout: Option<Duration>) -> io::Result<Option<Event>> {
        if let Some(timeout) = timeout {
            if !poll(timeout)? {
                return Ok(None);
            }
        }

        let event = read()?;
        if let Event::Resize(width, height) = event {
            debug!("Terminal resized to {}x{}", width, height);
            self.width = width;
            self.height = height;
        }

        Ok(Some(event))
    }

    pub fn get_terminal_size(&self) -> Point {
        (self.width, self.height)
    }

    pub fn draw_borders(&mut self, top_left: Point, width: TermInt, height: TermInt) -> io::Result<()> {
        let (x0, y0) = top_left;
        let end_x = x0 + width - 1;
        let end_y = y0 + height - 1;

        let horizontal = format!("+{}+", "-".repeat(width as usize - 2));
        self.print_at((x0, y0), &horizontal, Color::White)?;
        self.print_at((x0, end_y), &horizontal, Color::White)?;

        for y in y0 + 1..end_y {
            self.print_at((x0, y), "|", Color::White)?;
            self.print_at((end_x, y), "|", Color::White)?;
        }

        Ok(())
    }

    /// Shows a box of centered lines around `center`.
    pub fn show_message(&mut self, center: Point, lines: &[&str]) -> io::Result<()> {
        let msg_height = (lines.len() + 2) as TermInt;
        let msg_width = (lines.iter().map(|x| x.chars().count()).max().unwrap_or(0) + 4) as TermInt;
        let top_left = (
            center.0.saturating_sub(msg_width / 2),
            center.1.saturating_sub(msg_height / 2),
        );

        let blank = " ".repeat(msg_width as usize);
        queue!(self.stdout, style::SetBackgroundColor(Color::DarkGrey))?;
        self.print_at(top_left, &blank, Color::White)?;
        for (i, line) in lines.iter().enumerate() {
            let padded_line = format!("{line: ^width$}", line = line, width = msg_width as usize);
            self.print_at((top_left.0, top_left.1 + i as TermInt + 1), &padded_line, Color::White)?;
        }
        self.print_at((top_left.0, top_left.1 + msg_height - 1), &blank, Color::White)?;
        queue!(self.stdout, style::ResetColor)
    }

    pub fn draw_button(&mut self, button: &Button, fill: Color) -> io::Result<()> {
        let (left, top) = button.top_left();
        let label_row = button.center.1;

        queue!(self.stdout, style::SetBackgroundColor(fill))?;
        for y in top..top + button.height {
            let text = if y == label_row { button.label } else { "" };
            let line = format!("{: ^width$}", text, width = button.width as usize);
            self.print_at((left, y), &line, Color::White)?;
        }
        queue!(self.stdout, style::ResetColor)
    }

    /// Prints `text` horizontally centered on `center`.
    pub fn print_centered(&mut self, center: Point, text: &str, color: Color) -> io::Result<()> {
        let half = (text.chars().count() / 2) as TermInt;
        self.print_at((center.0.saturating_sub(half), center.1), text, color)
    }

    pub fn print_at(&mut self, pos: Point, text: &str, color: Color) -> io::Result<()> {
        queue!(
            self.stdout,
            cursor::MoveTo(pos.0, pos.1),
            style::SetForegroundColor(color),
            style::Print(text)
        )
    }

    pub fn clear(&mut self) -> io::Result<()> {
        execute!(self.stdout, style::ResetColor, terminal::Clear(ClearType::All))
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.stdout.flush()
    }
}

fn restore_terminal<W: Write>(out: &mut W, enhanced_keyboard: bool) -> io::Result<()> {
    let mut res = Ok(());

    if enhanced_keyboard {
        res = res.and(execute!(out, PopKeyboardEnhancementFlags));
    }

    res = res.and(terminal::disable_raw_mode());
    res.and(execute!(
        out,
        style::ResetColor,
        cursor::Show,
        cursor::EnableBlinking,
        DisableMouseCapture,
        LeaveAlternateScreen
    ))
}
