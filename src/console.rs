use std::{
    io::{self, BufRead, Write},
    thread,
    time::Duration,
};

use crossterm::{
    cursor, queue,
    terminal::{self, ClearType},
};

use crate::{
    render::{Frame, Renderer},
    Error,
};

const PROMPT: &str = "Enter >>";

/// What happens after a frame is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pace {
    Prompt,
    Delay(Duration),
    None,
}

/// Writes frames to a terminal, pausing between them.
pub struct ConsoleRenderer<W: Write, R: BufRead> {
    term: W,
    input: R,
    pace: Pace,
    clear: bool,
}

impl<W: Write, R: BufRead> Renderer for ConsoleRenderer<W, R> {
    fn render(&mut self, frame: &Frame) -> Result<(), Error> {
        self.show(frame)
            .and_then(|_| self.wait())
            .map_err(Error::RenderFailed)
    }
}

impl<W: Write, R: BufRead> ConsoleRenderer<W, R> {
    pub fn new(term: W, input: R, pace: Pace, clear: bool) -> Self {
        Self {
            term,
            input,
            pace,
            clear,
        }
    }

    /// Show a frame without pausing afterwards.
    pub fn show(&mut self, frame: &Frame) -> io::Result<()> {
        if self.clear {
            queue!(
                self.term,
                terminal::Clear(ClearType::All),
                cursor::MoveTo(0, 0)
            )?;
        }
        write!(self.term, "{}", frame)?;
        self.term.flush()
    }

    fn wait(&mut self) -> io::Result<()> {
        match self.pace {
            Pace::Prompt => {
                writeln!(self.term, "{}", PROMPT)?;
                self.term.flush()?;
                // Nothing left to read means nobody is there to press Enter
                let mut line = String::new();
                if self.input.read_line(&mut line)? == 0 {
                    self.pace = Pace::None;
                }
            }
            Pace::Delay(interval) => {
                if !interval.is_zero() {
                    thread::sleep(interval);
                }
            }
            Pace::None => (),
        }

        Ok(())
    }
}
