use std::fmt::Display;

use crate::Error;

/// One text snapshot of a maze, a line per row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    lines: Vec<String>,
}

impl Display for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        writeln!(f)
    }
}

impl Frame {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Character at (r, c) of this frame.
    pub fn char_at(&self, r: usize, c: usize) -> Option<char> {
        self.lines.get(r).and_then(|line| line.chars().nth(c))
    }

    pub fn count_char(&self, target: char) -> usize {
        self.lines
            .iter()
            .map(|line| line.chars().filter(|c| *c == target).count())
            .sum()
    }
}

/// Receives every frame a search produces, in order.
pub trait Renderer {
    fn render(&mut self, frame: &Frame) -> Result<(), Error>;
}

#[derive(Debug, Default)]
pub struct FrameCollector {
    frames: Vec<Frame>,
}

impl Renderer for FrameCollector {
    fn render(&mut self, frame: &Frame) -> Result<(), Error> {
        self.frames.push(frame.clone());
        Ok(())
    }
}

impl FrameCollector {
    pub fn new() -> Self {
        Self { frames: Vec::new() }
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn into_frames(self) -> Vec<Frame> {
        self.frames
    }
}
