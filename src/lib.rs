use std::{
    error,
    fmt::Display,
    fs::File,
    io::{self, BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

pub mod console;
pub mod grid;
pub mod marked;
pub mod path_finder;
pub mod preset;
pub mod render;

pub use grid::{Cell, Direction, Grid, GridBuilder, Position};
pub use path_finder::{solve, Outcome, PathFinder};
pub use preset::Preset;
pub use render::{Frame, FrameCollector, Renderer};

#[derive(Debug)]
pub enum Error {
    InvalidCharForGrid(char),
    MultipleStartPosition(Position, Position),
    MultipleEndPosition(Position, Position),
    EmptyGrid,
    NoStartPosition,
    NoEndPosition,
    SameStartAndEnd(Position),
    RenderFailed(io::Error),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidCharForGrid(c) => write!(f, "Invalid character({:?}) for maze.", c),
            Error::MultipleStartPosition(last_pos, pos) => write!(
                f,
                "Expect only one start position, given two({}, {}).",
                last_pos, pos
            ),
            Error::MultipleEndPosition(last_pos, pos) => write!(
                f,
                "Expect only one end position, given two({}, {}).",
                last_pos, pos
            ),
            Error::EmptyGrid => write!(f, "Given maze has no rows."),
            Error::NoStartPosition => write!(f, "No start position in maze."),
            Error::NoEndPosition => write!(f, "No end position in maze."),
            Error::SameStartAndEnd(pos) => {
                write!(f, "Start and end share the same position{}.", pos)
            }
            Error::RenderFailed(e) => write!(f, "Failed to render frame, get error({}).", e),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::RenderFailed(e) => Some(e),
            _ => None,
        }
    }
}

impl Error {
    /// Errors which stop a search before its first step.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Error::NoStartPosition | Error::NoEndPosition | Error::SameStartAndEnd(_)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PaceMode {
    /// Wait for Enter between frames
    Prompt,
    /// Sleep for --delay-ms between frames
    Delay,
    /// Print frames back to back
    None,
}

#[derive(Debug, Parser)]
#[command(about = "Watch a backtracking search walk through a maze.")]
pub struct CLIArgs {
    /// Maze file, one row per line ('X' wall, ' ' corridor, 'S' start, 'E' end)
    pub input_path: Option<PathBuf>,
    /// Solve a built-in maze instead of reading a file
    #[arg(short, long, value_enum, conflicts_with = "input_path")]
    pub preset: Option<Preset>,
    #[arg(long, value_enum, default_value_t = PaceMode::Prompt)]
    pub pace: PaceMode,
    #[arg(long, default_value_t = 300)]
    pub delay_ms: u64,
    /// Clear the terminal before each frame
    #[arg(long)]
    pub clear: bool,
}

pub fn read_grid<P: AsRef<Path>>(path: P) -> Result<Grid> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut builder = GridBuilder::new();
    for (ind, line) in reader.lines().enumerate() {
        let line = line.with_context(|| {
            format!(
                "Failed to read line {} in given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        builder
            .add_row(line.strip_suffix('\r').unwrap_or(&line))
            .with_context(|| format!("Invalid row {} in maze.", ind + 1))?;
    }

    Ok(builder.build()?)
}
