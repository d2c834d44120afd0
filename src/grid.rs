use std::fmt::Display;

use crate::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Wall,
    Corridor,
    Start,
    End,
}

impl Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl Cell {
    pub fn to_char(&self) -> char {
        match self {
            Cell::Wall => 'X',
            Cell::Corridor => ' ',
            Cell::Start => 'S',
            Cell::End => 'E',
        }
    }
}

impl TryFrom<char> for Cell {
    type Error = Error;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'X' => Ok(Cell::Wall),
            ' ' => Ok(Cell::Corridor),
            'S' => Ok(Cell::Start),
            'E' => Ok(Cell::End),
            other => Err(Error::InvalidCharForGrid(other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl Direction {
    pub fn to_char(&self) -> char {
        match self {
            Direction::Up => '^',
            Direction::Right => '>',
            Direction::Down => 'v',
            Direction::Left => '<',
        }
    }

    /// Directions in the order the search tries them.
    pub fn all_dirs() -> &'static [Direction] {
        static ALL_DIRS: [Direction; 4] = [
            Direction::Up,
            Direction::Right,
            Direction::Down,
            Direction::Left,
        ];

        &ALL_DIRS
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    pub r: usize,
    pub c: usize,
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.r, self.c)
    }
}

impl Position {
    pub fn new(r: usize, c: usize) -> Self {
        Self { r, c }
    }

    pub fn neighbor(&self, dir: Direction) -> Option<Self> {
        match dir {
            Direction::Up if self.r > 0 => Some(Self::new(self.r - 1, self.c)),
            Direction::Right => Some(Self::new(self.r, self.c + 1)),
            Direction::Down => Some(Self::new(self.r + 1, self.c)),
            Direction::Left if self.c > 0 => Some(Self::new(self.r, self.c - 1)),
            _ => None,
        }
    }
}

/// Maze layout. Rows may differ in length.
#[derive(Debug, Clone)]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
    start_pos: Option<Position>,
    end_pos: Option<Position>,
}

impl Grid {
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, Error> {
        let mut builder = GridBuilder::new();
        for row in rows {
            builder.add_row(row.as_ref())?;
        }

        builder.build()
    }

    pub fn cell(&self, pos: &Position) -> Option<&Cell> {
        self.rows.get(pos.r).and_then(|row| row.get(pos.c))
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn row_n(&self) -> usize {
        self.rows.len()
    }

    pub fn col_n(&self, r: usize) -> Option<usize> {
        self.rows.get(r).map(|row| row.len())
    }

    pub fn start_pos(&self) -> Option<&Position> {
        self.start_pos.as_ref()
    }

    pub fn end_pos(&self) -> Option<&Position> {
        self.end_pos.as_ref()
    }

    fn locate_endpoints(&mut self) -> Result<(), Error> {
        let mut start_pos: Option<Position> = None;
        let mut end_pos: Option<Position> = None;
        for (r, row) in self.rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                let pos = Position::new(r, c);
                match cell {
                    Cell::Start => {
                        if let Some(last_pos) = start_pos.take() {
                            return Err(Error::MultipleStartPosition(last_pos, pos));
                        }

                        start_pos = Some(pos);
                    }
                    Cell::End => {
                        if let Some(last_pos) = end_pos.take() {
                            return Err(Error::MultipleEndPosition(last_pos, pos));
                        }

                        end_pos = Some(pos);
                    }
                    _ => (),
                }
            }
        }

        self.start_pos = start_pos;
        self.end_pos = end_pos;
        Ok(())
    }
}

#[derive(Debug)]
pub struct GridBuilder {
    rows: Vec<Vec<Cell>>,
}

impl GridBuilder {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn add_row(&mut self, text: &str) -> Result<(), Error> {
        let row = text
            .chars()
            .map(Cell::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        self.rows.push(row);

        Ok(())
    }

    /// A maze missing its start or end still builds, searching it reports the absence.
    pub fn build(self) -> Result<Grid, Error> {
        if self.rows.is_empty() {
            return Err(Error::EmptyGrid);
        }

        let mut grid = Grid {
            rows: self.rows,
            start_pos: None,
            end_pos: None,
        };
        grid.locate_endpoints()?;

        Ok(grid)
    }
}

impl Default for GridBuilder {
    fn default() -> Self {
        Self::new()
    }
}
