use std::fmt::Display;

use crate::{
    grid::{Cell, Direction, Grid, Position},
    render::Frame,
};

const DEAD_END_CHAR: char = 'D';
const CURRENT_POS_CHAR: char = '0';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Plain(Cell),
    Step(Direction),
    DeadEnd,
}

impl Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl Mark {
    pub fn to_char(&self) -> char {
        match self {
            Mark::Plain(cell) => cell.to_char(),
            Mark::Step(dir) => dir.to_char(),
            Mark::DeadEnd => DEAD_END_CHAR,
        }
    }

    /// Only untouched corridors and the end can be entered.
    pub fn is_passable(&self) -> bool {
        matches!(self, Mark::Plain(Cell::Corridor) | Mark::Plain(Cell::End))
    }
}

/// Working copy of a maze which records the decisions made by one search.
#[derive(Debug, Clone)]
pub struct MarkedGrid {
    marks: Vec<Vec<Mark>>,
    start_pos: Position,
    end_pos: Position,
}

impl MarkedGrid {
    pub fn new(grid: &Grid, start_pos: &Position, end_pos: &Position) -> Self {
        let marks = grid
            .rows()
            .iter()
            .map(|row| row.iter().copied().map(Mark::Plain).collect())
            .collect();

        Self {
            marks,
            start_pos: start_pos.clone(),
            end_pos: end_pos.clone(),
        }
    }

    pub fn mark(&self, pos: &Position) -> Option<&Mark> {
        self.marks.get(pos.r).and_then(|row| row.get(pos.c))
    }

    pub fn set_mark(&mut self, pos: &Position, mark: Mark) {
        if let Some(this_mark) = self.marks.get_mut(pos.r).and_then(|row| row.get_mut(pos.c)) {
            *this_mark = mark;
        }
    }

    /// Neighbor of `pos` along `dir`, if it lies inside its own row and can be entered.
    pub fn passable_neighbor(&self, pos: &Position, dir: Direction) -> Option<Position> {
        pos.neighbor(dir)
            .filter(|next_pos| self.mark(next_pos).is_some_and(|mark| mark.is_passable()))
    }

    pub fn is_end(&self, pos: &Position) -> bool {
        *pos == self.end_pos
    }

    /// Follow the step marks from start, stopping at the end or at the first cell without one.
    pub fn trail(&self) -> Vec<Position> {
        let mut trail = vec![self.start_pos.clone()];
        let mut cur_pos = self.start_pos.clone();
        while !self.is_end(&cur_pos) && trail.len() <= self.cell_n() {
            let Some(Mark::Step(dir)) = self.mark(&cur_pos) else {
                break;
            };
            let Some(next_pos) = cur_pos.neighbor(*dir) else {
                break;
            };

            trail.push(next_pos.clone());
            cur_pos = next_pos;
        }

        trail
    }

    /// Render into text. Start and end are always shown with their own symbols,
    /// `cur_pos` (if any) overrides whatever is there.
    pub fn frame(&self, cur_pos: Option<&Position>) -> Frame {
        let lines = self
            .marks
            .iter()
            .enumerate()
            .map(|(r, row)| {
                row.iter()
                    .enumerate()
                    .map(|(c, mark)| {
                        let pos = Position::new(r, c);
                        if cur_pos.is_some_and(|cur_pos| *cur_pos == pos) {
                            CURRENT_POS_CHAR
                        } else if pos == self.start_pos {
                            Cell::Start.to_char()
                        } else if pos == self.end_pos {
                            Cell::End.to_char()
                        } else {
                            mark.to_char()
                        }
                    })
                    .collect::<String>()
            })
            .collect();

        Frame::new(lines)
    }

    fn cell_n(&self) -> usize {
        self.marks.iter().map(|row| row.len()).sum()
    }
}
