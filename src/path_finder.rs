use log::{debug, trace};

use crate::{
    grid::{Direction, Grid, Position},
    marked::{Mark, MarkedGrid},
    render::{Frame, FrameCollector, Renderer},
    Error,
};

#[derive(Debug, Clone)]
pub enum Outcome {
    Reached {
        path: Vec<Position>,
        visited: usize,
        final_frame: Frame,
    },
    Unreachable {
        visited: usize,
    },
}

impl Outcome {
    pub fn is_reached(&self) -> bool {
        matches!(self, Outcome::Reached { .. })
    }

    pub fn visited(&self) -> usize {
        match self {
            Outcome::Reached { visited, .. } | Outcome::Unreachable { visited } => *visited,
        }
    }
}

/// Both endpoints must be known and distinct before a search starts.
pub fn check_endpoints(
    start_pos: Option<&Position>,
    end_pos: Option<&Position>,
) -> Result<(Position, Position), Error> {
    let Some(start_pos) = start_pos else {
        return Err(Error::NoStartPosition);
    };
    let Some(end_pos) = end_pos else {
        return Err(Error::NoEndPosition);
    };
    if start_pos == end_pos {
        return Err(Error::SameStartAndEnd(start_pos.clone()));
    }

    Ok((start_pos.clone(), end_pos.clone()))
}

/// Search the given maze, collecting every step frame.
pub fn solve(grid: &Grid) -> Result<(bool, Vec<Frame>), Error> {
    let mut collector = FrameCollector::new();
    let outcome = PathFinder::new(grid).solve(&mut collector)?;

    Ok((outcome.is_reached(), collector.into_frames()))
}

#[derive(Debug)]
struct Visit {
    pos: Position,
    next_dir_ind: usize,
}

impl Visit {
    pub fn new(pos: Position) -> Self {
        Self {
            pos,
            next_dir_ind: 0,
        }
    }

    pub fn next_dir(&mut self) -> Option<Direction> {
        let dir = Direction::all_dirs().get(self.next_dir_ind).copied();
        if dir.is_some() {
            self.next_dir_ind += 1;
        }

        dir
    }
}

/// Depth first search which tries up, right, down and left in that order,
/// leaving a step mark on each cell it leaves and a dead end mark on each cell
/// it backs out of.
pub struct PathFinder<'a> {
    grid: &'a Grid,
}

impl<'a> PathFinder<'a> {
    pub fn new(grid: &'a Grid) -> Self {
        Self { grid }
    }

    pub fn solve<R: Renderer + ?Sized>(&self, renderer: &mut R) -> Result<Outcome, Error> {
        let (start_pos, end_pos) = check_endpoints(self.grid.start_pos(), self.grid.end_pos())?;
        debug!("Search from {} to {}.", start_pos, end_pos);
        let mut marked = MarkedGrid::new(self.grid, &start_pos, &end_pos);
        let mut visited = 1;
        renderer.render(&marked.frame(Some(&start_pos)))?;

        // Cells on the stack form the trail from start to the current cell
        let mut stack = vec![Visit::new(start_pos)];
        while let Some(visit) = stack.last_mut() {
            let cur_pos = visit.pos.clone();
            let mut next_step = None;
            while let Some(dir) = visit.next_dir() {
                if let Some(next_pos) = marked.passable_neighbor(&cur_pos, dir) {
                    next_step = Some((dir, next_pos));
                    break;
                }
            }

            match next_step {
                Some((dir, next_pos)) => {
                    trace!("Step {} from {} to {}.", dir, cur_pos, next_pos);
                    marked.set_mark(&cur_pos, Mark::Step(dir));
                    visited += 1;
                    renderer.render(&marked.frame(Some(&next_pos)))?;
                    if marked.is_end(&next_pos) {
                        let path = marked.trail();
                        debug!(
                            "Reached end after visiting {} cell(s), path has {} cell(s).",
                            visited,
                            path.len()
                        );
                        return Ok(Outcome::Reached {
                            path,
                            visited,
                            final_frame: marked.frame(None),
                        });
                    }

                    stack.push(Visit::new(next_pos));
                }
                None => {
                    trace!("Dead end at {}.", cur_pos);
                    marked.set_mark(&cur_pos, Mark::DeadEnd);
                    renderer.render(&marked.frame(Some(&cur_pos)))?;
                    stack.pop();
                }
            }
        }

        debug!("End is unreachable, visited {} cell(s).", visited);
        Ok(Outcome::Unreachable { visited })
    }
}
