use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// One color sample per cell: red, green and blue channel values.
pub type ColorSample = [u8; 3];

/// Channel values strictly above this count as "high" when classifying.
pub const CHANNEL_THRESHOLD: u8 = 125;

#[derive(
    Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize,
)]
pub struct Point {
    pub col: usize,
    pub row: usize,
}

impl Point {
    /// Manhattan distance to `other`.
    pub fn manhattan(self, other: Point) -> usize {
        self.col.abs_diff(other.col) + self.row.abs_diff(other.row)
    }
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Free,
    Obstacle,
    Start,
    Goal,
}

impl Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Cell::Free => "  ",
                Cell::Obstacle => "@ ",
                Cell::Start => "s ",
                Cell::Goal => "e ",
            }
        )
    }
}

/// Classify a single sampled color.
///
/// Each channel is thresholded at [`CHANNEL_THRESHOLD`]: all three high
/// is a free (white) cell, all three low an obstacle (black) cell.
/// Otherwise a high green channel marks the start and a high red
/// channel the goal; any remaining combination is treated as free.
pub fn classify_sample(sample: ColorSample) -> Cell {
    let r = sample[0] > CHANNEL_THRESHOLD;
    let g = sample[1] > CHANNEL_THRESHOLD;
    let b = sample[2] > CHANNEL_THRESHOLD;

    if r && g && b {
        Cell::Free
    } else if !r && !g && !b {
        Cell::Obstacle
    } else if g {
        Cell::Start
    } else if r {
        Cell::Goal
    } else {
        Cell::Free
    }
}

/// A classified square maze grid with resolved start and goal cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Maze {
    pub size: usize,
    pub cells: Vec<Vec<Cell>>,
    pub start: Point,
    pub goal: Point,
}

impl Maze {
    /// Build a maze from per-cell color samples, indexed `samples[row][col]`.
    ///
    /// Classification is a pure function of each sample; position never
    /// influences the result. Fails if no sample resolves to a start or
    /// goal cell, so a search can never be seeded with an undefined
    /// endpoint.
    pub fn classify(samples: &[Vec<ColorSample>]) -> Result<Maze, Error> {
        let size = samples.len();
        if size == 0 {
            return Err(Error::DegenerateGrid);
        }

        let mut cells = vec![vec![Cell::Free; size]; size];
        let mut start = None;
        let mut goal = None;

        for (row, row_samples) in samples.iter().enumerate() {
            if row_samples.len() != size {
                return Err(Error::DegenerateGrid);
            }
            for (col, &sample) in row_samples.iter().enumerate() {
                let cell = classify_sample(sample);
                cells[row][col] = cell;
                match cell {
                    Cell::Start => start = Some(Point { col, row }),
                    Cell::Goal => goal = Some(Point { col, row }),
                    _ => {}
                }
            }
        }

        let start = start.ok_or(Error::MissingStart)?;
        let goal = goal.ok_or(Error::MissingGoal)?;

        log::debug!(
            "classified {}x{} grid: start {:?}, goal {:?}, {} obstacles",
            size,
            size,
            start,
            goal,
            cells
                .iter()
                .flatten()
                .filter(|c| **c == Cell::Obstacle)
                .count()
        );

        Ok(Maze {
            size,
            cells,
            start,
            goal,
        })
    }

    pub fn get(&self, point: Point) -> Cell {
        self.cells[point.row][point.col]
    }

    /// The in-bounds, non-obstacle neighbors of `node`, in the fixed
    /// order right, left, down, up.
    pub fn neighbors_of(&self, node: Point) -> impl Iterator<Item = Point> {
        let mut points = Vec::with_capacity(4);

        if node.col < self.size - 1 {
            points.push(Point {
                col: node.col + 1,
                row: node.row,
            });
        }
        if node.col > 0 {
            points.push(Point {
                col: node.col - 1,
                row: node.row,
            });
        }
        if node.row < self.size - 1 {
            points.push(Point {
                col: node.col,
                row: node.row + 1,
            });
        }
        if node.row > 0 {
            points.push(Point {
                col: node.col,
                row: node.row - 1,
            });
        }

        // filter to only keep passable cells
        points.retain(|p| self.cells[p.row][p.col] != Cell::Obstacle);

        points.into_iter()
    }

    /// Render the maze with the given path overlaid as `.` markers.
    /// Start, goal and obstacle glyphs take precedence over the path.
    pub fn render(&self, path: &[Point]) -> String {
        let mut out = String::new();
        for row in 0..self.size {
            for col in 0..self.size {
                let point = Point { col, row };
                match self.get(point) {
                    Cell::Free if path.contains(&point) => out.push_str(". "),
                    cell => out.push_str(&cell.to_string()),
                }
            }
            out.push('\n');
        }
        out
    }
}

impl Display for Maze {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render(&[]))
    }
}
