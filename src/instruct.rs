use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::grid::Point;

/// A facing or step direction on the grid, as a (col, row) unit vector.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Direction {
    Right,
    Left,
    Down,
    Up,
}

impl Direction {
    /// The (col, row) offset of one step in this direction.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::Right => (1, 0),
            Direction::Left => (-1, 0),
            Direction::Down => (0, 1),
            Direction::Up => (0, -1),
        }
    }

    /// The direction of the single-axis unit step from `a` to `b`, or
    /// `None` if the points coincide. Column movement wins if both
    /// axes differ.
    pub fn of_step(a: Point, b: Point) -> Option<Direction> {
        if b.col > a.col {
            Some(Direction::Right)
        } else if b.col < a.col {
            Some(Direction::Left)
        } else if b.row > a.row {
            Some(Direction::Down)
        } else if b.row < a.row {
            Some(Direction::Up)
        } else {
            None
        }
    }

    /// The quarter turn that rotates `from` into `self`, if one is
    /// needed. Continuing straight and reversing both yield `None`.
    fn turn_from(self, from: Direction) -> Option<Instruction> {
        use Direction::*;
        match (self, from) {
            (Right, Down) | (Left, Up) | (Down, Left) | (Up, Right) => {
                Some(Instruction::TurnLeft)
            }
            (Right, Up) | (Left, Down) | (Down, Right) | (Up, Left) => {
                Some(Instruction::TurnRight)
            }
            _ => None,
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Direction::Right => "right",
                Direction::Left => "left",
                Direction::Down => "down",
                Direction::Up => "up",
            }
        )
    }
}

/// A heading-relative driving command. `Forward(k)` covers `k` grid
/// steps; raw encoding emits `Forward(1)` per step and [`compress`]
/// merges adjacent runs.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Instruction {
    TurnLeft,
    TurnRight,
    Forward(usize),
}

impl Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Instruction::TurnLeft => write!(f, "left"),
            Instruction::TurnRight => write!(f, "right"),
            Instruction::Forward(1) => write!(f, "forward"),
            Instruction::Forward(k) => write!(f, "forward x{}", k),
        }
    }
}

/// Encode a coordinate path as raw heading-relative instructions.
///
/// The initial heading is the direction of the first step, so the
/// first step never emits a turn. A single-coordinate path (start is
/// the goal) encodes to an empty sequence; an empty path is an error.
pub fn encode_path(path: &[Point]) -> Result<Vec<Instruction>, Error> {
    if path.is_empty() {
        return Err(Error::EmptyPath);
    }

    let mut instructions = Vec::new();
    let mut facing: Option<Direction> = None;

    for pair in path.windows(2) {
        let Some(step) = Direction::of_step(pair[0], pair[1]) else {
            continue;
        };

        if let Some(turn) = facing.and_then(|facing| step.turn_from(facing)) {
            instructions.push(turn);
        }
        instructions.push(Instruction::Forward(1));
        facing = Some(step);
    }

    Ok(instructions)
}

/// Collapse every maximal run of consecutive `Forward` tokens into a
/// single `Forward(k)`. Turns pass through and interrupt runs.
/// Idempotent: compressing a compressed sequence changes nothing.
pub fn compress(instructions: &[Instruction]) -> Vec<Instruction> {
    let mut out: Vec<Instruction> = Vec::new();

    for &instruction in instructions {
        match (out.last_mut(), instruction) {
            (Some(Instruction::Forward(run)), Instruction::Forward(k)) => *run += k,
            _ => out.push(instruction),
        }
    }

    out
}
