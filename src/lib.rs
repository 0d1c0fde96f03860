pub mod error;
pub mod find;
pub mod grid;
pub mod instruct;
pub mod util;

pub use error::Error;
pub use find::{find_path, PathFinder, PathFinderState, PathResult};
pub use grid::{Cell, ColorSample, Maze, Point};
pub use instruct::{compress, encode_path, Direction, Instruction};
